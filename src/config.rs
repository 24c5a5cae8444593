//! Scenario loader — merges defaults, config.toml, and environment variables.

use std::path::Path;

use common::{Error, ModelInputs};
use serde::{Deserialize, Serialize};

/// A saved projection scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    /// Operator segment key (e.g. "all", "bet365").
    #[serde(default = "default_operator")]
    pub operator: String,

    /// Adjustable model parameters.
    #[serde(default)]
    pub inputs: ModelInputs,
}

fn default_operator() -> String {
    "all".into()
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            operator: default_operator(),
            inputs: ModelInputs::default(),
        }
    }
}

/// Load a scenario from an optional TOML file plus environment overrides.
///
/// Precedence, lowest first: struct defaults, the TOML file (when it
/// exists), then `MYKRO_*` environment variables.
pub fn load_config(path: &Path) -> Result<ScenarioConfig, Error> {
    let mut config = ScenarioConfig::default();

    if path.exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        config = toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
    }

    if let Ok(op) = std::env::var("MYKRO_OPERATOR") {
        config.operator = op;
    }
    if let Some(v) = env_pct("MYKRO_BETTOR_DONATION_PCT")? {
        config.inputs.bettor_donation_percent = v;
    }
    if let Some(v) = env_pct("MYKRO_OPERATOR_CONTRIBUTION_PCT")? {
        config.inputs.operator_contribution_percent = v;
    }
    if let Some(v) = env_pct("MYKRO_MARKET_SHARE_PCT")? {
        config.inputs.mykro_market_share_percent = v;
    }
    if let Some(v) = env_pct("MYKRO_COMMISSION_PCT")? {
        config.inputs.mykro_commission_percent = v;
    }

    Ok(config)
}

fn env_pct(name: &str) -> Result<Option<f64>, Error> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", name, raw))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config: ScenarioConfig = toml::from_str("").unwrap();
        assert_eq!(config.operator, "all");
        assert_eq!(config.inputs.bettor_donation_percent, 10.0);
        assert_eq!(config.inputs.mykro_commission_percent, 5.0);
    }

    #[test]
    fn test_partial_toml_overrides_only_named_fields() {
        let config: ScenarioConfig = toml::from_str(
            r#"
            operator = "bet365"

            [inputs]
            bettor_donation_percent = 15.0
            "#,
        )
        .unwrap();
        assert_eq!(config.operator, "bet365");
        assert_eq!(config.inputs.bettor_donation_percent, 15.0);
        assert_eq!(config.inputs.operator_contribution_percent, 20.0);
    }

    #[test]
    fn test_scenario_round_trips_through_toml() {
        let config = ScenarioConfig {
            operator: "skybet".into(),
            inputs: ModelInputs {
                bettor_donation_percent: 12.0,
                operator_contribution_percent: 25.0,
                mykro_market_share_percent: 3.0,
                mykro_commission_percent: 1.5,
            },
        };
        let rendered = toml::to_string(&config).unwrap();
        let parsed: ScenarioConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed.operator, "skybet");
        assert_eq!(parsed.inputs.mykro_market_share_percent, 3.0);
    }
}
