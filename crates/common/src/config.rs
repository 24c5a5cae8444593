//! User-adjustable model parameters.

use serde::{Deserialize, Serialize};

/// Slider bounds for each parameter, as (min, max) percentages.
pub const BETTOR_DONATION_RANGE: (f64, f64) = (1.0, 20.0);
pub const OPERATOR_CONTRIBUTION_RANGE: (f64, f64) = (5.0, 50.0);
pub const MARKET_SHARE_RANGE: (f64, f64) = (1.0, 10.0);
pub const COMMISSION_RANGE: (f64, f64) = (0.0, 10.0);

/// The four adjustable inputs of the donation projection.
///
/// The engine trusts these values as-is; range enforcement is the
/// caller's job (see [`ModelInputs::clamped`]).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ModelInputs {
    /// % of net winnings a bettor pledges to donate (1–20).
    #[serde(default = "default_bettor_donation")]
    pub bettor_donation_percent: f64,

    /// % of the losing-stake pledge the operator matches (5–50).
    #[serde(default = "default_operator_contribution")]
    pub operator_contribution_percent: f64,

    /// Assumed Mykro adoption among online bettors, % (1–10).
    #[serde(default = "default_market_share")]
    pub mykro_market_share_percent: f64,

    /// Mykro commission on processed donations, % (0–10).
    #[serde(default = "default_commission")]
    pub mykro_commission_percent: f64,
}

impl ModelInputs {
    /// Copy with every field pinned to its documented range.
    pub fn clamped(self) -> Self {
        Self {
            bettor_donation_percent: self
                .bettor_donation_percent
                .clamp(BETTOR_DONATION_RANGE.0, BETTOR_DONATION_RANGE.1),
            operator_contribution_percent: self
                .operator_contribution_percent
                .clamp(OPERATOR_CONTRIBUTION_RANGE.0, OPERATOR_CONTRIBUTION_RANGE.1),
            mykro_market_share_percent: self
                .mykro_market_share_percent
                .clamp(MARKET_SHARE_RANGE.0, MARKET_SHARE_RANGE.1),
            mykro_commission_percent: self
                .mykro_commission_percent
                .clamp(COMMISSION_RANGE.0, COMMISSION_RANGE.1),
        }
    }
}

// ── Defaults ──────────────────────────────────────────────────────────

fn default_bettor_donation() -> f64 {
    10.0
}
fn default_operator_contribution() -> f64 {
    20.0
}
fn default_market_share() -> f64 {
    5.0
}
fn default_commission() -> f64 {
    5.0
}

impl Default for ModelInputs {
    fn default() -> Self {
        Self {
            bettor_donation_percent: default_bettor_donation(),
            operator_contribution_percent: default_operator_contribution(),
            mykro_market_share_percent: default_market_share(),
            mykro_commission_percent: default_commission(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_defaults_match_default_impl() {
        let from_empty: ModelInputs = serde_json::from_str("{}").unwrap();
        let from_default = ModelInputs::default();
        assert_eq!(
            from_empty.bettor_donation_percent,
            from_default.bettor_donation_percent
        );
        assert_eq!(
            from_empty.operator_contribution_percent,
            from_default.operator_contribution_percent
        );
        assert_eq!(
            from_empty.mykro_market_share_percent,
            from_default.mykro_market_share_percent
        );
        assert_eq!(
            from_empty.mykro_commission_percent,
            from_default.mykro_commission_percent
        );
    }

    #[test]
    fn test_clamped_pins_out_of_range_values() {
        let raw = ModelInputs {
            bettor_donation_percent: 35.0,
            operator_contribution_percent: 1.0,
            mykro_market_share_percent: -2.0,
            mykro_commission_percent: 10.0,
        };
        let clamped = raw.clamped();
        assert_eq!(clamped.bettor_donation_percent, 20.0);
        assert_eq!(clamped.operator_contribution_percent, 5.0);
        assert_eq!(clamped.mykro_market_share_percent, 1.0);
        assert_eq!(clamped.mykro_commission_percent, 10.0);
    }

    #[test]
    fn test_clamped_leaves_in_range_values_alone() {
        let raw = ModelInputs::default();
        let clamped = raw.clamped();
        assert_eq!(
            clamped.bettor_donation_percent,
            raw.bettor_donation_percent
        );
        assert_eq!(
            clamped.mykro_commission_percent,
            raw.mykro_commission_percent
        );
    }
}
