//! Mykro impact calculator.
//!
//! Renders projected donation flows for the UK online betting market:
//! 1. Loads a scenario (defaults, config.toml, MYKRO_* env vars, flags)
//! 2. Clamps the parameters to their slider ranges
//! 3. Runs the projection for one segment or the whole operator table
//! 4. Prints a report, or JSON with --json

mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, warn};

use common::ModelInputs;
use impact_model::format::{format_millions, format_percent};
use impact_model::{compute, compute_all, operator, operators, DonationImpactResult};

use crate::config::load_config;

/// Mykro donation impact calculator.
#[derive(Parser)]
#[command(name = "mykro-impact", about = "Projected donation flows for UK betting operators")]
struct Cli {
    /// Operator segment key (see --list-operators).
    #[arg(long)]
    operator: Option<String>,

    /// % of net winnings a bettor pledges (1-20).
    #[arg(long)]
    bettor_donation: Option<f64>,

    /// % of the losing-stake pledge the operator matches (5-50).
    #[arg(long)]
    operator_contribution: Option<f64>,

    /// Assumed Mykro adoption among online bettors, % (1-10).
    #[arg(long)]
    market_share: Option<f64>,

    /// Mykro commission on processed donations, % (0-10).
    #[arg(long)]
    commission: Option<f64>,

    /// Scenario file (TOML).
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Render the per-operator league table instead of a single segment.
    #[arg(long)]
    table: bool,

    /// Emit JSON instead of the human-readable report.
    #[arg(long)]
    json: bool,

    /// List operator segment keys and exit.
    #[arg(long)]
    list_operators: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mykro_impact=info,impact_model=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.list_operators {
        for op in operators() {
            println!("{:<12} {}", op.key, op.display_name);
        }
        return ExitCode::SUCCESS;
    }

    let mut scenario = match load_config(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Some(op) = cli.operator {
        scenario.operator = op;
    }
    if let Some(v) = cli.bettor_donation {
        scenario.inputs.bettor_donation_percent = v;
    }
    if let Some(v) = cli.operator_contribution {
        scenario.inputs.operator_contribution_percent = v;
    }
    if let Some(v) = cli.market_share {
        scenario.inputs.mykro_market_share_percent = v;
    }
    if let Some(v) = cli.commission {
        scenario.inputs.mykro_commission_percent = v;
    }

    let inputs = clamp_with_warnings(scenario.inputs);

    let outcome = if cli.table {
        print_table(&inputs, cli.json)
    } else {
        print_segment(&scenario.operator, &inputs, cli.json)
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Clamp raw parameters to their slider ranges, warning when a value moves.
fn clamp_with_warnings(raw: ModelInputs) -> ModelInputs {
    let clamped = raw.clamped();
    let pairs = [
        (
            "bettor donation",
            raw.bettor_donation_percent,
            clamped.bettor_donation_percent,
        ),
        (
            "operator contribution",
            raw.operator_contribution_percent,
            clamped.operator_contribution_percent,
        ),
        (
            "market share",
            raw.mykro_market_share_percent,
            clamped.mykro_market_share_percent,
        ),
        (
            "commission",
            raw.mykro_commission_percent,
            clamped.mykro_commission_percent,
        ),
    ];
    for (name, before, after) in pairs {
        if before != after {
            warn!("{} {}% out of range, clamped to {}%", name, before, after);
        }
    }
    clamped
}

fn print_segment(key: &str, inputs: &ModelInputs, json: bool) -> common::Result<()> {
    let op = operator(key)?;
    let r = compute(key, inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&r)?);
        return Ok(());
    }

    println!("Mykro donation impact — {}", op.display_name);
    println!(
        "  online turnover            {}",
        format_millions(op.online_turnover_bn * 1000.0)
    );
    println!();
    print_flows(&r, inputs);
    println!();
    println!(
        "  vs current giving          {}",
        format_millions(op.current_annual_charity_m)
    );
    println!(
        "  share of online charity    {}",
        format_percent(r.mykro_charity_market_share_pct)
    );
    println!(
        "  share of UK giving         {}",
        format_percent(r.mykro_uk_charity_share_pct)
    );
    Ok(())
}

fn print_flows(r: &DonationImpactResult, inputs: &ModelInputs) {
    println!(
        "  from winning bettors       {}",
        format_millions(r.donations_from_winners_m)
    );
    println!(
        "  operator match on losses   {}",
        format_millions(r.operator_contributions_m)
    );
    println!(
        "  potential (full adoption)  {}",
        format_millions(r.total_donations_potential_m)
    );
    println!(
        "  projected at {}% adoption   {}",
        inputs.mykro_market_share_percent,
        format_millions(r.total_donations_actual_m)
    );
    println!(
        "  Mykro commission           {}",
        format_millions(r.mykro_revenue_m)
    );
    println!(
        "  to charity                 {}",
        format_millions(r.net_donations_to_charity_m)
    );
    println!(
        "  donation rate              {}",
        format_percent(r.donation_rate_pct)
    );
    println!(
        "  operator cost of GGY       {}",
        format_percent(r.operator_cost_pct)
    );
    println!(
        "  pass-through efficiency    {}",
        format_percent(r.efficiency_pct)
    );
}

fn print_table(inputs: &ModelInputs, json: bool) -> common::Result<()> {
    let rows = compute_all(inputs)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<18} {:>12} {:>12} {:>12} {:>10}",
        "operator", "projected", "to charity", "current", "cost/GGY"
    );
    for row in &rows {
        println!(
            "{:<18} {:>12} {:>12} {:>12} {:>10}",
            row.display_name,
            format_millions(row.result.total_donations_actual_m),
            format_millions(row.result.net_donations_to_charity_m),
            format_millions(row.current_annual_charity_m),
            format_percent(row.result.operator_cost_pct)
        );
    }
    Ok(())
}
