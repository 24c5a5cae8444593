//! The donation projection engine.
//!
//! Pure arithmetic over the fixed market table and a [`ModelInputs`]:
//! no I/O, no shared state, and identical inputs always produce
//! bit-for-bit identical output.

use common::{Error, ModelInputs, Result};
use serde::Serialize;

use crate::market::{operator, operators, OperatorProfile, MARKET};

/// Projected annual donation flows for one operator segment.
///
/// Monetary fields are £m/yr; `*_pct` fields are percentages.
#[derive(Debug, Clone, Serialize)]
pub struct DonationImpactResult {
    /// Donated by winning bettors out of net winnings, at full adoption.
    pub donations_from_winners_m: f64,
    /// Notional pledge volume on losing stakes, at full adoption.
    pub pledge_amount_m: f64,
    /// Operator match on losing-stake pledges, at full adoption.
    pub operator_contributions_m: f64,
    /// Combined donation flow if every online bettor used Mykro.
    pub total_donations_potential_m: f64,
    /// Donation flow at the assumed adoption rate.
    pub total_donations_actual_m: f64,
    /// Mykro's commission on processed donations.
    pub mykro_revenue_m: f64,
    /// What reaches charities after commission.
    pub net_donations_to_charity_m: f64,
    /// Online gambling-linked charity market including Mykro's flow.
    pub online_gambling_charity_market_m: f64,
    /// Mykro's share of that online charity market.
    pub mykro_charity_market_share_pct: f64,
    /// Mykro's share of all UK charitable giving.
    pub mykro_uk_charity_share_pct: f64,
    /// Donation yield as % of handle.
    pub donation_rate_pct: f64,
    /// Operator contribution as % of its gross gaming yield.
    pub operator_cost_pct: f64,
    /// Pass-through rate: % of gross donations reaching charity.
    pub efficiency_pct: f64,
}

/// One row of the per-operator breakdown.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorImpact {
    pub key: &'static str,
    pub display_name: &'static str,
    /// Today's annual charitable giving baseline, £m/yr.
    pub current_annual_charity_m: f64,
    #[serde(flatten)]
    pub result: DonationImpactResult,
}

fn checked_div(num: f64, den: f64, what: &'static str) -> Result<f64> {
    if den == 0.0 {
        return Err(Error::DivisionByZero(what));
    }
    Ok(num / den)
}

/// Project donation flows for the operator segment named by `key`.
pub fn compute(key: &str, inputs: &ModelInputs) -> Result<DonationImpactResult> {
    compute_for(operator(key)?, inputs)
}

/// Project every operator segment, in display order.
pub fn compute_all(inputs: &ModelInputs) -> Result<Vec<OperatorImpact>> {
    operators()
        .iter()
        .map(|op| {
            Ok(OperatorImpact {
                key: op.key,
                display_name: op.display_name,
                current_annual_charity_m: op.current_annual_charity_m,
                result: compute_for(op, inputs)?,
            })
        })
        .collect()
}

/// The derivation. Step order and formulas are the model's contract;
/// intermediates are carried in £bn and converted to £m on return.
fn compute_for(op: &OperatorProfile, inputs: &ModelInputs) -> Result<DonationImpactResult> {
    let turnover = op.online_turnover_bn;

    // Winning side: bettors donate a slice of profit only.
    let total_returned = turnover * (1.0 - MARKET.average_margin);
    let winning_stakes = turnover * MARKET.win_rate;
    let net_winnings = total_returned - winning_stakes;
    let donations_from_winners = net_winnings * (inputs.bettor_donation_percent / 100.0);

    // Losing side: the bettor pays nothing; the notional pledge on the
    // lost stake is the base the operator matches against.
    let total_losing_stakes = turnover * MARKET.loss_rate;
    let pledge_amount = total_losing_stakes * (inputs.bettor_donation_percent / 100.0);
    let operator_contributions =
        pledge_amount * (inputs.operator_contribution_percent / 100.0);

    let total_donations_potential = donations_from_winners + operator_contributions;
    let total_donations_actual =
        total_donations_potential * (inputs.mykro_market_share_percent / 100.0);

    let mykro_revenue = total_donations_actual * (inputs.mykro_commission_percent / 100.0);
    let net_donations_to_charity =
        total_donations_actual * (1.0 - inputs.mykro_commission_percent / 100.0);

    // Context ratios compare against £m-denominated baselines, hence ×1000.
    let online_gambling_charity_market = MARKET.national_lottery_online_m
        + MARKET.current_online_charity_m
        + total_donations_actual * 1000.0;
    let mykro_charity_market_share_pct = checked_div(
        net_donations_to_charity * 1000.0,
        online_gambling_charity_market,
        "online charity market",
    )? * 100.0;
    let mykro_uk_charity_share_pct = checked_div(
        net_donations_to_charity * 1000.0,
        MARKET.total_uk_charity_giving_m,
        "UK charity giving",
    )? * 100.0;

    let donation_rate_pct = checked_div(total_donations_potential, turnover, "turnover")? * 100.0;
    let operator_cost_pct = checked_div(
        operator_contributions,
        turnover * MARKET.average_margin,
        "gross gaming yield",
    )? * 100.0;
    let efficiency_pct = 100.0 - inputs.mykro_commission_percent;

    Ok(DonationImpactResult {
        donations_from_winners_m: donations_from_winners * 1000.0,
        pledge_amount_m: pledge_amount * 1000.0,
        operator_contributions_m: operator_contributions * 1000.0,
        total_donations_potential_m: total_donations_potential * 1000.0,
        total_donations_actual_m: total_donations_actual * 1000.0,
        mykro_revenue_m: mykro_revenue * 1000.0,
        net_donations_to_charity_m: net_donations_to_charity * 1000.0,
        online_gambling_charity_market_m: online_gambling_charity_market,
        mykro_charity_market_share_pct,
        mykro_uk_charity_share_pct,
        donation_rate_pct,
        operator_cost_pct,
        efficiency_pct,
    })
}
