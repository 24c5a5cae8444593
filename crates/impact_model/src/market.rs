//! UK betting-market constants and the operator segment table.

use std::sync::LazyLock;

use common::{Error, Result};
use serde::Serialize;

/// Fixed UK-market figures used as denominators and multipliers in every
/// projection. These never change at runtime.
#[derive(Debug, Clone, Copy)]
pub struct MarketConstants {
    /// Total UK betting turnover (online + retail), £bn/yr.
    pub total_market_turnover_bn: f64,
    /// Online betting turnover, £bn/yr.
    pub online_market_turnover_bn: f64,
    /// Fraction of stake volume on bets that win.
    pub win_rate: f64,
    /// Fraction of stake volume on bets that lose.
    pub loss_rate: f64,
    /// Operator gross margin (overround).
    pub average_margin: f64,
    /// National Lottery online good-cause contributions, £m/yr.
    pub national_lottery_online_m: f64,
    /// Current gambling-linked online charity giving, £m/yr.
    pub current_online_charity_m: f64,
    /// Total UK charitable giving, £m/yr.
    pub total_uk_charity_giving_m: f64,
}

/// Published UK-market assumptions behind every projection.
/// `win_rate + loss_rate` must stay at 1.0.
pub const MARKET: MarketConstants = MarketConstants {
    total_market_turnover_bn: 60.0,
    online_market_turnover_bn: 40.0,
    win_rate: 0.47,
    loss_rate: 0.53,
    average_margin: 0.06,
    national_lottery_online_m: 850.0,
    current_online_charity_m: 120.0,
    total_uk_charity_giving_m: 13_900.0,
};

/// One operator segment of the UK betting market.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorProfile {
    /// Lookup key, e.g. `"bet365"`.
    pub key: &'static str,
    pub display_name: &'static str,
    /// Share of online turnover, 0.0–1.0.
    pub online_share: f64,
    /// Share of total (online + retail) turnover, 0.0–1.0.
    pub total_share: f64,
    /// Online turnover attributed to this segment, £bn/yr.
    pub online_turnover_bn: f64,
    /// Total turnover attributed to this segment, £bn/yr.
    pub total_turnover_bn: f64,
    /// Today's annual charitable giving baseline, £m/yr.
    pub current_annual_charity_m: f64,
    /// Share of online betting accounts. Display only.
    pub online_account_share_pct: &'static str,
}

fn profile(
    key: &'static str,
    display_name: &'static str,
    online_share: f64,
    total_share: f64,
    current_annual_charity_m: f64,
    online_account_share_pct: &'static str,
) -> OperatorProfile {
    OperatorProfile {
        key,
        display_name,
        online_share,
        total_share,
        online_turnover_bn: MARKET.online_market_turnover_bn * online_share,
        total_turnover_bn: MARKET.total_market_turnover_bn * total_share,
        current_annual_charity_m,
        online_account_share_pct,
    }
}

/// The operator table, in display order. Built once; the turnover fields
/// derive from the shares, so they can never exceed the market totals
/// while the shares stay within [0, 1].
static OPERATORS: LazyLock<Vec<OperatorProfile>> = LazyLock::new(|| {
    vec![
        profile("all", "All UK operators", 1.0, 1.0, 200.0, "100%"),
        profile("bet365", "bet365", 0.27, 0.19, 115.0, "31%"),
        profile("flutter", "Flutter UK", 0.20, 0.15, 22.0, "24%"),
        profile("entain", "Entain UK", 0.15, 0.13, 20.0, "18%"),
        profile("skybet", "Sky Bet", 0.09, 0.06, 8.0, "14%"),
        profile("paddypower", "Paddy Power", 0.07, 0.05, 5.5, "9%"),
        profile("williamhill", "William Hill", 0.06, 0.09, 4.0, "8%"),
        profile("ladbrokes", "Ladbrokes", 0.05, 0.08, 3.5, "7%"),
        profile("coral", "Coral", 0.04, 0.06, 2.5, "5%"),
        profile("betfred", "Betfred", 0.03, 0.05, 1.5, "4%"),
        profile("betway", "Betway", 0.02, 0.015, 1.2, "3%"),
    ]
});

/// Full operator table in display order.
pub fn operators() -> &'static [OperatorProfile] {
    &OPERATORS
}

/// Look up one operator segment by key.
pub fn operator(key: &str) -> Result<&'static OperatorProfile> {
    OPERATORS
        .iter()
        .find(|op| op.key == key)
        .ok_or_else(|| Error::UnknownOperator(key.to_string()))
}
