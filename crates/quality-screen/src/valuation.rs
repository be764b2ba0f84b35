use screen_core::{TierTable, YearlyMetric};
use serde::{Deserialize, Serialize};

/// Only 70% of historical EPS growth is trusted going forward.
const GROWTH_HAIRCUT: f64 = 0.7;
/// EPS is projected this many years out.
const PROJECTION_YEARS: i32 = 5;
/// 20% margin of safety on the theoretical value.
const MARGIN_OF_SAFETY: f64 = 0.8;
/// Fair P/E multiple selected by the raw (pre-haircut) EPS CAGR.
const FAIR_MULTIPLE: TierTable<f64> =
    TierTable::at_least(&[(15.0, 18.0), (8.0, 12.0), (0.0, 10.0)], 8.0);

/// Forward-looking intrinsic-value estimate for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Valuation {
    pub eps_cagr: f64,
    pub fair_multiple: f64,
    pub future_eps: f64,
    pub intrinsic_value: f64,
    pub gap_pct: f64,
}

/// Compound annual growth rate in percent, floored at zero. Undefined
/// starts (non-positive oldest value) and zero-length periods report 0
/// rather than an error.
pub fn cagr(start: f64, end: f64, years: usize) -> f64 {
    if start <= 0.0 || years == 0 {
        return 0.0;
    }
    let ratio = end / start;
    if ratio <= 0.0 {
        return 0.0;
    }
    ((ratio.powf(1.0 / years as f64) - 1.0) * 100.0).max(0.0)
}

/// Value a valid, ascending metric sequence against the current price.
pub fn appraise(metrics: &[YearlyMetric], current_price: f64) -> Valuation {
    let oldest_eps = metrics.first().map_or(0.0, |m| m.eps);
    let latest_eps = metrics.last().map_or(0.0, |m| m.eps);

    let eps_cagr = cagr(oldest_eps, latest_eps, metrics.len().saturating_sub(1));
    let conservative_growth = eps_cagr * GROWTH_HAIRCUT;
    let future_eps = if latest_eps > 0.0 {
        latest_eps * (1.0 + conservative_growth / 100.0).powi(PROJECTION_YEARS)
    } else {
        0.0
    };

    let fair_multiple = FAIR_MULTIPLE.lookup(eps_cagr);
    let intrinsic_value = future_eps * fair_multiple * MARGIN_OF_SAFETY;
    let gap_pct = if current_price > 0.0 {
        (intrinsic_value - current_price) / current_price * 100.0
    } else {
        0.0
    };

    Valuation {
        eps_cagr,
        fair_multiple,
        future_eps,
        intrinsic_value,
        gap_pct,
    }
}
