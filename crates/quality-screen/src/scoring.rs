use screen_core::{InterestCoverage, TierTable, YearlyMetric};
use serde::{Deserialize, Serialize};

const MARGIN_LEVEL: TierTable<u32> = TierTable::at_least(&[(20.0, 10), (15.0, 7), (10.0, 5)], 0);
const MARGIN_STABILITY: TierTable<u32> = TierTable::at_most(&[(3.0, 5), (5.0, 3), (8.0, 1)], 0);
const TREND: TierTable<u32> =
    TierTable::at_least(&[(20.0, 15), (10.0, 12), (5.0, 9), (0.0, 6), (-5.0, 3)], 0);
const LEVERAGE: TierTable<u32> =
    TierTable::at_most(&[(50.0, 10), (80.0, 7), (120.0, 4), (150.0, 2)], 0);
const COVERAGE: TierTable<u32> = TierTable::at_least(&[(10.0, 5), (5.0, 3), (3.0, 1)], 0);
const CASH: TierTable<u32> = TierTable::at_least(&[(15.0, 10), (10.0, 7), (5.0, 4), (0.0, 2)], 0);

/// The six sub-scores and their sum (0-100).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityScore {
    pub roe_score: u32,
    pub roic_score: u32,
    pub margin_score: u32,
    pub trend_score: u32,
    pub health_score: u32,
    pub cash_score: u32,
    pub total_score: u32,
}

/// Score a valid, ascending metric sequence.
pub fn score(metrics: &[YearlyMetric]) -> QualityScore {
    let roe_score = roe_score(metrics);
    let roic_score = roic_score(metrics);
    let margin_score = margin_score(metrics);
    let trend_score = trend_score(metrics);
    let health_score = health_score(metrics);
    let cash_score = cash_score(metrics);

    QualityScore {
        roe_score,
        roic_score,
        margin_score,
        trend_score,
        health_score,
        cash_score,
        total_score: roe_score + roic_score + margin_score + trend_score + health_score
            + cash_score,
    }
}

/// ROE persistence, 0-25. A single loss year disqualifies outright.
pub fn roe_score(metrics: &[YearlyMetric]) -> u32 {
    if metrics.iter().any(|m| m.roe < 0.0) {
        return 0;
    }
    let n = metrics.len();
    let strong = metrics.iter().filter(|m| m.roe >= 15.0).count();
    let decent = metrics.iter().filter(|m| m.roe >= 12.0).count();

    if strong == n {
        25
    } else if strong as f64 >= n as f64 * 0.8 {
        20
    } else if decent == n {
        15
    } else if decent as f64 >= n as f64 * 0.8 {
        10
    } else {
        0
    }
}

/// ROIC persistence, 0-20. Same tier pattern as ROE on the 12% / 9%
/// thresholds, without the loss veto.
pub fn roic_score(metrics: &[YearlyMetric]) -> u32 {
    let n = metrics.len();
    let strong = metrics.iter().filter(|m| m.roic >= 12.0).count();
    let decent = metrics.iter().filter(|m| m.roic >= 9.0).count();

    if strong == n {
        20
    } else if strong as f64 >= n as f64 * 0.8 {
        15
    } else if decent == n {
        10
    } else if decent as f64 >= n as f64 * 0.8 {
        5
    } else {
        0
    }
}

/// Net-margin level plus stability, 0-15. Level from the mean margin,
/// stability from the population standard deviation.
pub fn margin_score(metrics: &[YearlyMetric]) -> u32 {
    if metrics.is_empty() {
        return 0;
    }
    let margins: Vec<f64> = metrics.iter().map(|m| m.net_margin).collect();
    let mean = margins.iter().sum::<f64>() / margins.len() as f64;
    let variance =
        margins.iter().map(|m| (m - mean).powi(2)).sum::<f64>() / margins.len() as f64;

    MARGIN_LEVEL.lookup(mean) + MARGIN_STABILITY.lookup(variance.sqrt())
}

/// Profitability trend, 0-15. Mean ROE of the last `min(3, N-1)` years
/// against the mean of the leading years; requires at least 4 years.
pub fn trend_score(metrics: &[YearlyMetric]) -> u32 {
    let n = metrics.len();
    if n < 4 {
        return 0;
    }
    let recent_years = 3.min(n - 1);
    let past_years = n - recent_years;

    let recent =
        metrics[n - recent_years..].iter().map(|m| m.roe).sum::<f64>() / recent_years as f64;
    let past = metrics[..past_years].iter().map(|m| m.roe).sum::<f64>() / past_years as f64;

    let improvement = if past == 0.0 {
        0.0
    } else {
        (recent - past) / past * 100.0
    };
    TREND.lookup(improvement)
}

/// Financial health, 0-15, judged on the most recent year only.
pub fn health_score(metrics: &[YearlyMetric]) -> u32 {
    let Some(latest) = metrics.last() else {
        return 0;
    };

    let leverage = LEVERAGE.lookup(latest.debt_ratio);
    let coverage = match latest.interest_coverage {
        // No interest expense means no debt burden, not missing data.
        InterestCoverage::Infinite => 5,
        InterestCoverage::Ratio(r) => COVERAGE.lookup(r),
    };
    leverage + coverage
}

/// Cash generation, 0-10, from the mean FCF margin.
pub fn cash_score(metrics: &[YearlyMetric]) -> u32 {
    if metrics.is_empty() {
        return 0;
    }
    let mean =
        metrics.iter().map(|m| m.fcf_margin).sum::<f64>() / metrics.len() as f64;
    CASH.lookup(mean)
}
