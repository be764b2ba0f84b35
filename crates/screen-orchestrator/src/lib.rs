use quality_screen::{appraise, extract_yearly_metrics, score, TrustGradeStrategy};
use screen_core::{
    EvaluationResult, FinancialStatements, PassStatus, Recommendation, YearlyMetric,
};
use serde::{Deserialize, Serialize};

pub mod runner;
pub use runner::{ScreenReport, ScreenRunner};

/// Tickers with fewer valid years yield no result at all.
pub const MIN_VALID_YEARS: usize = 3;
/// Total score at or above this passes the quality screen.
pub const PASS_THRESHOLD: u32 = 85;

/// How the BUY recommendation is gated. Both rules exist in production;
/// the result records which one was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuyGating {
    /// BUY requires a positive gap and a passing quality score.
    RequirePass,
    /// BUY requires only a positive gap.
    GapOnly,
}

/// Per-ticker evaluator: gate, score, value, classify, assemble.
///
/// Stateless and deterministic; evaluations for different tickers can
/// run in parallel without coordination.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    trust_grades: TrustGradeStrategy,
    buy_gating: BuyGating,
}

impl Evaluator {
    pub fn new(trust_grades: TrustGradeStrategy, buy_gating: BuyGating) -> Self {
        Self {
            trust_grades,
            buy_gating,
        }
    }

    /// Evaluate one ticker. `None` is the normal outcome for tickers
    /// with an unknown price, no statements, or fewer than
    /// [`MIN_VALID_YEARS`] usable years; it is never an error.
    pub fn evaluate(
        &self,
        ticker: &str,
        statements: &FinancialStatements,
        current_price: Option<f64>,
    ) -> Option<EvaluationResult> {
        let price = match current_price {
            Some(p) if p > 0.0 => p,
            _ => {
                tracing::debug!(ticker, "no usable current price, skipping");
                return None;
            }
        };
        if statements.is_empty() {
            tracing::debug!(ticker, "no income statements, skipping");
            return None;
        }

        let metrics = extract_yearly_metrics(statements);
        if metrics.len() < MIN_VALID_YEARS {
            tracing::debug!(
                ticker,
                valid_years = metrics.len(),
                "below the minimum-years gate, skipping"
            );
            return None;
        }

        let scores = score(&metrics);
        let valuation = appraise(&metrics, price);

        let pass_status = if scores.total_score >= PASS_THRESHOLD {
            PassStatus::Pass
        } else {
            PassStatus::Fail
        };
        let is_undervalued = valuation.gap_pct > 0.0;
        let recommendation = match self.buy_gating {
            BuyGating::RequirePass if is_undervalued && pass_status == PassStatus::Pass => {
                Recommendation::Buy
            }
            BuyGating::GapOnly if is_undervalued => Recommendation::Buy,
            _ => Recommendation::Wait,
        };

        let years_data = metrics.len();
        let trust_grade = self.trust_grades.classify(years_data);
        let latest = metrics.last()?;

        Some(EvaluationResult {
            ticker: ticker.to_string(),
            roe_score: scores.roe_score,
            roic_score: scores.roic_score,
            margin_score: scores.margin_score,
            trend_score: scores.trend_score,
            health_score: scores.health_score,
            cash_score: scores.cash_score,
            total_score: scores.total_score,
            pass_status,
            current_price: price,
            intrinsic_value: valuation.intrinsic_value,
            gap_pct: valuation.gap_pct,
            recommendation,
            buy_required_pass: self.buy_gating == BuyGating::RequirePass,
            is_undervalued,
            years_data,
            trust_grade,
            avg_roe: mean(&metrics, |m| m.roe),
            avg_roic: mean(&metrics, |m| m.roic),
            avg_net_margin: mean(&metrics, |m| m.net_margin),
            avg_fcf_margin: mean(&metrics, |m| m.fcf_margin),
            debt_ratio: latest.debt_ratio,
            eps_cagr: valuation.eps_cagr,
        })
    }
}

fn mean(metrics: &[YearlyMetric], field: impl Fn(&YearlyMetric) -> f64) -> f64 {
    if metrics.is_empty() {
        return 0.0;
    }
    metrics.iter().map(field).sum::<f64>() / metrics.len() as f64
}
