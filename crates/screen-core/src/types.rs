use serde::{Deserialize, Serialize};

/// One fiscal year of income-statement facts.
///
/// Fields the data source did not report stay `None` and are treated as
/// zero during extraction, except diluted EPS: a year without a defined
/// EPS cannot be used for growth and is dropped entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub fiscal_year: i32,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub net_income: Option<f64>,
    #[serde(default)]
    pub ebit: Option<f64>,
    #[serde(default)]
    pub pretax_income: Option<f64>,
    #[serde(default)]
    pub tax_expense: Option<f64>,
    #[serde(default)]
    pub interest_expense: Option<f64>,
    #[serde(default)]
    pub eps_diluted: Option<f64>,
}

/// One fiscal year of balance-sheet facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub fiscal_year: i32,
    #[serde(default)]
    pub total_equity: Option<f64>,
    #[serde(default)]
    pub total_liabilities: Option<f64>,
}

/// One fiscal year of cash-flow facts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashFlowStatement {
    pub fiscal_year: i32,
    #[serde(default)]
    pub free_cash_flow: Option<f64>,
}

/// Multi-year statement data for one ticker, as delivered by a data
/// adapter. The three statements are matched by fiscal year during
/// extraction; the income statement drives which years exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinancialStatements {
    pub income: Vec<IncomeStatement>,
    pub balance: Vec<BalanceSheet>,
    pub cash_flow: Vec<CashFlowStatement>,
}

impl FinancialStatements {
    pub fn is_empty(&self) -> bool {
        self.income.is_empty()
    }
}

/// Interest coverage ratio with an explicit "no interest expense" case.
///
/// Zero interest expense means no debt burden, which is the best
/// possible coverage, not a degenerate division. Kept as a tagged enum
/// rather than `f64::INFINITY` so serialized results stay well-defined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "ratio", rename_all = "snake_case")]
pub enum InterestCoverage {
    Ratio(f64),
    Infinite,
}

impl InterestCoverage {
    pub fn at_least(&self, threshold: f64) -> bool {
        match self {
            InterestCoverage::Ratio(r) => *r >= threshold,
            InterestCoverage::Infinite => true,
        }
    }
}

/// Canonical per-year metric record derived from the raw statements.
///
/// Sequences handed to scoring contain only valid years (non-zero net
/// income, equity and revenue, defined EPS) and are sorted ascending by
/// fiscal year. Trend and CAGR math silently breaks on any other
/// ordering, so the extractor enforces it once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyMetric {
    pub fiscal_year: i32,
    pub roe: f64,
    pub roic: f64,
    pub net_margin: f64,
    pub fcf_margin: f64,
    pub debt_ratio: f64,
    pub interest_coverage: InterestCoverage,
    pub eps: f64,
    pub net_income: f64,
    pub revenue: f64,
    pub total_equity: f64,
    pub interest_expense: f64,
}

/// Quality-screen verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PassStatus {
    Pass,
    Fail,
}

/// Action suggested by the valuation gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Buy,
    Wait,
}

/// Confidence tier backing an evaluation, derived from how many years
/// of usable data the conclusion rests on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustGrade {
    pub tier: u8,
    pub label: String,
    pub stars: String,
}

impl TrustGrade {
    pub fn new(tier: u8, stars: &str) -> Self {
        Self {
            tier,
            label: format!("Grade {}", tier),
            stars: stars.to_string(),
        }
    }
}

/// Final per-ticker evaluation. Created once per run, immutable after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub ticker: String,

    pub roe_score: u32,
    pub roic_score: u32,
    pub margin_score: u32,
    pub trend_score: u32,
    pub health_score: u32,
    pub cash_score: u32,
    pub total_score: u32,
    pub pass_status: PassStatus,

    pub current_price: f64,
    pub intrinsic_value: f64,
    pub gap_pct: f64,
    pub recommendation: Recommendation,
    /// Whether BUY additionally required the quality screen to pass.
    pub buy_required_pass: bool,
    pub is_undervalued: bool,

    pub years_data: usize,
    pub trust_grade: TrustGrade,

    pub avg_roe: f64,
    pub avg_roic: f64,
    pub avg_net_margin: f64,
    pub avg_fcf_margin: f64,
    pub debt_ratio: f64,
    pub eps_cagr: f64,
}
