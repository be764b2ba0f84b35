//! Scoring and valuation engine for the quality screen.
//!
//! Pure functions over per-year metric records: no I/O, no state across
//! tickers. Callers feed in statements from any data adapter and get
//! back sub-scores, a total score and an intrinsic-value estimate.

pub mod metrics;
pub mod scoring;
pub mod trust;
pub mod valuation;

pub use metrics::extract_yearly_metrics;
pub use scoring::{score, QualityScore};
pub use trust::TrustGradeStrategy;
pub use valuation::{appraise, cagr, Valuation};
