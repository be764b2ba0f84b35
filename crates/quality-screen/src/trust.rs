use screen_core::TrustGrade;
use serde::{Deserialize, Serialize};

/// Year-count to trust-grade mapping.
///
/// Two rule sets are in production use and disagree on both the number
/// of tiers and the direction of the scale: `Coarse` ranks tier 1 best,
/// `Fine` ranks tier 5 best. They are deliberately not merged; every
/// deployment picks one explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustGradeStrategy {
    /// Three tiers, tier 1 best: 4+ years -> 1, 3 years -> 2, else 3.
    Coarse,
    /// Five tiers, tier 5 best: 10+ -> 5, 5+ -> 4, 3+ -> 3, 2 -> 2, else 1.
    Fine,
}

impl TrustGradeStrategy {
    pub fn classify(&self, years: usize) -> TrustGrade {
        match self {
            TrustGradeStrategy::Coarse => {
                if years >= 4 {
                    TrustGrade::new(1, "★★★★★")
                } else if years == 3 {
                    TrustGrade::new(2, "★★★★☆")
                } else {
                    TrustGrade::new(3, "★★★☆☆")
                }
            }
            TrustGradeStrategy::Fine => {
                if years >= 10 {
                    TrustGrade::new(5, "★★★★★")
                } else if years >= 5 {
                    TrustGrade::new(4, "★★★★☆")
                } else if years >= 3 {
                    TrustGrade::new(3, "★★★☆☆")
                } else if years == 2 {
                    TrustGrade::new(2, "★★☆☆☆")
                } else {
                    TrustGrade::new(1, "★☆☆☆☆")
                }
            }
        }
    }
}
