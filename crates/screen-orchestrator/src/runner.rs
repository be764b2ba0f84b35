use super::Evaluator;
use screen_core::{EvaluationResult, FactsProvider, PassStatus, Recommendation};
use serde::Serialize;
use std::sync::Arc;
use tokio::task::JoinSet;

/// Outcome of a batch run over a ticker universe, ranked by total
/// score. Tickers that errored in the provider or yielded no result
/// are listed in `skipped`; a partially skipped run is still a
/// successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenReport {
    pub results: Vec<EvaluationResult>,
    pub total_screened: usize,
    pub skipped: Vec<String>,
    pub pass_count: usize,
    pub buy_count: usize,
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Evaluates a ticker universe concurrently against a data provider.
pub struct ScreenRunner {
    provider: Arc<dyn FactsProvider>,
    evaluator: Evaluator,
}

impl ScreenRunner {
    pub fn new(provider: Arc<dyn FactsProvider>, evaluator: Evaluator) -> Self {
        Self {
            provider,
            evaluator,
        }
    }

    pub async fn run(&self, tickers: &[String]) -> Result<ScreenReport, anyhow::Error> {
        let total_screened = tickers.len();
        tracing::info!("starting quality screen of {} tickers", total_screened);

        let mut tasks = JoinSet::new();
        for ticker in tickers {
            let provider = Arc::clone(&self.provider);
            let evaluator = self.evaluator;
            let ticker = ticker.clone();
            tasks.spawn(async move {
                let statements = match provider.statements(&ticker).await {
                    Ok(Some(s)) => s,
                    Ok(None) => return (ticker, Ok(None)),
                    Err(e) => return (ticker, Err(e)),
                };
                let price = match provider.current_price(&ticker).await {
                    Ok(p) => p,
                    Err(e) => return (ticker, Err(e)),
                };
                let result = evaluator.evaluate(&ticker, &statements, price);
                (ticker, Ok(result))
            });
        }

        let mut results = Vec::new();
        let mut skipped = Vec::new();

        while let Some(joined) = tasks.join_next().await {
            match joined? {
                (_, Ok(Some(result))) => results.push(result),
                (ticker, Ok(None)) => skipped.push(ticker),
                (ticker, Err(e)) => {
                    tracing::warn!("provider failed for {}: {}", ticker, e);
                    skipped.push(ticker);
                }
            }
        }

        results.sort_by(|a, b| b.total_score.cmp(&a.total_score));
        skipped.sort();

        let pass_count = results
            .iter()
            .filter(|r| r.pass_status == PassStatus::Pass)
            .count();
        let buy_count = results
            .iter()
            .filter(|r| r.recommendation == Recommendation::Buy)
            .count();

        tracing::info!(
            "screen complete: {} evaluated, {} skipped, {} passed, {} buy",
            results.len(),
            skipped.len(),
            pass_count,
            buy_count
        );

        Ok(ScreenReport {
            results,
            total_screened,
            skipped,
            pass_count,
            buy_count,
            generated_at: chrono::Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuyGating;
    use async_trait::async_trait;
    use quality_screen::TrustGradeStrategy;
    use screen_core::{
        BalanceSheet, CashFlowStatement, FinancialStatements, IncomeStatement, ScreenError,
    };
    use std::collections::HashMap;

    struct MapProvider {
        statements: HashMap<String, FinancialStatements>,
        prices: HashMap<String, f64>,
        failing: Vec<String>,
    }

    #[async_trait]
    impl FactsProvider for MapProvider {
        async fn statements(
            &self,
            ticker: &str,
        ) -> Result<Option<FinancialStatements>, ScreenError> {
            if self.failing.iter().any(|t| t == ticker) {
                return Err(ScreenError::ProviderError("boom".to_string()));
            }
            Ok(self.statements.get(ticker).cloned())
        }

        async fn current_price(&self, ticker: &str) -> Result<Option<f64>, ScreenError> {
            Ok(self.prices.get(ticker).copied())
        }
    }

    fn statements(years: usize, eps_growth: f64) -> FinancialStatements {
        FinancialStatements {
            income: (0..years)
                .map(|i| IncomeStatement {
                    fiscal_year: 2020 + i as i32,
                    revenue: Some(1000.0),
                    net_income: Some(220.0),
                    ebit: Some(300.0),
                    pretax_income: Some(280.0),
                    tax_expense: Some(56.0),
                    interest_expense: Some(0.0),
                    eps_diluted: Some(1.0 + eps_growth * i as f64),
                })
                .collect(),
            balance: (0..years)
                .map(|i| BalanceSheet {
                    fiscal_year: 2020 + i as i32,
                    total_equity: Some(1375.0),
                    total_liabilities: Some(400.0),
                })
                .collect(),
            cash_flow: (0..years)
                .map(|i| CashFlowStatement {
                    fiscal_year: 2020 + i as i32,
                    free_cash_flow: Some(170.0),
                })
                .collect(),
        }
    }

    fn runner(provider: MapProvider) -> ScreenRunner {
        ScreenRunner::new(
            Arc::new(provider),
            Evaluator::new(TrustGradeStrategy::Coarse, BuyGating::RequirePass),
        )
    }

    #[tokio::test]
    async fn ranks_results_and_counts_skips() {
        let provider = MapProvider {
            statements: HashMap::from([
                ("GOOD".to_string(), statements(4, 0.15)),
                ("SHORT".to_string(), statements(2, 0.15)),
                ("NOPRICE".to_string(), statements(4, 0.15)),
            ]),
            prices: HashMap::from([
                ("GOOD".to_string(), 20.0),
                ("SHORT".to_string(), 20.0),
                ("BAD".to_string(), 20.0),
            ]),
            failing: vec!["BAD".to_string()],
        };

        let tickers: Vec<String> = ["GOOD", "SHORT", "NOPRICE", "BAD", "UNKNOWN"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let report = runner(provider).run(&tickers).await.unwrap();

        assert_eq!(report.total_screened, 5);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].ticker, "GOOD");
        assert_eq!(
            report.skipped,
            vec!["BAD", "NOPRICE", "SHORT", "UNKNOWN"]
        );
        assert_eq!(report.pass_count, 1);
        assert_eq!(report.buy_count, 1);
    }

    #[tokio::test]
    async fn results_sorted_by_total_score_descending() {
        let mut weak = statements(4, 0.15);
        // Knock the FCF margin down so the cash score drops
        for c in &mut weak.cash_flow {
            c.free_cash_flow = Some(20.0);
        }

        let provider = MapProvider {
            statements: HashMap::from([
                ("WEAK".to_string(), weak),
                ("STRONG".to_string(), statements(4, 0.15)),
            ]),
            prices: HashMap::from([
                ("WEAK".to_string(), 20.0),
                ("STRONG".to_string(), 20.0),
            ]),
            failing: vec![],
        };

        let tickers: Vec<String> =
            ["WEAK", "STRONG"].iter().map(|s| s.to_string()).collect();
        let report = runner(provider).run(&tickers).await.unwrap();

        assert_eq!(report.results.len(), 2);
        assert_eq!(report.results[0].ticker, "STRONG");
        assert!(report.results[0].total_score > report.results[1].total_score);
    }
}
