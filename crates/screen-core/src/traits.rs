use crate::{FinancialStatements, ScreenError};
use async_trait::async_trait;

/// Boundary to whatever fetched and parsed the raw data. The engine
/// never talks to an API or a store; adapters implement this and own
/// retries, rate limits and caching.
#[async_trait]
pub trait FactsProvider: Send + Sync {
    /// Multi-year statements for a ticker, or `None` when the source
    /// has nothing for it.
    async fn statements(&self, ticker: &str)
        -> Result<Option<FinancialStatements>, ScreenError>;

    /// Latest price per share, or `None` when unknown.
    async fn current_price(&self, ticker: &str) -> Result<Option<f64>, ScreenError>;
}
