//! Mock connector for CI-safe tests and offline demos.
//!
//! Provides deterministic data from static fixtures. Two magic symbols
//! script failure behavior:
//!
//! - `FAIL`: every capability returns a connector error.
//! - `TIMEOUT`: every capability sleeps briefly before answering, so an
//!   orchestrator with a short provider timeout will give up.
//!
//! The `EMPTY` symbol resolves but has no candles, exercising the explicit
//! no-data path; `THIN` has fewer news articles than the default request.

use async_trait::async_trait;
use tickerdash_core::connector::{DashConnector, HistoryProvider, NewsProvider, ProfileProvider};
use tickerdash_core::{CompanyInfo, DashError, NewsArticle, NewsRequest, PriceSeries, Query};

mod fixtures;

/// Mock connector backed by deterministic fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> DashError {
        DashError::not_found(what.to_string())
    }

    async fn maybe_fail_or_timeout(symbol: &str, capability: &'static str) -> Result<(), DashError> {
        match symbol {
            "FAIL" => Err(DashError::connector(
                "tickerdash-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Short enough to keep tests fast, long enough to trip a
                // millisecond-scale provider timeout.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl DashConnector for MockConnector {
    fn name(&self) -> &'static str {
        "tickerdash-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        Some(self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        Some(self as &dyn ProfileProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    async fn history(&self, query: &Query) -> Result<PriceSeries, DashError> {
        let s = query.ticker();
        Self::maybe_fail_or_timeout(s, "history").await?;
        fixtures::history::by_query(query)
            .ok_or_else(|| Self::not_found(&format!("history for {s}")))
    }
}

#[async_trait]
impl ProfileProvider for MockConnector {
    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo, DashError> {
        Self::maybe_fail_or_timeout(ticker, "profile").await?;
        fixtures::profile::by_symbol(ticker)
            .ok_or_else(|| Self::not_found(&format!("profile for {ticker}")))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &str, req: NewsRequest) -> Result<Vec<NewsArticle>, DashError> {
        Self::maybe_fail_or_timeout(ticker, "news").await?;
        Ok(fixtures::news::by_symbol(ticker, &req))
    }
}
