#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use tickerdash::{
    Candle, CompanyInfo, DashConnector, DashError, NewsArticle, NewsRequest, PriceSeries, Query,
};
use tickerdash_core::connector::{HistoryProvider, NewsProvider, ProfileProvider};
use tokio::time::{Duration, sleep};

/// Simple in-memory connector used by integration tests.
/// Behavior per capability is scripted via optional closures; a capability
/// with no closure is advertised as unsupported.
pub struct ScriptedConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub history_fn: Option<Arc<dyn Fn(&Query) -> Result<PriceSeries, DashError> + Send + Sync>>,
    pub profile_fn: Option<Arc<dyn Fn(&str) -> Result<CompanyInfo, DashError> + Send + Sync>>,
    pub news_fn:
        Option<Arc<dyn Fn(&str, NewsRequest) -> Result<Vec<NewsArticle>, DashError> + Send + Sync>>,
}

impl ScriptedConnector {
    pub fn named(name: &'static str) -> Self {
        Self {
            name,
            delay_ms: 0,
            history_fn: None,
            profile_fn: None,
            news_fn: None,
        }
    }

    pub fn with_history(
        mut self,
        f: impl Fn(&Query) -> Result<PriceSeries, DashError> + Send + Sync + 'static,
    ) -> Self {
        self.history_fn = Some(Arc::new(f));
        self
    }

    pub fn with_profile(
        mut self,
        f: impl Fn(&str) -> Result<CompanyInfo, DashError> + Send + Sync + 'static,
    ) -> Self {
        self.profile_fn = Some(Arc::new(f));
        self
    }

    pub fn with_news(
        mut self,
        f: impl Fn(&str, NewsRequest) -> Result<Vec<NewsArticle>, DashError> + Send + Sync + 'static,
    ) -> Self {
        self.news_fn = Some(Arc::new(f));
        self
    }

    pub fn with_delay_ms(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }
}

impl DashConnector for ScriptedConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_history_provider(&self) -> Option<&dyn HistoryProvider> {
        self.history_fn.as_ref().map(|_| self as &dyn HistoryProvider)
    }

    fn as_profile_provider(&self) -> Option<&dyn ProfileProvider> {
        self.profile_fn.as_ref().map(|_| self as &dyn ProfileProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.news_fn.as_ref().map(|_| self as &dyn NewsProvider)
    }
}

#[async_trait]
impl HistoryProvider for ScriptedConnector {
    async fn history(&self, query: &Query) -> Result<PriceSeries, DashError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.history_fn {
            Some(f) => f(query),
            None => Err(DashError::unsupported("history")),
        }
    }
}

#[async_trait]
impl ProfileProvider for ScriptedConnector {
    async fn company_info(&self, ticker: &str) -> Result<CompanyInfo, DashError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.profile_fn {
            Some(f) => f(ticker),
            None => Err(DashError::unsupported("profile")),
        }
    }
}

#[async_trait]
impl NewsProvider for ScriptedConnector {
    async fn news(&self, ticker: &str, req: NewsRequest) -> Result<Vec<NewsArticle>, DashError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.news_fn {
            Some(f) => f(ticker, req),
            None => Err(DashError::unsupported("news")),
        }
    }
}

/// One-candle series helper.
pub fn series_with(day: u32, open: i64, close: i64) -> PriceSeries {
    PriceSeries::new(vec![candle(day, open, close)])
}

pub fn candle(day: u32, open: i64, close: i64) -> Candle {
    Candle {
        ts: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
        open: Decimal::from(open),
        high: Decimal::from(open.max(close) + 1),
        low: Decimal::from(open.min(close) - 1),
        close: Decimal::from(close),
        volume: Some(100),
    }
}

pub fn company_info(name: &str) -> CompanyInfo {
    CompanyInfo {
        name: name.to_string(),
        sector: "Technology".to_string(),
        industry: "Consumer Electronics".to_string(),
        country: "United States".to_string(),
        market_cap: 1_000_000_000,
        forward_pe: Decimal::new(2510, 2),
        trailing_eps: Decimal::new(605, 2),
        dividend_yield: Decimal::new(50, 4),
    }
}

pub fn article(title: &str, score: f64) -> NewsArticle {
    NewsArticle {
        published: Utc.with_ymd_and_hms(2024, 1, 31, 9, 0, 0).unwrap(),
        title: title.to_string(),
        summary: format!("{title} summary"),
        sentiment_title: score,
        sentiment_summary: -score,
    }
}
