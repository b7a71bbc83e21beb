//! Price history model: queries, candles, and ordered series.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::DashError;

/// One immutable render-pass query: ticker symbol plus a closed date range.
///
/// Constructed once per pass and passed through the pipeline; components
/// never read input state from anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    ticker: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl Query {
    /// Build a validated query.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty ticker or a start date after the end date.
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, DashError> {
        let ticker = ticker.into().trim().to_ascii_uppercase();
        if ticker.is_empty() {
            return Err(DashError::InvalidArg("ticker must not be empty".to_string()));
        }
        if start > end {
            return Err(DashError::InvalidArg(format!(
                "start date {start} is after end date {end}"
            )));
        }
        Ok(Self { ticker, start, end })
    }

    /// Ticker symbol, uppercased.
    #[must_use]
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Inclusive start of the requested range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Inclusive end of the requested range.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Default for Query {
    /// The out-of-the-box query: AAPL from 2024-01-01 through today.
    fn default() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default();
        let end = Utc::now().date_naive().max(start);
        Self {
            ticker: "AAPL".to_string(),
            start,
            end,
        }
    }
}

/// A single OHLC bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Opening price.
    pub open: Decimal,
    /// Highest traded price.
    pub high: Decimal,
    /// Lowest traded price.
    pub low: Decimal,
    /// Closing price.
    pub close: Decimal,
    /// Traded volume, when the provider reports it.
    pub volume: Option<u64>,
}

impl Candle {
    /// Whether the bar closed at or above its open.
    #[must_use]
    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// An ordered sequence of candles, ascending by timestamp.
///
/// The constructor sorts, so consumers may rely on the ordering invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceSeries {
    candles: Vec<Candle>,
}

impl PriceSeries {
    /// Build a series from candles in any order.
    #[must_use]
    pub fn new(mut candles: Vec<Candle>) -> Self {
        candles.sort_by_key(|c| c.ts);
        Self { candles }
    }

    /// The candles, ascending by timestamp.
    #[must_use]
    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    /// Number of candles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candles.len()
    }

    /// Whether the series holds no candles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }
}

impl From<PriceSeries> for Vec<Candle> {
    fn from(series: PriceSeries) -> Self {
        series.candles
    }
}
