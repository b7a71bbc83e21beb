//! Chart API: daily OHLC history.

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tickerdash_core::{Candle, DashError, PriceSeries, Query};

use crate::YahooConnector;

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartNode,
}

#[derive(Debug, Deserialize)]
struct ChartNode {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteBlock>,
}

#[derive(Debug, Default, Deserialize)]
struct QuoteBlock {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<u64>>,
}

pub(crate) async fn fetch(conn: &YahooConnector, query: &Query) -> Result<PriceSeries, DashError> {
    let mut url = conn
        .base_url
        .join(&format!("v8/finance/chart/{}", query.ticker()))
        .map_err(|e| DashError::InvalidArg(format!("chart url: {e}")))?;

    // period2 is exclusive upstream; shift by one day to make the query's
    // end date inclusive.
    let period1 = query.start().and_hms_opt(0, 0, 0).unwrap_or_default().and_utc();
    let period2 = query.end().and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
        + chrono::Duration::days(1);
    url.query_pairs_mut()
        .append_pair("period1", &period1.timestamp().to_string())
        .append_pair("period2", &period2.timestamp().to_string())
        .append_pair("interval", "1d");

    tracing::debug!(ticker = query.ticker(), %url, "fetching history");

    let resp = conn
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(DashError::not_found(format!(
            "history for {}",
            query.ticker()
        )));
    }
    let envelope: ChartEnvelope = resp
        .error_for_status()
        .map_err(|e| YahooConnector::wire_err(&e))?
        .json()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?;

    if let Some(err) = envelope.chart.error {
        return Err(DashError::connector(
            crate::CONNECTOR_NAME,
            format!("{}: {}", err.code, err.description),
        ));
    }

    let result = envelope
        .chart
        .result
        .and_then(|mut v| if v.is_empty() { None } else { Some(v.remove(0)) })
        .ok_or_else(|| DashError::not_found(format!("history for {}", query.ticker())))?;

    map_series(&result)
}

fn map_series(result: &ChartResult) -> Result<PriceSeries, DashError> {
    let timestamps = result.timestamp.as_deref().unwrap_or(&[]);
    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| DashError::Data("chart payload has no quote block".to_string()))?;

    let mut candles = Vec::with_capacity(timestamps.len());
    for (i, ts) in timestamps.iter().enumerate() {
        // Rows with missing values are exchange holidays or partial bars;
        // skip them rather than fabricating prices.
        let (Some(o), Some(h), Some(l), Some(c)) = (
            column(&quote.open, i),
            column(&quote.high, i),
            column(&quote.low, i),
            column(&quote.close, i),
        ) else {
            continue;
        };
        candles.push(Candle {
            ts: parse_ts(*ts)?,
            open: decimal(o)?,
            high: decimal(h)?,
            low: decimal(l)?,
            close: decimal(c)?,
            volume: quote.volume.get(i).copied().flatten(),
        });
    }
    Ok(PriceSeries::new(candles))
}

fn column(col: &[Option<f64>], i: usize) -> Option<f64> {
    col.get(i).copied().flatten()
}

fn parse_ts(ts: i64) -> Result<DateTime<Utc>, DashError> {
    Utc.timestamp_opt(ts, 0)
        .single()
        .ok_or_else(|| DashError::Data(format!("unrepresentable timestamp {ts}")))
}

fn decimal(value: f64) -> Result<Decimal, DashError> {
    Decimal::from_f64(value)
        .ok_or_else(|| DashError::Data(format!("unrepresentable price {value}")))
}
