//! Quote-summary API: the eight-field fundamentals record.

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::Deserialize;
use tickerdash_core::{CompanyInfo, DashError};

use crate::YahooConnector;
use crate::history::ApiError;

const MODULES: &str = "assetProfile,price,summaryDetail,defaultKeyStatistics";

#[derive(Debug, Deserialize)]
struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryNode,
}

#[derive(Debug, Deserialize)]
struct SummaryNode {
    result: Option<Vec<SummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct SummaryResult {
    #[serde(rename = "assetProfile")]
    asset_profile: Option<AssetProfile>,
    price: Option<PriceModule>,
    #[serde(rename = "summaryDetail")]
    summary_detail: Option<SummaryDetail>,
    #[serde(rename = "defaultKeyStatistics")]
    key_statistics: Option<KeyStatistics>,
}

#[derive(Debug, Default, Deserialize)]
struct AssetProfile {
    sector: Option<String>,
    industry: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceModule {
    #[serde(rename = "longName")]
    long_name: Option<String>,
    #[serde(rename = "marketCap")]
    market_cap: Option<Wrapped<u64>>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDetail {
    #[serde(rename = "forwardPE")]
    forward_pe: Option<Wrapped<f64>>,
    #[serde(rename = "dividendYield")]
    dividend_yield: Option<Wrapped<f64>>,
}

#[derive(Debug, Default, Deserialize)]
struct KeyStatistics {
    #[serde(rename = "trailingEps")]
    trailing_eps: Option<Wrapped<f64>>,
}

/// Upstream wraps numbers as `{"raw": n, "fmt": "..."}`.
#[derive(Debug, Deserialize)]
struct Wrapped<T> {
    raw: Option<T>,
}

pub(crate) async fn fetch(conn: &YahooConnector, ticker: &str) -> Result<CompanyInfo, DashError> {
    let mut url = conn
        .base_url
        .join(&format!("v10/finance/quoteSummary/{ticker}"))
        .map_err(|e| DashError::InvalidArg(format!("quote summary url: {e}")))?;
    url.query_pairs_mut().append_pair("modules", MODULES);

    tracing::debug!(ticker, %url, "fetching profile");

    let resp = conn
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?;
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err(DashError::not_found(format!("profile for {ticker}")));
    }
    let envelope: SummaryEnvelope = resp
        .error_for_status()
        .map_err(|e| YahooConnector::wire_err(&e))?
        .json()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?;

    if let Some(err) = envelope.quote_summary.error {
        return Err(DashError::connector(
            crate::CONNECTOR_NAME,
            format!("{}: {}", err.code, err.description),
        ));
    }

    let result = envelope
        .quote_summary
        .result
        .and_then(|mut v| if v.is_empty() { None } else { Some(v.remove(0)) })
        .ok_or_else(|| DashError::not_found(format!("profile for {ticker}")))?;

    map_info(ticker, result)
}

fn map_info(ticker: &str, result: SummaryResult) -> Result<CompanyInfo, DashError> {
    let asset = result.asset_profile.unwrap_or_default();
    let price = result.price.unwrap_or_default();
    let detail = result.summary_detail.unwrap_or_default();
    let stats = result.key_statistics.unwrap_or_default();

    Ok(CompanyInfo {
        name: required(ticker, "longName", price.long_name)?,
        sector: required(ticker, "sector", asset.sector)?,
        industry: required(ticker, "industry", asset.industry)?,
        country: required(ticker, "country", asset.country)?,
        market_cap: required(ticker, "marketCap", price.market_cap.and_then(|w| w.raw))?,
        forward_pe: required_decimal(ticker, "forwardPE", detail.forward_pe)?,
        trailing_eps: required_decimal(ticker, "trailingEps", stats.trailing_eps)?,
        dividend_yield: required_decimal(ticker, "dividendYield", detail.dividend_yield)?,
    })
}

/// Required-field contract: no fallback value is substituted for a missing
/// fundamental; the whole fetch fails instead.
fn required<T>(ticker: &str, field: &str, value: Option<T>) -> Result<T, DashError> {
    value.ok_or_else(|| DashError::Data(format!("missing field `{field}` for {ticker}")))
}

fn required_decimal(
    ticker: &str,
    field: &str,
    value: Option<Wrapped<f64>>,
) -> Result<Decimal, DashError> {
    let raw = required(ticker, field, value.and_then(|w| w.raw))?;
    Decimal::from_f64(raw)
        .ok_or_else(|| DashError::Data(format!("unrepresentable `{field}` for {ticker}: {raw}")))
}
