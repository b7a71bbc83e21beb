//! Search feed: recent news, scored at fetch time.

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use tickerdash_core::{DashError, NewsArticle, NewsRequest};

use crate::sentiment;
use crate::YahooConnector;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    news: Vec<NewsDto>,
}

#[derive(Debug, Deserialize)]
struct NewsDto {
    title: String,
    #[serde(default)]
    summary: Option<String>,
    #[serde(rename = "providerPublishTime")]
    provider_publish_time: Option<i64>,
}

pub(crate) async fn fetch(
    conn: &YahooConnector,
    ticker: &str,
    req: NewsRequest,
) -> Result<Vec<NewsArticle>, DashError> {
    let mut url = conn
        .base_url
        .join("v1/finance/search")
        .map_err(|e| DashError::InvalidArg(format!("search url: {e}")))?;
    url.query_pairs_mut()
        .append_pair("q", ticker)
        .append_pair("newsCount", &req.count.to_string())
        .append_pair("quotesCount", "0");

    tracing::debug!(ticker, count = req.count, %url, "fetching news");

    let envelope: SearchEnvelope = conn
        .http
        .get(url)
        .send()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?
        .error_for_status()
        .map_err(|e| YahooConnector::wire_err(&e))?
        .json()
        .await
        .map_err(|e| YahooConnector::wire_err(&e))?;

    let mut articles: Vec<NewsArticle> = envelope
        .news
        .into_iter()
        .filter_map(|dto| map_article(dto))
        .collect();
    articles.sort_by(|a, b| b.published.cmp(&a.published));
    articles.truncate(req.count);
    Ok(articles)
}

fn map_article(dto: NewsDto) -> Option<NewsArticle> {
    // An article without a publish time cannot be placed on the feed; drop it.
    let published = Utc.timestamp_opt(dto.provider_publish_time?, 0).single()?;
    let summary = dto.summary.unwrap_or_default();
    let sentiment_title = sentiment::score(&dto.title);
    let sentiment_summary = sentiment::score(&summary);
    Some(NewsArticle {
        published,
        title: dto.title,
        summary,
        sentiment_title,
        sentiment_summary,
    })
}
