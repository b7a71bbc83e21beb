use httpmock::prelude::*;
use serde_json::json;
use tickerdash_core::{NewsRequest, SentimentLabel, connector::NewsProvider};
use tickerdash_yahoo::YahooConnector;

fn connector_for(server: &MockServer) -> YahooConnector {
    YahooConnector::builder()
        .base_url(server.base_url())
        .build()
        .expect("connector builds against mock server")
}

#[tokio::test]
async fn fetches_scores_and_sorts_newest_first() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/finance/search")
                .query_param("q", "AAPL")
                .query_param("newsCount", "10")
                .query_param("quotesCount", "0");
            then.status(200).json_body(json!({
                "news": [
                    {
                        "title": "Apple shares slide on weak iPhone demand",
                        "summary": "Quarterly revenue tops analyst estimates.",
                        "providerPublishTime": 1706788800
                    },
                    {
                        "title": "Apple shares surge after earnings beat",
                        "summary": "Analysts see risk of a supply decline.",
                        "providerPublishTime": 1706875200
                    },
                    {
                        "title": "Apple schedules its annual shareholder meeting",
                        "providerPublishTime": 1706702400
                    }
                ]
            }));
        })
        .await;

    let conn = connector_for(&server);
    let articles = conn.news("AAPL", NewsRequest::default()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(articles.len(), 3);
    // Newest first, regardless of feed order.
    assert!(articles[0].published > articles[1].published);
    assert!(articles[1].published > articles[2].published);

    let newest = &articles[0];
    assert_eq!(newest.title, "Apple shares surge after earnings beat");
    assert_eq!(
        SentimentLabel::from_score(newest.sentiment_title),
        SentimentLabel::Positive
    );
    assert_eq!(
        SentimentLabel::from_score(newest.sentiment_summary),
        SentimentLabel::Negative
    );

    let oldest = &articles[2];
    // Absent summary becomes an empty, neutral one.
    assert_eq!(oldest.summary, "");
    assert_eq!(
        SentimentLabel::from_score(oldest.sentiment_summary),
        SentimentLabel::Neutral
    );
}

#[tokio::test]
async fn truncates_to_requested_count() {
    let server = MockServer::start_async().await;
    let news: Vec<_> = (0..5)
        .map(|i| {
            json!({
                "title": format!("Story {i}"),
                "summary": "",
                "providerPublishTime": 1706702400 + i * 3600
            })
        })
        .collect();
    server
        .mock_async(move |when, then| {
            when.method(GET)
                .path("/v1/finance/search")
                .query_param("newsCount", "2");
            then.status(200).json_body(json!({ "news": news }));
        })
        .await;

    let conn = connector_for(&server);
    let articles = conn
        .news("AAPL", NewsRequest { count: 2 })
        .await
        .unwrap();
    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].title, "Story 4");
}

#[tokio::test]
async fn drops_articles_without_publish_time() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finance/search");
            then.status(200).json_body(json!({
                "news": [
                    { "title": "Undated wire item", "summary": "" },
                    {
                        "title": "Dated item",
                        "summary": "",
                        "providerPublishTime": 1706702400
                    }
                ]
            }));
        })
        .await;

    let conn = connector_for(&server);
    let articles = conn.news("AAPL", NewsRequest::default()).await.unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "Dated item");
}

#[tokio::test]
async fn missing_news_array_yields_empty_feed() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/finance/search");
            then.status(200).json_body(json!({ "quotes": [] }));
        })
        .await;

    let conn = connector_for(&server);
    let articles = conn.news("AAPL", NewsRequest::default()).await.unwrap();
    assert!(articles.is_empty());
}
