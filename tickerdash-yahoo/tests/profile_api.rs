use httpmock::prelude::*;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde_json::json;
use tickerdash_core::{DashError, connector::ProfileProvider};
use tickerdash_yahoo::YahooConnector;

fn connector_for(server: &MockServer) -> YahooConnector {
    YahooConnector::builder()
        .base_url(server.base_url())
        .build()
        .expect("connector builds against mock server")
}

fn full_summary() -> serde_json::Value {
    json!({
        "quoteSummary": {
            "result": [{
                "assetProfile": {
                    "sector": "Technology",
                    "industry": "Consumer Electronics",
                    "country": "United States"
                },
                "price": {
                    "longName": "Apple Inc.",
                    "marketCap": { "raw": 2_900_000_000_000u64, "fmt": "2.9T" }
                },
                "summaryDetail": {
                    "forwardPE": { "raw": 27.5, "fmt": "27.50" },
                    "dividendYield": { "raw": 0.005, "fmt": "0.50%" }
                },
                "defaultKeyStatistics": {
                    "trailingEps": { "raw": 6.25, "fmt": "6.25" }
                }
            }],
            "error": null
        }
    })
}

#[tokio::test]
async fn maps_all_eight_fields() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v10/finance/quoteSummary/AAPL")
                .query_param(
                    "modules",
                    "assetProfile,price,summaryDetail,defaultKeyStatistics",
                );
            then.status(200).json_body(full_summary());
        })
        .await;

    let conn = connector_for(&server);
    let info = conn.company_info("AAPL").await.unwrap();

    mock.assert_async().await;
    assert_eq!(info.name, "Apple Inc.");
    assert_eq!(info.sector, "Technology");
    assert_eq!(info.industry, "Consumer Electronics");
    assert_eq!(info.country, "United States");
    assert_eq!(info.market_cap, 2_900_000_000_000);
    assert_eq!(info.forward_pe, Decimal::from_f64(27.5).unwrap());
    assert_eq!(info.trailing_eps, Decimal::from_f64(6.25).unwrap());
    assert_eq!(info.dividend_yield, Decimal::from_f64(0.005).unwrap());
}

#[tokio::test]
async fn missing_required_field_is_a_data_error() {
    let server = MockServer::start_async().await;
    let mut payload = full_summary();
    // Remove the sector; no fallback value may be substituted.
    payload["quoteSummary"]["result"][0]["assetProfile"]
        .as_object_mut()
        .unwrap()
        .remove("sector");
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/AAPL");
            then.status(200).json_body(payload);
        })
        .await;

    let conn = connector_for(&server);
    let err = conn.company_info("AAPL").await.unwrap_err();
    match err {
        DashError::Data(msg) => assert!(msg.contains("sector"), "got {msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn unwrapped_null_raw_is_a_data_error() {
    let server = MockServer::start_async().await;
    let mut payload = full_summary();
    payload["quoteSummary"]["result"][0]["summaryDetail"]["forwardPE"] =
        json!({ "raw": null, "fmt": null });
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/AAPL");
            then.status(200).json_body(payload);
        })
        .await;

    let conn = connector_for(&server);
    let err = conn.company_info("AAPL").await.unwrap_err();
    match err {
        DashError::Data(msg) => assert!(msg.contains("forwardPE"), "got {msg}"),
        other => panic!("expected Data error, got {other:?}"),
    }
}

#[tokio::test]
async fn http_404_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/ZZZZ");
            then.status(404);
        })
        .await;

    let conn = connector_for(&server);
    let err = conn.company_info("ZZZZ").await.unwrap_err();
    assert!(matches!(err, DashError::NotFound { .. }), "got {err:?}");
}

#[tokio::test]
async fn empty_result_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v10/finance/quoteSummary/ZZZZ");
            then.status(200).json_body(json!({
                "quoteSummary": { "result": [], "error": null }
            }));
        })
        .await;

    let conn = connector_for(&server);
    let err = conn.company_info("ZZZZ").await.unwrap_err();
    assert!(matches!(err, DashError::NotFound { .. }), "got {err:?}");
}
