mod helpers;

use std::sync::Arc;
use std::time::Duration;

use tickerdash::{Candle, DashError, Dashboard, PriceSeries, Query};

use helpers::ScriptedConnector;
use helpers::mock_connector::{candle, company_info, series_with};

fn query() -> Query {
    Query::new(
        "AAPL",
        chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
    )
    .unwrap()
}

#[tokio::test]
async fn falls_back_to_the_next_provider_on_failure() {
    let failing = ScriptedConnector::named("a")
        .with_history(|_| Err(DashError::connector("a", "boom")));
    let working = ScriptedConnector::named("b").with_history(|_| Ok(series_with(2, 10, 11)));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(failing))
        .with_connector(Arc::new(working))
        .build()
        .unwrap();

    let series = dash.history(&query()).await.unwrap();
    assert_eq!(series.len(), 1);
}

#[tokio::test]
async fn registration_order_is_priority_order() {
    let first = ScriptedConnector::named("first").with_history(|_| Ok(series_with(2, 1, 2)));
    let second = ScriptedConnector::named("second").with_history(|_| Ok(series_with(2, 100, 200)));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(first))
        .with_connector(Arc::new(second))
        .build()
        .unwrap();

    let series = dash.history(&query()).await.unwrap();
    assert_eq!(series.candles()[0].open, 1.into());
}

#[tokio::test]
async fn all_not_found_collapses_to_not_found() {
    let a = ScriptedConnector::named("a")
        .with_profile(|t| Err(DashError::not_found(format!("profile for {t}"))));
    let b = ScriptedConnector::named("b")
        .with_profile(|t| Err(DashError::not_found(format!("profile for {t}"))));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(a))
        .with_connector(Arc::new(b))
        .build()
        .unwrap();

    let err = dash.company_info("ZZZZ").await.unwrap_err();
    assert!(matches!(err, DashError::NotFound { .. }));
}

#[tokio::test]
async fn mixed_failures_are_aggregated() {
    let a = ScriptedConnector::named("a")
        .with_profile(|_| Err(DashError::not_found("profile for AAPL")));
    let b = ScriptedConnector::named("b").with_profile(|_| Err(DashError::connector("b", "500")));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(a))
        .with_connector(Arc::new(b))
        .build()
        .unwrap();

    match dash.company_info("AAPL").await.unwrap_err() {
        DashError::AllProvidersFailed(errors) => assert_eq!(errors.len(), 2),
        other => panic!("expected aggregate error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_provider_times_out_and_falls_back() {
    let slow = ScriptedConnector::named("slow")
        .with_delay_ms(200)
        .with_profile(|_| Ok(company_info("Slow Corp")));
    let fast = ScriptedConnector::named("fast").with_profile(|_| Ok(company_info("Fast Corp")));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(slow))
        .with_connector(Arc::new(fast))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let info = dash.company_info("AAPL").await.unwrap();
    assert_eq!(info.name, "Fast Corp");
}

#[tokio::test]
async fn lone_timeout_surfaces_as_provider_timeout() {
    let slow = ScriptedConnector::named("slow")
        .with_delay_ms(200)
        .with_profile(|_| Ok(company_info("Slow Corp")));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(slow))
        .provider_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    match dash.company_info("AAPL").await.unwrap_err() {
        DashError::AllProvidersFailed(errors) => {
            assert!(matches!(errors[0], DashError::ProviderTimeout { .. }));
        }
        other => panic!("expected aggregate error, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let history_only = ScriptedConnector::named("h").with_history(|_| Ok(series_with(2, 10, 11)));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(history_only))
        .build()
        .unwrap();

    let err = dash.news("AAPL").await.unwrap_err();
    assert!(matches!(err, DashError::Unsupported { .. }));
}

#[tokio::test]
async fn broken_candle_payload_falls_back() {
    let broken = ScriptedConnector::named("broken").with_history(|_| {
        let mut c: Candle = candle(2, 10, 11);
        std::mem::swap(&mut c.high, &mut c.low);
        Ok(PriceSeries::new(vec![c]))
    });
    let sane = ScriptedConnector::named("sane").with_history(|_| Ok(series_with(2, 10, 11)));

    let dash = Dashboard::builder()
        .with_connector(Arc::new(broken))
        .with_connector(Arc::new(sane))
        .build()
        .unwrap();

    let series = dash.history(&query()).await.unwrap();
    assert_eq!(series.candles()[0].open, 10.into());
}

#[tokio::test]
async fn news_count_bounds_the_result() {
    let chatty = ScriptedConnector::named("chatty").with_news(|_, req| {
        // Providers may over-deliver; the router truncates.
        Ok((0..req.count + 5)
            .map(|i| helpers::mock_connector::article(&format!("story {i}"), 0.1))
            .collect())
    });

    let dash = Dashboard::builder()
        .with_connector(Arc::new(chatty))
        .news_count(4)
        .build()
        .unwrap();

    assert_eq!(dash.news("AAPL").await.unwrap().len(), 4);
    assert_eq!(dash.news_with_count("AAPL", 2).await.unwrap().len(), 2);
}

#[test]
fn builder_requires_a_connector() {
    let err = Dashboard::builder().build().unwrap_err();
    assert!(matches!(err, DashError::InvalidArg(_)));
}
