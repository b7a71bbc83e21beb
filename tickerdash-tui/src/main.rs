//! Terminal dashboard binary.
//!
//! Wires a [`tickerdash::Dashboard`] to either the live Yahoo Finance
//! connector or the offline mock, then hands control to the interactive
//! event loop in [`app`].

use std::sync::Arc;

use clap::Parser;
use tickerdash::Dashboard;
use tracing_subscriber::EnvFilter;

mod app;
mod widgets;

/// Terminal stock dashboard: OHLC charts, fundamentals, and scored news.
#[derive(Parser, Debug)]
#[command(name = "tickerdash")]
#[command(version)]
#[command(about = "Terminal stock dashboard: OHLC charts, fundamentals, and scored news")]
struct Args {
    /// Run against the built-in mock connector instead of Yahoo Finance
    #[arg(long)]
    offline: bool,

    /// Ticker symbol for the initial query
    #[arg(long, default_value = "AAPL")]
    ticker: String,

    /// Start date (YYYY-MM-DD) for the initial query
    #[arg(long, default_value = "2024-01-01")]
    start: String,

    /// End date (YYYY-MM-DD) for the initial query; defaults to today
    #[arg(long)]
    end: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr so they can be redirected away from the TUI.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let runtime = tokio::runtime::Runtime::new()?;

    let builder = Dashboard::builder();
    let builder = if args.offline {
        tracing::info!("running offline against the mock connector");
        builder.with_connector(Arc::new(tickerdash_mock::MockConnector::new()))
    } else {
        builder.with_connector(Arc::new(tickerdash_yahoo::YahooConnector::new()?))
    };
    let dashboard = builder.build()?;

    let end = args
        .end
        .unwrap_or_else(|| chrono::Utc::now().date_naive().to_string());
    let app = app::App::new(dashboard, runtime, args.ticker, args.start, end);
    app.run()?;
    Ok(())
}
