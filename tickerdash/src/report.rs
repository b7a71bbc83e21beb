//! Display-ready reports for the fundamentals and news tabs.

use chrono::{DateTime, Utc};
use tickerdash_core::{CompanyInfo, NewsArticle, SentimentLabel};

/// One labeled text line, e.g. `Market Cap: 2900000000000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledLine {
    /// Field label.
    pub label: &'static str,
    /// Rendered value.
    pub value: String,
}

/// The fundamentals tab: eight labeled lines in two fixed groups.
///
/// Because [`CompanyInfo`] has no optional fields, a constructed report is
/// always complete; the two groups render in a fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundamentalsReport {
    /// "Company Information" group: name, sector, industry, country.
    pub company: Vec<LabeledLine>,
    /// "Key Metrics" group: market cap, forward P/E, EPS (TTM), dividend yield.
    pub metrics: Vec<LabeledLine>,
}

impl FundamentalsReport {
    /// Render fundamentals into the two display groups.
    #[must_use]
    pub fn new(info: &CompanyInfo) -> Self {
        let line = |label: &'static str, value: String| LabeledLine { label, value };
        Self {
            company: vec![
                line("Name", info.name.clone()),
                line("Sector", info.sector.clone()),
                line("Industry", info.industry.clone()),
                line("Country", info.country.clone()),
            ],
            metrics: vec![
                line("Market Cap", info.market_cap.to_string()),
                line("Forward P/E", info.forward_pe.to_string()),
                line("EPS (TTM)", info.trailing_eps.to_string()),
                line("Dividend Yield", info.dividend_yield.to_string()),
            ],
        }
    }

    /// All eight lines in display order.
    pub fn lines(&self) -> impl Iterator<Item = &LabeledLine> {
        self.company.iter().chain(self.metrics.iter())
    }
}

/// One rendered news card.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsCard {
    /// 1-based display index ("News 1", "News 2", ...).
    pub index: usize,
    /// Publication timestamp.
    pub published: DateTime<Utc>,
    /// Headline.
    pub title: String,
    /// Summary text.
    pub summary: String,
    /// Sign classification of the title sentiment score.
    pub title_sentiment: SentimentLabel,
    /// Sign classification of the summary sentiment score.
    pub summary_sentiment: SentimentLabel,
}

/// The news tab: indexed cards, newest first, bounded by availability.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewsReport {
    /// Rendered cards.
    pub cards: Vec<NewsCard>,
}

impl NewsReport {
    /// Render fetched articles into indexed cards.
    ///
    /// The count equals the number of articles supplied; requesting more
    /// than is available never fails, it renders fewer cards.
    #[must_use]
    pub fn build(articles: &[NewsArticle]) -> Self {
        let cards = articles
            .iter()
            .enumerate()
            .map(|(i, a)| NewsCard {
                index: i + 1,
                published: a.published,
                title: a.title.clone(),
                summary: a.summary.clone(),
                title_sentiment: SentimentLabel::from_score(a.sentiment_title),
                summary_sentiment: SentimentLabel::from_score(a.sentiment_summary),
            })
            .collect();
        Self { cards }
    }

    /// Number of rendered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards were rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
