//! News articles with precomputed sentiment scores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chart::LabelColor;

/// Request parameters for a news fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsRequest {
    /// Maximum number of articles to return, newest first.
    pub count: usize,
}

impl Default for NewsRequest {
    fn default() -> Self {
        Self { count: 10 }
    }
}

/// One news record as delivered by a news provider.
///
/// Sentiment scores are precomputed by the provider; the pipeline only
/// classifies their sign for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Publication timestamp (UTC).
    pub published: DateTime<Utc>,
    /// Headline.
    pub title: String,
    /// Short summary or lede.
    pub summary: String,
    /// Signed sentiment score of the title.
    pub sentiment_title: f64,
    /// Signed sentiment score of the summary.
    pub sentiment_summary: f64,
}

/// Three-way sentiment classification by sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    /// Score strictly greater than zero.
    Positive,
    /// Score strictly less than zero.
    Negative,
    /// Score exactly zero (or not a number).
    Neutral,
}

impl SentimentLabel {
    /// Classify a signed sentiment score.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Self::Positive
        } else if score < 0.0 {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    /// Display color: positive is green, negative red, neutral blue.
    #[must_use]
    pub const fn color(self) -> LabelColor {
        match self {
            Self::Positive => LabelColor::Green,
            Self::Negative => LabelColor::Red,
            Self::Neutral => LabelColor::Blue,
        }
    }

    /// Human-readable label text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
