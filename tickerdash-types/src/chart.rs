//! Chart model: the exhaustive kind selector and the built chart description.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The four supported chart presentations.
///
/// Exhaustive by construction: there is no "unknown selection" state, so the
/// renderer cannot silently produce nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartKind {
    /// Candlestick bars, green up / red down.
    #[default]
    Candlestick,
    /// Open-high-low-close bars.
    Ohlc,
    /// Line of the Low column.
    Low,
    /// Line of the High column.
    High,
}

impl ChartKind {
    /// All kinds in selector order.
    pub const ALL: [Self; 4] = [Self::Candlestick, Self::Ohlc, Self::Low, Self::High];

    /// Selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Candlestick => "candlestick",
            Self::Ohlc => "ohlc",
            Self::Low => "low",
            Self::High => "high",
        }
    }

    /// The next kind in selector order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Candlestick => Self::Ohlc,
            Self::Ohlc => Self::Low,
            Self::Low => Self::High,
            Self::High => Self::Candlestick,
        }
    }
}

/// Named display colors used by charts and sentiment labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelColor {
    /// Up-moves and positive sentiment.
    Green,
    /// Down-moves and negative sentiment.
    Red,
    /// Neutral sentiment.
    Blue,
}

/// A built chart: a title plus exactly one trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    /// Chart title (the ticker symbol).
    pub title: String,
    /// The single trace to draw.
    pub trace: Trace,
}

/// The data of a single chart trace.
///
/// OHLC columns are kept as parallel vectors of equal length, indexed by the
/// shared date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Trace {
    /// Candlestick bars with explicit direction colors.
    Candlestick {
        /// Date axis.
        x: Vec<DateTime<Utc>>,
        /// Opening prices.
        open: Vec<Decimal>,
        /// High prices.
        high: Vec<Decimal>,
        /// Low prices.
        low: Vec<Decimal>,
        /// Closing prices.
        close: Vec<Decimal>,
        /// Color for bars that closed at or above the open.
        increasing: LabelColor,
        /// Color for bars that closed below the open.
        decreasing: LabelColor,
    },
    /// Open-high-low-close bars.
    Ohlc {
        /// Date axis.
        x: Vec<DateTime<Utc>>,
        /// Opening prices.
        open: Vec<Decimal>,
        /// High prices.
        high: Vec<Decimal>,
        /// Low prices.
        low: Vec<Decimal>,
        /// Closing prices.
        close: Vec<Decimal>,
    },
    /// A single named line of one price column.
    Line {
        /// Column name, e.g. "Low".
        name: String,
        /// Date axis.
        x: Vec<DateTime<Utc>>,
        /// Column values.
        y: Vec<Decimal>,
    },
}

impl Trace {
    /// Number of points on the trace's date axis.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Candlestick { x, .. } | Self::Ohlc { x, .. } | Self::Line { x, .. } => x.len(),
        }
    }

    /// Whether the trace carries no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
