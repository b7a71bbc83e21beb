//! Text-mode OHLC bar rendering.
//!
//! Draws one column per bar, top to bottom, picking a box-drawing character
//! per cell. Candlestick columns distinguish wick and body with fractional
//! thresholds (0.25 / 0.75) for sub-cell precision; OHLC columns draw the
//! high-low range with side ticks at the open and close rows.

use chrono::{DateTime, Utc};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

const BODY: char = '┃';
const HALF_BODY_BOTTOM: char = '╻';
const HALF_BODY_TOP: char = '╹';
const WICK: char = '│';
const BODY_TO_UPPER_WICK: char = '╽';
const BODY_TO_LOWER_WICK: char = '╿';
const UPPER_HALF_WICK: char = '╷';
const LOWER_HALF_WICK: char = '╵';
const OPEN_TICK: char = '┤';
const CLOSE_TICK: char = '├';
const OPEN_CLOSE_TICK: char = '┼';

const Y_AXIS_WIDTH: usize = 12;

/// Which column style to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BarStyle {
    Candle,
    Ohlc,
}

/// One bar with prices already converted to screen units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    fn is_up(&self) -> bool {
        self.close >= self.open
    }
}

/// Renders a slice of bars into styled terminal lines.
pub(crate) struct BarGrid<'a> {
    bars: &'a [Bar],
    dates: &'a [DateTime<Utc>],
    style: BarStyle,
    up: Color,
    down: Color,
}

impl<'a> BarGrid<'a> {
    pub(crate) fn new(
        bars: &'a [Bar],
        dates: &'a [DateTime<Utc>],
        style: BarStyle,
        up: Color,
        down: Color,
    ) -> Self {
        Self {
            bars,
            dates,
            style,
            up,
            down,
        }
    }

    /// Render into `width` x `height` cells: chart rows, then a date line.
    pub(crate) fn lines(&self, width: u16, height: u16) -> Vec<Line<'static>> {
        let chart_width = (width as usize).saturating_sub(Y_AXIS_WIDTH);
        let rows = (height as usize).saturating_sub(1);
        if self.bars.is_empty() || chart_width < 2 || rows < 2 {
            return vec![Line::from("window too small for the chart")];
        }

        // Two cells per bar: glyph plus gap. Show the newest bars that fit.
        let max_visible = (chart_width / 2).max(1);
        let skip = self.bars.len().saturating_sub(max_visible);
        let visible = &self.bars[skip..];
        let dates = &self.dates[skip.min(self.dates.len())..];

        let (min, max) = price_bounds(visible);
        let rows_f = rows as f64;

        let mut lines = Vec::with_capacity(rows + 1);
        for y in (1..=rows).rev() {
            let mut spans = vec![Span::styled(
                y_axis_cell(y, rows, min, max),
                Style::default().fg(Color::Gray),
            )];
            for bar in visible {
                let glyph = self.glyph(bar, y as f64, rows_f, min, max);
                let color = if bar.is_up() { self.up } else { self.down };
                spans.push(Span::styled(glyph.to_string(), Style::default().fg(color)));
                spans.push(Span::raw(" "));
            }
            lines.push(Line::from(spans));
        }
        lines.push(date_line(dates, visible.len() * 2));
        lines
    }

    fn glyph(&self, bar: &Bar, y: f64, rows: f64, min: f64, max: f64) -> char {
        let to_row = |price: f64| price_to_row(price, min, max, rows);
        let high_y = to_row(bar.high);
        let low_y = to_row(bar.low);
        let body_top = to_row(bar.open.max(bar.close));
        let body_bottom = to_row(bar.open.min(bar.close));
        match self.style {
            BarStyle::Candle => candle_glyph(high_y, low_y, body_top, body_bottom, y),
            BarStyle::Ohlc => ohlc_glyph(high_y, low_y, to_row(bar.open), to_row(bar.close), y),
        }
    }
}

/// Min low and max high over the visible bars, with a 2% margin.
fn price_bounds(bars: &[Bar]) -> (f64, f64) {
    let min = bars.iter().fold(f64::INFINITY, |m, b| m.min(b.low));
    let max = bars.iter().fold(f64::NEG_INFINITY, |m, b| m.max(b.high));
    let margin = ((max - min) * 0.02).max(0.01);
    ((min - margin).max(0.0), max + margin)
}

/// Map a price into row coordinates (row 0 at the bottom).
fn price_to_row(price: f64, min: f64, max: f64, rows: f64) -> f64 {
    if max <= min {
        return rows / 2.0;
    }
    (price - min) / (max - min) * rows
}

/// Candlestick cell for row `y`, using the three-zone scheme: upper wick,
/// body, lower wick, with fractional thresholds inside each zone.
fn candle_glyph(high_y: f64, low_y: f64, body_top: f64, body_bottom: f64, y: f64) -> char {
    if high_y.ceil() >= y && y >= body_top.floor() {
        if body_top - y > 0.75 {
            BODY
        } else if body_top - y > 0.25 {
            if high_y - y > 0.75 {
                BODY_TO_UPPER_WICK
            } else {
                HALF_BODY_BOTTOM
            }
        } else if high_y - y > 0.75 {
            WICK
        } else if high_y - y > 0.25 {
            UPPER_HALF_WICK
        } else {
            ' '
        }
    } else if body_top.floor() >= y && y >= body_bottom.ceil() {
        BODY
    } else if body_bottom.ceil() >= y && y >= low_y.floor() {
        if body_bottom - y < 0.25 {
            BODY
        } else if body_bottom - y < 0.75 {
            if low_y - y < 0.25 {
                BODY_TO_LOWER_WICK
            } else {
                HALF_BODY_TOP
            }
        } else if low_y - y < 0.25 {
            WICK
        } else if low_y - y < 0.75 {
            LOWER_HALF_WICK
        } else {
            ' '
        }
    } else {
        ' '
    }
}

/// OHLC bar cell: vertical range with the open ticked left, close right.
fn ohlc_glyph(high_y: f64, low_y: f64, open_y: f64, close_y: f64, y: f64) -> char {
    if y > high_y.ceil() || y < low_y.floor() {
        return ' ';
    }
    let at_open = open_y.round() == y;
    let at_close = close_y.round() == y;
    match (at_open, at_close) {
        (true, true) => OPEN_CLOSE_TICK,
        (true, false) => OPEN_TICK,
        (false, true) => CLOSE_TICK,
        (false, false) => WICK,
    }
}

/// Y axis cell: a price label every fourth row, then the axis rule.
fn y_axis_cell(y: usize, rows: usize, min: f64, max: f64) -> String {
    if y % 4 == 0 {
        let price = min + y as f64 * (max - min) / rows as f64;
        format!("{price:>9.2} │ ")
    } else {
        format!("{:>9} │ ", "")
    }
}

/// One line with the first visible date left-aligned and the last one
/// right-aligned under the chart columns.
fn date_line(dates: &[DateTime<Utc>], chart_cells: usize) -> Line<'static> {
    let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
        return Line::from("");
    };
    let left = first.format("%Y-%m-%d").to_string();
    let right = last.format("%Y-%m-%d").to_string();
    let mut text = format!("{:>width$}{left}", "", width = Y_AXIS_WIDTH);
    if dates.len() > 1 {
        let gap = chart_cells.saturating_sub(left.len() + right.len());
        if gap > 0 {
            text.push_str(&" ".repeat(gap));
            text.push_str(&right);
        }
    }
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}
