//! The chart pane: dispatches on the snapshot's built trace.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tickerdash::{DashboardSnapshot, Trace};

use super::candles::{Bar, BarGrid, BarStyle};
use super::terminal_color;

/// Draw the chart pane for the latest snapshot, or a placeholder when no
/// pass has produced one yet.
pub fn draw_chart(frame: &mut Frame, snapshot: Option<&DashboardSnapshot>, area: Rect) {
    let Some(snap) = snapshot else {
        placeholder(frame, area, " Chart ", "No data yet. Press Enter to fetch.");
        return;
    };
    let Some(spec) = &snap.chart else {
        let msg = format!("No candles for {} in the selected range.", snap.query.ticker());
        placeholder(frame, area, " Chart ", &msg);
        return;
    };

    let title = format!(" {} ({}) ", spec.title, snap.kind.label());
    match &spec.trace {
        Trace::Candlestick {
            x,
            open,
            high,
            low,
            close,
            increasing,
            decreasing,
        } => {
            let bars = to_bars(open, high, low, close);
            draw_bars(
                frame,
                area,
                &title,
                &BarGrid::new(
                    &bars,
                    x,
                    BarStyle::Candle,
                    terminal_color(*increasing),
                    terminal_color(*decreasing),
                ),
            );
        }
        Trace::Ohlc {
            x,
            open,
            high,
            low,
            close,
        } => {
            let bars = to_bars(open, high, low, close);
            draw_bars(
                frame,
                area,
                &title,
                &BarGrid::new(&bars, x, BarStyle::Ohlc, Color::Green, Color::Red),
            );
        }
        Trace::Line { name, x, y } => draw_line(frame, area, &title, name, x, y),
    }
}

fn placeholder(frame: &mut Frame, area: Rect, title: &str, msg: &str) {
    let widget = Paragraph::new(msg).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title.to_string()),
    );
    frame.render_widget(widget, area);
}

fn to_bars(open: &[Decimal], high: &[Decimal], low: &[Decimal], close: &[Decimal]) -> Vec<Bar> {
    let f = |d: &Decimal| d.to_f64().unwrap_or(0.0);
    open.iter()
        .zip(high)
        .zip(low)
        .zip(close)
        .map(|(((o, h), l), c)| Bar {
            open: f(o),
            high: f(h),
            low: f(l),
            close: f(c),
        })
        .collect()
}

fn draw_bars(frame: &mut Frame, area: Rect, title: &str, grid: &BarGrid) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let lines = grid.lines(inner.width, inner.height);
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_line(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    name: &str,
    x: &[chrono::DateTime<chrono::Utc>],
    y: &[Decimal],
) {
    let points: Vec<(f64, f64)> = y
        .iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v.to_f64().unwrap_or(0.0)))
        .collect();
    if points.is_empty() {
        placeholder(frame, area, title, "Empty trace.");
        return;
    }

    let y_min = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
    let y_max = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
    let padding = ((y_max - y_min) * 0.1).max(0.01);
    let (y_lo, y_hi) = (y_min - padding, y_max + padding);
    let x_max = (points.len().saturating_sub(1)) as f64;

    let dataset = Dataset::default()
        .name(name.to_string())
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let y_labels: Vec<Line> = vec![
        Line::from(format!("{y_lo:.2}")),
        Line::from(format!("{:.2}", (y_lo + y_hi) / 2.0)),
        Line::from(format!("{y_hi:.2}")),
    ];
    let x_labels: Vec<Line> = match (x.first(), x.last()) {
        (Some(first), Some(last)) => vec![
            Line::from(first.format("%Y-%m-%d").to_string()),
            Line::from(last.format("%Y-%m-%d").to_string()),
        ],
        _ => vec![],
    };

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, x_max.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([y_lo, y_hi])
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}
