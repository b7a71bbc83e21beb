//! Pricing tab: the raw candle table, ascending by date.

use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use tickerdash::PriceSeries;

pub fn draw_pricing(frame: &mut Frame, series: &PriceSeries, scroll: u16, area: Rect) {
    let header = Row::new(["Date", "Open", "High", "Low", "Close", "Volume"])
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = series
        .candles()
        .iter()
        .skip(scroll as usize)
        .map(|c| {
            let direction = if c.is_up() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::Red)
            };
            Row::new(vec![
                Cell::from(c.ts.format("%Y-%m-%d").to_string()),
                Cell::from(c.open.round_dp(2).to_string()),
                Cell::from(c.high.round_dp(2).to_string()),
                Cell::from(c.low.round_dp(2).to_string()),
                Cell::from(c.close.round_dp(2).to_string()).style(direction),
                Cell::from(c.volume.map_or_else(|| "-".to_string(), |v| v.to_string())),
            ])
        })
        .collect();

    let title = format!(" Pricing ({} candles) ", series.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}
