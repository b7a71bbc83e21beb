//! Fundamentals tab: the eight labeled lines in their two fixed groups.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tickerdash::FundamentalsReport;

pub fn draw_fundamentals(frame: &mut Frame, report: &FundamentalsReport, area: Rect) {
    let header = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |label: &'static str, value: &str| {
        Line::from(vec![
            Span::styled(format!("  {label}: "), Style::default().fg(Color::Gray)),
            Span::raw(value.to_string()),
        ])
    };

    let mut lines = vec![header("Company Information")];
    lines.extend(report.company.iter().map(|l| entry(l.label, &l.value)));
    lines.push(Line::from(""));
    lines.push(header("Key Metrics"));
    lines.extend(report.metrics.iter().map(|l| entry(l.label, &l.value)));

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Fundamentals "));
    frame.render_widget(widget, area);
}
