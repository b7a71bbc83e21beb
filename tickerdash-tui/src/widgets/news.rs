//! News tab: indexed cards with sign-colored sentiment labels for the
//! title and the summary.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tickerdash::NewsReport;

use super::terminal_color;

pub fn draw_news(frame: &mut Frame, report: &NewsReport, scroll: u16, area: Rect) {
    if report.is_empty() {
        let widget = Paragraph::new("No recent articles.")
            .block(Block::default().borders(Borders::ALL).title(" News "));
        frame.render_widget(widget, area);
        return;
    }

    let title = format!(" News ({}) ", report.len());
    let widget = Paragraph::new(card_lines(report))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

/// Every card carries two sentiment labels: one on the headline line and
/// one on the summary line. The summary label stays visible even when the
/// feed supplied no summary text.
fn card_lines(report: &NewsReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for card in &report.cards {
        lines.push(Line::from(vec![
            Span::styled(
                format!("News {}", card.index),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", card.published.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::Gray),
            ),
        ]));

        let title_style = Style::default().fg(terminal_color(card.title_sentiment.color()));
        lines.push(Line::from(vec![
            Span::styled(format!("[{}] ", card.title_sentiment), title_style),
            Span::styled(card.title.clone(), title_style.add_modifier(Modifier::BOLD)),
        ]));

        let summary_style = Style::default().fg(terminal_color(card.summary_sentiment.color()));
        let mut summary_line = vec![Span::styled(
            format!("[{}]", card.summary_sentiment),
            summary_style,
        )];
        if !card.summary.is_empty() {
            summary_line.push(Span::styled(format!(" {}", card.summary), summary_style));
        }
        lines.push(Line::from(summary_line));
        lines.push(Line::from(""));
    }
    lines
}
