//! Rendering widgets for the chart pane and the three content tabs.

mod candles;
mod chart_panel;
mod fundamentals;
mod news;
mod pricing;

pub use chart_panel::draw_chart;
pub use fundamentals::draw_fundamentals;
pub use news::draw_news;
pub use pricing::draw_pricing;

use ratatui::style::Color;
use tickerdash::LabelColor;

/// Map a pipeline display color to a terminal color.
pub(crate) fn terminal_color(label: LabelColor) -> Color {
    match label {
        LabelColor::Green => Color::Green,
        LabelColor::Red => Color::Red,
        LabelColor::Blue => Color::Blue,
    }
}
