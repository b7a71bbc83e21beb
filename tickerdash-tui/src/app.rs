//! Interactive application state and event loop.
//!
//! One render pass per refresh: the whole snapshot is rebuilt from the query
//! bar's current values, and a failing pass leaves the previous snapshot on
//! screen with the error in the status line.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::NaiveDate;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};
use tickerdash::{ChartKind, DashError, Dashboard, DashboardSnapshot, Query};

use crate::widgets;

/// Which query-bar field edit-mode keystrokes go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Ticker,
    Start,
    End,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Ticker => Self::Start,
            Self::Start => Self::End,
            Self::End => Self::Ticker,
        }
    }
}

/// The three content tabs next to the chart pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Pricing,
    Fundamentals,
    News,
}

impl Tab {
    const ALL: [Self; 3] = [Self::Pricing, Self::Fundamentals, Self::News];

    fn label(self) -> &'static str {
        match self {
            Self::Pricing => "Pricing",
            Self::Fundamentals => "Fundamentals",
            Self::News => "News",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Pricing => 0,
            Self::Fundamentals => 1,
            Self::News => 2,
        }
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Normal,
    Edit,
}

/// Parse the query bar's text fields into a validated [`Query`].
fn parse_query(ticker: &str, start: &str, end: &str) -> Result<Query, DashError> {
    let start = NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .map_err(|e| DashError::InvalidArg(format!("start date `{start}`: {e}")))?;
    let end = NaiveDate::parse_from_str(end, "%Y-%m-%d")
        .map_err(|e| DashError::InvalidArg(format!("end date `{end}`: {e}")))?;
    Query::new(ticker, start, end)
}

/// Application state: query bar, chart-kind selection, active tab, and the
/// latest snapshot.
pub struct App {
    dashboard: Dashboard,
    runtime: tokio::runtime::Runtime,
    ticker: String,
    start: String,
    end: String,
    field: Field,
    mode: Mode,
    kind: ChartKind,
    tab: Tab,
    snapshot: Option<DashboardSnapshot>,
    status: Option<String>,
    scroll: u16,
}

impl App {
    /// Build the app with an initial query in the bar; nothing is fetched
    /// until [`Self::run`] performs the first pass.
    pub fn new(
        dashboard: Dashboard,
        runtime: tokio::runtime::Runtime,
        ticker: String,
        start: String,
        end: String,
    ) -> Self {
        Self {
            dashboard,
            runtime,
            ticker,
            start,
            end,
            field: Field::Ticker,
            mode: Mode::Normal,
            kind: ChartKind::default(),
            tab: Tab::Pricing,
            snapshot: None,
            status: None,
            scroll: 0,
        }
    }

    /// Run the event loop until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.refresh();
        let result = self.run_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.draw(f))?;
            if event::poll(Duration::from_millis(250))?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && self.handle_key(key.code)
            {
                return Ok(());
            }
        }
    }

    /// Handle one keypress. Returns true to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        match self.mode {
            Mode::Normal => match code {
                KeyCode::Char('q') | KeyCode::Esc => return true,
                KeyCode::Enter | KeyCode::Char('r') => self.refresh(),
                KeyCode::Tab => {
                    self.tab = self.tab.next();
                    self.scroll = 0;
                }
                KeyCode::BackTab => {
                    self.tab = self.tab.prev();
                    self.scroll = 0;
                }
                KeyCode::Char('c') => {
                    self.kind = self.kind.next();
                    self.refresh();
                }
                KeyCode::Char('e') => {
                    self.mode = Mode::Edit;
                    self.field = Field::Ticker;
                }
                KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
                KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
                _ => {}
            },
            Mode::Edit => match code {
                KeyCode::Esc => self.mode = Mode::Normal,
                KeyCode::Enter => {
                    self.mode = Mode::Normal;
                    self.refresh();
                }
                KeyCode::Tab => self.field = self.field.next(),
                KeyCode::Backspace => {
                    self.active_field_mut().pop();
                }
                KeyCode::Char(c) => self.active_field_mut().push(c),
                _ => {}
            },
        }
        false
    }

    fn active_field_mut(&mut self) -> &mut String {
        match self.field {
            Field::Ticker => &mut self.ticker,
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }

    /// Run one full render pass with the current query bar and chart kind.
    ///
    /// A failing pass keeps the previous snapshot and reports the error in
    /// the status line; the next refresh retries from scratch.
    fn refresh(&mut self) {
        match parse_query(&self.ticker, &self.start, &self.end) {
            Ok(query) => {
                match self.runtime.block_on(self.dashboard.snapshot(&query, self.kind)) {
                    Ok(snapshot) => {
                        self.snapshot = Some(snapshot);
                        self.status = None;
                        self.scroll = 0;
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "render pass failed");
                        self.status = Some(e.to_string());
                    }
                }
            }
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn draw(&self, frame: &mut Frame) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // query bar
                Constraint::Min(8),    // content
                Constraint::Length(1), // status
                Constraint::Length(1), // footer
            ])
            .split(frame.area());

        self.draw_query_bar(frame, rows[0]);

        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(rows[1]);
        widgets::draw_chart(frame, self.snapshot.as_ref(), content[0]);
        self.draw_tabs(frame, content[1]);

        self.draw_status(frame, rows[2]);
        self.draw_footer(frame, rows[3]);
    }

    fn draw_query_bar(&self, frame: &mut Frame, area: Rect) {
        let field_style = |field: Field| {
            if self.mode == Mode::Edit && self.field == field {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            }
        };

        let line = Line::from(vec![
            Span::raw(" Ticker "),
            Span::styled(format!("[{}]", self.ticker), field_style(Field::Ticker)),
            Span::raw("  From "),
            Span::styled(format!("[{}]", self.start), field_style(Field::Start)),
            Span::raw("  To "),
            Span::styled(format!("[{}]", self.end), field_style(Field::End)),
            Span::raw("  Chart "),
            Span::styled(
                format!("[{}]", self.kind.label()),
                Style::default().fg(Color::Yellow),
            ),
        ]);

        let title = match self.mode {
            Mode::Normal => " Query ",
            Mode::Edit => " Query (editing) ",
        };
        let bar = Paragraph::new(line).block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(bar, area);
    }

    fn draw_tabs(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(4)])
            .split(area);

        let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.label())).collect();
        let tabs = Tabs::new(titles)
            .select(self.tab.index())
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(tabs, chunks[0]);

        match (&self.snapshot, self.tab) {
            (None, _) => {
                let placeholder = Paragraph::new("No data yet. Press Enter to fetch.")
                    .block(Block::default().borders(Borders::ALL));
                frame.render_widget(placeholder, chunks[1]);
            }
            (Some(snap), Tab::Pricing) => {
                widgets::draw_pricing(frame, &snap.series, self.scroll, chunks[1]);
            }
            (Some(snap), Tab::Fundamentals) => {
                widgets::draw_fundamentals(frame, &snap.fundamentals, chunks[1]);
            }
            (Some(snap), Tab::News) => {
                widgets::draw_news(frame, &snap.news, self.scroll, chunks[1]);
            }
        }
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let line = match (&self.status, &self.snapshot) {
            (Some(err), _) => Line::from(Span::styled(
                format!(" error: {err}"),
                Style::default().fg(Color::Red),
            )),
            (None, Some(snap)) => Line::from(Span::styled(
                format!(
                    " {} candles for {} ({} to {})",
                    snap.series.len(),
                    snap.query.ticker(),
                    snap.query.start(),
                    snap.query.end()
                ),
                Style::default().fg(Color::Gray),
            )),
            (None, None) => Line::from(""),
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let hint = |key: &'static str, action: &'static str| {
            [
                Span::styled(key, Style::default().fg(Color::Yellow)),
                Span::raw(action),
            ]
        };
        let mut spans = Vec::new();
        match self.mode {
            Mode::Normal => {
                spans.extend(hint(" q", " Quit  "));
                spans.extend(hint("Enter", " Refresh  "));
                spans.extend(hint("e", " Edit query  "));
                spans.extend(hint("c", " Chart kind  "));
                spans.extend(hint("Tab", " Next tab  "));
                spans.extend(hint("Up/Down", " Scroll"));
            }
            Mode::Edit => {
                spans.extend(hint(" Enter", " Apply  "));
                spans.extend(hint("Esc", " Cancel  "));
                spans.extend(hint("Tab", " Next field"));
            }
        }
        let footer =
            Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(footer, area);
    }
}
