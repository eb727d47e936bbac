//! TUI chart dashboard using ratatui.

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kumo_core::types::{Quote, QuoteSeries, TradeAction, TradeDecision};
use kumo_indicators::IchimokuCloud;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Dashboard state.
///
/// Chart series are `(index, value)` points; slots where an indicator
/// is undefined are simply absent, which leaves visible gaps where the
/// windows have not filled, the same way the source data has them.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub symbol: String,
    pub quote: Option<Quote>,
    pub decision: Option<TradeDecision>,
    pub closes: Vec<(f64, f64)>,
    pub tenkan: Vec<(f64, f64)>,
    pub kijun: Vec<(f64, f64)>,
    pub senkou_a: Vec<(f64, f64)>,
    pub senkou_b: Vec<(f64, f64)>,
    pub chikou: Vec<(f64, f64)>,
    pub messages: Vec<String>,
}

impl DashboardState {
    /// Create a state for one symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    /// Load close prices from a quote series.
    pub fn set_series(&mut self, series: &QuoteSeries) {
        self.closes = series
            .closes()
            .iter()
            .enumerate()
            .map(|(i, &close)| (i as f64, close))
            .collect();
    }

    /// Load the five cloud series, dropping undefined slots.
    pub fn set_cloud(&mut self, cloud: &IchimokuCloud) {
        self.tenkan = points(&cloud.tenkan_sen);
        self.kijun = points(&cloud.kijun_sen);
        self.senkou_a = points(&cloud.senkou_span_a);
        self.senkou_b = points(&cloud.senkou_span_b);
        self.chikou = points(&cloud.chikou_span);
    }

    /// Append a log line.
    pub fn push_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }
}

/// Indexed points for the defined slots of an aligned series.
fn points(values: &[Option<f64>]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i as f64, v)))
        .collect()
}

/// TUI dashboard.
pub struct Dashboard {
    refresh_ms: u64,
}

impl Dashboard {
    /// Create a new dashboard.
    pub fn new(refresh_ms: u64) -> Self {
        Self { refresh_ms }
    }

    /// Run the dashboard until the user quits with 'q' or Esc.
    pub fn run(&self, state: &DashboardState) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let res = self.run_loop(&mut terminal, state);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        res
    }

    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        state: &DashboardState,
    ) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.ui(f, state))?;

            if event::poll(Duration::from_millis(self.refresh_ms))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('q') || key.code == KeyCode::Esc {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn ui(&self, frame: &mut Frame, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(4), // Quote + decision
                Constraint::Min(10),   // Cloud chart
                Constraint::Length(7), // Messages
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0], state);
        self.render_stats(frame, chunks[1], state);
        self.render_chart(frame, chunks[2], state);
        self.render_messages(frame, chunks[3], state);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let header = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                "Ichimoku Console",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(&state.symbol, Style::default().fg(Color::Cyan)),
            Span::raw(" | Press 'q' to quit"),
        ])])
        .block(Block::default().borders(Borders::ALL).title("System"));
        frame.render_widget(header, area);
    }

    fn render_stats(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let quote_line = match &state.quote {
            Some(q) => Line::from(vec![
                Span::raw("Open: "),
                Span::styled(format!("{:.2}", q.open), Style::default()),
                Span::raw("  |  High: "),
                Span::styled(format!("{:.2}", q.high), Style::default()),
                Span::raw("  |  Low: "),
                Span::styled(format!("{:.2}", q.low), Style::default()),
                Span::raw("  |  Last: "),
                Span::styled(
                    format!("{:.2}", q.close),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from("No quote loaded"),
        };

        let decision_line = match &state.decision {
            Some(d) => {
                let color = match d.action {
                    TradeAction::BuyCall => Color::Green,
                    TradeAction::BuyPut => Color::Red,
                    TradeAction::Hold => Color::Yellow,
                };
                Line::from(vec![
                    Span::raw("Decision: "),
                    Span::styled(
                        d.action.to_string(),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!(" @ {:.2}", d.price)),
                ])
            }
            None => Line::from("No decision yet"),
        };

        let stats = Paragraph::new(vec![quote_line, decision_line])
            .block(Block::default().borders(Borders::ALL).title("Snapshot"));
        frame.render_widget(stats, area);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        if state.closes.is_empty() {
            let placeholder = Paragraph::new("No series loaded")
                .block(Block::default().borders(Borders::ALL).title("Ichimoku Cloud"));
            frame.render_widget(placeholder, area);
            return;
        }

        let ([x_min, x_max], [y_min, y_max]) = chart_bounds(state);

        let datasets = vec![
            dataset("Close", Color::White, &state.closes),
            dataset("Tenkan", Color::Cyan, &state.tenkan),
            dataset("Kijun", Color::Yellow, &state.kijun),
            dataset("Senkou A", Color::Green, &state.senkou_a),
            dataset("Senkou B", Color::Red, &state.senkou_b),
            dataset("Chikou", Color::Magenta, &state.chikou),
        ];

        let x_labels = [
            format!("{:.0}", x_min),
            format!("{:.0}", (x_min + x_max) / 2.0),
            format!("{:.0}", x_max),
        ];
        let y_labels = [
            format!("{:.1}", y_min),
            format!("{:.1}", (y_min + y_max) / 2.0),
            format!("{:.1}", y_max),
        ];

        let chart = Chart::new(datasets)
            .block(Block::default().borders(Borders::ALL).title("Ichimoku Cloud"))
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([x_min, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels(y_labels),
            );

        frame.render_widget(chart, area);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let messages: Vec<Line> = state
            .messages
            .iter()
            .rev()
            .take(5)
            .map(|m| Line::from(m.as_str()))
            .collect();

        let paragraph =
            Paragraph::new(messages).block(Block::default().borders(Borders::ALL).title("Log"));
        frame.render_widget(paragraph, area);
    }
}

fn dataset<'a>(name: &'a str, color: Color, data: &'a [(f64, f64)]) -> Dataset<'a> {
    Dataset::default()
        .name(name)
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

/// Axis bounds covering every plotted point, with a little headroom.
fn chart_bounds(state: &DashboardState) -> ([f64; 2], [f64; 2]) {
    let series = [
        &state.closes,
        &state.tenkan,
        &state.kijun,
        &state.senkou_a,
        &state.senkou_b,
        &state.chikou,
    ];

    let mut x_max = 1.0f64;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for points in series {
        for &(x, y) in points.iter() {
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !y_min.is_finite() || !y_max.is_finite() {
        return ([0.0, x_max], [0.0, 1.0]);
    }

    let pad = ((y_max - y_min) * 0.05).max(0.5);
    ([0.0, x_max], [y_min - pad, y_max + pad])
}
