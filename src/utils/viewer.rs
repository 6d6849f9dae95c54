//! Interactive terminal view of the MSE chart.
//!
//! Draws the same figure that is written to disk as a ratatui chart and
//! blocks until the user closes it with `q`, `Esc` or `Enter`.

use std::io::{self, IsTerminal, Stdout, Write};

use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame, Terminal,
};
use tracing::info;

use crate::error::PlotResult;
use crate::utils::plot::{LineStyle, MseFigure};

const SERIES_COLORS: [Color; 2] = [Color::Cyan, Color::Yellow];

/// Leaves raw mode and the alternate screen when dropped, on every exit path.
struct TerminalCleanup;

impl Drop for TerminalCleanup {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
    }
}

fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}

/// Present `figure` until the user closes the view.
///
/// Without a terminal on stdout there is no interactive backend and the
/// call returns immediately.
pub fn show_history(figure: &MseFigure) -> PlotResult<()> {
    if !io::stdout().is_terminal() {
        info!("stdout is not a terminal, skipping interactive view");
        return Ok(());
    }

    enable_raw_mode()?;
    // Declared before the terminal so it drops last
    let _cleanup = TerminalCleanup;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    event_loop(&mut terminal, figure)
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    figure: &MseFigure,
) -> PlotResult<()> {
    loop {
        terminal.draw(|f| draw(f, figure))?;

        // Blocks until the next terminal event; redraws on resize
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && is_close_key(key.code) {
                return Ok(());
            }
        }
    }
}

fn is_close_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter)
}

fn marker_for(style: LineStyle) -> symbols::Marker {
    match style {
        LineStyle::Solid => symbols::Marker::Braille,
        LineStyle::Dashed => symbols::Marker::Dot,
    }
}

fn axis_labels(lo: f64, hi: f64) -> Vec<Line<'static>> {
    vec![
        format!("{:.2}", lo).into(),
        format!("{:.2}", (lo + hi) / 2.0).into(),
        format!("{:.2}", hi).into(),
    ]
}

fn draw(f: &mut Frame, figure: &MseFigure) {
    let datasets: Vec<Dataset> = figure
        .series
        .iter()
        .zip(SERIES_COLORS.iter().cycle())
        .map(|(series, &color)| {
            Dataset::default()
                .name(series.label.clone())
                .marker(marker_for(series.style))
                .graph_type(GraphType::Line)
                .style(Style::default().fg(color))
                .data(&series.points)
        })
        .collect();

    let x = figure.x_range();
    let y = figure.y_range();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", figure.title))
                .title_bottom(" q / Esc / Enter to close "),
        )
        .x_axis(
            Axis::default()
                .title(figure.x_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds([x.start, x.end])
                .labels(axis_labels(x.start, x.end)),
        )
        .y_axis(
            Axis::default()
                .title(figure.y_label.clone())
                .style(Style::default().fg(Color::Gray))
                .bounds([y.start, y.end])
                .labels(axis_labels(y.start, y.end)),
        );

    f.render_widget(chart, f.area());
}
