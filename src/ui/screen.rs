use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::{App, AppState};

/// A UI Screen boundary: responsible for rendering one app state
pub trait Screen {
    fn render(&self, app: &App, f: &mut Frame);
}

/// Main dashboard - renders the App widget
pub struct DashboardScreen;

impl Screen for DashboardScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        f.render_widget(app, f.area());
    }
}

/// Key bindings and what the panels show
pub struct HelpScreen;

const KEYS: [(&str, &str); 5] = [
    ("space / s / enter", "start or pause the focus timer"),
    ("r", "reset the focus timer"),
    ("? / h", "toggle this help"),
    ("esc / b", "back to the dashboard"),
    ("q / ctrl+c", "quit"),
];

impl Screen for HelpScreen {
    fn render(&self, app: &App, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(5),
            ])
            .split(f.area());

        let title = Paragraph::new("Keys")
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(title, chunks[0]);

        let lines: Vec<Line> = KEYS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(
                        format!("{key:>18}  "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*action),
                ])
            })
            .collect();
        f.render_widget(
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
            chunks[1],
        );

        let simulator = app.dashboard.signal.simulator();
        let bands = simulator
            .bands()
            .iter()
            .map(|b| format!("{} {}µV", b.kind, b.amplitude))
            .collect::<Vec<_>>()
            .join(" + ");
        let notes = Paragraph::new(format!(
            "The trace is synthetic: {bands} + noise, sampled every {}ms, last {} samples kept.\nFrequency and quality are placeholders, not measurements.",
            app.config.signal_interval_ms,
            simulator.capacity()
        ))
        .block(Block::default().borders(Borders::ALL))
        .style(
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::ITALIC),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        f.render_widget(notes, chunks[2]);
    }
}

/// Helper to construct the appropriate screen for the current state
pub fn current_screen(state: &AppState) -> Box<dyn Screen> {
    match state {
        AppState::Dashboard => Box::new(DashboardScreen),
        AppState::Help => Box::new(HelpScreen),
    }
}
