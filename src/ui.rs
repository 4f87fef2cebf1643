pub mod charting;
pub mod screen;

use focusboard::{
    mock::{self, Heatmap, DISTRACTIONS, QUICK_ACTIONS, TASK_COMPLETION},
    signal::{Metrics, SignalSimulator},
    timer::{SessionTimer, TimerPhase},
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph, Widget, Wrap,
    },
};

use crate::App;

const INK: Color = Color::Rgb(0x1B, 0x26, 0x3B);
const STEEL: Color = Color::Rgb(0x41, 0x5A, 0x77);
const SLATE: Color = Color::Rgb(0x77, 0x8D, 0xA9);
const MIST: Color = Color::Rgb(0xE0, 0xE1, 0xDD);
const TRACE: Color = Color::Rgb(0x25, 0x63, 0xEB);
/// Lightest for an idle day, darkest for the most productive
const HEAT_COLORS: [Color; 4] = [MIST, SLATE, STEEL, INK];

const PLACEHOLDER: &str = "--";

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(6),    // live trace
                Constraint::Length(3), // stat cards
                Constraint::Length(9), // timer, weekly charts, streak
                Constraint::Length(5), // distractions, quick actions
                Constraint::Length(1), // legend
            ])
            .split(area);

        Paragraph::new(Span::styled(
            "ADHD Productivity Dashboard",
            bold_style.fg(MIST),
        ))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

        let simulator = self.dashboard.signal.simulator();
        render_signal_chart(simulator, rows[1], buf);
        render_stat_cards(simulator.metrics(), rows[2], buf);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[3]);
        render_focus_timer(self.dashboard.focus.timer(), panels[0], buf);
        render_task_completion(panels[1], buf);
        render_focus_scores(panels[2], buf);
        render_heatmap(&self.dashboard.heatmap, panels[3], buf);

        let lower = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[4]);
        render_distractions(lower[0], buf);
        render_quick_actions(lower[1], buf);

        let toggle = if self.dashboard.focus.timer().is_running() {
            "pause"
        } else {
            "start"
        };
        Paragraph::new(Span::styled(
            format!("(space) {toggle} / (r)eset / (?) help / (esc)ape"),
            italic_style,
        ))
        .render(rows[5], buf);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SLATE))
        .title(Span::styled(
            title,
            Style::default().fg(MIST).add_modifier(Modifier::BOLD),
        ))
}

fn render_signal_chart(simulator: &SignalSimulator, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let samples = simulator.samples();
    let points = charting::signal_points(samples);
    let x_bound = charting::compute_x_bound(&points);
    let (first, last) = charting::time_labels(samples);
    let [y_min, y_max] = charting::SIGNAL_Y_BOUNDS;

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .style(Style::default().fg(TRACE))
        .graph_type(GraphType::Line)
        .data(&points)];

    Chart::new(datasets)
        .block(panel("Real-time EEG Waveform"))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_bound])
                .labels(vec![Span::styled(first, bold_style), Span::styled(last, bold_style)]),
        )
        .y_axis(
            Axis::default()
                .title("µV")
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(charting::format_label(y_min), bold_style),
                    Span::styled("0", bold_style),
                    Span::styled(charting::format_label(y_max), bold_style),
                ]),
        )
        .render(area, buf);
}

fn render_stat_cards(metrics: Option<Metrics>, area: Rect, buf: &mut Buffer) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);
    let value_style = Style::default().add_modifier(Modifier::BOLD);

    let (amplitude, frequency, quality) = match metrics {
        Some(m) => {
            let color = if m.quality.is_good() {
                Color::Green
            } else {
                Color::Red
            };
            (
                format!("{} µV", m.amplitude),
                format!("{} Hz", m.dominant_frequency),
                Span::styled(m.quality.to_string(), value_style.fg(color)),
            )
        }
        None => (
            format!("{PLACEHOLDER} µV"),
            format!("{PLACEHOLDER} Hz"),
            Span::styled(PLACEHOLDER, value_style),
        ),
    };

    Paragraph::new(Span::styled(amplitude, value_style))
        .block(panel("Amplitude"))
        .alignment(Alignment::Center)
        .render(cards[0], buf);
    Paragraph::new(Span::styled(frequency, value_style))
        .block(panel("Dominant Frequency"))
        .alignment(Alignment::Center)
        .render(cards[1], buf);
    Paragraph::new(quality)
        .block(panel("Signal Quality"))
        .alignment(Alignment::Center)
        .render(cards[2], buf);
}

fn render_focus_timer(timer: &SessionTimer, area: Rect, buf: &mut Buffer) {
    let block = panel("Focus Timer");
    let inner = block.inner(area);
    block.render(area, buf);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // subtitle
            Constraint::Length(1), // countdown
            Constraint::Length(1), // state
            Constraint::Length(1), // progress
            Constraint::Length(1), // buttons
        ])
        .split(inner);

    Paragraph::new(Span::styled(
        format!("Stay focused for {} minutes", timer.duration_secs() / 60),
        Style::default().fg(SLATE),
    ))
    .alignment(Alignment::Center)
    .render(lines[0], buf);

    Paragraph::new(Span::styled(
        timer.display(),
        Style::default().fg(MIST).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .render(lines[1], buf);

    let (state, state_color) = match timer.phase() {
        TimerPhase::Running(_) => ("focusing", Color::Green),
        TimerPhase::Paused(secs) if secs == timer.duration_secs() => ("ready", SLATE),
        TimerPhase::Paused(_) => ("paused", Color::Yellow),
        TimerPhase::Expired => ("session complete", Color::Cyan),
    };
    Paragraph::new(Span::styled(
        state,
        Style::default()
            .fg(state_color)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .render(lines[2], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(STEEL).bg(INK))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress() * 100.0))
        .render(lines[3], buf);

    let toggle = if timer.is_running() { "Pause" } else { "Start" };
    Paragraph::new(Line::from(vec![
        Span::styled(format!("[ {toggle} ]"), Style::default().fg(MIST).bg(STEEL)),
        Span::raw("  "),
        Span::styled("[ Reset ]", Style::default().fg(MIST)),
    ]))
    .alignment(Alignment::Center)
    .render(lines[4], buf);
}

fn render_task_completion(area: Rect, buf: &mut Buffer) {
    let bars: Vec<(&str, u64)> = TASK_COMPLETION
        .iter()
        .map(|t| (t.day, t.completed as u64))
        .collect();
    let max = TASK_COMPLETION
        .iter()
        .map(|t| t.total as u64)
        .max()
        .unwrap_or(1);

    BarChart::default()
        .block(panel("Task Completion Rate"))
        .data(bars.as_slice())
        .max(max)
        .bar_width(3)
        .bar_gap(1)
        .bar_style(Style::default().fg(STEEL))
        .value_style(Style::default().fg(MIST).bg(STEEL))
        .label_style(Style::default().fg(SLATE))
        .render(area, buf);
}

fn render_focus_scores(area: Rect, buf: &mut Buffer) {
    let points = charting::focus_score_points();
    let first = mock::FOCUS_SCORES[0].day;
    let last = mock::FOCUS_SCORES[mock::FOCUS_SCORES.len() - 1].day;
    let best = mock::best_focus_day();
    let title = format!("Daily Focus Score (best {} {})", best.day, best.score);

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .style(Style::default().fg(SLATE))
        .graph_type(GraphType::Line)
        .data(&points)];

    Chart::new(datasets)
        .block(panel(&title))
        .x_axis(
            Axis::default()
                .bounds([0.0, (points.len().max(2) - 1) as f64])
                .labels(vec![first, last]),
        )
        .y_axis(Axis::default().bounds([0.0, 100.0]).labels(vec!["0", "100"]))
        .render(area, buf);
}

fn render_heatmap(heatmap: &Heatmap, area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = heatmap
        .rows()
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&level| {
                        let color = HEAT_COLORS[level as usize % HEAT_COLORS.len()];
                        Span::styled("■ ", Style::default().fg(color))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("Productivity Streak"))
        .alignment(Alignment::Center)
        .render(area, buf);
}

fn render_distractions(area: Rect, buf: &mut Buffer) {
    let lines: Vec<Line> = DISTRACTIONS
        .iter()
        .map(|d| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(SLATE)),
                Span::styled(d.source, Style::default().fg(MIST)),
                Span::styled(format!(" ({} ago)", d.ago), Style::default().fg(SLATE)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(panel("Distraction Log"))
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

fn render_quick_actions(area: Rect, buf: &mut Buffer) {
    let mut buttons = Vec::with_capacity(QUICK_ACTIONS.len() * 2);
    for action in QUICK_ACTIONS {
        buttons.push(Span::styled(
            format!("[ {action} ]"),
            Style::default().fg(MIST).bg(STEEL),
        ));
        buttons.push(Span::raw(" "));
    }

    Paragraph::new(vec![
        Line::from(Span::styled("Manage your focus", Style::default().fg(SLATE))),
        Line::from(buttons),
    ])
    .block(panel("Quick Actions"))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(area, buf);
}
