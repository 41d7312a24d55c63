use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use focusfuel_core::TimerMode;

use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let (badge, badge_color) = match state.timer.mode() {
        TimerMode::Focus => ("Focus Mode", Color::Blue),
        TimerMode::Break => ("Break Time", Color::Green),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            state.timer.display(),
            Style::default()
                .fg(badge_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {badge} "),
            Style::default().fg(Color::Black).bg(badge_color),
        )),
    ];

    // Show which session rides on this focus period.
    if let Some(subject) = state
        .timer
        .linked_session()
        .and_then(|id| state.store.get(id))
        .map(|s| s.subject.clone())
    {
        lines.push(Line::from(Span::styled(
            format!("▶ {subject}"),
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let start_pause = if state.timer.is_active() { "Pause" } else { "Start" };
    lines.push(Line::from(Span::styled(
        format!("[s] {start_pause} · [r] Reset"),
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Timer "));
    frame.render_widget(panel, area);
}
