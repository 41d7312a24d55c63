use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use focusfuel_core::suggest;

use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let suggestion = suggest(state.store.sessions());
    let mut lines = vec![Line::from(suggestion.text())];
    if let Some(next) = state.store.next_incomplete() {
        lines.push(Line::from(Span::styled(
            format!("next up: {}", next.subject),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let panel = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(" Smart Suggestion "),
    );
    frame.render_widget(panel, area);
}
