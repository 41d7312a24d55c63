use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::app::{AppState, InputMode};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if let Some(notice) = &state.notice {
        let bar = Paragraph::new(Span::styled(
            format!(" {notice}"),
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(bar, area);
        return;
    }

    let hints = match state.input_mode {
        InputMode::Editing => " [Enter] add · [Tab] next field · [Esc] done",
        _ => {
            " [a] add · [space] complete · [d] delete · [enter] link · [s] start/pause · [r] reset · [?] help · [q] quit"
        }
    };
    let bar = Paragraph::new(Span::styled(hints, Style::default().fg(Color::DarkGray)));
    frame.render_widget(bar, area);
}
