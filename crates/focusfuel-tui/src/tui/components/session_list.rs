use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Upcoming Sessions ");

    if state.store.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No sessions planned yet.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let linked = state.timer.linked_session();
    let items: Vec<ListItem> = state
        .store
        .sessions()
        .iter()
        .map(|session| {
            let marker = if linked == Some(session.id.as_str()) {
                Span::styled("▶ ", Style::default().fg(Color::Cyan))
            } else {
                Span::raw("  ")
            };
            let checkbox = if session.completed { "[x] " } else { "[ ] " };

            let mut subject_style = Style::default();
            if session.completed {
                subject_style = subject_style
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::CROSSED_OUT);
            }

            let line = Line::from(vec![
                marker,
                Span::raw(checkbox),
                Span::styled(session.subject.clone(), subject_style),
                Span::styled(
                    format!("  {} Energy · {} Priority", session.energy, session.priority),
                    Style::default().fg(Color::DarkGray),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(state.store.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}
