use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{AppState, InputMode};
use crate::tui::components::{
    banner, help_popup, progress_panel, session_form, session_list, status_bar, suggestion_panel,
    timer_panel,
};

pub fn draw(frame: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Banner
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    banner::render(frame, chunks[0]);

    // Left column: suggestion, timer, progress. Right column: form, list.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(8),
            Constraint::Min(4),
        ])
        .split(columns[0]);

    suggestion_panel::render(frame, left[0], state);
    timer_panel::render(frame, left[1], state);
    progress_panel::render(frame, left[2], state);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(4)])
        .split(columns[1]);

    session_form::render(frame, right[0], state);
    session_list::render(frame, right[1], state);

    status_bar::render(frame, chunks[2], state);

    if state.input_mode == InputMode::Help {
        help_popup::render(frame);
    }
}
