use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{AppState, FormField, InputMode};

fn field_style(state: &AppState, field: FormField) -> Style {
    if state.input_mode == InputMode::Editing && state.form.field == field {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let editing = state.input_mode == InputMode::Editing;

    let cursor = if editing && state.form.field == FormField::Subject {
        "█"
    } else {
        ""
    };
    let subject_line = Line::from(vec![
        Span::styled("Subject:  ", field_style(state, FormField::Subject)),
        Span::raw(format!("{}{cursor}", state.form.subject)),
    ]);
    let energy_line = Line::from(vec![
        Span::styled("Energy:   ", field_style(state, FormField::Energy)),
        Span::raw(format!("◀ {} ▶", state.form.energy)),
    ]);
    let priority_line = Line::from(vec![
        Span::styled("Priority: ", field_style(state, FormField::Priority)),
        Span::raw(format!("◀ {} ▶", state.form.priority)),
    ]);

    let hint = if editing {
        "[Enter] add · [Tab] next field · [Esc] done"
    } else {
        "[a] add a session"
    };

    let lines = vec![
        subject_line,
        energy_line,
        priority_line,
        Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
    ];

    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add Focus Session "),
    );
    frame.render_widget(panel, area);
}
