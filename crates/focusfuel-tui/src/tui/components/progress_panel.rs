use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Gauge},
    Frame,
};

use crate::app::AppState;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let completed = state.store.completed_count();
    let total = state.store.len();
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Daily Progress "),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(state.store.progress_pct() / 100.0)
        .label(format!("{completed} of {total} sessions completed"));
    frame.render_widget(gauge, area);
}
