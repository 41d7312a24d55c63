mod state;

pub use state::{AppState, FormField, InputMode, SessionForm};

use anyhow::Result;

use crate::tui::event::{Action, EventHandler};
use crate::tui::{self, ui};

pub async fn run_tui() -> Result<()> {
    let mut terminal = tui::init()?;
    let result = run_loop(&mut terminal).await;
    tui::restore()?;
    result
}

async fn run_loop(terminal: &mut tui::Terminal) -> Result<()> {
    let mut events = EventHandler::new();
    let mut state = AppState::load(events.sender())?;

    loop {
        terminal.draw(|frame| ui::draw(frame, &state))?;

        match events.next().await {
            Action::Key(key) => state.handle_key(key),
            Action::Tick => state.on_tick(),
            Action::Resize => {}
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
