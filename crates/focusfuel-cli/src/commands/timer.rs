//! Timer control commands.
//!
//! The engine serializes to the kv store between invocations so the CLI and
//! TUI share one timer. The countdown only advances where a tick source
//! runs (the TUI); this surface inspects and transitions state.

use clap::Subcommand;
use focusfuel_core::storage::database::TIMER_ENGINE_KEY;
use focusfuel_core::{Config, Database, SessionStore, TimerEngine};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Print current timer state as JSON
    Status,
    /// Start or pause the countdown
    Toggle,
    /// Stop and restore the current mode's full duration
    Reset,
    /// Link a session to the timer (auto-completed when focus expires)
    Link {
        /// Session ID
        id: String,
    },
    /// Unlink the timer's session
    Unlink,
}

fn load_engine(db: &Database, config: &Config) -> TimerEngine {
    if let Ok(Some(json)) = db.kv_get(TIMER_ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return engine;
        }
    }
    TimerEngine::with_durations(config.focus_secs(), config.break_secs())
}

fn save_engine(db: &Database, engine: &TimerEngine) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(engine)?;
    db.kv_set(TIMER_ENGINE_KEY, &json)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let config = Config::load_or_default();
    let mut engine = load_engine(&db, &config);

    match action {
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&engine.snapshot())?);
        }
        TimerAction::Toggle => {
            let event = engine.toggle();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Reset => {
            let event = engine.reset();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Link { id } => {
            let store = SessionStore::with_database(Database::open()?);
            if store.get(&id).is_none() {
                return Err(format!("Session not found: {id}").into());
            }
            engine.link(&id);
            println!("Timer linked to session: {id}");
        }
        TimerAction::Unlink => {
            engine.unlink();
            println!("Timer unlinked");
        }
    }

    save_engine(&db, &engine)?;
    Ok(())
}
