//! Session management commands.

use clap::Subcommand;
use focusfuel_core::{EnergyLevel, PriorityLevel, SessionStore};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Plan a new focus session
    Add {
        /// Session subject (e.g. "Math", "History")
        subject: String,
        /// Planned duration, free-form text
        #[arg(long, default_value = "25")]
        time: String,
        /// Energy level: low, medium or high
        #[arg(long, default_value = "medium")]
        energy: String,
        /// Priority: low, medium or high
        #[arg(long, default_value = "medium")]
        priority: String,
    },
    /// List all sessions
    List,
    /// Mark a session completed
    Complete {
        /// Session ID
        id: String,
    },
    /// Delete a session
    Delete {
        /// Session ID
        id: String,
    },
}

fn parse_energy(raw: &str) -> EnergyLevel {
    match raw.to_ascii_lowercase().as_str() {
        "low" => EnergyLevel::Low,
        "high" => EnergyLevel::High,
        _ => EnergyLevel::Medium,
    }
}

fn parse_priority(raw: &str) -> PriorityLevel {
    match raw.to_ascii_lowercase().as_str() {
        "low" => PriorityLevel::Low,
        "high" => PriorityLevel::High,
        _ => PriorityLevel::Medium,
    }
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = SessionStore::open()?;

    match action {
        SessionAction::Add {
            subject,
            time,
            energy,
            priority,
        } => {
            if subject.trim().is_empty() {
                return Err("subject must not be empty".into());
            }
            let session = store.add(subject, time, parse_energy(&energy), parse_priority(&priority))?;
            println!("Session created: {}", session.id);
            println!("{}", serde_json::to_string_pretty(&session)?);
        }
        SessionAction::List => {
            println!("{}", serde_json::to_string_pretty(store.sessions())?);
        }
        SessionAction::Complete { id } => {
            if store.complete(&id)? {
                println!("Session completed: {id}");
            } else {
                println!("Session not found: {id}");
            }
        }
        SessionAction::Delete { id } => {
            if store.delete(&id)? {
                println!("Session deleted: {id}");
            } else {
                println!("Session not found: {id}");
            }
        }
    }
    Ok(())
}
