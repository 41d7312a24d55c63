//! Timer events.
//!
//! Every timer state change produces an [`Event`]. Surfaces print them as
//! tagged JSON; the TUI routes `FocusFinished` into the session store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::TimerMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    /// A focus period ran down to zero. Carries the linked session id, if
    /// any, so the owning surface can complete it in the session store.
    FocusFinished {
        completed_session: Option<String>,
        at: DateTime<Utc>,
    },
    /// A break period ran down to zero.
    BreakFinished {
        at: DateTime<Utc>,
    },
    /// Full state snapshot for polling surfaces.
    StateSnapshot {
        mode: TimerMode,
        remaining_secs: u64,
        active: bool,
        linked_session: Option<String>,
        display: String,
        at: DateTime<Utc>,
    },
}
