//! Timer engine implementation.
//!
//! The timer engine is a tick-driven state machine. It does not use internal
//! threads or wall-clock reads - the caller invokes `tick()` once per second
//! while the timer is active.
//!
//! ## State
//!
//! Two modes {Focus, Break} crossed with a run flag give four observable
//! states: Focus-active, Focus-paused, Break-active, Break-paused. The
//! initial state is Focus-paused with the full focus duration remaining.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = TimerEngine::new();
//! engine.toggle();
//! // Once per second while active:
//! if let Some(event) = engine.tick() {
//!     // Focus or break period finished.
//! }
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

/// Canonical focus duration in seconds.
pub const FOCUS_SECS: u64 = 25 * 60;

/// Canonical break duration in seconds.
pub const BREAK_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimerMode {
    Focus,
    Break,
}

/// Core timer engine.
///
/// Counts whole seconds - the caller owns the tick cadence. Serializes to
/// JSON for the kv store so the CLI and TUI share one timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    mode: TimerMode,
    remaining_secs: u64,
    active: bool,
    /// Weak reference to the session auto-completed when a focus period
    /// expires. Lookup only; the store owns the record.
    #[serde(default)]
    linked_session: Option<String>,
    #[serde(default = "default_focus_secs")]
    focus_secs: u64,
    #[serde(default = "default_break_secs")]
    break_secs: u64,
}

fn default_focus_secs() -> u64 {
    FOCUS_SECS
}

fn default_break_secs() -> u64 {
    BREAK_SECS
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerEngine {
    /// Create an engine with the canonical 25/5 minute durations.
    ///
    /// Starts Focus-paused with the full focus duration remaining.
    pub fn new() -> Self {
        Self::with_durations(FOCUS_SECS, BREAK_SECS)
    }

    /// Create an engine with configured durations, in seconds.
    ///
    /// Durations clamp to at least one second; a zero-length period would
    /// re-expire on every tick.
    pub fn with_durations(focus_secs: u64, break_secs: u64) -> Self {
        let focus_secs = focus_secs.max(1);
        let break_secs = break_secs.max(1);
        Self {
            mode: TimerMode::Focus,
            remaining_secs: focus_secs,
            active: false,
            linked_session: None,
            focus_secs,
            break_secs,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn linked_session(&self) -> Option<&str> {
        self.linked_session.as_deref()
    }

    /// Remaining time rendered as `MM:SS`.
    pub fn display(&self) -> String {
        format_mmss(self.remaining_secs)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            active: self.active,
            linked_session: self.linked_session.clone(),
            display: self.display(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Flip the run flag. Mode and remaining time are untouched.
    pub fn toggle(&mut self) -> Event {
        self.active = !self.active;
        if self.active {
            Event::TimerStarted {
                mode: self.mode,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        } else {
            Event::TimerPaused {
                mode: self.mode,
                remaining_secs: self.remaining_secs,
                at: Utc::now(),
            }
        }
    }

    /// Stop and restore the canonical duration for the current mode.
    /// Does not change mode.
    pub fn reset(&mut self) -> Event {
        self.active = false;
        self.remaining_secs = self.duration_for(self.mode);
        Event::TimerReset {
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            at: Utc::now(),
        }
    }

    /// Select the session to auto-complete when the focus period expires.
    pub fn link(&mut self, session_id: impl Into<String>) {
        self.linked_session = Some(session_id.into());
    }

    pub fn unlink(&mut self) {
        self.linked_session = None;
    }

    /// Advance the countdown by one second.
    ///
    /// No-op while paused. When the countdown reaches zero the expiry
    /// transition happens atomically within the same call: the engine
    /// deactivates, switches mode, and reloads the next duration, so a
    /// second tick on the same zero is impossible. Returns the period-
    /// finished event at expiry; the caller routes any carried session id
    /// into the session store.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        if self.remaining_secs > 0 {
            return None;
        }
        Some(self.expire())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn expire(&mut self) -> Event {
        self.active = false;
        match self.mode {
            TimerMode::Focus => {
                self.mode = TimerMode::Break;
                self.remaining_secs = self.break_secs;
                Event::FocusFinished {
                    // The link survives expiry; completing an already
                    // completed session later is an idempotent no-op.
                    completed_session: self.linked_session.clone(),
                    at: Utc::now(),
                }
            }
            TimerMode::Break => {
                self.mode = TimerMode::Focus;
                self.remaining_secs = self.focus_secs;
                Event::BreakFinished { at: Utc::now() }
            }
        }
    }

    fn duration_for(&self, mode: TimerMode) -> u64 {
        match mode {
            TimerMode::Focus => self.focus_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

/// Render seconds as zero-padded `MM:SS`.
///
/// The display is defined for up to 99 minutes; larger values clamp to
/// `99:59` rather than widening the field.
pub fn format_mmss(secs: u64) -> String {
    let secs = secs.min(99 * 60 + 59);
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_focus_paused_full_duration() {
        let engine = TimerEngine::new();
        assert_eq!(engine.mode(), TimerMode::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_active());
        assert!(engine.linked_session().is_none());
    }

    #[test]
    fn toggle_flips_run_flag_only() {
        let mut engine = TimerEngine::new();
        assert!(matches!(engine.toggle(), Event::TimerStarted { .. }));
        assert!(engine.is_active());
        assert_eq!(engine.remaining_secs(), 1500);

        assert!(matches!(engine.toggle(), Event::TimerPaused { .. }));
        assert!(!engine.is_active());
        assert_eq!(engine.remaining_secs(), 1500);
        assert_eq!(engine.mode(), TimerMode::Focus);
    }

    #[test]
    fn tick_is_inert_while_paused() {
        let mut engine = TimerEngine::new();
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn focus_run_ends_in_break_and_completes_linked_session() {
        let mut engine = TimerEngine::new();
        engine.link("abc-123");
        engine.toggle();

        let mut finished = None;
        for _ in 0..1500 {
            if let Some(event) = engine.tick() {
                finished = Some(event);
            }
        }

        match finished {
            Some(Event::FocusFinished { completed_session, .. }) => {
                assert_eq!(completed_session.as_deref(), Some("abc-123"));
            }
            other => panic!("expected FocusFinished, got {other:?}"),
        }
        assert_eq!(engine.mode(), TimerMode::Break);
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_active());
        // The link survives expiry.
        assert_eq!(engine.linked_session(), Some("abc-123"));
    }

    #[test]
    fn break_run_ends_back_in_focus() {
        let mut engine = TimerEngine::with_durations(1500, 3);
        engine.toggle();
        for _ in 0..1500 {
            engine.tick();
        }
        assert_eq!(engine.mode(), TimerMode::Break);

        engine.toggle();
        assert!(engine.tick().is_none());
        assert!(engine.tick().is_none());
        let event = engine.tick();
        assert!(matches!(event, Some(Event::BreakFinished { .. })));
        assert_eq!(engine.mode(), TimerMode::Focus);
        assert_eq!(engine.remaining_secs(), 1500);
        assert!(!engine.is_active());
    }

    #[test]
    fn expiry_cannot_refire_on_the_same_zero() {
        let mut engine = TimerEngine::with_durations(1, 300);
        engine.toggle();
        assert!(matches!(engine.tick(), Some(Event::FocusFinished { .. })));
        // Deactivated with the break duration loaded; further ticks no-op.
        assert!(engine.tick().is_none());
        assert_eq!(engine.remaining_secs(), 300);
    }

    #[test]
    fn reset_restores_current_mode_duration() {
        let mut engine = TimerEngine::with_durations(1500, 300);
        engine.toggle();
        for _ in 0..1500 {
            engine.tick();
        }
        // Now Break-paused at 300; burn some of it down.
        engine.toggle();
        for _ in 0..258 {
            engine.tick();
        }
        assert_eq!(engine.remaining_secs(), 42);

        engine.toggle(); // pause
        engine.reset();
        assert_eq!(engine.mode(), TimerMode::Break);
        assert_eq!(engine.remaining_secs(), 300);
        assert!(!engine.is_active());
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = TimerEngine::new();
        match engine.snapshot() {
            Event::StateSnapshot {
                mode,
                remaining_secs,
                active,
                display,
                ..
            } => {
                assert_eq!(mode, TimerMode::Focus);
                assert_eq!(remaining_secs, 1500);
                assert!(!active);
                assert_eq!(display, "25:00");
            }
            _ => panic!("expected StateSnapshot"),
        }
    }

    #[test]
    fn engine_roundtrips_through_json() {
        let mut engine = TimerEngine::new();
        engine.link("id-1");
        engine.toggle();
        engine.tick();

        let json = serde_json::to_string(&engine).unwrap();
        let decoded: TimerEngine = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.mode(), TimerMode::Focus);
        assert_eq!(decoded.remaining_secs(), 1499);
        assert!(decoded.is_active());
        assert_eq!(decoded.linked_session(), Some("id-1"));
    }

    #[test]
    fn format_mmss_pads_and_clamps() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(59), "00:59");
        assert_eq!(format_mmss(60), "01:00");
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(5999), "99:59");
        assert_eq!(format_mmss(6000), "99:59");
        assert_eq!(format_mmss(u64::MAX), "99:59");
    }
}
