//! Event plumbing for the TUI.
//!
//! A dedicated thread reads terminal events and forwards them as actions;
//! the one-second countdown tick is a separate scoped tokio task owned by
//! [`TickGuard`]. Both feed the same channel, so the single receive loop
//! serializes every state mutation.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Everything the app loop reacts to.
#[derive(Debug)]
pub enum Action {
    Key(KeyEvent),
    Tick,
    Resize,
}

pub struct EventHandler {
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        // Dedicated thread for blocking terminal reads.
        let tx = action_tx.clone();
        std::thread::spawn(move || {
            let poll_timeout = Duration::from_millis(200);
            loop {
                if event::poll(poll_timeout).unwrap_or(false) {
                    let action = match event::read() {
                        Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                            Some(Action::Key(key))
                        }
                        Ok(Event::Resize(_, _)) => Some(Action::Resize),
                        _ => None,
                    };
                    if let Some(action) = action {
                        if tx.send(action).is_err() {
                            break; // Channel closed, exit thread.
                        }
                    }
                } else if tx.is_closed() {
                    break;
                }
            }
        });

        Self {
            action_tx,
            action_rx,
        }
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    pub async fn next(&mut self) -> Action {
        // A sender half lives in `self`, so the channel cannot close.
        self.action_rx.recv().await.unwrap_or(Action::Resize)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Scoped ownership of the one-second tick task.
///
/// The countdown must never have more than one tick source, so the task is
/// tied to this guard: dropping it aborts the task. The app state holds at
/// most one guard and drops it on pause, reset, period expiry, and
/// teardown.
pub struct TickGuard {
    handle: tokio::task::JoinHandle<()>,
}

impl TickGuard {
    pub fn spawn(tx: mpsc::UnboundedSender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately; consume it so the
            // countdown starts a full second after activation.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Action::Tick).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for TickGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
