//! Application state and key handling.
//!
//! `AppState` is the root state container: it owns the session store and
//! the timer engine, and every mutation flows through its handlers. The
//! draw pass runs after each handled action, so the screen always reflects
//! the most recently committed mutation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use focusfuel_core::session::DEFAULT_TIME;
use focusfuel_core::storage::database::TIMER_ENGINE_KEY;
use focusfuel_core::{
    Config, Database, EnergyLevel, Event, PriorityLevel, SessionStore, TimerEngine,
};

use crate::tui::event::{Action, TickGuard};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Subject,
    Energy,
    Priority,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Subject => FormField::Energy,
            FormField::Energy => FormField::Priority,
            FormField::Priority => FormField::Subject,
        }
    }
}

/// Draft state of the session entry form.
pub struct SessionForm {
    pub subject: String,
    pub energy: EnergyLevel,
    pub priority: PriorityLevel,
    pub field: FormField,
}

impl Default for SessionForm {
    fn default() -> Self {
        Self {
            subject: String::new(),
            energy: EnergyLevel::Medium,
            priority: PriorityLevel::Medium,
            field: FormField::Subject,
        }
    }
}

pub struct AppState {
    pub store: SessionStore,
    pub timer: TimerEngine,
    pub input_mode: InputMode,
    pub form: SessionForm,
    pub selected: usize,
    pub notice: Option<String>,
    pub should_quit: bool,
    db: Database,
    action_tx: mpsc::UnboundedSender<Action>,
    tick: Option<TickGuard>,
}

fn load_engine(db: &Database, config: &Config) -> TimerEngine {
    if let Ok(Some(json)) = db.kv_get(TIMER_ENGINE_KEY) {
        if let Ok(engine) = serde_json::from_str::<TimerEngine>(&json) {
            return engine;
        }
    }
    TimerEngine::with_durations(config.focus_secs(), config.break_secs())
}

impl AppState {
    pub fn new(
        store: SessionStore,
        timer: TimerEngine,
        db: Database,
        action_tx: mpsc::UnboundedSender<Action>,
        show_help: bool,
    ) -> Self {
        Self {
            store,
            timer,
            input_mode: if show_help {
                InputMode::Help
            } else {
                InputMode::Normal
            },
            form: SessionForm::default(),
            selected: 0,
            notice: None,
            should_quit: false,
            db,
            action_tx,
            tick: None,
        }
    }

    /// Open storage and rehydrate everything.
    pub fn load(action_tx: mpsc::UnboundedSender<Action>) -> anyhow::Result<Self> {
        let config = Config::load_or_default();
        let db = Database::open()?;
        let store = SessionStore::open()?;
        let timer = load_engine(&db, &config);
        Ok(Self::new(
            store,
            timer,
            db,
            action_tx,
            config.ui.show_help_on_start,
        ))
    }

    // ── Action handling ──────────────────────────────────────────────

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.notice = None;

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        match self.input_mode {
            InputMode::Help => {
                self.input_mode = InputMode::Normal;
            }
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => self.handle_editing_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('?') => self.input_mode = InputMode::Help,
            KeyCode::Char('a') => {
                self.form.field = FormField::Subject;
                self.input_mode = InputMode::Editing;
            }
            KeyCode::Char('j') | KeyCode::Down => self.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.select_prev(),
            KeyCode::Char(' ') => self.complete_selected(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Enter => self.link_selected(),
            KeyCode::Char('u') => {
                self.timer.unlink();
                self.save_timer();
            }
            KeyCode::Char('s') => self.toggle_timer(),
            KeyCode::Char('r') => self.reset_timer(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.input_mode = InputMode::Normal,
            KeyCode::Tab => self.form.field = self.form.field.next(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Backspace if self.form.field == FormField::Subject => {
                self.form.subject.pop();
            }
            KeyCode::Char(c) if self.form.field == FormField::Subject => {
                self.form.subject.push(c);
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => match self.form.field {
                FormField::Energy => self.form.energy = self.form.energy.cycle(),
                FormField::Priority => self.form.priority = self.form.priority.cycle(),
                FormField::Subject => {}
            },
            _ => {}
        }
    }

    /// Advance the countdown. Called once per second by the tick task.
    pub fn on_tick(&mut self) {
        let Some(event) = self.timer.tick() else {
            return;
        };
        // Period expired: the engine deactivated itself, so release the
        // tick source before anything else.
        self.tick = None;
        // TODO: audible cue on expiry; rodio is the likely route.

        match event {
            Event::FocusFinished {
                completed_session, ..
            } => {
                if let Some(id) = completed_session {
                    if let Err(e) = self.store.complete(&id) {
                        self.notice = Some(format!("storage error: {e}"));
                    }
                }
                if self.notice.is_none() {
                    self.notice = Some("Focus period complete - time for a break".to_string());
                }
            }
            Event::BreakFinished { .. } => {
                self.notice = Some("Break over - ready to focus".to_string());
            }
            _ => {}
        }
        self.save_timer();
    }

    pub fn quit(&mut self) {
        self.tick = None;
        self.save_timer();
        self.should_quit = true;
    }

    // ── Session mutations ────────────────────────────────────────────

    fn submit_form(&mut self) {
        // Empty subject: silently rejected, draft unchanged.
        if self.form.subject.trim().is_empty() {
            return;
        }
        let subject = self.form.subject.trim().to_string();
        match self
            .store
            .add(subject, DEFAULT_TIME, self.form.energy, self.form.priority)
        {
            Ok(_) => {
                self.form.subject.clear();
                self.form.energy = EnergyLevel::Medium;
                self.form.field = FormField::Subject;
            }
            Err(e) => self.notice = Some(format!("storage error: {e}")),
        }
    }

    fn complete_selected(&mut self) {
        let Some(session) = self.store.sessions().get(self.selected) else {
            return;
        };
        // One-way: a completed session stays completed.
        if session.completed {
            return;
        }
        let id = session.id.clone();
        if let Err(e) = self.store.complete(&id) {
            self.notice = Some(format!("storage error: {e}"));
        }
    }

    fn delete_selected(&mut self) {
        let Some(session) = self.store.sessions().get(self.selected) else {
            return;
        };
        let id = session.id.clone();
        if let Err(e) = self.store.delete(&id) {
            self.notice = Some(format!("storage error: {e}"));
        }
        self.clamp_selection();
    }

    fn link_selected(&mut self) {
        let Some(session) = self.store.sessions().get(self.selected) else {
            return;
        };
        self.timer.link(session.id.clone());
        self.save_timer();
    }

    // ── Timer control ────────────────────────────────────────────────

    fn toggle_timer(&mut self) {
        self.timer.toggle();
        // The guard is the only tick source; replacing it drops (and
        // aborts) any previous one.
        self.tick = if self.timer.is_active() {
            Some(TickGuard::spawn(self.action_tx.clone()))
        } else {
            None
        };
        self.save_timer();
    }

    fn reset_timer(&mut self) {
        self.timer.reset();
        self.tick = None;
        self.save_timer();
    }

    fn save_timer(&mut self) {
        let result = serde_json::to_string(&self.timer)
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                self.db
                    .kv_set(TIMER_ENGINE_KEY, &json)
                    .map_err(anyhow::Error::from)
            });
        if let Err(e) = result {
            self.notice = Some(format!("storage error: {e}"));
        }
    }

    // ── Selection ────────────────────────────────────────────────────

    fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state(timer: TimerEngine) -> AppState {
        let (tx, _rx) = mpsc::unbounded_channel();
        let store = SessionStore::open_memory().unwrap();
        let db = Database::open_memory().unwrap();
        AppState::new(store, timer, db, tx, false)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_subject(state: &mut AppState, text: &str) {
        state.handle_key(key(KeyCode::Char('a')));
        for c in text.chars() {
            state.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[tokio::test]
    async fn empty_subject_submission_is_rejected() {
        let mut state = test_state(TimerEngine::new());
        state.handle_key(key(KeyCode::Char('a')));
        state.handle_key(key(KeyCode::Enter));
        assert!(state.store.is_empty());
        assert_eq!(state.input_mode, InputMode::Editing);
    }

    #[tokio::test]
    async fn submit_adds_session_and_resets_draft() {
        let mut state = test_state(TimerEngine::new());
        type_subject(&mut state, "Math");
        // Cycle energy to High: Medium -> High.
        state.handle_key(key(KeyCode::Tab));
        state.handle_key(key(KeyCode::Char(' ')));
        state.handle_key(key(KeyCode::Enter));

        assert_eq!(state.store.len(), 1);
        let session = &state.store.sessions()[0];
        assert_eq!(session.subject, "Math");
        assert_eq!(session.energy, EnergyLevel::High);
        assert_eq!(session.time, DEFAULT_TIME);
        assert!(!session.completed);

        // Draft resets: subject cleared, energy back to Medium.
        assert!(state.form.subject.is_empty());
        assert_eq!(state.form.energy, EnergyLevel::Medium);
    }

    #[tokio::test]
    async fn complete_is_one_way_from_the_list() {
        let mut state = test_state(TimerEngine::new());
        type_subject(&mut state, "Math");
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Esc));

        state.handle_key(key(KeyCode::Char(' ')));
        assert!(state.store.sessions()[0].completed);

        // A second press does not un-complete.
        state.handle_key(key(KeyCode::Char(' ')));
        assert!(state.store.sessions()[0].completed);
    }

    #[tokio::test]
    async fn delete_clamps_selection() {
        let mut state = test_state(TimerEngine::new());
        for subject in ["Math", "History"] {
            type_subject(&mut state, subject);
            state.handle_key(key(KeyCode::Enter));
            state.handle_key(key(KeyCode::Esc));
        }
        state.handle_key(key(KeyCode::Char('j')));
        assert_eq!(state.selected, 1);

        state.handle_key(key(KeyCode::Char('d')));
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.selected, 0);
        assert_eq!(state.store.sessions()[0].subject, "Math");
    }

    #[tokio::test]
    async fn focus_expiry_completes_linked_session_and_releases_tick() {
        let mut state = test_state(TimerEngine::with_durations(2, 300));
        type_subject(&mut state, "Math");
        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Esc));

        state.handle_key(key(KeyCode::Enter)); // link selected
        state.handle_key(key(KeyCode::Char('s'))); // start
        assert!(state.timer.is_active());
        assert!(state.tick.is_some());

        state.on_tick();
        assert!(state.tick.is_some());
        state.on_tick(); // expiry

        assert!(!state.timer.is_active());
        assert!(state.tick.is_none());
        assert!(state.store.sessions()[0].completed);
        assert_eq!(
            state.timer.mode(),
            focusfuel_core::TimerMode::Break
        );
        assert_eq!(state.timer.remaining_secs(), 300);
    }

    #[tokio::test]
    async fn pause_and_reset_release_the_tick_source() {
        let mut state = test_state(TimerEngine::new());
        state.handle_key(key(KeyCode::Char('s')));
        assert!(state.tick.is_some());

        state.handle_key(key(KeyCode::Char('s')));
        assert!(state.tick.is_none());
        assert!(!state.timer.is_active());

        state.handle_key(key(KeyCode::Char('s')));
        state.handle_key(key(KeyCode::Char('r')));
        assert!(state.tick.is_none());
        assert_eq!(state.timer.remaining_secs(), 1500);
    }
}
