//! Session store.
//!
//! An ordered collection of [`Session`] records with write-through
//! persistence: every mutation serializes the full collection as a JSON
//! array to the kv blob store under a fixed key. Rehydration fails soft -
//! an absent, empty, or malformed blob yields an empty collection.

use crate::error::StorageError;
use crate::session::{EnergyLevel, PriorityLevel, Session};
use crate::storage::database::SESSIONS_KEY;
use crate::storage::Database;

pub struct SessionStore {
    sessions: Vec<Session>,
    db: Database,
}

impl SessionStore {
    /// Open the default database and rehydrate.
    ///
    /// # Errors
    /// Returns an error only if the database itself cannot be opened; a
    /// missing or malformed session blob is not an error.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open()?))
    }

    /// Rehydrate from an already-open database.
    pub fn with_database(db: Database) -> Self {
        let sessions = match db.kv_get(SESSIONS_KEY) {
            Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_default(),
            _ => Vec::new(),
        };
        Self { sessions, db }
    }

    /// In-memory store (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        Ok(Self::with_database(Database::open_memory()?))
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Session> {
        self.sessions.iter().find(|s| s.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.sessions.iter().filter(|s| s.completed).count()
    }

    /// Completion percentage in [0, 100]. Zero for an empty collection.
    pub fn progress_pct(&self) -> f64 {
        if self.sessions.is_empty() {
            return 0.0;
        }
        self.completed_count() as f64 / self.sessions.len() as f64 * 100.0
    }

    /// First incomplete session in insertion order.
    pub fn next_incomplete(&self) -> Option<&Session> {
        self.sessions.iter().find(|s| !s.completed)
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a new incomplete session. The caller guarantees a non-empty
    /// subject; there is no error path for invalid input.
    ///
    /// # Errors
    /// Returns an error if the collection cannot be persisted.
    pub fn add(
        &mut self,
        subject: impl Into<String>,
        time: impl Into<String>,
        energy: EnergyLevel,
        priority: PriorityLevel,
    ) -> Result<Session, StorageError> {
        let session = Session::new(subject, time, energy, priority);
        self.sessions.push(session.clone());
        self.persist()?;
        Ok(session)
    }

    /// Mark the matching session completed. One-way; idempotent. Unknown
    /// ids are a silent no-op - the return value reports whether a record
    /// matched, which is not an error condition.
    pub fn complete(&mut self, id: &str) -> Result<bool, StorageError> {
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(session) => {
                session.completed = true;
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the matching session. Unknown ids are a silent no-op.
    pub fn delete(&mut self, id: &str) -> Result<bool, StorageError> {
        let before = self.sessions.len();
        self.sessions.retain(|s| s.id != id);
        if self.sessions.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.sessions)?;
        self.db.kv_set(SESSIONS_KEY, &json)
    }
}
