//! # FocusFuel Core Library
//!
//! This library provides the core business logic for the FocusFuel study
//! planner. It implements a CLI-first philosophy where all operations are
//! available via a standalone CLI binary, with the terminal UI being a thin
//! presentation layer over the same core library.
//!
//! ## Architecture
//!
//! - **Session Store**: Ordered collection of planned study sessions,
//!   written through to a key-value blob store on every mutation
//! - **Timer Engine**: A tick-driven Focus/Break state machine that requires
//!   the caller to invoke `tick()` once per second while active
//! - **Suggestion Engine**: A pure function over the session collection
//! - **Storage**: SQLite-based key-value blob store and TOML configuration
//!
//! ## Key Components
//!
//! - [`SessionStore`]: Session collection with write-through persistence
//! - [`TimerEngine`]: Core timer state machine
//! - [`Database`]: Key-value blob storage
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod session;
pub mod storage;
pub mod store;
pub mod suggest;
pub mod timer;

pub use error::{ConfigError, StorageError};
pub use events::Event;
pub use session::{EnergyLevel, PriorityLevel, Session};
pub use storage::{Config, Database};
pub use store::SessionStore;
pub use suggest::{suggest, Suggestion};
pub use timer::{format_mmss, TimerEngine, TimerMode};
