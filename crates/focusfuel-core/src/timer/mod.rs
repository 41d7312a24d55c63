mod engine;

pub use engine::{format_mmss, TimerEngine, TimerMode, BREAK_SECS, FOCUS_SECS};
