//! Session record types.
//!
//! A session is a planned unit of study work. Records are created once,
//! flipped to completed (one-way), or deleted; no other field is ever
//! edited in place.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Energy level attached to a planned session.
///
/// Persisted blobs written by older schemas may carry values outside the
/// three-level scale; those deserialize to [`EnergyLevel::Unknown`] instead
/// of rejecting the whole collection. `Unknown` is never offered by any
/// input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum EnergyLevel {
    Low,
    #[default]
    Medium,
    High,
    Unknown,
}

impl<'de> Deserialize<'de> for EnergyLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Low" => EnergyLevel::Low,
            "Medium" => EnergyLevel::Medium,
            "High" => EnergyLevel::High,
            _ => EnergyLevel::Unknown,
        })
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EnergyLevel::Low => "Low",
            EnergyLevel::Medium => "Medium",
            EnergyLevel::High => "High",
            EnergyLevel::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl EnergyLevel {
    /// Next selectable level, wrapping. `Unknown` re-enters the scale at
    /// `Low` so drifted records become editable again.
    pub fn cycle(self) -> Self {
        match self {
            EnergyLevel::Low => EnergyLevel::Medium,
            EnergyLevel::Medium => EnergyLevel::High,
            EnergyLevel::High => EnergyLevel::Low,
            EnergyLevel::Unknown => EnergyLevel::Low,
        }
    }
}

/// Priority attached to a planned session. Same drift tolerance as
/// [`EnergyLevel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum PriorityLevel {
    Low,
    #[default]
    Medium,
    High,
    Unknown,
}

impl<'de> Deserialize<'de> for PriorityLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "Low" => PriorityLevel::Low,
            "Medium" => PriorityLevel::Medium,
            "High" => PriorityLevel::High,
            _ => PriorityLevel::Unknown,
        })
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PriorityLevel::Low => "Low",
            PriorityLevel::Medium => "Medium",
            PriorityLevel::High => "High",
            PriorityLevel::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

impl PriorityLevel {
    pub fn cycle(self) -> Self {
        match self {
            PriorityLevel::Low => PriorityLevel::Medium,
            PriorityLevel::Medium => PriorityLevel::High,
            PriorityLevel::High => PriorityLevel::Low,
            PriorityLevel::Unknown => PriorityLevel::Low,
        }
    }
}

/// A planned study session.
///
/// `time` is free-form text ("25", "an hour"); the timer never consumes it.
/// Fields default individually so a blob written by an older schema loads
/// record-by-record instead of being rejected wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    #[serde(default = "fresh_id")]
    pub id: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default = "default_time")]
    pub time: String,
    #[serde(default)]
    pub energy: EnergyLevel,
    #[serde(default)]
    pub priority: PriorityLevel,
    #[serde(default)]
    pub completed: bool,
}

/// Default planned duration shown in the entry form.
pub const DEFAULT_TIME: &str = "25";

fn default_time() -> String {
    DEFAULT_TIME.to_string()
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

impl Session {
    /// Create a new incomplete session with a fresh unique id.
    pub fn new(
        subject: impl Into<String>,
        time: impl Into<String>,
        energy: EnergyLevel,
        priority: PriorityLevel,
    ) -> Self {
        Self {
            id: fresh_id(),
            subject: subject.into(),
            time: time.into(),
            energy,
            priority,
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_incomplete_with_unique_id() {
        let a = Session::new("Math", "25", EnergyLevel::High, PriorityLevel::Medium);
        let b = Session::new("Math", "25", EnergyLevel::High, PriorityLevel::Medium);
        assert!(!a.completed);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn session_roundtrip() {
        let session = Session::new("History", "40", EnergyLevel::Low, PriorityLevel::High);
        let json = serde_json::to_string(&session).unwrap();
        let decoded: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, session.id);
        assert_eq!(decoded.subject, "History");
        assert_eq!(decoded.time, "40");
        assert_eq!(decoded.energy, EnergyLevel::Low);
        assert_eq!(decoded.priority, PriorityLevel::High);
        assert!(!decoded.completed);
    }

    #[test]
    fn unrecognized_energy_becomes_unknown() {
        let json = r#"{"id":"x","subject":"Bio","time":"25","energy":"Extreme","priority":"Medium","completed":false}"#;
        let decoded: Session = serde_json::from_str(json).unwrap();
        assert_eq!(decoded.energy, EnergyLevel::Unknown);
        assert_eq!(decoded.priority, PriorityLevel::Medium);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let json = r#"{"subject":"Chem"}"#;
        let decoded: Session = serde_json::from_str(json).unwrap();
        assert!(!decoded.id.is_empty());
        assert_eq!(decoded.time, DEFAULT_TIME);
        assert_eq!(decoded.energy, EnergyLevel::Medium);
        assert!(!decoded.completed);
    }

    #[test]
    fn cycle_covers_the_scale() {
        let mut level = EnergyLevel::Low;
        level = level.cycle();
        assert_eq!(level, EnergyLevel::Medium);
        level = level.cycle();
        assert_eq!(level, EnergyLevel::High);
        level = level.cycle();
        assert_eq!(level, EnergyLevel::Low);
        assert_eq!(EnergyLevel::Unknown.cycle(), EnergyLevel::Low);
    }
}
