//! Suggestion engine.
//!
//! A pure function over the session collection: the next incomplete
//! session's energy level picks one of four fixed suggestions. Recomputed
//! on every render, never persisted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::{EnergyLevel, Session};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// Every session is completed, or there are none.
    AllCaughtUp,
    /// Next session is tagged low energy.
    EasyReview,
    /// Next session is tagged medium energy.
    SteadyProgress,
    /// Next session is tagged high energy.
    HardestProblem,
    /// Next session carries a drifted energy value from an older blob.
    PlanNextMove,
}

impl Suggestion {
    pub fn text(&self) -> &'static str {
        match self {
            Suggestion::AllCaughtUp => "All caught up! Great job!",
            Suggestion::EasyReview => "Feeling low energy? Try a 5-minute easy review.",
            Suggestion::SteadyProgress => "Good time for some steady progress.",
            Suggestion::HardestProblem => "High energy! Tackle the hardest problem now.",
            Suggestion::PlanNextMove => "Plan your next move!",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Suggest the next action for the given collection.
pub fn suggest(sessions: &[Session]) -> Suggestion {
    match sessions.iter().find(|s| !s.completed) {
        None => Suggestion::AllCaughtUp,
        Some(next) => match next.energy {
            EnergyLevel::Low => Suggestion::EasyReview,
            EnergyLevel::Medium => Suggestion::SteadyProgress,
            EnergyLevel::High => Suggestion::HardestProblem,
            EnergyLevel::Unknown => Suggestion::PlanNextMove,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::PriorityLevel;

    fn session(energy: EnergyLevel, completed: bool) -> Session {
        let mut s = Session::new("Subject", "25", energy, PriorityLevel::Medium);
        s.completed = completed;
        s
    }

    #[test]
    fn empty_collection_is_caught_up() {
        assert_eq!(suggest(&[]), Suggestion::AllCaughtUp);
    }

    #[test]
    fn all_completed_is_caught_up() {
        let sessions = vec![
            session(EnergyLevel::High, true),
            session(EnergyLevel::Low, true),
        ];
        assert_eq!(suggest(&sessions), Suggestion::AllCaughtUp);
    }

    #[test]
    fn first_incomplete_wins_in_collection_order() {
        let sessions = vec![
            session(EnergyLevel::High, true),
            session(EnergyLevel::Low, false),
            session(EnergyLevel::High, false),
        ];
        assert_eq!(suggest(&sessions), Suggestion::EasyReview);
    }

    #[test]
    fn each_energy_level_maps_to_its_text() {
        assert_eq!(
            suggest(&[session(EnergyLevel::Low, false)]).text(),
            "Feeling low energy? Try a 5-minute easy review."
        );
        assert_eq!(
            suggest(&[session(EnergyLevel::Medium, false)]).text(),
            "Good time for some steady progress."
        );
        assert_eq!(
            suggest(&[session(EnergyLevel::High, false)]).text(),
            "High energy! Tackle the hardest problem now."
        );
    }

    #[test]
    fn drifted_energy_falls_back() {
        let json = r#"[{"id":"x","subject":"Bio","time":"25","energy":"Turbo","priority":"Low","completed":false}]"#;
        let sessions: Vec<Session> = serde_json::from_str(json).unwrap();
        assert_eq!(suggest(&sessions).text(), "Plan your next move!");
    }
}
