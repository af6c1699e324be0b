//! Coarse phase of the match

use serde::{Deserialize, Serialize};

/// Game phase: no time elapses while paused, the active clock runs while
/// active, and a finished game has had a flag fall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    Paused,
    Active,
    Finished,
}

impl GameState {
    pub fn as_str(self) -> &'static str {
        match self {
            GameState::Paused => "paused",
            GameState::Active => "active",
            GameState::Finished => "finished",
        }
    }

    /// Check if ticks advance the clock in this phase
    pub fn is_running(self) -> bool {
        self == GameState::Active
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
