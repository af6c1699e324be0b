//! Player identity and per-player clock state

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed identity of a player's control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    /// Both positions, in slot order
    pub const ALL: [Position; 2] = [Position::Top, Position::Bottom];

    /// The position across the board
    pub fn opposite(self) -> Self {
        match self {
            Position::Top => Position::Bottom,
            Position::Bottom => Position::Top,
        }
    }

    /// Slot of this position in a two-element player table
    pub fn index(self) -> usize {
        match self {
            Position::Top => 0,
            Position::Bottom => 1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a player's clock is the one that runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerState {
    Active,
    Waiting,
}

/// A single player's clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    position: Position,
    pub state: PlayerState,
    pub remaining: Duration,
}

impl Player {
    /// Create a waiting player with a full budget
    pub fn new(position: Position, remaining: Duration) -> Self {
        Self {
            position,
            state: PlayerState::Waiting,
            remaining,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_active(&self) -> bool {
        self.state == PlayerState::Active
    }

    /// Remaining time in seconds
    pub fn seconds_remaining(&self) -> f64 {
        self.remaining.as_secs_f64()
    }

    /// Remaining time rendered as `m:ss`
    pub fn display(&self) -> String {
        crate::utils::format_seconds(self.seconds_remaining())
    }

    /// Take `delta` off the budget, stopping at zero.
    ///
    /// Returns true when the budget is exhausted.
    pub(crate) fn consume(&mut self, delta: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(delta);
        self.remaining.is_zero()
    }
}
