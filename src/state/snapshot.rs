//! Serializable read-back view of the clock

use serde::{Deserialize, Serialize};

use super::{ClockEngine, GameState, PlayerState, Position};

/// One player's clock as the display sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub position: Position,
    pub state: PlayerState,
    pub seconds_remaining: f64,
    /// Remaining time rendered as `m:ss`
    pub display: String,
}

/// Whole-clock view, re-read after every mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClockSnapshot {
    pub game_state: GameState,
    pub active: Option<Position>,
    pub top: PlayerSnapshot,
    pub bottom: PlayerSnapshot,
}

impl ClockSnapshot {
    pub fn from_engine(engine: &ClockEngine) -> Self {
        let player = |position| {
            let player = engine.player_at(position);
            PlayerSnapshot {
                position,
                state: player.state,
                seconds_remaining: player.seconds_remaining(),
                display: player.display(),
            }
        };

        Self {
            game_state: engine.game_state(),
            active: engine.active_player().map(|p| p.position()),
            top: player(Position::Top),
            bottom: player(Position::Bottom),
        }
    }

    pub fn player(&self, position: Position) -> &PlayerSnapshot {
        match position {
            Position::Top => &self.top,
            Position::Bottom => &self.bottom,
        }
    }

    /// The position whose flag has fallen, if the game is over
    pub fn loser(&self) -> Option<Position> {
        if self.game_state == GameState::Finished {
            self.active
        } else {
            None
        }
    }
}
