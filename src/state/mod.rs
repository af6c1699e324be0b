//! State management module
//! 
//! This module contains the clock state machine and the shared state
//! that the control surface and background tasks operate on.

pub mod player;
pub mod game_state;
pub mod engine;
pub mod snapshot;
pub mod app_state;

// Re-export main types
pub use player::{Player, PlayerState, Position};
pub use game_state::GameState;
pub use engine::ClockEngine;
pub use snapshot::{ClockSnapshot, PlayerSnapshot};
pub use app_state::AppState;
