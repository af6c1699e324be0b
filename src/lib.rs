//! Haus Clock - A two-player countdown chess clock
//! 
//! This library provides the clock state machine, the shared state a
//! display drives it through, and a local HTTP control surface.

pub mod config;
pub mod state;
pub mod api;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::{ClockConfig, Config};
pub use state::{AppState, ClockEngine, GameState, Position};
pub use api::create_router;
pub use utils::{format_seconds, shutdown_signal};
