//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::ClockSnapshot;

/// Response to every gesture endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Game state after the gesture, lowercase
    pub status: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub clock: ClockSnapshot,
}

impl ApiResponse {
    /// Create a response carrying the clock after a gesture
    pub fn new(message: String, clock: ClockSnapshot) -> Self {
        Self {
            status: clock.game_state.to_string(),
            message,
            timestamp: Utc::now(),
            clock,
        }
    }
}

/// Full status including configuration and server metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub clock: ClockSnapshot,
    pub starting_seconds: f64,
    pub tick_interval_seconds: f64,
    pub uptime: String,
    pub port: u16,
    pub host: String,
    pub last_action: Option<String>,
    pub last_action_time: Option<DateTime<Utc>>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
