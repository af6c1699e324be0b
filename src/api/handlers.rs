//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{error, info};

use crate::state::{AppState, ClockSnapshot, Position};
use super::responses::{ApiResponse, HealthResponse, StatusResponse};

/// Turn the outcome of a gesture into a response, logging failures
fn gesture_response(
    gesture: &str,
    result: Result<ClockSnapshot, String>,
    message: String,
) -> Result<Json<ApiResponse>, StatusCode> {
    match result {
        Ok(clock) => {
            info!("{} endpoint called - game is {}", gesture, clock.game_state);
            Ok(Json(ApiResponse::new(message, clock)))
        }
        Err(e) => {
            error!("Failed to apply {}: {}", gesture, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /press/:position - the player at `position` ends their turn
pub async fn press_handler(
    State(state): State<Arc<AppState>>,
    Path(position): Path<Position>,
) -> Result<Json<ApiResponse>, StatusCode> {
    gesture_response(
        "Press",
        state.press(position),
        format!("{} pressed, {} to move", position, position.opposite()),
    )
}

/// Handle POST /activate/:position - start the clock at `position`
pub async fn activate_handler(
    State(state): State<Arc<AppState>>,
    Path(position): Path<Position>,
) -> Result<Json<ApiResponse>, StatusCode> {
    gesture_response(
        "Activate",
        state.set_active(position),
        format!("{} clock running", position),
    )
}

/// Handle POST /pause
pub async fn pause_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    gesture_response("Pause", state.pause(), "Clock paused".to_string())
}

/// Handle POST /resume
pub async fn resume_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    gesture_response("Resume", state.resume(), "Clock resumed".to_string())
}

/// Handle POST /reset
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<Json<ApiResponse>, StatusCode> {
    gesture_response("Reset", state.reset(), "Clock reset".to_string())
}

/// Handle GET /status - Return the clock, its configuration and server info
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Result<Json<StatusResponse>, StatusCode> {
    let clock = match state.get_snapshot() {
        Ok(clock) => clock,
        Err(e) => {
            error!("Failed to get clock snapshot: {}", e);
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    let (last_action, last_action_time) = state.get_last_action();

    Ok(Json(StatusResponse {
        clock,
        starting_seconds: state.clock_config.starting_seconds(),
        tick_interval_seconds: state.clock_config.tick_interval_seconds(),
        uptime: state.get_uptime(),
        port: state.port,
        host: state.host.clone(),
        last_action,
        last_action_time,
    }))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
