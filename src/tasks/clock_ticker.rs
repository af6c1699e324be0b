//! Periodic tick driver

use std::sync::Arc;
use tokio::time::{interval_at, Instant};
use tracing::{error, info};

use crate::state::AppState;

/// Background task that advances the clock by the configured interval.
///
/// The first tick lands one interval after start. Stopping this task
/// freezes the clock without touching the game's paused flag.
pub async fn clock_ticker_task(state: Arc<AppState>) {
    let period = state.clock_config.tick_interval();
    info!("Starting clock ticker every {:?}", period);

    let mut interval = interval_at(Instant::now() + period, period);

    loop {
        interval.tick().await;

        if let Err(e) = state.tick() {
            error!("Failed to advance clock: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{
        config::ClockConfig,
        state::{GameState, Position},
    };

    fn app_state() -> Arc<AppState> {
        Arc::new(AppState::new(0, "127.0.0.1".to_string(), ClockConfig::default()))
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_runs_the_active_clock() {
        let state = app_state();
        state.set_active(Position::Top).unwrap();

        let handle = tokio::spawn(clock_ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_millis(1050)).await;
        let snapshot = state.get_snapshot().unwrap();
        handle.abort();

        assert!(
            (18.89..=19.01).contains(&snapshot.top.seconds_remaining),
            "top had {}",
            snapshot.top.seconds_remaining
        );
        assert_eq!(snapshot.bottom.seconds_remaining, 20.0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_leaves_a_paused_clock_alone() {
        let state = app_state();
        let before = state.get_snapshot().unwrap();

        let handle = tokio::spawn(clock_ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_secs(5)).await;
        let after = state.get_snapshot().unwrap();
        handle.abort();

        assert_eq!(after, before);
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_runs_a_clock_down_to_the_flag() {
        let state = app_state();
        state.set_active(Position::Bottom).unwrap();

        let handle = tokio::spawn(clock_ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_secs(25)).await;
        let snapshot = state.get_snapshot().unwrap();
        handle.abort();

        assert_eq!(snapshot.game_state, GameState::Finished);
        assert_eq!(snapshot.bottom.seconds_remaining, 0.0);
        assert_eq!(snapshot.bottom.display, "0:00");
        assert_eq!(snapshot.top.seconds_remaining, 20.0);
        assert_eq!(snapshot.loser(), Some(Position::Bottom));
    }

    #[tokio::test(start_paused = true)]
    async fn ticker_keeps_running_on_the_shortest_period() {
        let config = ClockConfig::new(20.0, 0.001).unwrap();
        let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), config));
        state.set_active(Position::Top).unwrap();

        let handle = tokio::spawn(clock_ticker_task(Arc::clone(&state)));
        tokio::time::sleep(Duration::from_millis(50)).await;
        let snapshot = state.get_snapshot().unwrap();

        assert!(!handle.is_finished(), "ticker stopped early");
        handle.abort();
        assert!(snapshot.top.seconds_remaining < 20.0);
        assert_eq!(snapshot.game_state, GameState::Active);
    }
}
