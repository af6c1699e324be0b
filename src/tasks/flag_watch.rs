//! Flag-fall reporting

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::state::{AppState, ClockSnapshot, Position};

/// Background task that reports the end of the game once per flag fall
pub async fn flag_watch_task(state: Arc<AppState>) {
    info!("Starting flag watch task");

    let mut snapshots = state.subscribe();
    let mut previous = snapshots.borrow_and_update().clone();
    let mut latch = FlagLatch::default();
    latch.observe(&previous);

    while snapshots.changed().await.is_ok() {
        let current = snapshots.borrow_and_update().clone();

        if previous.game_state != current.game_state {
            debug!("Game state changed: {} -> {}", previous.game_state, current.game_state);
        }

        if let Some(loser) = latch.observe(&current) {
            let winner = current.player(loser.opposite());
            info!(
                "Game over: {} player ran out of time, {} player wins with {} left",
                loser, winner.position, winner.display
            );
        }

        previous = current;
    }

    warn!("Snapshot channel closed, stopping flag watch");
}

/// Remembers which flag has already been reported.
///
/// A fallen flag stays reported while that player's budget is empty, so
/// resuming a finished game and finishing it again is not a new flag fall.
/// Restoring the budget (a reset) re-arms the latch.
#[derive(Debug, Default)]
pub struct FlagLatch {
    reported: Option<Position>,
}

impl FlagLatch {
    /// Feed a snapshot; returns the position whose flag newly fell
    pub fn observe(&mut self, snapshot: &ClockSnapshot) -> Option<Position> {
        if let Some(reported) = self.reported {
            if snapshot.player(reported).seconds_remaining > 0.0 {
                self.reported = None;
            }
        }

        match snapshot.loser() {
            Some(loser) if self.reported != Some(loser) => {
                self.reported = Some(loser);
                Some(loser)
            }
            _ => None,
        }
    }
}
