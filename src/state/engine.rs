//! Turn and timer state machine

use std::time::Duration;

use tracing::{debug, info};

use super::{ClockSnapshot, GameState, Player, PlayerState, Position};
use crate::config::ClockConfig;

/// Two-player countdown clock.
///
/// Owns both players' budgets and the game phase. Holds no rendering or
/// timer logic; a driver calls [`ClockEngine::tick`] on a fixed cadence and
/// reads state back after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct ClockEngine {
    config: ClockConfig,
    players: [Player; 2],
    /// Position whose player is marked active
    active: Position,
    game_state: GameState,
}

impl ClockEngine {
    /// Create an engine with Top pre-selected and the game paused
    pub fn new(config: ClockConfig) -> Self {
        let mut engine = Self {
            config,
            players: Position::ALL.map(|position| Player::new(position, config.starting_time())),
            active: Position::Top,
            game_state: GameState::Paused,
        };
        engine.reset();
        engine
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// Restore both budgets, make Top the active player and pause
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.remaining = self.config.starting_time();
        }
        self.activate(Position::Top);
        self.game_state = GameState::Paused;

        info!(
            "Clock reset: {:.1}s per player, top to move",
            self.config.starting_seconds()
        );
    }

    /// Make `position` the running clock and start the game
    pub fn set_active(&mut self, position: Position) {
        self.activate(position);
        self.game_state = GameState::Active;

        info!("{} player's clock is running", position);
    }

    /// The player at `position` touches their control, handing the turn over
    pub fn press(&mut self, position: Position) {
        debug!("Control pressed at {}", position);
        self.set_active(position.opposite());
    }

    pub fn pause(&mut self) {
        if self.game_state != GameState::Paused {
            info!("Clock paused");
        }
        self.game_state = GameState::Paused;
    }

    pub fn resume(&mut self) {
        if self.game_state != GameState::Active {
            info!("Clock resumed");
        }
        self.game_state = GameState::Active;
    }

    /// Advance the active player's clock by `delta`.
    ///
    /// Only runs while the game is active. A finished game keeps the fallen
    /// flag's time frozen at zero.
    pub fn tick(&mut self, delta: Duration) {
        if !self.game_state.is_running() {
            return;
        }

        let player = &mut self.players[self.active.index()];
        debug_assert!(player.is_active(), "{} clock ticked while waiting", self.active);

        if player.consume(delta) {
            self.game_state = GameState::Finished;
            info!("Flag fell: {} player is out of time", player.position());
        }
    }

    /// The player whose clock is running, if any
    pub fn active_player(&self) -> Option<&Player> {
        Some(self.player_at(self.active)).filter(|player| player.is_active())
    }

    pub fn player_at(&self, position: Position) -> &Player {
        &self.players[position.index()]
    }

    /// Read-back view for the presentation layer
    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot::from_engine(self)
    }

    fn activate(&mut self, position: Position) {
        self.active = position;
        self.players[position.index()].state = PlayerState::Active;
        self.players[position.opposite().index()].state = PlayerState::Waiting;
    }
}

impl Default for ClockEngine {
    fn default() -> Self {
        Self::new(ClockConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: Duration = Duration::from_millis(100);

    fn active_count(engine: &ClockEngine) -> usize {
        Position::ALL
            .iter()
            .filter(|&&p| engine.player_at(p).is_active())
            .count()
    }

    fn assert_fresh(engine: &ClockEngine) {
        assert_eq!(engine.game_state(), GameState::Paused);
        assert_eq!(engine.player_at(Position::Top).state, PlayerState::Active);
        assert_eq!(engine.player_at(Position::Bottom).state, PlayerState::Waiting);
        for position in Position::ALL {
            assert_eq!(engine.player_at(position).seconds_remaining(), 20.0);
        }
    }

    #[test]
    fn new_engine_is_reset() {
        let engine = ClockEngine::default();
        assert_fresh(&engine);
        assert_eq!(engine.config(), &ClockConfig::default());
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Top));
    }

    #[test]
    fn reset_restores_budgets_from_any_state() {
        let mut engine = ClockEngine::default();
        engine.set_active(Position::Bottom);
        for _ in 0..37 {
            engine.tick(TICK);
        }
        engine.reset();
        assert_fresh(&engine);
    }

    #[test]
    fn set_active_flips_both_players() {
        let mut engine = ClockEngine::default();
        engine.set_active(Position::Bottom);
        assert_eq!(engine.player_at(Position::Top).state, PlayerState::Waiting);
        assert_eq!(engine.player_at(Position::Bottom).state, PlayerState::Active);
        assert_eq!(engine.game_state(), GameState::Active);
        assert_eq!(active_count(&engine), 1);

        engine.set_active(Position::Top);
        assert_eq!(engine.player_at(Position::Top).state, PlayerState::Active);
        assert_eq!(engine.player_at(Position::Bottom).state, PlayerState::Waiting);
        assert_eq!(active_count(&engine), 1);
    }

    #[test]
    fn set_active_starts_the_game_regardless_of_phase() {
        let mut engine = ClockEngine::default();
        engine.pause();
        engine.set_active(Position::Bottom);
        assert_eq!(engine.game_state(), GameState::Active);
    }

    fn finished_on_top(engine: &mut ClockEngine) {
        engine.set_active(Position::Top);
        engine.tick(Duration::from_secs(30));
        assert_eq!(engine.game_state(), GameState::Finished);
        assert_eq!(engine.player_at(Position::Top).remaining, Duration::ZERO);
    }

    #[test]
    fn set_active_after_finish_runs_the_other_clock() {
        let mut engine = ClockEngine::default();
        finished_on_top(&mut engine);

        engine.set_active(Position::Bottom);
        assert_eq!(engine.game_state(), GameState::Active);
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Bottom));

        engine.tick(TICK);
        assert_eq!(engine.game_state(), GameState::Active);
        assert_eq!(engine.player_at(Position::Bottom).remaining, Duration::from_millis(19_900));
        assert_eq!(engine.player_at(Position::Top).remaining, Duration::ZERO);
    }

    #[test]
    fn resume_after_finish_refinishes_on_the_next_tick() {
        let mut engine = ClockEngine::default();
        finished_on_top(&mut engine);

        engine.resume();
        assert_eq!(engine.game_state(), GameState::Active);
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Top));

        engine.tick(TICK);
        assert_eq!(engine.game_state(), GameState::Finished);
        assert_eq!(engine.player_at(Position::Top).remaining, Duration::ZERO);
        assert_eq!(engine.player_at(Position::Bottom).remaining, Duration::from_secs(20));
    }

    #[test]
    fn press_hands_the_turn_to_the_opponent() {
        let mut engine = ClockEngine::default();
        engine.press(Position::Top);
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Bottom));
        engine.press(Position::Bottom);
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Top));
        assert_eq!(engine.game_state(), GameState::Active);
    }

    #[test]
    fn tick_while_paused_changes_nothing() {
        let mut engine = ClockEngine::default();
        let before = engine.clone();
        engine.tick(TICK);
        engine.tick(Duration::from_secs(100));
        assert_eq!(engine, before);
    }

    #[test]
    fn tick_only_decrements_the_active_player() {
        let mut engine = ClockEngine::default();
        engine.set_active(Position::Bottom);
        engine.tick(TICK);
        engine.tick(TICK);
        assert_eq!(engine.player_at(Position::Bottom).remaining, Duration::from_millis(19_800));
        assert_eq!(engine.player_at(Position::Top).remaining, Duration::from_secs(20));
    }

    #[test]
    fn pause_and_resume_keep_the_active_player() {
        let mut engine = ClockEngine::default();
        engine.set_active(Position::Bottom);
        engine.pause();
        engine.pause();
        assert_eq!(engine.game_state(), GameState::Paused);
        engine.tick(TICK);
        assert_eq!(engine.player_at(Position::Bottom).seconds_remaining(), 20.0);

        engine.resume();
        engine.resume();
        assert_eq!(engine.game_state(), GameState::Active);
        assert_eq!(engine.active_player().map(Player::position), Some(Position::Bottom));
    }

    #[test]
    fn two_hundred_ticks_exhaust_twenty_seconds() {
        let mut engine = ClockEngine::default();
        engine.set_active(Position::Top);
        for _ in 0..199 {
            engine.tick(TICK);
        }
        assert_eq!(engine.game_state(), GameState::Active);
        assert!(engine.player_at(Position::Top).seconds_remaining() > 0.0);

        engine.tick(TICK);
        assert_eq!(engine.game_state(), GameState::Finished);
        assert!(engine.player_at(Position::Top).seconds_remaining() <= 0.0);
        assert_eq!(engine.player_at(Position::Bottom).seconds_remaining(), 20.0);
    }

    #[test]
    fn finished_game_freezes_time() {
        let mut engine = ClockEngine::new(ClockConfig::new(0.25, 0.1).unwrap());
        engine.set_active(Position::Bottom);
        engine.tick(Duration::from_secs(1));
        assert_eq!(engine.game_state(), GameState::Finished);

        let frozen = engine.clone();
        engine.tick(TICK);
        engine.tick(TICK);
        assert_eq!(engine, frozen);
        assert_eq!(engine.player_at(Position::Bottom).remaining, Duration::ZERO);
    }

    #[test]
    fn reset_round_trip_matches_first_reset() {
        let mut engine = ClockEngine::default();
        let first = engine.clone();
        engine.reset();
        engine.set_active(Position::Top);
        for _ in 0..12 {
            engine.tick(TICK);
        }
        engine.press(Position::Top);
        engine.tick(TICK);
        engine.reset();
        assert_eq!(engine, first);
    }

    #[test]
    fn at_most_one_active_player_across_operations() {
        let mut engine = ClockEngine::default();
        let ops: [fn(&mut ClockEngine); 7] = [
            |e| e.set_active(Position::Bottom),
            |e| e.tick(Duration::from_millis(100)),
            |e| e.press(Position::Bottom),
            |e| e.pause(),
            |e| e.resume(),
            |e| e.set_active(Position::Top),
            |e| e.reset(),
        ];
        for op in ops.iter().cycle().take(50) {
            op(&mut engine);
            assert_eq!(active_count(&engine), 1);
        }
    }
}
