//! Shared application state around the clock engine

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use chrono::{DateTime, Utc};
use tokio::sync::watch;

use super::{ClockEngine, ClockSnapshot, Position};
use crate::{config::ClockConfig, utils::format_uptime};

/// Application state shared by the HTTP handlers and background tasks
#[derive(Debug)]
pub struct AppState {
    /// The single game owned by this process
    pub engine: Arc<Mutex<ClockEngine>>,
    pub clock_config: ClockConfig,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Last gesture tracking
    pub last_action: Arc<Mutex<Option<String>>>,
    pub last_action_time: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Latest snapshot, published after every mutation
    pub snapshot_tx: watch::Sender<ClockSnapshot>,
    /// Keep the receiver alive to prevent channel closure
    pub _snapshot_rx: watch::Receiver<ClockSnapshot>,
}

impl AppState {
    /// Create a new AppState with a freshly reset clock
    pub fn new(port: u16, host: String, clock_config: ClockConfig) -> Self {
        let engine = ClockEngine::new(clock_config);
        let (snapshot_tx, snapshot_rx) = watch::channel(engine.snapshot());

        Self {
            engine: Arc::new(Mutex::new(engine)),
            clock_config,
            start_time: Instant::now(),
            port,
            host,
            last_action: Arc::new(Mutex::new(None)),
            last_action_time: Arc::new(Mutex::new(None)),
            snapshot_tx,
            _snapshot_rx: snapshot_rx,
        }
    }

    /// Apply a mutation to the engine and publish the resulting snapshot
    fn mutate<F>(&self, updater: F) -> Result<ClockSnapshot, String>
    where
        F: FnOnce(&mut ClockEngine),
    {
        let mut engine = self.engine.lock()
            .map_err(|e| format!("Failed to lock clock engine: {}", e))?;

        updater(&mut *engine);
        let snapshot = engine.snapshot();
        drop(engine); // Release the lock early

        self.snapshot_tx.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot.clone();
                true
            }
        });

        Ok(snapshot)
    }

    /// Apply a player gesture and record it as the last action
    pub fn apply_gesture<F>(&self, action: &str, updater: F) -> Result<ClockSnapshot, String>
    where
        F: FnOnce(&mut ClockEngine),
    {
        let snapshot = self.mutate(updater)?;

        if let Ok(mut last_action) = self.last_action.lock() {
            *last_action = Some(action.to_string());
        }
        if let Ok(mut last_time) = self.last_action_time.lock() {
            *last_time = Some(Utc::now());
        }

        Ok(snapshot)
    }

    /// The player at `position` touches their control
    pub fn press(&self, position: Position) -> Result<ClockSnapshot, String> {
        self.apply_gesture(&format!("press-{}", position), |engine| engine.press(position))
    }

    pub fn set_active(&self, position: Position) -> Result<ClockSnapshot, String> {
        self.apply_gesture(&format!("activate-{}", position), |engine| engine.set_active(position))
    }

    pub fn pause(&self) -> Result<ClockSnapshot, String> {
        self.apply_gesture("pause", ClockEngine::pause)
    }

    pub fn resume(&self) -> Result<ClockSnapshot, String> {
        self.apply_gesture("resume", ClockEngine::resume)
    }

    pub fn reset(&self) -> Result<ClockSnapshot, String> {
        self.apply_gesture("reset", ClockEngine::reset)
    }

    /// Advance the clock by one configured tick interval
    pub fn tick(&self) -> Result<ClockSnapshot, String> {
        let delta = self.clock_config.tick_interval();
        self.mutate(|engine| engine.tick(delta))
    }

    /// Get current clock snapshot
    pub fn get_snapshot(&self) -> Result<ClockSnapshot, String> {
        self.engine.lock()
            .map(|engine| engine.snapshot())
            .map_err(|e| format!("Failed to lock clock engine: {}", e))
    }

    /// Subscribe to snapshot updates
    pub fn subscribe(&self) -> watch::Receiver<ClockSnapshot> {
        self.snapshot_tx.subscribe()
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        format_uptime(self.start_time.elapsed())
    }

    /// Get last action information
    pub fn get_last_action(&self) -> (Option<String>, Option<DateTime<Utc>>) {
        let last_action = self.last_action.lock().ok().and_then(|a| a.clone());
        let last_action_time = self.last_action_time.lock().ok().and_then(|t| *t);
        (last_action, last_action_time)
    }
}
