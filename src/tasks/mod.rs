//! Background tasks module
//! 
//! This module contains the tasks that run alongside the HTTP server.

pub mod clock_ticker;
pub mod flag_watch;

// Re-export main functions
pub use clock_ticker::clock_ticker_task;
pub use flag_watch::flag_watch_task;
