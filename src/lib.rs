//! In-memory win record service for the Connect Four frontend.
//!
//! Tracks how many games the player won, the AI won, and how many ended in a
//! tie. The tally lives in process memory only and resets on restart.
//!
//! ```text
//! GET  /api/win-record          -> {"playerWins":0,"aiWins":0,"ties":0}
//! POST /api/update-win-record   {"winner":"Player"}
//!                               -> {"playerWins":1,"aiWins":0,"ties":0}
//! ```
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`record`]: Win record types and the shared store
//! - [`api`]: HTTP API (win record, health, metrics, OpenAPI)
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod metrics;
pub mod record;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
pub use record::{WinRecord, WinRecordStore, Winner};
