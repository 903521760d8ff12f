//! Unified application error type.
//! All modules (roster, kiosk, store, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Store error: {0}")]
    Store(String),

    // ---------------------------
    // Roster
    // ---------------------------
    #[error("Failed to load roster '{path}': {reason}")]
    RosterLoad { path: String, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Check-in logic
    // ---------------------------
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Identifier {0} is not in the roster (use `rollcall guest` to register it)")]
    UnknownId(String),

    #[error("Guest name must not be empty")]
    EmptyGuestName,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
