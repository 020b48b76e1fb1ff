//! Unified application error type.
//! All modules (store, db, core, cli, utils) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Stored data under '{key}' is unreadable: {reason}")]
    CorruptData { key: String, reason: String },

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date: {0}. Please check the date format (YYYY-MM-DD).")]
    InvalidDate(String),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid vehicle profile: {0}")]
    InvalidVehicle(String),

    #[error("Invalid estimate input: {0}")]
    InvalidEstimate(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No session found with id {0}")]
    SessionNotFound(String),

    #[error("No registered users found")]
    NoRegisteredUsers,

    #[error("User with email {0} not found. Please check the email.")]
    UserNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
