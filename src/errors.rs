//! Unified application error type.
//! The calculator and filter never fail; everything around them (sheet
//! file, config, export, CLI lookups) returns AppError.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Sheet file error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration format error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("Student not found: {0}")]
    StudentNotFound(String),

    #[error("No attendance cell for student {student} and event {event}")]
    CellNotFound { student: String, event: i32 },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid history window: {0} (use all, today, week or month)")]
    InvalidWindow(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export format not supported: {0}")]
    InvalidExportFormat(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
