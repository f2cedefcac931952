// src/export/mod.rs

mod csv_export;
mod fs_utils;
mod json;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::{CellExport, DashboardExport, StudentExport};

use crate::errors::AppError;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;
use std::str::FromStr;

/// Shared completion message of every exporter.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            other => Err(AppError::InvalidExportFormat(other.to_string())),
        }
    }
}
