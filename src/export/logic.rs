// src/export/logic.rs

use std::path::{Path, PathBuf};

use crate::core::controller::SheetController;
use crate::core::filter::RowFilter;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::csv_export::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::DashboardExport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::resolve_export_path;

/// High-level export of the dashboard.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the rows visible under `filter`.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path; when omitted `attendance_data_<date>.<ext>`
    ///   inside `export_dir`
    /// - `force`: overwrite without asking
    ///
    /// The header is always written, even when no row is visible.
    /// Returns the written path.
    pub fn export(
        controller: &SheetController,
        filter: &RowFilter,
        format: ExportFormat,
        file: Option<&str>,
        export_dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_export_path(file, export_dir, date::today(), format.as_str());

        let data = DashboardExport::collect(controller, filter);
        if data.is_empty() {
            warning("No visible rows for the selected filters: writing the header only.");
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&data, &path)?,
            ExportFormat::Json => export_json(&data, &path)?,
            ExportFormat::Xlsx => export_xlsx(&data, &path)?,
        }

        Ok(path)
    }
}
