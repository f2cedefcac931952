// src/export/json.rs

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::model::DashboardExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;

/// Export JSON pretty-printed.
pub(crate) fn export_json(data: &DashboardExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&data.rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
