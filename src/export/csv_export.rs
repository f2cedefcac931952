// src/export/csv_export.rs

use std::io;
use std::path::Path;

use crate::errors::AppResult;
use crate::export::model::DashboardExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;

/// Write the header line and one line per visible row.
pub(crate) fn write_csv<W: io::Write>(data: &DashboardExport, out: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(out);

    wtr.write_record(data.headers())?;
    for record in data.records() {
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

pub(crate) fn export_csv(data: &DashboardExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = std::fs::File::create(path)?;
    write_csv(data, file)?;

    notify_export_success("CSV", path);
    Ok(())
}
