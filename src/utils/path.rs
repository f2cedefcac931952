//! Path utilities: expand ~, default export file names.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `attendance_data_<YYYY-MM-DD>.<ext>`
pub fn default_export_name(date: NaiveDate, ext: &str) -> String {
    format!("attendance_data_{}.{ext}", date.format("%Y-%m-%d"))
}

/// Resolve an export target: explicit files are taken as given (with ~
/// expanded), otherwise the dated default name inside `dir`.
pub fn resolve_export_path(file: Option<&str>, dir: &Path, date: NaiveDate, ext: &str) -> PathBuf {
    match file {
        Some(f) => expand_tilde(f),
        None => dir.join(default_export_name(date, ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_uses_iso_date() {
        let d = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(default_export_name(d, "csv"), "attendance_data_2025-03-07.csv");
        assert_eq!(
            resolve_export_path(None, Path::new("/tmp/out"), d, "json"),
            PathBuf::from("/tmp/out/attendance_data_2025-03-07.json")
        );
        assert_eq!(
            resolve_export_path(Some("/tmp/x.csv"), Path::new("."), d, "csv"),
            PathBuf::from("/tmp/x.csv")
        );
    }
}
