//! Attendance sheet snapshot on disk (pretty JSON).

use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::sheet::AttendanceSheet;

pub fn load_sheet(path: &Path) -> AppResult<AttendanceSheet> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Other(format!(
            "cannot read sheet {}: {e} (run `rattendance init` first?)",
            path.display()
        ))
    })?;
    Ok(serde_json::from_str(&content)?)
}

/// Write through a sibling temp file so a failed write keeps the old sheet.
pub fn save_sheet(path: &Path, sheet: &AttendanceSheet) -> AppResult<()> {
    let json = serde_json::to_string_pretty(sheet)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn defaults_fill_missing_fields() {
        let json = r#"{
            "events": [{"id": 1, "name": "Orientation", "date": "2025-08-04"}],
            "students": [{"student_id": "S1", "name": "Ana", "year_level": "1",
                          "attendance": [{"id": 3, "event_id": 1}]}]
        }"#;
        let sheet: AttendanceSheet = serde_json::from_str(json).unwrap();
        assert_eq!(sheet.events[0].required_hours, 2.0);
        assert!(sheet.history.is_empty());
        let cell = &sheet.students[0].attendance[0];
        assert!(!cell.timed_in && !cell.timed_out);
        assert_eq!(cell.hours, 0.0);
    }

    #[test]
    fn save_then_load() {
        let path = env::temp_dir().join("rattendance_store_test.json");
        fs::remove_file(&path).ok();
        let sheet = AttendanceSheet::default();
        save_sheet(&path, &sheet).unwrap();
        assert_eq!(load_sheet(&path).unwrap(), sheet);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_sheet_is_an_error() {
        let path = env::temp_dir().join("rattendance_store_missing.json");
        fs::remove_file(&path).ok();
        assert!(load_sheet(&path).is_err());
    }
}
