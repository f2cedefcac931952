use serde::{Deserialize, Serialize};

/// Server-rendered student row: the row data attributes plus the
/// attendance cells the student has.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentEntry {
    pub student_id: String,
    pub name: String,
    pub year_level: String,
    #[serde(default)]
    pub academic_year: String,
    #[serde(default)]
    pub semester_id: String,
    #[serde(default)]
    pub attendance: Vec<AttendanceCell>,
}

/// Stored state of one student × event cell.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttendanceCell {
    pub id: i32,
    pub event_id: i32,
    #[serde(default)]
    pub timed_in: bool,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub hours: f64,
}

impl StudentEntry {
    pub fn cell(&self, event_id: i32) -> Option<&AttendanceCell> {
        self.attendance.iter().find(|c| c.event_id == event_id)
    }
}
