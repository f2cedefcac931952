use serde::{Deserialize, Serialize};

use super::event::Event;
use super::history::HistoryEntry;
use super::student::{AttendanceCell, StudentEntry};

/// Snapshot of the attendance dashboard as rendered by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AttendanceSheet {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub students: Vec<StudentEntry>,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl AttendanceSheet {
    pub fn event(&self, id: i32) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn student(&self, student_id: &str) -> Option<&StudentEntry> {
        self.students.iter().find(|s| s.student_id == student_id)
    }

    /// Look up a cell by its attendance id, together with its owner's id.
    pub fn cell_by_id_mut(&mut self, attendance_id: i32) -> Option<(String, &mut AttendanceCell)> {
        self.students.iter_mut().find_map(|s| {
            let owner = s.student_id.clone();
            s.attendance
                .iter_mut()
                .find(|c| c.id == attendance_id)
                .map(|c| (owner, c))
        })
    }

    pub fn event_name(&self, id: i32) -> String {
        self.event(id)
            .map(|e| e.name.clone())
            .unwrap_or_else(|| format!("#{id}"))
    }

    pub fn student_name(&self, student_id: &str) -> String {
        self.student(student_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| student_id.to_string())
    }
}
