use serde::Serialize;

use crate::core::calculator::tier::{FieldTier, RowTier};
use crate::core::calculator::totals::RowTotals;

/// Composite key of an attendance cell: student row × event column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub student_id: String,
    pub event_id: i32,
}

impl RecordKey {
    pub fn new(student_id: impl Into<String>, event_id: i32) -> Self {
        Self {
            student_id: student_id.into(),
            event_id,
        }
    }
}

/// In-memory attendance cell bound to the dashboard.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AttendanceRecord {
    pub attendance_id: i32,
    pub event_id: i32,
    pub time_in: bool,
    pub time_out: bool,
    pub hours: f64,
    pub required_hours: f64,
    /// Completion styling of the hours field.
    pub tier: FieldTier,
    /// Set by any edit, cleared once a submission completes.
    pub changed: bool,
}

/// One student line of the dashboard. `records` follow the event column
/// order; events the student has no cell for are simply absent.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StudentRow {
    pub student_id: String,
    pub name: String,
    pub year_level: String,
    pub academic_year: String,
    pub semester_id: String,
    pub records: Vec<AttendanceRecord>,
    pub totals: RowTotals,
}

impl StudentRow {
    pub fn record(&self, event_id: i32) -> Option<&AttendanceRecord> {
        self.records.iter().find(|r| r.event_id == event_id)
    }

    pub fn record_mut(&mut self, event_id: i32) -> Option<&mut AttendanceRecord> {
        self.records.iter_mut().find(|r| r.event_id == event_id)
    }

    pub fn has_event(&self, event_id: i32) -> bool {
        self.record(event_id).is_some()
    }

    pub fn total_hours(&self) -> f64 {
        self.totals.total
    }

    pub fn total_required(&self) -> f64 {
        self.totals.required
    }

    pub fn tier(&self) -> RowTier {
        self.totals.tier()
    }
}
