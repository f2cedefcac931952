use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

pub const MANUAL_ADJUSTMENT_REASON: &str = "Manual adjustment via attendance dashboard";

/// One hour adjustment recorded when a submission changes a stored value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub attendance_id: i32,
    pub student_id: String,
    pub event_id: i32,
    pub old_hours: f64,
    pub new_hours: f64,
    pub changed_by: String,
    pub changed_at: DateTime<Local>,
    #[serde(default)]
    pub reason: String,
}

impl HistoryEntry {
    pub fn date(&self) -> NaiveDate {
        self.changed_at.date_naive()
    }

    pub fn delta(&self) -> f64 {
        self.new_hours - self.old_hours
    }
}
