use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A scheduled, attendance-tracked activity. The order of events in the
/// sheet is the column order of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub date: NaiveDate, // "YYYY-MM-DD"
    #[serde(default = "default_required_hours")]
    pub required_hours: f64,
    #[serde(default)]
    pub semester_id: Option<String>,
}

pub fn default_required_hours() -> f64 {
    2.0
}

impl Event {
    /// Column label used by the table and by the exports.
    pub fn header(&self) -> String {
        self.name.clone()
    }
}
