//! Row visibility and history filtering.

use chrono::{Duration, NaiveDate};
use std::str::FromStr;

use crate::errors::AppError;
use crate::models::history::HistoryEntry;
use crate::models::record::StudentRow;

/// Dashboard filters. Every criterion is optional; an unset (or blank)
/// criterion lets every row through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowFilter {
    pub name: Option<String>,
    pub year_level: Option<String>,
    pub event_id: Option<i32>,
    pub academic_year: Option<String>,
    pub semester_id: Option<String>,
}

fn is_set(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.is_empty())
}

impl RowFilter {
    pub fn is_empty(&self) -> bool {
        is_set(&self.name).is_none()
            && is_set(&self.year_level).is_none()
            && self.event_id.is_none()
            && is_set(&self.academic_year).is_none()
            && is_set(&self.semester_id).is_none()
    }

    pub fn matches(&self, row: &StudentRow) -> bool {
        let matches_name = is_set(&self.name)
            .is_none_or(|n| row.name.to_lowercase().contains(&n.to_lowercase()));
        let matches_year_level = is_set(&self.year_level).is_none_or(|y| row.year_level == y);
        let matches_event = self.event_id.is_none_or(|id| row.has_event(id));
        let matches_ay = is_set(&self.academic_year).is_none_or(|ay| row.academic_year == ay);
        let matches_sem = is_set(&self.semester_id).is_none_or(|s| row.semester_id == s);

        matches_name && matches_year_level && matches_event && matches_ay && matches_sem
    }
}

/// Time window of the adjustment history view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HistoryWindow {
    #[default]
    All,
    Today,
    Week,
    Month,
}

impl FromStr for HistoryWindow {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(AppError::InvalidWindow(other.to_string())),
        }
    }
}

impl HistoryWindow {
    pub fn contains(&self, date: NaiveDate, today: NaiveDate) -> bool {
        match self {
            HistoryWindow::All => true,
            HistoryWindow::Today => date == today,
            HistoryWindow::Week => date >= today - Duration::days(7),
            HistoryWindow::Month => date >= today - Duration::days(30),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    pub window: HistoryWindow,
    pub search: Option<String>,
}

impl HistoryFilter {
    /// `student` and `event` are the display names the entry resolves to.
    pub fn matches(
        &self,
        entry: &HistoryEntry,
        student: &str,
        event: &str,
        today: NaiveDate,
    ) -> bool {
        let show_time = self.window.contains(entry.date(), today);
        let show_search = is_set(&self.search).is_none_or(|q| {
            let q = q.to_lowercase();
            student.to_lowercase().contains(&q) || event.to_lowercase().contains(&q)
        });
        show_time && show_search
    }
}
