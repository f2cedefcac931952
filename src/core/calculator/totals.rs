use serde::Serialize;

use super::hours::format_total;
use super::tier::{RowTier, row_tier};
use crate::models::record::AttendanceRecord;

/// Derived totals of a student row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RowTotals {
    pub total: f64,
    pub required: f64,
}

impl RowTotals {
    pub fn tier(&self) -> RowTier {
        row_tier(self.total, self.required)
    }

    pub fn display(&self) -> String {
        format_total(self.total)
    }
}

/// Sum hours and required hours across every cell of a row.
pub fn aggregate<'a, I>(records: I) -> RowTotals
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .fold(RowTotals::default(), |acc, r| RowTotals {
            total: acc.total + r.hours,
            required: acc.required + r.required_hours,
        })
}
