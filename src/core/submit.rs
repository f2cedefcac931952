//! Form submission: payload built from the rows and its application to the
//! stored sheet.

use chrono::{DateTime, Local};
use std::collections::{HashMap, HashSet};

use crate::core::calculator::hours::format_hours;
use crate::models::checkbox::Checkbox;
use crate::models::history::{HistoryEntry, MANUAL_ADJUSTMENT_REASON};
use crate::models::record::StudentRow;
use crate::models::sheet::AttendanceSheet;

/// Ordered `name=value` form fields, as a browser would post them:
/// checked boxes only (`timein_<id>=on`, `timeout_<id>=on`) and every
/// hours field (`hours_<id>=<value>`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Submission {
    fields: Vec<(String, String)>,
}

/// Outcome of applying a submission to the sheet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplySummary {
    pub cells: usize,
    pub adjustments: usize,
}

impl Submission {
    pub fn from_rows(rows: &[StudentRow]) -> Self {
        let mut fields = Vec::new();
        for rec in rows.iter().flat_map(|r| r.records.iter()) {
            let id = rec.attendance_id;
            if rec.time_in {
                fields.push((field_name(Checkbox::In.field_prefix(), id), "on".to_string()));
            }
            if rec.time_out {
                fields.push((field_name(Checkbox::Out.field_prefix(), id), "on".to_string()));
            }
            fields.push((field_name("hours", id), format_hours(rec.hours)));
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Store the submitted state into `sheet`.
    ///
    /// Cells are the ones carrying an `hours_<id>` field. Their checkboxes
    /// become exactly what the payload says (an absent box is unchecked).
    /// An hours value that parses and differs from the stored one replaces
    /// it and is recorded in the history. Malformed names and unknown ids
    /// are skipped.
    pub fn apply(
        &self,
        sheet: &mut AttendanceSheet,
        operator: &str,
        now: DateTime<Local>,
    ) -> ApplySummary {
        let mut checked: HashSet<(&str, i32)> = HashSet::new();
        let mut hours: HashMap<i32, &str> = HashMap::new();

        for (name, value) in &self.fields {
            let Some((field, id)) = split_field(name) else {
                continue;
            };
            match field {
                "timein" | "timeout" => {
                    checked.insert((field, id));
                }
                "hours" => {
                    hours.insert(id, value.as_str());
                }
                _ => {}
            }
        }

        let mut summary = ApplySummary::default();
        let mut ids: Vec<i32> = hours.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let Some((student_id, cell)) = sheet.cell_by_id_mut(id) else {
                continue;
            };
            summary.cells += 1;
            cell.timed_in = checked.contains(&("timein", id));
            cell.timed_out = checked.contains(&("timeout", id));

            let new_hours = match hours[&id].trim().parse::<f64>() {
                Ok(v) if v.is_finite() => v,
                _ => cell.hours,
            };
            if new_hours != cell.hours {
                let entry = HistoryEntry {
                    attendance_id: id,
                    student_id,
                    event_id: cell.event_id,
                    old_hours: cell.hours,
                    new_hours,
                    changed_by: operator.to_string(),
                    changed_at: now,
                    reason: MANUAL_ADJUSTMENT_REASON.to_string(),
                };
                cell.hours = new_hours;
                sheet.history.push(entry);
                summary.adjustments += 1;
            }
        }

        summary
    }
}

fn field_name(prefix: &str, id: i32) -> String {
    format!("{prefix}_{id}")
}

/// `hours_12` → `("hours", 12)`. Names must have exactly two parts.
fn split_field(name: &str) -> Option<(&str, i32)> {
    let mut parts = name.split('_');
    let field = parts.next()?;
    let id = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((field, id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use crate::models::student::{AttendanceCell, StudentEntry};
    use chrono::{NaiveDate, TimeZone};

    fn sheet() -> AttendanceSheet {
        AttendanceSheet {
            events: vec![Event {
                id: 1,
                name: "Orientation".into(),
                date: NaiveDate::from_ymd_opt(2025, 8, 4).unwrap(),
                required_hours: 2.0,
                semester_id: None,
            }],
            students: vec![StudentEntry {
                student_id: "S1".into(),
                name: "Ana Cruz".into(),
                year_level: "1".into(),
                academic_year: "2025-2026".into(),
                semester_id: "1".into(),
                attendance: vec![AttendanceCell {
                    id: 7,
                    event_id: 1,
                    timed_in: true,
                    timed_out: false,
                    hours: 1.0,
                }],
            }],
            history: vec![],
        }
    }

    fn payload(fields: &[(&str, &str)]) -> Submission {
        Submission {
            fields: fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 8, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn split_field_requires_two_parts() {
        assert_eq!(split_field("hours_7"), Some(("hours", 7)));
        assert_eq!(split_field("hours"), None);
        assert_eq!(split_field("hours_x"), None);
        assert_eq!(split_field("a_b_1"), None);
    }

    #[test]
    fn payload_lists_checked_boxes_and_hours() {
        let controller = crate::core::controller::SheetController::load(&sheet());
        let payload = Submission::from_rows(controller.rows());
        let expected = [("timein_7", "on"), ("hours_7", "1")];
        assert_eq!(payload.fields().len(), expected.len());
        for ((name, value), (want_name, want_value)) in payload.fields().iter().zip(expected) {
            assert_eq!(name, want_name);
            assert_eq!(value, want_value);
        }
    }

    #[test]
    fn unchanged_hours_write_no_history() {
        let mut s = sheet();
        let submission = payload(&[("timein_7", "on"), ("hours_7", "1")]);
        let summary = submission.apply(&mut s, "admin", now());
        assert_eq!(summary, ApplySummary { cells: 1, adjustments: 0 });
        assert!(s.history.is_empty());
    }

    #[test]
    fn changed_hours_are_logged() {
        let mut s = sheet();
        let submission = payload(&[("timeout_7", "on"), ("hours_7", "2")]);
        let summary = submission.apply(&mut s, "admin", now());
        assert_eq!(summary.adjustments, 1);

        let cell = &s.students[0].attendance[0];
        assert!(!cell.timed_in);
        assert!(cell.timed_out);
        assert_eq!(cell.hours, 2.0);

        let entry = &s.history[0];
        assert_eq!(entry.student_id, "S1");
        assert_eq!(entry.old_hours, 1.0);
        assert_eq!(entry.new_hours, 2.0);
        assert_eq!(entry.changed_by, "admin");
        assert_eq!(entry.reason, MANUAL_ADJUSTMENT_REASON);
    }

    #[test]
    fn bad_values_and_unknown_ids_are_skipped() {
        let mut s = sheet();
        let submission = payload(&[("hours_7", "abc"), ("hours_99", "3"), ("note", "x")]);
        let summary = submission.apply(&mut s, "admin", now());
        assert_eq!(summary, ApplySummary { cells: 1, adjustments: 0 });
        assert_eq!(s.students[0].attendance[0].hours, 1.0);
    }
}
