//! Row controller: keeps the dashboard rows in memory and applies the
//! checkbox / hours-field handlers to them.

use crate::core::calculator::hours::{clamp_to_required, derive_hours, parse_hours};
use crate::core::calculator::tier::field_tier;
use crate::core::calculator::totals::aggregate;
use crate::core::filter::RowFilter;
use crate::core::submit::Submission;
use crate::errors::{AppError, AppResult};
use crate::models::checkbox::Checkbox;
use crate::models::event::Event;
use crate::models::record::{AttendanceRecord, RecordKey, StudentRow};
use crate::models::sheet::AttendanceSheet;

/// State of the submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    /// Submit control disabled while the payload is being saved.
    Saving,
}

#[derive(Debug, Clone)]
pub struct SheetController {
    events: Vec<Event>,
    rows: Vec<StudentRow>,
    state: SubmitState,
}

impl SheetController {
    /// Materialize every row from the snapshot, style each hours field and
    /// compute every total. Stored hours are kept as rendered.
    pub fn load(sheet: &AttendanceSheet) -> Self {
        let rows = sheet
            .students
            .iter()
            .map(|s| {
                // cells follow the event column order; cells of unknown
                // events have no column and are left out
                let records: Vec<AttendanceRecord> = sheet
                    .events
                    .iter()
                    .filter_map(|ev| {
                        s.cell(ev.id).map(|c| AttendanceRecord {
                            attendance_id: c.id,
                            event_id: ev.id,
                            time_in: c.timed_in,
                            time_out: c.timed_out,
                            hours: c.hours,
                            required_hours: ev.required_hours,
                            tier: field_tier(c.hours, ev.required_hours),
                            changed: false,
                        })
                    })
                    .collect();

                StudentRow {
                    student_id: s.student_id.clone(),
                    name: s.name.clone(),
                    year_level: s.year_level.clone(),
                    academic_year: s.academic_year.clone(),
                    semester_id: s.semester_id.clone(),
                    totals: aggregate(&records),
                    records,
                }
            })
            .collect();

        Self {
            events: sheet.events.clone(),
            rows,
            state: SubmitState::Idle,
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn rows(&self) -> &[StudentRow] {
        &self.rows
    }

    pub fn row(&self, student_id: &str) -> Option<&StudentRow> {
        self.rows.iter().find(|r| r.student_id == student_id)
    }

    pub fn record(&self, key: &RecordKey) -> Option<&AttendanceRecord> {
        self.row(&key.student_id).and_then(|r| r.record(key.event_id))
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Rows passing `filter`, in table order.
    pub fn visible_rows<'a>(
        &'a self,
        filter: &'a RowFilter,
    ) -> impl Iterator<Item = &'a StudentRow> {
        self.rows.iter().filter(move |r| filter.matches(r))
    }

    pub fn changed_count(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| r.records.iter())
            .filter(|r| r.changed)
            .count()
    }

    /// Checkbox change: flip the box, derive hours from the pair, restyle,
    /// recompute the row total. Returns the new hours.
    pub fn toggle(&mut self, key: &RecordKey, checkbox: Checkbox) -> AppResult<f64> {
        self.update(key, |rec| {
            match checkbox {
                Checkbox::In => rec.time_in = !rec.time_in,
                Checkbox::Out => rec.time_out = !rec.time_out,
            }
            rec.hours = derive_hours(rec.time_in, rec.time_out, rec.required_hours);
            rec.changed = true;
            true
        })?;
        self.hours_of(key)
    }

    /// Set a checkbox to an explicit state. Toggles only when it differs,
    /// so an unchanged box leaves the cell untouched.
    pub fn set_checkbox(
        &mut self,
        key: &RecordKey,
        checkbox: Checkbox,
        checked: bool,
    ) -> AppResult<f64> {
        let rec = self.record(key).ok_or_else(|| not_found(key))?;
        let current = match checkbox {
            Checkbox::In => rec.time_in,
            Checkbox::Out => rec.time_out,
        };
        if current == checked {
            return Ok(rec.hours);
        }
        self.toggle(key, checkbox)
    }

    /// Typing into the hours field. No clamping happens until blur.
    pub fn input_hours(&mut self, key: &RecordKey, text: &str) -> AppResult<f64> {
        let value = parse_hours(text);
        self.update(key, |rec| {
            rec.hours = value;
            rec.changed = true;
            true
        })?;
        Ok(value)
    }

    /// Leaving the hours field. Returns true when the value was clamped.
    pub fn blur_hours(&mut self, key: &RecordKey) -> AppResult<bool> {
        let mut clamped = false;
        self.update(key, |rec| match clamp_to_required(rec.hours, rec.required_hours) {
            Some(max) => {
                rec.hours = max;
                clamped = true;
                true
            }
            None => false,
        })?;
        Ok(clamped)
    }

    /// Build the form payload and disable the submit control.
    pub fn submit(&mut self) -> Submission {
        self.state = SubmitState::Saving;
        Submission::from_rows(&self.rows)
    }

    /// Clear every changed marker and re-enable the submit control.
    pub fn finish_submit(&mut self) {
        for rec in self.rows.iter_mut().flat_map(|r| r.records.iter_mut()) {
            rec.changed = false;
        }
        self.state = SubmitState::Idle;
    }

    fn hours_of(&self, key: &RecordKey) -> AppResult<f64> {
        self.record(key).map(|r| r.hours).ok_or_else(|| not_found(key))
    }

    /// Apply `f` to one cell; when it reports a change, restyle the field
    /// and recompute the row total.
    fn update<F>(&mut self, key: &RecordKey, f: F) -> AppResult<()>
    where
        F: FnOnce(&mut AttendanceRecord) -> bool,
    {
        let row = self
            .rows
            .iter_mut()
            .find(|r| r.student_id == key.student_id)
            .ok_or_else(|| AppError::StudentNotFound(key.student_id.clone()))?;
        let rec = row.record_mut(key.event_id).ok_or_else(|| not_found(key))?;

        if f(rec) {
            rec.tier = field_tier(rec.hours, rec.required_hours);
            row.totals = aggregate(&row.records);
        }
        Ok(())
    }
}

fn not_found(key: &RecordKey) -> AppError {
    AppError::CellNotFound {
        student: key.student_id.clone(),
        event: key.event_id,
    }
}
