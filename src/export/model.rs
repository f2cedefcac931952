// src/export/model.rs

use serde::Serialize;

use crate::core::calculator::hours::format_hours;
use crate::core::calculator::tier::RowTier;
use crate::core::controller::SheetController;
use crate::core::filter::RowFilter;
use crate::models::event::Event;
use crate::models::record::StudentRow;
use crate::utils::formatting::yes_no;

/// Fixed leading columns of every tabular export.
pub(crate) const FIXED_HEADERS: [&str; 4] = ["Student ID", "Name", "Year Level", "Total Hours"];

/// One visible student row, ready for export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct StudentExport {
    pub student_id: String,
    pub name: String,
    pub year_level: String,
    pub academic_year: String,
    pub semester_id: String,
    pub total_hours: f64,
    pub required_hours: f64,
    pub tier: RowTier,
    pub events: Vec<CellExport>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CellExport {
    pub event_id: i32,
    pub event: String,
    pub time_in: bool,
    pub time_out: bool,
    pub hours: f64,
}

/// Everything an exporter needs: the event columns and the visible rows.
#[derive(Clone, Debug)]
pub struct DashboardExport {
    pub events: Vec<Event>,
    pub rows: Vec<StudentExport>,
}

impl DashboardExport {
    pub fn collect(controller: &SheetController, filter: &RowFilter) -> Self {
        let events = controller.events().to_vec();
        let rows = controller
            .visible_rows(filter)
            .map(|row| student_export(row, &events))
            .collect();
        Self { events, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `Student ID, Name, Year Level, Total Hours`, then a
    /// `Time In / Time Out / Hours` triplet per event in column order.
    pub fn headers(&self) -> Vec<String> {
        let mut headers: Vec<String> = FIXED_HEADERS.iter().map(|h| h.to_string()).collect();
        for ev in &self.events {
            let name = ev.header();
            headers.push(format!("{name} - Time In"));
            headers.push(format!("{name} - Time Out"));
            headers.push(format!("{name} - Hours"));
        }
        headers
    }

    /// Flat string record of one row. Events without a cell export three
    /// empty fields so the columns stay aligned.
    pub fn record(&self, row: &StudentExport) -> Vec<String> {
        let mut out = vec![
            row.student_id.clone(),
            row.name.clone(),
            row.year_level.clone(),
            format!("{:.2}", row.total_hours),
        ];
        for ev in &self.events {
            match row.events.iter().find(|c| c.event_id == ev.id) {
                Some(c) => {
                    out.push(yes_no(c.time_in).to_string());
                    out.push(yes_no(c.time_out).to_string());
                    out.push(format_hours(c.hours));
                }
                None => out.extend(std::iter::repeat_n(String::new(), 3)),
            }
        }
        out
    }

    pub fn records(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(|r| self.record(r)).collect()
    }
}

fn student_export(row: &StudentRow, events: &[Event]) -> StudentExport {
    StudentExport {
        student_id: row.student_id.clone(),
        name: row.name.clone(),
        year_level: row.year_level.clone(),
        academic_year: row.academic_year.clone(),
        semester_id: row.semester_id.clone(),
        total_hours: row.total_hours(),
        required_hours: row.total_required(),
        tier: row.tier(),
        events: row
            .records
            .iter()
            .map(|r| CellExport {
                event_id: r.event_id,
                event: events
                    .iter()
                    .find(|e| e.id == r.event_id)
                    .map(|e| e.name.clone())
                    .unwrap_or_default(),
                time_in: r.time_in,
                time_out: r.time_out,
                hours: r.hours,
            })
            .collect(),
    }
}
