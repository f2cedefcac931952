use crate::core::calculator::hours::format_hours;
use crate::core::filter::HistoryFilter;
use crate::models::sheet::AttendanceSheet;
use crate::utils::date::format_timestamp;
use crate::utils::table::{Column, Table};
use ansi_term::Colour;
use chrono::NaiveDate;

fn colour_delta(delta: f64, color: bool) -> String {
    let s = if delta > 0.0 {
        format!("+{}", format_hours(delta))
    } else {
        format_hours(delta)
    };
    if !color {
        return s;
    }
    if delta > 0.0 {
        Colour::Green.paint(s).to_string()
    } else if delta < 0.0 {
        Colour::Red.paint(s).to_string()
    } else {
        s
    }
}

/// Adjustment log, newest first. Returns `None` when nothing matches.
pub fn render(
    sheet: &AttendanceSheet,
    filter: &HistoryFilter,
    today: NaiveDate,
    color: bool,
) -> Option<String> {
    let mut entries: Vec<_> = sheet
        .history
        .iter()
        .map(|e| (e, sheet.student_name(&e.student_id), sheet.event_name(e.event_id)))
        .filter(|(e, student, event)| filter.matches(e, student, event, today))
        .collect();

    if entries.is_empty() {
        return None;
    }
    entries.sort_by(|a, b| b.0.changed_at.cmp(&a.0.changed_at));

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Student"),
        Column::left("Event"),
        Column::right("Old"),
        Column::right("New"),
        Column::right("Delta"),
        Column::left("By"),
        Column::left("Reason"),
    ]);
    for (e, student, event) in entries {
        table.add_row(vec![
            format_timestamp(&e.changed_at),
            student,
            event,
            format_hours(e.old_hours),
            format_hours(e.new_hours),
            colour_delta(e.delta(), color),
            e.changed_by.clone(),
            e.reason.clone(),
        ]);
    }
    Some(table.render())
}
