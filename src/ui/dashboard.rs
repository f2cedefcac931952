//! Terminal rendering of the attendance dashboard.

use crate::core::calculator::hours::format_hours;
use crate::core::controller::SheetController;
use crate::core::filter::RowFilter;
use crate::models::event::Event;
use crate::models::record::{AttendanceRecord, StudentRow};
use crate::utils::formatting::check_mark;
use crate::utils::table::{Column, Table};

/// One cell as `[x][ ] 1.5`; a trailing `*` marks an unsaved change.
fn render_cell(rec: Option<&AttendanceRecord>, color: bool) -> String {
    let Some(rec) = rec else {
        return "-".to_string();
    };
    let hours = format_hours(rec.hours);
    let hours = if color {
        rec.tier.style().paint(hours).to_string()
    } else {
        hours
    };
    let marker = if rec.changed { "*" } else { "" };
    format!(
        "{}{} {hours}{marker}",
        check_mark(rec.time_in),
        check_mark(rec.time_out)
    )
}

fn render_total(row: &StudentRow, color: bool) -> String {
    let total = row.totals.display();
    if color {
        row.tier().style().paint(total).to_string()
    } else {
        total
    }
}

fn event_column(ev: &Event) -> Column {
    Column::left(format!("{} ({}h)", ev.header(), format_hours(ev.required_hours)))
}

fn build_table<'a, I>(events: &[Event], rows: I, color: bool) -> Table
where
    I: IntoIterator<Item = &'a StudentRow>,
{
    let mut columns = vec![
        Column::left("Student ID"),
        Column::left("Name"),
        Column::left("Year"),
        Column::right("Total"),
    ];
    columns.extend(events.iter().map(event_column));

    let mut table = Table::new(columns);
    for row in rows {
        let mut cells = vec![
            row.student_id.clone(),
            row.name.clone(),
            row.year_level.clone(),
            render_total(row, color),
        ];
        cells.extend(events.iter().map(|ev| render_cell(row.record(ev.id), color)));
        table.add_row(cells);
    }
    table
}

/// Full dashboard restricted to the rows passing `filter`.
pub fn render(controller: &SheetController, filter: &RowFilter, color: bool) -> String {
    build_table(controller.events(), controller.visible_rows(filter), color).render()
}

/// A single student line, shown after an edit.
pub fn render_row(controller: &SheetController, row: &StudentRow, color: bool) -> String {
    build_table(controller.events(), std::iter::once(row), color).render()
}
