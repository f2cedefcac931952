// src/export/xlsx.rs

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

use crate::errors::{AppError, AppResult};
use crate::export::model::DashboardExport;
use crate::export::notify_export_success;
use crate::ui::messages::info;

/// Column of the total hours (after Student ID, Name, Year Level).
const TOTAL_COL: usize = 3;

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::RGB(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
}

/// Export XLSX: styled header, banded rows, total column coloured by tier.
pub(crate) fn export_xlsx(data: &DashboardExport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Attendance").map_err(to_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = data.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 2).map_err(to_app_error)?;

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(h.as_str()))
        .collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, student) in data.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in data.record(student).iter().enumerate() {
            let (fg, bg) = if col == TOTAL_COL {
                let tier = student.tier;
                (Some(rgb(tier.foreground_rgb())), rgb(tier.background_rgb()))
            } else {
                (None, band)
            };
            write_cell(worksheet, row, col as u16, value, fg, bg)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Numbers are written as numbers, everything else as text.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    s: &str,
    fg: Option<Color>,
    bg: Color,
) -> AppResult<()> {
    let mut fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);
    if let Some(fg) = fg {
        fmt = fmt.set_font_color(fg).set_bold();
    }

    // Student IDs stay text even when they look numeric
    if col > 0
        && let Ok(num) = s.parse::<f64>()
    {
        let fmt = fmt.set_align(FormatAlign::Right);
        worksheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
