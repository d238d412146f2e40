// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::JournalRecord;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Column written as a number; every other column stays text
/// (ZIP codes keep their leading zeros, timestamps their literal layout).
const DURATION_COL: usize = 4;

/// Export XLSX with a styled header and auto-sized columns.
pub(crate) fn export_xlsx(records: &[JournalRecord], path: &Path) -> AppResult<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Journal").map_err(to_export_error)?;

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2E7D32))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xE8F5E9);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        let cell_format = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        for (col, value) in rec.to_row().iter().enumerate() {
            let c = col as u16;

            match value.parse::<f64>() {
                Ok(num) if col == DURATION_COL => {
                    let fmt = cell_format.clone().set_align(FormatAlign::Right);
                    worksheet
                        .write_with_format(row, c, num, &fmt)
                        .map_err(to_export_error)?;
                }
                _ => {
                    worksheet
                        .write_with_format(row, c, value.as_str(), &cell_format)
                        .map_err(to_export_error)?;
                }
            }

            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(60) as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
