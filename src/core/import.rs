//! Seed a worksheet from a CSV export of a spreadsheet.

use crate::db::models::SheetTable;
use crate::db::pool::DbPool;
use crate::db::sheets::SheetStore;
use crate::errors::{AppError, AppResult};
use std::path::Path;

pub struct ImportLogic;

impl ImportLogic {
    /// Append every CSV data row to `sheet`, in file order.
    ///
    /// A missing worksheet is created with the CSV header. For an existing one,
    /// CSV columns are matched to the worksheet header by name; extra CSV columns
    /// are dropped and absent ones become empty cells.
    pub fn import_csv(pool: &DbPool, sheet: &str, path: &Path) -> AppResult<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(path)?;

        let csv_header: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        if csv_header.iter().all(|h| h.is_empty()) {
            return Err(AppError::Validation(format!(
                "{} has no header row",
                path.display()
            )));
        }

        pool.ensure_sheet_owned(sheet, &csv_header)?;
        let sheet_header = pool
            .sheet_header(sheet)?
            .ok_or_else(|| AppError::Append(format!("worksheet '{sheet}' vanished")))?;

        let csv_view = SheetTable::new(csv_header, Vec::new());
        let mapping: Vec<Option<usize>> = sheet_header.iter().map(|h| csv_view.column(h)).collect();

        let mut count = 0;
        for record in rdr.records() {
            let record = record?;
            let cells: Vec<String> = mapping
                .iter()
                .map(|src| src.and_then(|i| record.get(i)).unwrap_or("").to_string())
                .collect();
            pool.append_row(sheet, &cells)?;
            count += 1;
        }

        tracing::info!(sheet, rows = count, file = %path.display(), "csv imported");
        Ok(count)
    }
}
