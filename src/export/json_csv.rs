//! Text exports of the journal worksheet.

use crate::errors::{AppError, AppResult};
use crate::export::JournalRecord;
use crate::models::entry::JOURNAL_COLUMNS;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Array of objects keyed by journal column name.
pub(crate) fn export_json(records: &[JournalRecord], path: &Path) -> AppResult<()> {
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, records)
        .map_err(|e| AppError::Export(format!("cannot write JSON: {e}")))
}

/// Same layout as the worksheet: the journal header, then one line per entry.
pub(crate) fn export_csv(records: &[JournalRecord], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(JOURNAL_COLUMNS)?;
    for rec in records {
        wtr.write_record(rec.to_row())?;
    }

    wtr.flush()?;
    Ok(())
}
