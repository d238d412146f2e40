// src/export/logic.rs

use crate::config::Config;
use crate::core::list::{ListLogic, RecordFilter};
use crate::db::sheets::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::confirm_overwrite;
use crate::export::{ExportFormat, notify_export_success};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;
use crate::utils::path::expand_tilde;

/// High-level export of the journal worksheet.
pub struct ExportLogic;

impl ExportLogic {
    /// Export journal rows.
    ///
    /// - `file`: absolute output path (`~/` is expanded)
    /// - `range`: `None`, `"all"` or one of
    ///   - `YYYY`
    ///   - `YYYY-MM`
    ///   - `YYYY-MM-DD`
    ///   - `YYYY:YYYY`
    ///   - `YYYY-MM:YYYY-MM`
    ///   - `YYYY-MM-DD:YYYY-MM-DD`
    ///
    /// Returns the number of exported rows.
    pub fn export(
        store: &dyn SheetStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => parse_range(r)?,
        };

        let filter = RecordFilter {
            bounds,
            ..RecordFilter::default()
        };
        let records = ListLogic::load(store, cfg, &filter)?;

        if records.is_empty() {
            warning("No journal entries found for the selected range. Nothing to export.");
            return Ok(0);
        }

        confirm_overwrite(&path, records.len(), force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
            ExportFormat::Xlsx => export_xlsx(&records, &path)?,
        }
        notify_export_success(format, records.len(), &path);

        tracing::info!(format = format.as_str(), rows = records.len(), "journal exported");
        Ok(records.len())
    }
}
