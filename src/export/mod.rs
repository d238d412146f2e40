// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::JournalRecord;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion line shared by every export format.
pub(crate) fn notify_export_success(format: ExportFormat, entries: usize, path: &Path) {
    success(format!(
        "{entries} journal entr{} exported as {}: {}",
        if entries == 1 { "y" } else { "ies" },
        format.as_str().to_uppercase(),
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}
