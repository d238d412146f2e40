// src/export/model.rs

use crate::db::models::SheetTable;
use crate::models::entry::{JOURNAL_COLUMNS, parse_timestamp};
use chrono::NaiveDateTime;
use serde::Serialize;

/// Flat, string-only view of a journal row as read back from the worksheet.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct JournalRecord {
    pub status: String,
    pub user_name: String,
    pub user_email: String,
    pub timestamp: String,
    pub n_duration: String,
    pub end_timestamp: String,
    #[serde(rename = "n_Name")]
    pub place_name: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Zip")]
    pub zip: String,
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "n_place")]
    pub composite_place: String,
    pub latitude: String,
    pub longitude: String,
    pub park_number: String,
    pub activities: String,
    pub notes: String,
}

impl JournalRecord {
    /// Map every row of the journal worksheet by column name, keeping sheet order.
    pub fn from_table(table: &SheetTable) -> Vec<Self> {
        let cols: Vec<Option<usize>> = JOURNAL_COLUMNS.iter().map(|c| table.column(c)).collect();

        table
            .rows
            .iter()
            .map(|row| {
                let v = |i: usize| SheetTable::cell(row, cols[i]).to_string();
                JournalRecord {
                    status: v(0),
                    user_name: v(1),
                    user_email: v(2),
                    timestamp: v(3),
                    n_duration: v(4),
                    end_timestamp: v(5),
                    place_name: v(6),
                    city: v(7),
                    state: v(8),
                    zip: v(9),
                    country: v(10),
                    composite_place: v(11),
                    latitude: v(12),
                    longitude: v(13),
                    park_number: v(14),
                    activities: v(15),
                    notes: v(16),
                }
            })
            .collect()
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    /// Cells in journal column order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.status.clone(),
            self.user_name.clone(),
            self.user_email.clone(),
            self.timestamp.clone(),
            self.n_duration.clone(),
            self.end_timestamp.clone(),
            self.place_name.clone(),
            self.city.clone(),
            self.state.clone(),
            self.zip.clone(),
            self.country.clone(),
            self.composite_place.clone(),
            self.latitude.clone(),
            self.longitude.clone(),
            self.park_number.clone(),
            self.activities.clone(),
            self.notes.clone(),
        ]
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    JOURNAL_COLUMNS.to_vec()
}
