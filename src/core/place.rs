//! Place resolution: which location fields to present for a chosen place.

use crate::db::models::SheetTable;
use crate::models::place::{LocationFields, PlaceRecord, PlaceSelection};
use std::collections::BTreeSet;

/// Journal history reduced to what place resolution needs, in append order
/// (oldest first).
#[derive(Debug, Clone, Default)]
pub struct JournalHistory {
    rows: Vec<PlaceRecord>,
}

impl JournalHistory {
    pub fn new(rows: Vec<PlaceRecord>) -> Self {
        Self { rows }
    }

    /// Build from the journal worksheet. Columns are matched by name
    /// (case and surrounding whitespace ignored); a missing column reads as empty.
    pub fn from_table(table: &SheetTable) -> Self {
        let name_col = table.column("n_Name");
        let city_col = table.column("City");
        let state_col = table.column("State");
        let zip_col = table.column("Zip");
        let country_col = table.column("Country");

        if name_col.is_none() {
            tracing::warn!("journal sheet has no n_Name column, place history is empty");
        }

        let rows = table
            .rows
            .iter()
            .map(|row| PlaceRecord {
                place_name: SheetTable::cell(row, name_col).to_string(),
                location: LocationFields {
                    city: SheetTable::cell(row, city_col).to_string(),
                    state: SheetTable::cell(row, state_col).to_string(),
                    zip: SheetTable::cell(row, zip_col).to_string(),
                    country: SheetTable::cell(row, country_col).to_string(),
                },
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Place names ever used: ascending, no duplicates, no blanks.
    pub fn distinct_places(&self) -> Vec<String> {
        self.rows
            .iter()
            .filter(|r| !r.place_name.is_empty())
            .map(|r| r.place_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Most recent row whose name equals `place_name` exactly.
    ///
    /// Linear scan from the end: tables hold hundreds to a few thousand rows,
    /// no index is kept.
    pub fn last_for(&self, place_name: &str) -> Option<&PlaceRecord> {
        self.rows.iter().rev().find(|r| r.place_name == place_name)
    }
}

/// Location fields to present for `selection`.
///
/// Existing places take the fields of their last journal row verbatim.
/// A new place, no selection, or a name with no matching row yields empty fields.
pub fn resolve_place(selection: &PlaceSelection, history: &JournalHistory) -> LocationFields {
    match selection {
        PlaceSelection::Existing(name) => match history.last_for(name) {
            Some(record) => record.location.clone(),
            None => {
                tracing::warn!(place = %name, "selected place has no journal row");
                LocationFields::default()
            }
        },
        PlaceSelection::NewPlace | PlaceSelection::Empty => LocationFields::default(),
    }
}
