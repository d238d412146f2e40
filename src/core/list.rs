use crate::config::Config;
use crate::db::sheets::SheetStore;
use crate::errors::AppResult;
use crate::export::JournalRecord;
use crate::utils::colors::{CYAN, GREY, RESET};
use chrono::NaiveDate;

/// Optional filters shared by `list` and `export`.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub bounds: Option<(NaiveDate, NaiveDate)>,
    pub place: Option<String>,
    pub user_email: Option<String>,
}

impl RecordFilter {
    /// Rows whose timestamp cannot be parsed never match a date filter.
    pub fn matches(&self, rec: &JournalRecord) -> bool {
        if let Some((start, end)) = self.bounds {
            match rec.started_at() {
                Some(ts) if ts.date() >= start && ts.date() <= end => {}
                _ => return false,
            }
        }
        if let Some(place) = &self.place
            && &rec.place_name != place
        {
            return false;
        }
        if let Some(email) = &self.user_email
            && !rec.user_email.trim().eq_ignore_ascii_case(email)
        {
            return false;
        }
        true
    }
}

pub struct ListLogic;

impl ListLogic {
    pub fn load(
        store: &dyn SheetStore,
        cfg: &Config,
        filter: &RecordFilter,
    ) -> AppResult<Vec<JournalRecord>> {
        let table = store.read_all(&cfg.journal_sheet)?;
        Ok(JournalRecord::from_table(&table)
            .into_iter()
            .filter(|r| filter.matches(r))
            .collect())
    }

    pub fn print(records: &[JournalRecord]) {
        for rec in records {
            println!(
                "{CYAN}{}{RESET} → {} | {} min | {}",
                rec.timestamp, rec.end_timestamp, rec.n_duration, rec.composite_place
            );
            println!("    {} <{}>", rec.user_name, rec.user_email);
            if !rec.activities.is_empty() {
                println!("    Activities: {}", rec.activities);
            }
            if !rec.notes.trim().is_empty() {
                for line in textwrap::wrap(rec.notes.trim(), 72) {
                    println!("    {GREY}{line}{RESET}");
                }
            }
        }
        println!("\n{} entr{}.", records.len(), if records.len() == 1 { "y" } else { "ies" });
    }
}
