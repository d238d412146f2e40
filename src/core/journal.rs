use crate::config::Config;
use crate::core::entry::{build_entry, validate_activities};
use crate::core::form::{FormState, LocationOverrides};
use crate::core::place::JournalHistory;
use crate::core::zip::{ZipOutcome, ZipResolver};
use crate::db::sheets::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{JournalEntry, Timing};
use crate::models::identity::Identity;
use crate::models::place::PlaceSelection;
use crate::models::zip::is_valid_zip;
use crate::ui::messages::{info, warning};

/// How the user designated the place of the visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceChoice {
    Existing(String),
    New(String),
}

/// Raw input of the journal form.
#[derive(Debug, Clone)]
pub struct EntryRequest {
    pub timing: Timing,
    pub place: PlaceChoice,
    pub overrides: LocationOverrides,
    pub activities: Vec<String>,
    pub notes: String,
}

pub struct AddLogic;

impl AddLogic {
    /// Load the journal history used for place auto-fill.
    ///
    /// An unreadable journal sheet means no history: auto-fill offers nothing
    /// and the entry is still attempted.
    pub fn load_history(store: &dyn SheetStore, cfg: &Config) -> JournalHistory {
        match store.read_all(&cfg.journal_sheet) {
            Ok(table) => JournalHistory::from_table(&table),
            Err(e) => {
                tracing::warn!(sheet = %cfg.journal_sheet, error = %e, "journal history unavailable");
                warning(format!("Journal history unavailable ({e}), no place auto-fill."));
                JournalHistory::default()
            }
        }
    }

    /// Walk the form through the request and return the complete form.
    pub fn fill_form(
        history: &JournalHistory,
        req: &EntryRequest,
        resolver: &dyn ZipResolver,
    ) -> AppResult<FormState> {
        let mut form = FormState::new();

        match &req.place {
            PlaceChoice::Existing(name) => {
                if history.last_for(name).is_none() {
                    return Err(AppError::Validation(format!(
                        "Unknown place '{name}'. Use --new-place to add it."
                    )));
                }
                form = form.select_place(PlaceSelection::Existing(name.clone()), history);
            }
            PlaceChoice::New(name) => {
                form = form
                    .select_place(PlaceSelection::NewPlace, history)
                    .with_place_name(name);

                if let Some(code) = &req.overrides.zip {
                    let code = code.trim();
                    if !is_valid_zip(code) {
                        return Err(AppError::Validation(format!(
                            "ZIP code must be 5 digits (got '{code}')."
                        )));
                    }

                    let (next, outcome) = form.enter_zip(code, resolver);
                    form = next;
                    match outcome {
                        ZipOutcome::Resolved(found) => info(format!(
                            "ZIP {code}: {} {} ({})",
                            found.state,
                            found.country,
                            found.cities.join(", ")
                        )),
                        ZipOutcome::Unresolved(reason) => {
                            warning(format!("ZIP {code} could not be resolved: {reason}"))
                        }
                    }
                }
            }
        }

        if let Some(city) = &req.overrides.city {
            form = form.choose_city(city)?;
        }

        Ok(form.with_overrides(&req.overrides))
    }

    /// Turn the request into the row to append, without touching the store.
    pub fn prepare(
        history: &JournalHistory,
        identity: &Identity,
        req: &EntryRequest,
        resolver: &dyn ZipResolver,
        vocabulary: &[String],
    ) -> AppResult<JournalEntry> {
        validate_activities(&req.activities, vocabulary)?;

        let form = Self::fill_form(history, req, resolver)?;
        let (place_name, location) = form.ready()?;

        Ok(build_entry(
            identity,
            &req.timing,
            place_name,
            location,
            &req.activities,
            &req.notes,
        ))
    }

    /// Validate, build and append one journal entry.
    pub fn submit(
        store: &dyn SheetStore,
        cfg: &Config,
        identity: &Identity,
        req: &EntryRequest,
        resolver: &dyn ZipResolver,
    ) -> AppResult<JournalEntry> {
        let history = Self::load_history(store, cfg);
        let entry = Self::prepare(&history, identity, req, resolver, &cfg.activities)?;

        store.append_row(&cfg.journal_sheet, &entry.to_row())?;

        tracing::info!(
            user = %identity.email,
            place = %entry.place_name,
            duration = entry.duration_minutes,
            "journal entry appended"
        );
        Ok(entry)
    }
}
