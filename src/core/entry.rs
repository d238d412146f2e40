//! Entry normalization: raw form input to the exact journal row.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{JournalEntry, Timing};
use crate::models::identity::Identity;
use crate::models::place::LocationFields;
use chrono::Duration;
use regex::Regex;
use std::sync::LazyLock;

static SPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("space-run pattern is valid"));

/// `"{place}, {city} {state} {country}"`, space runs collapsed, then trimmed.
pub fn composite_place(place_name: &str, location: &LocationFields) -> String {
    let raw = format!(
        "{}, {} {} {}",
        place_name, location.city, location.state, location.country
    );
    SPACE_RUNS.replace_all(&raw, " ").trim().to_string()
}

/// Selection order kept, duplicates kept.
pub fn join_activities(activities: &[String]) -> String {
    activities.join(", ")
}

/// Every tag must come from the configured vocabulary.
pub fn validate_activities(activities: &[String], vocabulary: &[String]) -> AppResult<()> {
    let unknown: Vec<&str> = activities
        .iter()
        .filter(|a| !vocabulary.contains(a))
        .map(String::as_str)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Unknown activity: {}. Choose from: {}.",
            unknown.join(", "),
            vocabulary.join(", ")
        )))
    }
}

/// Build the row to append. Status, coordinates and park number stay empty:
/// they are filled by a later enrichment pass, not here.
pub fn build_entry(
    identity: &Identity,
    timing: &Timing,
    place_name: &str,
    location: &LocationFields,
    activities: &[String],
    notes: &str,
) -> JournalEntry {
    let timestamp = timing.start();
    let end_timestamp = timestamp + Duration::minutes(i64::from(timing.duration_minutes));

    JournalEntry {
        status: String::new(),
        user_name: identity.display_name.clone(),
        user_email: identity.email.clone(),
        timestamp,
        duration_minutes: timing.duration_minutes,
        end_timestamp,
        place_name: place_name.to_string(),
        city: location.city.clone(),
        state: location.state.clone(),
        zip: location.zip.clone(),
        country: location.country.clone(),
        composite_place: composite_place(place_name, location),
        latitude: String::new(),
        longitude: String::new(),
        park_number: String::new(),
        activities: join_activities(activities),
        notes: notes.to_string(),
    }
}
