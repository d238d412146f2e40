//! Journal form state.
//!
//! Every interaction takes the current [`FormState`] and returns the next one;
//! nothing is mutated in place.

use crate::core::place::{JournalHistory, resolve_place};
use crate::core::zip::{ZipOutcome, ZipResolver, resolve_zip};
use crate::errors::{AppError, AppResult};
use crate::models::place::{LocationFields, PlaceSelection};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selection: PlaceSelection,
    pub place_name: String,
    pub location: LocationFields,
    /// Candidates of the last ZIP lookup when it matched several cities
    /// and none has been picked yet.
    pub city_choices: Vec<String>,
}

/// Explicit values typed by the user; they win over auto-filled ones.
#[derive(Debug, Clone, Default)]
pub struct LocationOverrides {
    pub zip: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick a place. A different choice than the current one clears every
    /// location field, then existing places are auto-filled from history.
    pub fn select_place(&self, selection: PlaceSelection, history: &JournalHistory) -> Self {
        if selection == self.selection {
            return self.clone();
        }

        let place_name = match &selection {
            PlaceSelection::Existing(name) => name.clone(),
            PlaceSelection::NewPlace | PlaceSelection::Empty => String::new(),
        };
        let location = resolve_place(&selection, history);

        Self {
            selection,
            place_name,
            location,
            city_choices: Vec::new(),
        }
    }

    /// Name typed for a new place. Ignored for existing places.
    pub fn with_place_name(&self, name: &str) -> Self {
        let mut next = self.clone();
        if next.selection == PlaceSelection::NewPlace {
            next.place_name = name.trim().to_string();
        }
        next
    }

    /// Record a typed ZIP code and try to resolve it.
    ///
    /// On success country and state are replaced; the city is set only when
    /// the code maps to a single city, otherwise the candidates are kept for
    /// [`FormState::choose_city`]. An unresolved lookup changes nothing but
    /// the ZIP itself.
    pub fn enter_zip(&self, code: &str, resolver: &dyn ZipResolver) -> (Self, ZipOutcome) {
        let code = code.trim();
        let mut next = self.clone();
        next.location.zip = code.to_string();

        let outcome = resolve_zip(resolver, code);
        if let ZipOutcome::Resolved(info) = &outcome {
            next.location.country = info.country.clone();
            next.location.state = info.state.clone();
            match info.single_city() {
                Some(city) => {
                    next.location.city = city.to_string();
                    next.city_choices.clear();
                }
                None => next.city_choices = info.cities.clone(),
            }
        }

        (next, outcome)
    }

    pub fn needs_city_choice(&self) -> bool {
        !self.city_choices.is_empty()
    }

    /// Settle a multi-city ZIP code. Without pending candidates any city is accepted.
    pub fn choose_city(&self, city: &str) -> AppResult<Self> {
        let city = city.trim();
        if self.needs_city_choice() && !self.city_choices.iter().any(|c| c == city) {
            return Err(AppError::Validation(format!(
                "'{city}' is not one of the cities for ZIP {}: {}.",
                self.location.zip,
                self.city_choices.join(", ")
            )));
        }

        let mut next = self.clone();
        next.location.city = city.to_string();
        next.city_choices.clear();
        Ok(next)
    }

    /// Apply values the user typed over auto-filled ones.
    /// The city is not touched here, it goes through [`FormState::choose_city`].
    pub fn with_overrides(&self, overrides: &LocationOverrides) -> Self {
        let mut next = self.clone();
        if let Some(zip) = &overrides.zip {
            next.location.zip = zip.trim().to_string();
        }
        if let Some(state) = &overrides.state {
            next.location.state = state.trim().to_string();
        }
        if let Some(country) = &overrides.country {
            next.location.country = country.trim().to_string();
        }
        next
    }

    /// Place name and location to submit, once the form is complete.
    pub fn ready(&self) -> AppResult<(&str, &LocationFields)> {
        if self.place_name.trim().is_empty() {
            return Err(AppError::Validation("Place name is required.".into()));
        }
        if self.needs_city_choice() {
            return Err(AppError::Validation(format!(
                "ZIP {} matches several cities, pick one with --city: {}.",
                self.location.zip,
                self.city_choices.join(", ")
            )));
        }
        Ok((self.place_name.as_str(), &self.location))
    }
}
