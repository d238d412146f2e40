use serde::Serialize;

/// Label of the "new place" entry in the place picker.
pub const NEW_PLACE_LABEL: &str = "-- Add New Place --";

/// Location fields shown next to a place name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationFields {
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl LocationFields {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.state.is_empty() && self.zip.is_empty() && self.country.is_empty()
    }
}

/// Most recent journal row for a place, used as the template for new entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceRecord {
    pub place_name: String,
    pub location: LocationFields,
}

/// What the user picked in the place chooser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PlaceSelection {
    #[default]
    Empty,
    NewPlace,
    Existing(String),
}

impl PlaceSelection {
    /// Interpret a raw chooser value.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" => PlaceSelection::Empty,
            NEW_PLACE_LABEL => PlaceSelection::NewPlace,
            name => PlaceSelection::Existing(name.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            PlaceSelection::Empty => "",
            PlaceSelection::NewPlace => NEW_PLACE_LABEL,
            PlaceSelection::Existing(name) => name,
        }
    }
}
