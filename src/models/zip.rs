use serde::{Deserialize, Serialize};

/// What a postal code resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZipInfo {
    pub country: String,
    pub state: String,
    /// Sorted, without duplicates. May hold more than one candidate.
    pub cities: Vec<String>,
}

impl ZipInfo {
    /// The city to auto-select, only when there is no choice to make.
    pub fn single_city(&self) -> Option<&str> {
        match self.cities.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

/// True for exactly five ASCII digits.
pub fn is_valid_zip(code: &str) -> bool {
    code.len() == 5 && code.bytes().all(|b| b.is_ascii_digit())
}
