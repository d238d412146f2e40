use serde::{Deserialize, Serialize};

/// Role given to every self-registered account.
pub const DEFAULT_ROLE: &str = "user";

/// Display name used when the directory row has none.
pub const FALLBACK_DISPLAY_NAME: &str = "User";

/// A logged-in user, looked up once per session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    pub role: String,
    pub display_name: String,
}

impl Identity {
    pub fn new(email: &str, role: &str, display_name: &str) -> Self {
        let display_name = if display_name.trim().is_empty() {
            FALLBACK_DISPLAY_NAME
        } else {
            display_name.trim()
        };

        Self {
            email: normalize_email(email),
            role: role.trim().to_string(),
            display_name: display_name.to_string(),
        }
    }
}

/// Lowercase + trim: the only form in which emails are compared.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
