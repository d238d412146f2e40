//! Login against the identity directory and first-time registration.

use crate::config::Config;
use crate::core::user_id::generate_user_id;
use crate::db::models::SheetTable;
use crate::db::sheets::SheetStore;
use crate::errors::{AppError, AppResult};
use crate::models::identity::{DEFAULT_ROLE, Identity, normalize_email};
use chrono::{DateTime, TimeZone};
use std::fs;
use std::path::PathBuf;

/// Identity directory worksheet columns, in wire order.
pub const ACCOUNT_COLUMNS: [&str; 15] = [
    "email",
    "ho_username",
    "role",
    "Gen_app_id",
    "user_id",
    "LMS_app_id",
    "preferred_lang",
    "NC_date",
    "HO",
    "LMS",
    "App4",
    "App5",
    "group_id",
    "source",
    "date_merged",
];

/// Persisted login, one per config directory.
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn default_location() -> Self {
        Self::new(Config::session_file())
    }

    pub fn load(&self) -> AppResult<Option<Identity>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        let identity = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("corrupt session file: {e}")))?;
        Ok(Some(identity))
    }

    /// The logged-in identity, or a validation error asking to log in.
    pub fn require(&self) -> AppResult<Identity> {
        self.load()?.ok_or_else(|| {
            AppError::Validation("Please login first (njournal login <email>).".into())
        })
    }

    pub fn save(&self, identity: &Identity) -> AppResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(identity)
            .map_err(|e| AppError::Config(format!("cannot serialize session: {e}")))?;
        fs::write(&self.path, yaml)?;
        Ok(())
    }

    /// Returns true when a session was actually removed.
    pub fn clear(&self) -> AppResult<bool> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

pub struct AuthLogic;

impl AuthLogic {
    /// Read the identity directory. Any failure means the directory is unavailable.
    pub fn load_directory(store: &dyn SheetStore, sheet: &str) -> AppResult<SheetTable> {
        let table = store
            .read_all(sheet)
            .map_err(|e| AppError::AuthSourceUnavailable(e.to_string()))?;

        if table.column("email").is_none() {
            return Err(AppError::AuthSourceUnavailable(format!(
                "worksheet '{sheet}' has no email column"
            )));
        }
        Ok(table)
    }

    /// First directory row whose email matches `email` (already normalized).
    pub fn find_identity(table: &SheetTable, email: &str, display_column: &str) -> Option<Identity> {
        let email_col = table.column("email");
        let role_col = table.column("role");
        let name_col = table.column(display_column);

        table
            .rows
            .iter()
            .find(|row| normalize_email(SheetTable::cell(row, email_col)) == email)
            .map(|row| {
                Identity::new(
                    email,
                    SheetTable::cell(row, role_col),
                    SheetTable::cell(row, name_col),
                )
            })
    }

    pub fn login(store: &dyn SheetStore, cfg: &Config, email: &str) -> AppResult<Identity> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(AppError::Validation("Email is required.".into()));
        }

        let table = Self::load_directory(store, &cfg.accounts_sheet)?;

        Self::find_identity(&table, &email, &cfg.display_name_column).ok_or_else(|| {
            AppError::LookupNotFound(format!(
                "email {email}. Please register (njournal register {email} --name <NAME>)."
            ))
        })
    }

    /// Append a registration row for a first-time email and return its identity.
    pub fn register<Tz: TimeZone>(
        store: &dyn SheetStore,
        cfg: &Config,
        email: &str,
        name: &str,
        lang: &str,
        now: &DateTime<Tz>,
    ) -> AppResult<Identity>
    where
        Tz::Offset: std::fmt::Display,
    {
        let email = normalize_email(email);
        let name = name.trim();

        if email.is_empty() {
            return Err(AppError::Validation("Email is required.".into()));
        }
        if name.is_empty() {
            return Err(AppError::Validation("Name is required.".into()));
        }
        if !cfg.languages.iter().any(|l| l == lang) {
            return Err(AppError::Validation(format!(
                "Unsupported language '{lang}'. Choose from: {}.",
                cfg.languages.join(", ")
            )));
        }

        let table = Self::load_directory(store, &cfg.accounts_sheet)?;
        if Self::find_identity(&table, &email, &cfg.display_name_column).is_some() {
            return Err(AppError::Validation(format!(
                "{email} is already registered, use login instead."
            )));
        }

        let today = now.format("%Y-%m-%d").to_string();
        let user_id = generate_user_id(&email, now);

        let row = registration_row(&email, name, &user_id, lang, &today, &cfg.source_tag);
        store.append_row(&cfg.accounts_sheet, &row)?;

        tracing::info!(%email, %user_id, "user registered");
        Ok(Identity::new(&email, DEFAULT_ROLE, name))
    }
}

/// The 15 cells of a new directory row, in [`ACCOUNT_COLUMNS`] order.
pub fn registration_row(
    email: &str,
    name: &str,
    user_id: &str,
    lang: &str,
    today: &str,
    source_tag: &str,
) -> Vec<String> {
    vec![
        email.to_string(),
        name.to_string(),
        DEFAULT_ROLE.to_string(),
        String::new(),
        user_id.to_string(),
        String::new(),
        lang.to_string(),
        today.to_string(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        String::new(),
        source_tag.to_string(),
        today.to_string(),
    ]
}
