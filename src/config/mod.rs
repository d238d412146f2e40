use crate::errors::{AppError, AppResult};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_zip_api_url")]
    pub zip_api_url: String,
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
    #[serde(default = "default_accounts_sheet")]
    pub accounts_sheet: String,
    #[serde(default = "default_journal_sheet")]
    pub journal_sheet: String,
    #[serde(default = "default_display_name_column")]
    pub display_name_column: String,
    #[serde(default = "default_source_tag")]
    pub source_tag: String,
    #[serde(default = "default_activities")]
    pub activities: Vec<String>,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
}

fn default_timezone() -> String {
    "America/Los_Angeles".to_string()
}
fn default_zip_api_url() -> String {
    "https://api.zippopotam.us/us".to_string()
}
fn default_http_timeout() -> u64 {
    5
}
fn default_cache_ttl() -> u64 {
    300
}
fn default_accounts_sheet() -> String {
    "Sheet1".to_string()
}
fn default_journal_sheet() -> String {
    "Journal".to_string()
}
fn default_display_name_column() -> String {
    "ho_username".to_string()
}
fn default_source_tag() -> String {
    "Journal Entry (via CLI)".to_string()
}
fn default_activities() -> Vec<String> {
    ["Walk", "Hike", "Garden", "Other"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
fn default_languages() -> Vec<String> {
    ["en", "es", "ko", "hi"].iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            timezone: default_timezone(),
            zip_api_url: default_zip_api_url(),
            http_timeout_secs: default_http_timeout(),
            cache_ttl_secs: default_cache_ttl(),
            accounts_sheet: default_accounts_sheet(),
            journal_sheet: default_journal_sheet(),
            display_name_column: default_display_name_column(),
            source_tag: default_source_tag(),
            activities: default_activities(),
            languages: default_languages(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("naturejournal")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".naturejournal")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("naturejournal.conf")
    }

    /// Return the full path of the session file
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yaml")
    }

    /// Return the full path of the default workbook
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("naturejournal.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

        // fail early on a bad zone instead of at the first timestamp
        cfg.tz()?;
        Ok(cfg)
    }

    /// Reference time zone every timestamp is expressed in.
    pub fn tz(&self) -> AppResult<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| AppError::Config(format!("unknown timezone '{}'", self.timezone)))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    /// Initialize configuration directory and config file.
    /// Returns the workbook path the configuration points to.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path);

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(format!("cannot serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config.database)
    }
}
