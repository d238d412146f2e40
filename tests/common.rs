#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Isolated HOME + workbook for one CLI test.
pub struct Sandbox {
    pub home: TempDir,
    pub db: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let home = tempfile::tempdir().expect("create temp home");
        let db = home
            .path()
            .join("journal_test.sqlite")
            .to_string_lossy()
            .to_string();
        Self { home, db }
    }

    /// `njournal --db <sandbox db>` with HOME pointing into the sandbox.
    pub fn nj(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("njournal");
        cmd.env("HOME", self.home.path())
            .env("NO_COLOR", "1")
            .env_remove("NJOURNAL_LOG")
            .args(["--db", &self.db]);
        cmd
    }

    /// Initialized workbook.
    pub fn initialized() -> Self {
        let sb = Self::new();
        sb.nj().args(["--test", "init"]).assert().success();
        sb
    }

    /// Write a config file; ZIP lookups go to a closed local port.
    pub fn offline_config(&self) {
        let dir = self.home.path().join(".naturejournal");
        fs::create_dir_all(&dir).expect("config dir");
        let yaml = format!(
            "database: {}\nzip_api_url: http://127.0.0.1:9/us\nhttp_timeout_secs: 1\n",
            self.db
        );
        fs::write(dir.join("naturejournal.conf"), yaml).expect("write config");
    }

    /// Initialized workbook with a registered, logged-in user.
    pub fn logged_in() -> Self {
        let sb = Self::initialized();
        sb.offline_config();
        sb.nj()
            .args(["register", "Jane.Doe@Example.com", "--name", "Jane"])
            .assert()
            .success();
        sb
    }

    pub fn out_file(&self, name: &str) -> String {
        self.home.path().join(name).to_string_lossy().to_string()
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.home.path().join(name)
    }
}
