use crate::config::Config;
use crate::core::auth::ACCOUNT_COLUMNS;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::entry::JOURNAL_COLUMNS;

pub struct InitLogic;

impl InitLogic {
    /// Create the identity directory and journal worksheets when missing.
    /// Returns the names of the worksheets actually created.
    pub fn bootstrap(pool: &DbPool, cfg: &Config) -> AppResult<Vec<String>> {
        let mut created = Vec::new();

        if pool.ensure_sheet(&cfg.accounts_sheet, &ACCOUNT_COLUMNS)? {
            created.push(cfg.accounts_sheet.clone());
        }
        if pool.ensure_sheet(&cfg.journal_sheet, &JOURNAL_COLUMNS)? {
            created.push(cfg.journal_sheet.clone());
        }

        Ok(created)
    }
}
