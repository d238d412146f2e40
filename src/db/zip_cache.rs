//! Persistent ZIP lookup answers, shared by every run on the same workbook.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::zip::ZipInfo;
use rusqlite::{OptionalExtension, params};

impl DbPool {
    /// Cached answer for `code` if it is younger than `ttl_secs` at `now`
    /// (unix seconds).
    ///
    /// `Some(None)` is a cached "unknown code", `None` a miss or a stale row.
    pub fn zip_answer(&self, code: &str, now: i64, ttl_secs: i64) -> AppResult<Option<Option<ZipInfo>>> {
        let row: Option<(String, i64)> = self
            .conn
            .query_row(
                "SELECT info, fetched_at FROM zip_cache WHERE code = ?1",
                [code],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        match row {
            Some((info, fetched_at)) if now - fetched_at < ttl_secs => {
                Ok(Some(serde_json::from_str(&info)?))
            }
            Some(_) => {
                tracing::debug!(zip = code, "stale zip cache row");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    /// Record a found (`Some`) or not-found (`None`) answer, replacing any older one.
    pub fn store_zip_answer(&self, code: &str, answer: Option<&ZipInfo>, fetched_at: i64) -> AppResult<()> {
        let info = serde_json::to_string(&answer)?;
        self.conn.execute(
            "INSERT OR REPLACE INTO zip_cache (code, info, fetched_at) VALUES (?1, ?2, ?3)",
            params![code, info, fetched_at],
        )?;
        Ok(())
    }
}
