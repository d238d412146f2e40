//! Worksheet storage: a row-oriented table with no primary key, supporting
//! read-all and append only.

use crate::db::models::SheetTable;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Narrow contract every worksheet backend honours.
pub trait SheetStore {
    /// Header and every row of `sheet`, oldest first.
    fn read_all(&self, sheet: &str) -> AppResult<SheetTable>;

    /// Append one row at the end of `sheet`.
    fn append_row(&self, sheet: &str, cells: &[String]) -> AppResult<()>;
}

impl DbPool {
    /// Create `sheet` with `header` unless it already exists.
    /// Returns true when the worksheet was created.
    pub fn ensure_sheet(&self, sheet: &str, header: &[&str]) -> AppResult<bool> {
        if self.sheet_header(sheet)?.is_some() {
            return Ok(false);
        }

        let header_json = serde_json::to_string(header)?;
        self.conn.execute(
            "INSERT INTO worksheets (name, header, created_at) VALUES (?1, ?2, ?3)",
            params![sheet, header_json, Local::now().to_rfc3339()],
        )?;

        tracing::debug!(sheet, columns = header.len(), "worksheet created");
        Ok(true)
    }

    /// Create `sheet` from an arbitrary header (used by CSV import).
    pub fn ensure_sheet_owned(&self, sheet: &str, header: &[String]) -> AppResult<bool> {
        let refs: Vec<&str> = header.iter().map(String::as_str).collect();
        self.ensure_sheet(sheet, &refs)
    }

    pub fn sheet_header(&self, sheet: &str) -> AppResult<Option<Vec<String>>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT header FROM worksheets WHERE name = ?1",
                [sheet],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn sheet_names(&self) -> AppResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM worksheets ORDER BY name ASC")?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    pub fn row_count(&self, sheet: &str) -> AppResult<i64> {
        let n = self.conn.query_row(
            "SELECT COUNT(*) FROM sheet_rows WHERE sheet = ?1",
            [sheet],
            |row| row.get(0),
        )?;
        Ok(n)
    }
}

impl SheetStore for DbPool {
    fn read_all(&self, sheet: &str) -> AppResult<SheetTable> {
        let header = self
            .sheet_header(sheet)?
            .ok_or_else(|| AppError::LookupNotFound(format!("worksheet '{sheet}'")))?;

        let mut stmt = self
            .conn
            .prepare_cached("SELECT cells FROM sheet_rows WHERE sheet = ?1 ORDER BY id ASC")?;

        let mut rows = Vec::new();
        for raw in stmt.query_map([sheet], |row| row.get::<_, String>(0))? {
            let cells: Vec<String> = serde_json::from_str(&raw?)?;
            rows.push(cells);
        }

        tracing::debug!(sheet, rows = rows.len(), "worksheet read");
        Ok(SheetTable::new(header, rows))
    }

    fn append_row(&self, sheet: &str, cells: &[String]) -> AppResult<()> {
        let known = self
            .sheet_header(sheet)
            .map_err(|e| AppError::Append(e.to_string()))?;
        if known.is_none() {
            return Err(AppError::Append(format!("worksheet '{sheet}' does not exist")));
        }

        let cells_json = serde_json::to_string(cells)?;
        self.conn
            .execute(
                "INSERT INTO sheet_rows (sheet, cells, appended_at) VALUES (?1, ?2, ?3)",
                params![sheet, cells_json, Local::now().to_rfc3339()],
            )
            .map_err(|e| AppError::Append(e.to_string()))?;

        tracing::debug!(sheet, cells = cells.len(), "row appended");
        Ok(())
    }
}
