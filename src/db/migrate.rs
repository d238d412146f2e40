use rusqlite::{Connection, OptionalExtension, Result};

const WORKBOOK_SCHEMA_VERSION: &str = "20250301_0001_workbook_sheets";
const ZIP_CACHE_VERSION: &str = "20250315_0002_zip_cache";

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the worksheet tables.
///
/// `sheet_rows.id` is the append order of a worksheet; readers rely on it
/// to know which row is the most recent one.
fn create_sheet_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS worksheets (
            name       TEXT PRIMARY KEY,
            header     TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS sheet_rows (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            sheet       TEXT NOT NULL REFERENCES worksheets(name),
            cells       TEXT NOT NULL,
            appended_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_sheet_rows_sheet ON sheet_rows(sheet, id);
        "#,
    )?;
    Ok(())
}

/// Create the ZIP lookup cache.
///
/// `info` is the JSON answer, `null` for an unknown code; `fetched_at` is a
/// unix timestamp compared against the configured TTL on read.
fn create_zip_cache_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS zip_cache (
            code       TEXT PRIMARY KEY,
            info       TEXT NOT NULL,
            fetched_at INTEGER NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    tracing::debug!(version, "migration applied");
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !migration_applied(conn, WORKBOOK_SCHEMA_VERSION)? {
        create_sheet_tables(conn)?;
        mark_applied(conn, WORKBOOK_SCHEMA_VERSION, "Created worksheet tables")?;
    }

    if !migration_applied(conn, ZIP_CACHE_VERSION)? {
        create_zip_cache_table(conn)?;
        mark_applied(conn, ZIP_CACHE_VERSION, "Created ZIP lookup cache")?;
    }

    Ok(())
}
