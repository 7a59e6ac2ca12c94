use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
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

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `entries` table and its indexes.
fn create_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            start      TEXT NOT NULL,
            end        TEXT NOT NULL CHECK(end > start),
            day_key    TEXT NOT NULL,
            project    TEXT NOT NULL CHECK(length(trim(project)) > 0),
            task_type  TEXT NOT NULL CHECK(length(trim(task_type)) > 0),
            memo       TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_day_start ON entries(day_key, start);
        CREATE INDEX IF NOT EXISTS idx_entries_start_end ON entries(start, end);
        "#,
    )?;
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

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Import rows from the `time_entries` table written by the first TimeLayer
/// backend. Its timestamps carry microseconds ("YYYY-MM-DD HH:MM:SS.ffffff"),
/// only the first 19 characters are kept. The legacy table has no memo.
/// Rows with blank labels or an empty range are skipped and counted.
fn migrate_import_time_entries(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_import_time_entries";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_exists(conn, "time_entries")? {
        return Ok(()); // nothing to import
    }

    warning("Legacy time_entries table detected, importing into entries...");

    let tx = conn.unchecked_transaction()?;

    let total: i64 = tx.query_row("SELECT COUNT(*) FROM time_entries", [], |row| row.get(0))?;

    // Rows the entries constraints would reject are left behind.
    let imported = tx.execute(
        r#"
        INSERT INTO entries (start, end, day_key, project, task_type, memo, created_at)
        SELECT substr(start_time, 1, 19),
               substr(end_time, 1, 19),
               substr(start_time, 1, 10),
               trim(project),
               trim(task_type),
               '',
               datetime('now')
        FROM time_entries
        WHERE substr(end_time, 1, 19) > substr(start_time, 1, 19)
          AND length(trim(project)) > 0
          AND length(trim(task_type)) > 0
        ORDER BY start_time ASC
        "#,
        [],
    )?;

    let skipped = total - imported as i64;
    if skipped > 0 {
        warning(format!(
            "Skipped {} legacy rows with an empty project, task type or range",
            skipped
        ));
    }

    mark_applied(
        &tx,
        version,
        &format!(
            "Imported {} rows from time_entries, skipped {}",
            imported, skipped
        ),
    )?;

    tx.commit()?;

    success(format!(
        "Migration applied: {} → imported {} entries",
        version, imported
    ));

    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "entries")? {
        create_entries_table(conn)?;
        log::info!("created entries table");
    } else {
        // Indexes may be missing on databases created by hand
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_entries_day_start ON entries(day_key, start);
            CREATE INDEX IF NOT EXISTS idx_entries_start_end ON entries(start, end);
            "#,
        )?;
    }

    migrate_import_time_entries(conn)?;

    Ok(())
}
