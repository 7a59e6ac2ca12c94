use crate::errors::{AppError, AppResult};
use crate::models::range::{DAY_KEY_FORMAT, TIMESTAMP_FORMAT};
use crate::models::Range;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRIES: &str =
    "SELECT id, start, end, day_key, project, task_type, memo FROM entries";

fn conversion_failure(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_timestamp(idx: usize, raw: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|_| conversion_failure(idx, AppError::InvalidTime(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<Range> {
    let id: i64 = row.get("id")?;
    let start_str: String = row.get("start")?;
    let end_str: String = row.get("end")?;

    let start = parse_timestamp(1, &start_str)?;
    let end = parse_timestamp(2, &end_str)?;

    // day_key is derived from start, the stored copy only serves the index
    Range::from_stored(
        id,
        start,
        end,
        row.get::<_, String>("project")?,
        row.get::<_, String>("task_type")?,
        row.get::<_, Option<String>>("memo")?.unwrap_or_default(),
    )
    .map_err(|e| conversion_failure(0, e))
}

fn collect(conn: &Connection, sql: &str, params: impl rusqlite::Params) -> AppResult<Vec<Range>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_range(conn: &Connection, r: &Range) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO entries (start, end, day_key, project, task_type, memo, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            r.start_str(),
            r.end_str(),
            r.day_key_str(),
            r.project(),
            r.task_type(),
            r.memo(),
            Local::now().to_rfc3339(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a range (all fields except id and created_at)
pub fn update_range(conn: &Connection, r: &Range) -> AppResult<()> {
    let id = r
        .id()
        .ok_or_else(|| AppError::Other("cannot update a range that was never inserted".into()))?;

    let changed = conn.execute(
        "UPDATE entries
         SET start = ?1, end = ?2, day_key = ?3,
             project = ?4, task_type = ?5, memo = ?6
         WHERE id = ?7",
        params![
            r.start_str(),
            r.end_str(),
            r.day_key_str(),
            r.project(),
            r.task_type(),
            r.memo(),
            id,
        ],
    )?;

    if changed == 0 {
        return Err(AppError::NotFound(id));
    }
    Ok(())
}

pub fn delete_range(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM entries WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

pub fn load_range(conn: &Connection, id: i64) -> AppResult<Option<Range>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRIES} WHERE id = ?1"))?;
    Ok(stmt.query_row([id], map_row).optional()?)
}

pub fn load_overlapping(
    conn: &Connection,
    exclude_id: i64,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> AppResult<Vec<Range>> {
    collect(
        conn,
        &format!("{SELECT_ENTRIES} WHERE id != ?1 AND start < ?2 AND end > ?3 ORDER BY start ASC"),
        params![
            exclude_id,
            end.format(TIMESTAMP_FORMAT).to_string(),
            start.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )
}

pub fn load_ranges_by_day(conn: &Connection, day: &NaiveDate) -> AppResult<Vec<Range>> {
    collect(
        conn,
        &format!("{SELECT_ENTRIES} WHERE day_key = ?1 ORDER BY start ASC"),
        [day.format(DAY_KEY_FORMAT).to_string()],
    )
}

pub fn load_recent(conn: &Connection, limit: usize) -> AppResult<Vec<Range>> {
    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    collect(
        conn,
        &format!("{SELECT_ENTRIES} ORDER BY start DESC LIMIT ?1"),
        [limit],
    )
}

pub fn load_ranges_between(
    conn: &Connection,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Range>> {
    collect(
        conn,
        &format!("{SELECT_ENTRIES} WHERE day_key >= ?1 AND day_key <= ?2 ORDER BY start ASC"),
        [
            from.format(DAY_KEY_FORMAT).to_string(),
            to.format(DAY_KEY_FORMAT).to_string(),
        ],
    )
}

fn load_distinct(conn: &Connection, sql: &str) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_distinct_projects(conn: &Connection) -> AppResult<Vec<String>> {
    load_distinct(conn, "SELECT DISTINCT project FROM entries ORDER BY project ASC")
}

pub fn load_distinct_task_types(conn: &Connection) -> AppResult<Vec<String>> {
    load_distinct(
        conn,
        "SELECT DISTINCT task_type FROM entries ORDER BY task_type ASC",
    )
}

pub fn count_entries(conn: &Connection) -> AppResult<i64> {
    Ok(conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?)
}
