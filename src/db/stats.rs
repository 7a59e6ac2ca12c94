use crate::db::pool::DbPool;
use crate::db::queries::count_entries;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TOTAL ENTRIES
    //
    let count = count_entries(&pool.conn)?;
    println!(
        "{}• Total entries:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    //
    // 3) DAY RANGE
    //
    let first_day: Option<String> = pool
        .conn
        .query_row("SELECT MIN(day_key) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();

    let last_day: Option<String> = pool
        .conn
        .query_row("SELECT MAX(day_key) FROM entries", [], |row| row.get(0))
        .optional()?
        .flatten();

    let fmt_first = first_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_day
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Day range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) AVERAGE ENTRIES/DAY
    //
    if let (Some(f), Some(l)) = (first_day, last_day) {
        let d1 = parse_day(&f)?;
        let d2 = parse_day(&l)?;
        let days = (d2 - d1).num_days() + 1;

        let avg = count as f64 / days as f64;
        println!("{}• Average entries/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}

fn parse_day(day: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(day.to_string()))
}
