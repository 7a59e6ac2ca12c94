use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn yesterday() -> NaiveDate {
    today().pred_opt().unwrap_or_else(today)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Like `parse_date`, failing with `InvalidDate`.
pub fn parse_day(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day covered by a period expression.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM`, `YYYY`, or two of those joined by `:`
/// (from the start of the first to the end of the second).
pub fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((a, b)) = p.split_once(':') {
        let (from, _) = period_bounds(a)?;
        let (_, to) = period_bounds(b)?;
        if from > to {
            return Err(AppError::InvalidRange(format!(
                "period {} ends before it starts",
                p
            )));
        }
        return Ok((from, to));
    }

    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(dm) = NaiveDate::parse_from_str(&format!("{}-01", p.trim()), "%Y-%m-%d") {
        let last = last_day_of_month(dm.year(), dm.month()).ok_or_else(invalid)?;
        return Ok((dm, last));
    }

    // YYYY
    if let Ok(year) = p.trim().parse::<i32>() {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    period_bounds(&t.format("%Y-%m").to_string())
}
