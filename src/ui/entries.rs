//! Rendering of entries for the terminal and for `--json`.

use crate::errors::AppResult;
use crate::models::Range;
use crate::models::summary::Summary;
use crate::models::tags::Tags;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use serde::Serialize;

/// Flat, display-ready view of an entry.
#[derive(Debug, Clone, Serialize)]
pub struct EntryView {
    pub id: i64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub end_date: String,
    pub project: String,
    pub task_type: String,
    pub memo: String,
    pub duration_minutes: i64,
}

impl EntryView {
    pub fn from_range(r: &Range, time_format: &str) -> Self {
        Self {
            id: r.id().unwrap_or_default(),
            date: r.day_key_str(),
            start_time: r.start().format(time_format).to_string(),
            end_time: r.end().format(time_format).to_string(),
            end_date: r.end().date().format("%Y-%m-%d").to_string(),
            project: r.project().to_string(),
            task_type: r.task_type().to_string(),
            memo: r.memo().to_string(),
            duration_minutes: r.duration(),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn entries_table(ranges: &[Range], time_format: &str) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("DATE", 10),
        Column::new("START", 8),
        Column::new("END", 8),
        Column::new("DURATION", 9),
        Column::new("PROJECT", 16),
        Column::new("TASK", 14),
        Column::new("MEMO", 0),
    ]);

    for r in ranges {
        let v = EntryView::from_range(r, time_format);
        // mark entries running past midnight
        let end = if v.end_date != v.date {
            format!("{}+1", v.end_time)
        } else {
            v.end_time
        };
        table.add_row(vec![
            v.id.to_string(),
            v.date,
            v.start_time,
            end,
            mins2readable(v.duration_minutes, true),
            v.project,
            v.task_type,
            v.memo,
        ]);
    }

    table.render()
}

pub fn print_entries(title: &str, ranges: &[Range], time_format: &str) {
    println!("\n{}=== {} ==={}", CYAN, title, RESET);
    if ranges.is_empty() {
        println!("{}No entries.{}", GREY, RESET);
        return;
    }
    print!("{}", entries_table(ranges, time_format));

    let total: i64 = ranges.iter().map(Range::duration).sum();
    println!("Total: {}", mins2readable(total, false));
}

pub fn print_tags(tags: &Tags) {
    println!("{}Projects:{}", CYAN, RESET);
    for p in &tags.projects {
        println!("  - {}", p);
    }
    println!("{}Task types:{}", CYAN, RESET);
    for t in &tags.task_types {
        println!("  - {}", t);
    }
}

pub fn print_summary(s: &Summary) {
    println!("\n{}=== {} .. {} ==={}", CYAN, s.from, s.to, RESET);
    println!(
        "Entries: {} | Total: {} ({:.1} h)",
        s.entry_count,
        mins2readable(s.total_minutes, false),
        s.total_hours
    );

    let mut by_project = Table::new(vec![Column::new("PROJECT", 20), Column::new("TIME", 9)]);
    for p in &s.project_breakdown {
        by_project.add_row(vec![p.name.clone(), mins2readable(p.value, true)]);
    }
    println!("\n{}", by_project.render());

    let mut by_task = Table::new(vec![Column::new("TASK", 20), Column::new("TIME", 9)]);
    for t in &s.task_type_breakdown {
        by_task.add_row(vec![t.name.clone(), mins2readable(t.value, true)]);
    }
    println!("{}", by_task.render());

    let mut by_day = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("TIME", 9),
        Column::new("HOURS", 5),
    ]);
    for d in &s.daily_summary {
        by_day.add_row(vec![
            d.date.to_string(),
            mins2readable(d.minutes, true),
            format!("{:.1}", d.hours),
        ]);
    }
    println!("{}", by_day.render());
}
