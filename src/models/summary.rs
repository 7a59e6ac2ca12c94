use chrono::NaiveDate;
use serde::Serialize;

/// Total minutes booked under one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelTotal {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub minutes: i64,
    pub hours: f64,
}

/// Aggregated view of all entries whose day falls inside a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub project_breakdown: Vec<LabelTotal>,
    pub task_type_breakdown: Vec<LabelTotal>,
    pub daily_summary: Vec<DailyTotal>,
    pub total_minutes: i64,
    pub total_hours: f64,
    pub entry_count: usize,
}
