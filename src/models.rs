use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const HOURS_PER_DAY: usize = 24;
pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckIn {
    pub at: NaiveDateTime,
}

/// Check-in counts keyed by `yyyy-MM-dd`.
pub type DayCounts = BTreeMap<String, u64>;

pub type HourHistogram = [u64; HOURS_PER_DAY];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub total_checkins: u64,
    pub total_days_visited: u64,
    pub longest_streak: u64,
    pub current_streak: u64,
    pub average_per_week: String,
    pub peak_hour: u32,
    pub peak_hour_count: u64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            total_checkins: 0,
            total_days_visited: 0,
            longest_streak: 0,
            current_streak: 0,
            average_per_week: "0.0".to_string(),
            peak_hour: 0,
            peak_hour_count: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub count: u64,
    pub is_current_year: bool,
}

pub type CalendarWeek = Vec<CalendarDay>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLabel {
    pub text: String,
    pub width: usize,
    pub start_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CalendarGrid {
    pub weeks: Vec<CalendarWeek>,
    pub months: Vec<MonthLabel>,
}

/// Everything derived from one load of the check-in log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub year: i32,
    pub days: DayCounts,
    pub hourly: HourHistogram,
    pub stats: Stats,
    pub calendar: CalendarGrid,
    pub discarded: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DayDetailResponse {
    pub date: String,
    pub label: String,
    pub count: u64,
    pub is_current_year: bool,
}
