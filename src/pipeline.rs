use crate::aggregate::{daily_counts, hourly_histogram, peak_hour};
use crate::calendar::build_calendar;
use crate::models::Snapshot;
use crate::records::parse_rows;
use crate::stats::build_stats;
use serde_json::Value;

pub fn ingest(year: i32, rows: &[Value]) -> Snapshot {
    let parsed = parse_rows(rows);
    let days = daily_counts(&parsed.records);
    let hourly = hourly_histogram(&parsed.records);
    let stats = build_stats(&days, peak_hour(&hourly));
    let calendar = build_calendar(year, &days);

    Snapshot {
        year,
        days,
        hourly,
        stats,
        calendar,
        discarded: parsed.discarded,
    }
}

impl Snapshot {
    pub fn empty(year: i32) -> Self {
        ingest(year, &[])
    }
}
