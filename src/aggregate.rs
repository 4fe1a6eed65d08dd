use crate::models::{CheckIn, DayCounts, HOURS_PER_DAY, HourHistogram};
use chrono::{NaiveDate, Timelike};

pub fn daily_counts(records: &[CheckIn]) -> DayCounts {
    records.iter().fold(DayCounts::new(), |mut days, record| {
        let entry = days.entry(date_key(record.at.date())).or_default();
        *entry = entry.saturating_add(1);
        days
    })
}

pub fn hourly_histogram(records: &[CheckIn]) -> HourHistogram {
    records
        .iter()
        .fold([0; HOURS_PER_DAY], |mut hours, record| {
            let bucket = &mut hours[record.at.hour() as usize];
            *bucket = bucket.saturating_add(1);
            hours
        })
}

/// Returns `(hour, count)` of the busiest hour; the earliest hour wins ties.
pub fn peak_hour(hours: &HourHistogram) -> (u32, u64) {
    hours
        .iter()
        .enumerate()
        .fold((0, 0), |(best_hour, best_count), (hour, &count)| {
            if count > best_count {
                (hour as u32, count)
            } else {
                (best_hour, best_count)
            }
        })
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
