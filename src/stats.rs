use crate::models::{DayCounts, Stats};
use chrono::NaiveDate;

// Per calendar year, not per observed span.
const WEEKS_PER_YEAR: f64 = 52.0;

pub fn build_stats(days: &DayCounts, peak: (u32, u64)) -> Stats {
    let dates = visited_dates(days);
    let total_days_visited = dates.len() as u64;

    Stats {
        total_checkins: days.values().fold(0u64, |sum, count| sum.saturating_add(*count)),
        total_days_visited,
        longest_streak: longest_streak(&dates),
        current_streak: current_streak(&dates),
        average_per_week: average_per_week(total_days_visited),
        peak_hour: peak.0,
        peak_hour_count: peak.1,
    }
}

fn visited_dates(days: &DayCounts) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = days
        .keys()
        .filter_map(|key| NaiveDate::parse_from_str(key, "%Y-%m-%d").ok())
        .collect();
    dates.sort_unstable();
    dates.dedup();
    dates
}

fn longest_streak(dates: &[NaiveDate]) -> u64 {
    let mut previous: Option<NaiveDate> = None;
    let mut streak = 0u64;
    let mut longest = 0u64;

    for &date in dates {
        streak = match previous {
            Some(prev) if gap_days(prev, date) == 1 => streak + 1,
            _ => 1,
        };
        longest = longest.max(streak);
        previous = Some(date);
    }

    longest
}

fn current_streak(dates: &[NaiveDate]) -> u64 {
    let Some(&latest) = dates.last() else {
        return 0;
    };

    let mut streak = 1u64;
    let mut later = latest;
    for &earlier in dates.iter().rev().skip(1) {
        if gap_days(earlier, later) != 1 {
            break;
        }
        streak += 1;
        later = earlier;
    }

    streak
}

fn average_per_week(total_days_visited: u64) -> String {
    if total_days_visited == 0 {
        return "0.0".to_string();
    }
    let tenths = (total_days_visited as f64 * 10.0 / WEEKS_PER_YEAR).round();
    format!("{:.1}", tenths / 10.0)
}

fn gap_days(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
