use crate::aggregate::date_key;
use crate::models::{
    CalendarDay, CalendarGrid, CalendarWeek, DAYS_PER_WEEK, DayCounts, MonthLabel,
};
use chrono::{Datelike, Duration, NaiveDate};
use std::iter::successors;

pub fn build_calendar(year: i32, days: &DayCounts) -> CalendarGrid {
    let starts = week_starts(year);

    let weeks = starts
        .iter()
        .map(|&start| build_week(year, start, days))
        .collect();

    CalendarGrid {
        weeks,
        months: month_labels(year, &starts),
    }
}

pub fn week_starts(year: i32) -> Vec<NaiveDate> {
    let (Some(first_day), Some(last_day)) = (
        NaiveDate::from_ymd_opt(year, 1, 1),
        NaiveDate::from_ymd_opt(year, 12, 31),
    ) else {
        return Vec::new();
    };

    let first_sunday =
        first_day - Duration::days(first_day.weekday().num_days_from_sunday() as i64);

    successors(Some(first_sunday), |start| Some(*start + Duration::weeks(1)))
        .take_while(|start| *start <= last_day)
        .collect()
}

fn build_week(year: i32, start: NaiveDate, days: &DayCounts) -> CalendarWeek {
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let key = date_key(date);
            CalendarDay {
                count: days.get(&key).copied().unwrap_or(0),
                date: key,
                is_current_year: date.year() == year,
            }
        })
        .collect()
}

// Columns ahead of the first month label get a label with empty text.
fn month_labels(year: i32, starts: &[NaiveDate]) -> Vec<MonthLabel> {
    let (_, labels) = starts.iter().enumerate().fold(
        (None::<String>, Vec::<MonthLabel>::new()),
        |(prev_month, mut labels), (index, &start)| {
            let last_day = start + Duration::days(DAYS_PER_WEEK as i64 - 1);
            let touches_year = start.year() == year || last_day.year() == year;
            let month = start.format("%b").to_string();

            let opens_label = touches_year
                && prev_month.as_deref() != Some(month.as_str())
                && start.year() == year;

            match labels.last_mut().filter(|_| !opens_label) {
                Some(last) => last.width += 1,
                None => labels.push(MonthLabel {
                    text: if opens_label { month.clone() } else { String::new() },
                    width: 1,
                    start_index: index,
                }),
            }

            let prev_month = if touches_year { Some(month) } else { prev_month };
            (prev_month, labels)
        },
    );

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[test]
    fn grid_for_2024_starts_on_the_sunday_before_new_year() {
        let grid = build_calendar(2024, &DayCounts::new());

        assert_eq!(grid.weeks.len(), 53);
        assert!(grid.weeks.iter().all(|week| week.len() == 7));

        let first = &grid.weeks[0][0];
        assert_eq!(first.date, "2023-12-31");
        assert!(!first.is_current_year);
        assert!(grid.weeks[0][1].is_current_year);

        let last_week = grid.weeks.last().expect("at least one week");
        assert_eq!(last_week[0].date, "2024-12-29");
        assert_eq!(last_week[6].date, "2025-01-04");
        assert!(last_week[2].is_current_year);
        assert!(!last_week[3].is_current_year);
    }

    #[test]
    fn week_starts_are_sundays_bracketing_the_year() {
        for year in [2020, 2021, 2022, 2023, 2024, 2025] {
            let starts = week_starts(year);
            let first = starts[0];
            let last = *starts.last().expect("at least one week");

            assert!(starts.iter().all(|start| start.weekday() == Weekday::Sun));
            assert!(first <= NaiveDate::from_ymd_opt(year, 1, 1).unwrap());
            assert!(last + Duration::days(6) >= NaiveDate::from_ymd_opt(year, 12, 31).unwrap());
        }
    }

    #[test]
    fn sunday_new_years_eve_adds_a_trailing_week() {
        // 2023 both starts and ends on a Sunday.
        let grid = build_calendar(2023, &DayCounts::new());
        assert_eq!(grid.weeks.len(), 53);
        let last_week = grid.weeks.last().unwrap();
        assert_eq!(last_week[0].date, "2023-12-31");
        assert!(last_week[0].is_current_year);
        assert!(!last_week[1].is_current_year);

        assert_eq!(grid.months[0].text, "Jan");
        assert_eq!(grid.months[0].start_index, 0);
    }

    #[test]
    fn counts_are_looked_up_per_day() {
        let mut days = DayCounts::new();
        days.insert("2024-01-02".to_string(), 3);
        days.insert("2023-12-31".to_string(), 9);

        let grid = build_calendar(2024, &days);
        assert_eq!(grid.weeks[0][2].count, 3);
        assert_eq!(grid.weeks[0][0].count, 9);
        assert_eq!(grid.weeks[0][1].count, 0);
    }

    #[test]
    fn month_labels_cover_every_week_once() {
        let grid = build_calendar(2024, &DayCounts::new());
        let months = &grid.months;

        assert_eq!(
            months[0],
            MonthLabel {
                text: String::new(),
                width: 1,
                start_index: 0
            }
        );
        assert_eq!(
            months[1],
            MonthLabel {
                text: "Jan".to_string(),
                width: 4,
                start_index: 1
            }
        );
        assert_eq!(months[2].text, "Feb");
        assert_eq!(months[2].start_index, 5);

        let texts: Vec<&str> = months.iter().skip(1).map(|label| label.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]
        );

        let total: usize = months.iter().map(|label| label.width).sum();
        assert_eq!(total, grid.weeks.len());

        for pair in months.windows(2) {
            assert_eq!(pair[0].start_index + pair[0].width, pair[1].start_index);
        }
    }

    #[test]
    fn month_widths_sum_to_week_count_for_every_year() {
        for year in 2018..=2030 {
            let grid = build_calendar(year, &DayCounts::new());
            let total: usize = grid.months.iter().map(|label| label.width).sum();
            assert_eq!(total, grid.weeks.len(), "year {year}");
        }
    }
}
