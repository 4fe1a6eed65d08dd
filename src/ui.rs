use crate::models::{CalendarGrid, HourHistogram, Snapshot, Stats};
use chrono::NaiveDate;
use std::fmt::Write;

const DAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

// One grid cell plus the gap after it, in pixels.
const CELL_PITCH: usize = 20;

const CHART_WIDTH: usize = 600;
const CHART_HEIGHT: usize = 180;

pub fn render_index(snapshot: &Snapshot) -> String {
    INDEX_HTML
        .replace("{{YEAR}}", &snapshot.year.to_string())
        .replace("{{MONTHS}}", &render_months(&snapshot.calendar))
        .replace("{{DAY_LABELS}}", &render_day_labels())
        .replace("{{GRID}}", &render_grid(&snapshot.calendar))
        .replace("{{STATS}}", &render_stats(&snapshot.stats))
        .replace("{{HOURLY}}", &render_hourly(&snapshot.hourly))
}

/// Tooltip form of a date, e.g. `Jan 5, 2024`.
pub fn day_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn render_months(calendar: &CalendarGrid) -> String {
    calendar.months.iter().fold(String::new(), |mut out, month| {
        let _ = write!(
            out,
            r#"<div class="month" style="width: {}px">{}</div>"#,
            month.width * CELL_PITCH,
            month.text
        );
        out
    })
}

fn render_day_labels() -> String {
    DAY_LABELS.iter().fold(String::new(), |mut out, day| {
        let _ = write!(out, r#"<div class="day-label">{day}</div>"#);
        out
    })
}

fn render_grid(calendar: &CalendarGrid) -> String {
    let mut out = String::new();
    for week in &calendar.weeks {
        out.push_str(r#"<div class="week">"#);
        for day in week {
            let class = match (day.is_current_year, day.count) {
                (false, _) => "cell outside",
                (true, 0) => "cell empty",
                (true, _) => "cell active",
            };
            let title = NaiveDate::parse_from_str(&day.date, "%Y-%m-%d")
                .ok()
                .filter(|_| day.is_current_year)
                .map(|date| format!("{}: {} check-ins", day_label(date), day.count))
                .unwrap_or_default();
            let _ = write!(
                out,
                r#"<div class="{class}" data-date="{}" title="{title}"></div>"#,
                day.date
            );
        }
        out.push_str("</div>");
    }
    out
}

fn render_stats(stats: &Stats) -> String {
    let cards = [
        ("Total Check-ins", stats.total_checkins.to_string()),
        ("Days Visited", stats.total_days_visited.to_string()),
        ("Longest Streak", format!("{} days", stats.longest_streak)),
        ("Current Streak", format!("{} days", stats.current_streak)),
        ("Average per Week", stats.average_per_week.clone()),
        (
            "Peak Hour",
            format!("{}:00 ({})", stats.peak_hour, stats.peak_hour_count),
        ),
    ];

    cards.iter().fold(String::new(), |mut out, (label, value)| {
        let _ = write!(
            out,
            r#"<div class="stat"><span class="label">{label}</span><span class="value">{value}</span></div>"#
        );
        out
    })
}

fn render_hourly(hours: &HourHistogram) -> String {
    let max = hours.iter().copied().max().unwrap_or(0).max(1);
    let slot = CHART_WIDTH / hours.len();
    let plot_height = CHART_HEIGHT - 20;

    let mut out = String::new();
    for (hour, &count) in hours.iter().enumerate() {
        let height = (count as usize * plot_height) / max as usize;
        let x = hour * slot;
        let _ = write!(
            out,
            r#"<rect class="bar" x="{}" y="{}" width="{}" height="{}" rx="4"><title>{hour}:00 - {count}</title></rect>"#,
            x + 2,
            plot_height - height,
            slot - 4,
            height
        );
        if hour % 3 == 0 {
            let _ = write!(
                out,
                r#"<text x="{}" y="{}" text-anchor="middle">{hour}:00</text>"#,
                x + slot / 2,
                CHART_HEIGHT - 4
            );
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Check-ins {{YEAR}}</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #22c55e;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #eef6ee 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(1200px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      margin: 0;
    }

    .heatmap {
      overflow-x: auto;
    }

    .months,
    .body {
      display: flex;
    }

    .months {
      margin-left: 40px;
    }

    .month {
      font-size: 0.75rem;
      color: #5f5c57;
    }

    .day-labels {
      display: flex;
      flex-direction: column;
      gap: 4px;
      width: 40px;
    }

    .day-label {
      height: 16px;
      font-size: 0.75rem;
      color: #5f5c57;
    }

    .grid {
      display: flex;
      gap: 4px;
    }

    .week {
      display: flex;
      flex-direction: column;
      gap: 4px;
    }

    .cell {
      width: 16px;
      height: 16px;
      border-radius: 3px;
    }

    .cell.outside {
      background: transparent;
    }

    .cell.empty {
      background: #ebedf0;
    }

    .cell.active {
      background: var(--accent);
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #hourly {
      width: 100%;
      height: 200px;
      display: block;
    }

    #hourly .bar {
      fill: var(--accent);
    }

    #hourly text {
      font-size: 11px;
      fill: #5f5c57;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Check-ins {{YEAR}}</h1>
    </header>

    <section class="heatmap">
      <div class="months">{{MONTHS}}</div>
      <div class="body">
        <div class="day-labels">{{DAY_LABELS}}</div>
        <div class="grid">{{GRID}}</div>
      </div>
    </section>

    <section class="panel">{{STATS}}</section>

    <section class="chart-card">
      <h2>Check-ins by Hour</h2>
      <svg id="hourly" viewBox="0 0 600 180" aria-label="Check-ins by hour" role="img">{{HOURLY}}</svg>
    </section>
  </main>
</body>
</html>
"#;
