use crate::aggregate::date_key;
use crate::errors::AppError;
use crate::models::{CalendarGrid, DayCounts, DayDetailResponse, HourHistogram, Snapshot, Stats};
use crate::state::AppState;
use crate::ui::{day_label, render_index};
use axum::{
    Json,
    extract::{Path, State},
    response::Html,
};
use chrono::{Datelike, NaiveDate};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snapshot = state.snapshot().await;
    Html(render_index(&snapshot))
}

pub async fn get_snapshot(State(state): State<AppState>) -> Json<Snapshot> {
    Json(state.snapshot().await.as_ref().clone())
}

pub async fn get_checkins(State(state): State<AppState>) -> Json<DayCounts> {
    Json(state.snapshot().await.days.clone())
}

pub async fn get_hourly(State(state): State<AppState>) -> Json<HourHistogram> {
    Json(state.snapshot().await.hourly)
}

pub async fn get_stats(State(state): State<AppState>) -> Json<Stats> {
    Json(state.snapshot().await.stats.clone())
}

pub async fn get_calendar(State(state): State<AppState>) -> Json<CalendarGrid> {
    Json(state.snapshot().await.calendar.clone())
}

pub async fn get_day(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> Result<Json<DayDetailResponse>, AppError> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("date must be formatted as yyyy-MM-dd"))?;

    let snapshot = state.snapshot().await;
    let key = date_key(date);

    Ok(Json(DayDetailResponse {
        count: snapshot.days.get(&key).copied().unwrap_or(0),
        label: day_label(date),
        is_current_year: date.year() == snapshot.year,
        date: key,
    }))
}
