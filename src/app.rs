use crate::handlers;
use crate::state::AppState;
use axum::{Router, routing::get};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/snapshot", get(handlers::get_snapshot))
        .route("/api/checkins", get(handlers::get_checkins))
        .route("/api/hourly", get(handlers::get_hourly))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/calendar", get(handlers::get_calendar))
        .route("/api/days/:date", get(handlers::get_day))
        .with_state(state)
}
