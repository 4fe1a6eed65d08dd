pub mod aggregate;
pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod records;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use pipeline::ingest;
pub use state::AppState;
pub use storage::{load_rows, load_snapshot, resolve_csv_path};
