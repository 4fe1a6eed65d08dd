use crate::errors::LoadError;
use crate::models::Snapshot;
use crate::pipeline::ingest;
use serde_json::{Map, Number, Value};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{info, warn};

pub fn resolve_csv_path() -> PathBuf {
    if let Ok(path) = env::var("CHECKINS_CSV_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/checkins.csv")
}

/// Reads the check-in log into header-keyed rows with loosely typed fields.
pub async fn load_rows(path: &Path) -> Result<Vec<Value>, LoadError> {
    let bytes = fs::read(path).await.map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    parse_csv(&bytes)
}

pub async fn load_snapshot(year: i32, path: &Path) -> Result<Snapshot, LoadError> {
    let rows = load_rows(path).await?;
    info!(entries = rows.len(), path = %path.display(), "loaded check-in log");

    let snapshot = ingest(year, &rows);
    if snapshot.days.is_empty() {
        warn!("no valid check-ins were parsed from the log");
    }
    info!(
        checkins = snapshot.stats.total_checkins,
        days = snapshot.stats.total_days_visited,
        discarded = snapshot.discarded,
        "aggregated check-ins"
    );

    Ok(snapshot)
}

pub fn parse_csv(bytes: &[u8]) -> Result<Vec<Value>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = reader.headers().map_err(LoadError::Header)?.clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                warn!(line = ?record_line(&err), "skipping unreadable CSV record: {err}");
                continue;
            }
        };

        let row: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(name, field)| (name.to_string(), typed_field(field)))
            .collect();
        rows.push(Value::Object(row));
    }

    Ok(rows)
}

fn record_line(err: &csv::Error) -> Option<u64> {
    err.position().map(|position| position.line())
}

fn typed_field(raw: &str) -> Value {
    let field = raw.trim();
    if field.is_empty() {
        return Value::Null;
    }
    if field.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if field.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(number) = field.parse::<i64>() {
        return Value::Number(number.into());
    }
    if let Some(number) = field.parse::<f64>().ok().and_then(Number::from_f64) {
        return Value::Number(number);
    }

    Value::String(raw.to_string())
}
