use crate::models::CheckIn;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

pub const TIMESTAMP_FIELD: &str = "timestamp";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidRow {
    #[error("row is not an object")]
    NotAnObject,
    #[error("row has no timestamp")]
    MissingTimestamp,
    #[error("timestamp is not a string: {0}")]
    TimestampNotString(String),
    #[error("invalid timestamp: {0}")]
    UnparseableTimestamp(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowParse {
    Valid(CheckIn),
    Invalid(InvalidRow),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    pub records: Vec<CheckIn>,
    pub discarded: usize,
}

pub fn parse_row(row: &Value) -> RowParse {
    let Some(fields) = row.as_object() else {
        return RowParse::Invalid(InvalidRow::NotAnObject);
    };

    let raw = match fields.get(TIMESTAMP_FIELD) {
        None | Some(Value::Null) => return RowParse::Invalid(InvalidRow::MissingTimestamp),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            return RowParse::Invalid(InvalidRow::MissingTimestamp);
        }
        Some(Value::String(raw)) => raw,
        Some(other) => {
            return RowParse::Invalid(InvalidRow::TimestampNotString(other.to_string()));
        }
    };

    match parse_timestamp(raw) {
        Some(at) => RowParse::Valid(CheckIn { at }),
        None => RowParse::Invalid(InvalidRow::UnparseableTimestamp(raw.clone())),
    }
}

pub fn parse_rows(rows: &[Value]) -> ParsedRecords {
    rows.iter()
        .fold(ParsedRecords::default(), |mut parsed, row| {
            match parse_row(row) {
                RowParse::Valid(record) => parsed.records.push(record),
                RowParse::Invalid(reason) => {
                    warn!(%reason, row = %row, "discarding check-in row");
                    parsed.discarded += 1;
                }
            }
            parsed
        })
}

// Offsets are converted to local time; naive values are already local.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Some(at) = DateTime::parse_from_rfc3339(raw)
        .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .ok()
    {
        return Some(at.with_timezone(&Local).naive_local());
    }

    if let Some(at) = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
    {
        return Some(at);
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;
    use serde_json::json;

    #[test]
    fn accepts_naive_iso_timestamps() {
        let parsed = parse_row(&json!({ "timestamp": "2024-01-02T09:15:00" }));
        let RowParse::Valid(record) = parsed else {
            panic!("expected valid row, got {parsed:?}");
        };
        assert_eq!(record.at.date().to_string(), "2024-01-02");
        assert_eq!(record.at.hour(), 9);
    }

    #[test]
    fn accepts_space_separated_and_date_only_forms() {
        assert_eq!(
            parse_timestamp("2024-05-06 18:30:00").map(|at| at.hour()),
            Some(18)
        );
        assert_eq!(
            parse_timestamp("2024-05-06").map(|at| at.to_string()),
            Some("2024-05-06 00:00:00".to_string())
        );
        assert!(parse_timestamp("2024-05-06T07:00:00Z").is_some());
    }

    #[test]
    fn accepts_offsets_without_colon() {
        let compact = parse_timestamp("2024-01-01T09:00:00+0000");
        assert!(compact.is_some());
        assert_eq!(compact, parse_timestamp("2024-01-01T09:00:00+00:00"));
        assert_eq!(
            parse_timestamp("2024-01-01T09:00:00.250-0500"),
            parse_timestamp("2024-01-01T14:00:00.250Z")
        );
    }

    #[test]
    fn rejects_malformed_rows() {
        assert_eq!(
            parse_row(&json!(null)),
            RowParse::Invalid(InvalidRow::NotAnObject)
        );
        assert_eq!(
            parse_row(&json!({ "timestamp": null })),
            RowParse::Invalid(InvalidRow::MissingTimestamp)
        );
        assert_eq!(
            parse_row(&json!({ "when": "2024-01-01T00:00:00" })),
            RowParse::Invalid(InvalidRow::MissingTimestamp)
        );
        assert_eq!(
            parse_row(&json!({ "timestamp": "" })),
            RowParse::Invalid(InvalidRow::MissingTimestamp)
        );
        assert_eq!(
            parse_row(&json!({ "timestamp": 20240101 })),
            RowParse::Invalid(InvalidRow::TimestampNotString("20240101".to_string()))
        );
        assert_eq!(
            parse_row(&json!({ "timestamp": "2024-13-45T99:00:00" })),
            RowParse::Invalid(InvalidRow::UnparseableTimestamp(
                "2024-13-45T99:00:00".to_string()
            ))
        );
    }

    #[test]
    fn parse_rows_counts_discards_and_keeps_going() {
        let rows = vec![
            json!({ "timestamp": "2024-01-01T09:00:00" }),
            json!({ "timestamp": null }),
            json!("not a row"),
            json!({ "timestamp": "2024-01-03T09:00:00", "location": "gym" }),
        ];

        let parsed = parse_rows(&rows);
        assert_eq!(parsed.records.len(), 2);
        assert_eq!(parsed.discarded, 2);
    }
}
