//! SQL for each table, as free functions over a borrowed connection.

pub mod annotation_ops;
pub mod edit_ops;

use chrono::{DateTime, SecondsFormat, Utc};

/// Fixed-width UTC timestamp so lexical order matches time order.
pub(crate) fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub(crate) fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
