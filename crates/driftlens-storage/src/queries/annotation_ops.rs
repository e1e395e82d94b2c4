//! Drift annotation reads and upserts, one row per calendar date.

use std::str::FromStr;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};

use driftlens_core::errors::DriftLensResult;
use driftlens_core::models::{DriftAnnotation, DriftLabel, DriftPhase};

use super::{format_timestamp, parse_timestamp};
use crate::{corrupt_row, to_storage_err};

const TABLE: &str = "drift_annotations";
const DATE_FORMAT: &str = "%Y-%m-%d";

type RawAnnotation = (String, String, Option<String>, Option<String>, String, String);

/// Insert or replace the row for `annotation.date`. `created_at` is taken
/// from the caller, which already resolved it against the existing row.
pub fn upsert_annotation(conn: &Connection, annotation: &DriftAnnotation) -> DriftLensResult<()> {
    conn.execute(
        "INSERT INTO drift_annotations (date, label, note, auto_phase, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(date) DO UPDATE SET
            label = excluded.label,
            note = excluded.note,
            auto_phase = excluded.auto_phase,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at",
        params![
            annotation.date.format(DATE_FORMAT).to_string(),
            annotation.label.as_str(),
            annotation.note,
            annotation.auto_phase.map(|p| p.as_str()),
            format_timestamp(annotation.created_at),
            format_timestamp(annotation.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_annotation(conn: &Connection, date: NaiveDate) -> DriftLensResult<Option<DriftAnnotation>> {
    let raw = conn
        .query_row(
            "SELECT date, label, note, auto_phase, created_at, updated_at
             FROM drift_annotations WHERE date = ?1",
            params![date.format(DATE_FORMAT).to_string()],
            read_raw,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;

    raw.map(decode).transpose()
}

/// Annotations dated on or after `since`, ascending.
pub fn list_since(conn: &Connection, since: NaiveDate) -> DriftLensResult<Vec<DriftAnnotation>> {
    let mut stmt = conn
        .prepare(
            "SELECT date, label, note, auto_phase, created_at, updated_at
             FROM drift_annotations WHERE date >= ?1
             ORDER BY date ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![since.format(DATE_FORMAT).to_string()], read_raw)
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut annotations = Vec::new();
    for row in rows {
        annotations.push(decode(row.map_err(|e| to_storage_err(e.to_string()))?)?);
    }
    Ok(annotations)
}

fn read_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawAnnotation> {
    Ok((
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        row.get(4)?,
        row.get(5)?,
    ))
}

fn decode(raw: RawAnnotation) -> DriftLensResult<DriftAnnotation> {
    let (date_str, label_str, note, phase_str, created_str, updated_str) = raw;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .map_err(|e| corrupt_row(TABLE, format!("date {date_str:?}: {e}")))?;
    let label = DriftLabel::from_str(&label_str)
        .map_err(|e| corrupt_row(TABLE, format!("{date_str}: {e}")))?;
    let auto_phase = phase_str
        .as_deref()
        .map(DriftPhase::from_str)
        .transpose()
        .map_err(|e| corrupt_row(TABLE, format!("{date_str}: {e}")))?;
    let created_at = parse_timestamp(&created_str)
        .ok_or_else(|| corrupt_row(TABLE, format!("{date_str}: bad created_at {created_str:?}")))?;
    let updated_at = parse_timestamp(&updated_str)
        .ok_or_else(|| corrupt_row(TABLE, format!("{date_str}: bad updated_at {updated_str:?}")))?;

    Ok(DriftAnnotation {
        date,
        label,
        note,
        auto_phase,
        created_at,
        updated_at,
    })
}
