//! Validation and construction of annotation upserts.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};

use driftlens_core::errors::ValidationError;
use driftlens_core::models::{AnnotationInput, DriftAnnotation, DriftLabel, DriftPhase};

/// Parse a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let invalid = || ValidationError::InvalidDate {
        value: value.to_string(),
    };
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}

/// Validate `input` and build the annotation to store.
///
/// `existing` is the stored annotation for the same date, if any; its
/// `created_at` is kept. Nothing is returned on invalid input, so callers
/// cannot write a partial record.
pub fn upsert_annotation(
    input: &AnnotationInput,
    existing: Option<&DriftAnnotation>,
    now: DateTime<Utc>,
    max_note_chars: usize,
) -> Result<DriftAnnotation, ValidationError> {
    let date = parse_date(&input.date)?;
    let label = DriftLabel::from_str(&input.label)?;
    let auto_phase = input
        .auto_phase
        .as_deref()
        .map(DriftPhase::from_str)
        .transpose()?;

    let note = match input.note.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => {
            let chars = text.chars().count();
            if chars > max_note_chars {
                return Err(ValidationError::NoteTooLong {
                    chars,
                    limit: max_note_chars,
                });
            }
            Some(text.to_string())
        }
        _ => None,
    };

    let created_at = existing
        .filter(|a| a.date == date)
        .map(|a| a.created_at)
        .unwrap_or(now);

    Ok(DriftAnnotation {
        date,
        label,
        note,
        auto_phase,
        created_at,
        updated_at: now,
    })
}
