//! Clock-style time rendering and free-text field parsing
//!
//! Paces and split times are stored as raw second counts and only become
//! minute/second pairs at display time. Rounding the seconds component can
//! produce 60; the carry into minutes happens here so no caller ever shows
//! an out-of-range seconds field.

use serde::{Deserialize, Serialize};

/// Shown in place of a time when there is nothing valid to show.
pub const TIME_PLACEHOLDER: &str = "--:--";

/// ---------------------------------------------------------------------------
/// Field Parsing
/// ---------------------------------------------------------------------------

/// A free-text form field failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
  #[error("not a whole number: {0}")]
  Integer(String),
  #[error("not a number: {0}")]
  Decimal(String),
}

/// Parse an optional non-negative integer field. Empty and whitespace-only
/// input means the field has not been filled in, which is distinct from an
/// explicit zero.
pub fn parse_time_field(raw: &str) -> Result<Option<u32>, FieldError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Ok(None);
  }
  trimmed
    .parse::<u32>()
    .map(Some)
    .map_err(|_| FieldError::Integer(raw.to_string()))
}

/// Parse a free-text distance field into a finite number.
pub fn parse_distance_field(raw: &str) -> Result<f64, FieldError> {
  raw
    .trim()
    .parse::<f64>()
    .ok()
    .filter(|v| v.is_finite())
    .ok_or_else(|| FieldError::Decimal(raw.to_string()))
}

/// Minute/second entry fields for a pace. `None` means the field is blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceFields {
  pub minutes: Option<u32>,
  pub seconds: Option<u32>,
}

impl PaceFields {
  pub fn new(minutes: Option<u32>, seconds: Option<u32>) -> Self {
    Self { minutes, seconds }
  }

  pub fn parse(minutes: &str, seconds: &str) -> Result<Self, FieldError> {
    Ok(Self {
      minutes: parse_time_field(minutes)?,
      seconds: parse_time_field(seconds)?,
    })
  }

  /// Neither field has been filled in yet.
  pub fn is_empty(&self) -> bool {
    self.minutes.is_none() && self.seconds.is_none()
  }

  pub fn total_seconds(&self) -> u32 {
    self.minutes.unwrap_or(0) * 60 + self.seconds.unwrap_or(0)
  }
}

/// Hour/minute/second entry fields, same blank-vs-zero distinction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFields {
  pub hours: Option<u32>,
  pub minutes: Option<u32>,
  pub seconds: Option<u32>,
}

impl TimeFields {
  pub fn new(hours: Option<u32>, minutes: Option<u32>, seconds: Option<u32>) -> Self {
    Self { hours, minutes, seconds }
  }

  pub fn parse(hours: &str, minutes: &str, seconds: &str) -> Result<Self, FieldError> {
    Ok(Self {
      hours: parse_time_field(hours)?,
      minutes: parse_time_field(minutes)?,
      seconds: parse_time_field(seconds)?,
    })
  }

  pub fn is_empty(&self) -> bool {
    self.hours.is_none() && self.minutes.is_none() && self.seconds.is_none()
  }

  pub fn total_seconds(&self) -> u32 {
    self.hours.unwrap_or(0) * 3600 + self.minutes.unwrap_or(0) * 60 + self.seconds.unwrap_or(0)
  }
}

/// ---------------------------------------------------------------------------
/// Rendering
/// ---------------------------------------------------------------------------

/// Split a raw second count into whole minutes and rounded seconds. A
/// seconds value that rounds up to 60 carries into the minutes, so the
/// seconds component is always in 0..=59.
pub fn normalize_time(total_seconds: f64) -> (u64, u32) {
  let minutes = (total_seconds / 60.0).floor() as u64;
  let seconds = (total_seconds % 60.0).round() as u32;
  if seconds == 60 {
    (minutes + 1, 0)
  } else {
    (minutes, seconds)
  }
}

/// Render a second count as `M:SS`, or `H:MM:SS` once the minutes roll past
/// an hour. Values that cannot be a time render as the placeholder.
pub fn format_time(total_seconds: f64) -> String {
  if !total_seconds.is_finite() || total_seconds < 0.0 {
    return TIME_PLACEHOLDER.to_string();
  }

  let (total_minutes, seconds) = normalize_time(total_seconds);
  let hours = total_minutes / 60;
  let minutes = total_minutes % 60;

  if hours > 0 {
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
  } else {
    format!("{}:{:02}", minutes, seconds)
  }
}

/// Render a pace as `M:SS` with no hour rollover, however large the minutes
/// get. The detailed calculator keeps this form even for very slow paces.
pub fn format_pace(total_seconds: f64) -> String {
  let (minutes, seconds) = normalize_time(total_seconds);
  format!("{}:{:02}", minutes, seconds)
}

/// Speeds display with exactly two decimals; the caller appends the unit.
pub fn format_speed(value: f64) -> String {
  format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_normalize_time() {
    assert_eq!(normalize_time(300.0), (5, 0));
    assert_eq!(normalize_time(359.4), (5, 59));
    assert_eq!(normalize_time(61.2), (1, 1));
  }

  #[test]
  fn test_normalize_time_carries_rounded_seconds() {
    // 59.7 rounds to 60 and must carry, never appear as a seconds field
    assert_eq!(normalize_time(359.7), (6, 0));
    assert_eq!(normalize_time(59.5), (1, 0));
  }

  #[test]
  fn test_format_time_placeholder() {
    assert_eq!(format_time(f64::NAN), "--:--");
    assert_eq!(format_time(f64::INFINITY), "--:--");
    assert_eq!(format_time(-1.0), "--:--");
  }

  #[test]
  fn test_format_time_minutes_and_seconds() {
    assert_eq!(format_time(0.0), "0:00");
    assert_eq!(format_time(65.0), "1:05");
    assert_eq!(format_time(359.0), "5:59");
  }

  #[test]
  fn test_format_time_hour_segment() {
    assert_eq!(format_time(3725.0), "1:02:05");
    // Carry across the hour boundary: 59:59.7 becomes a full hour
    assert_eq!(format_time(3599.7), "1:00:00");
  }

  #[test]
  fn test_format_pace_never_rolls_into_hours() {
    assert_eq!(format_pace(3900.0), "65:00");
    assert_eq!(format_pace(300.0), "5:00");
  }

  #[test]
  fn test_format_speed() {
    assert_eq!(format_speed(10.0), "10.00");
    assert_eq!(format_speed(6.2137), "6.21");
  }

  #[test]
  fn test_parse_time_field() {
    assert_eq!(parse_time_field(""), Ok(None));
    assert_eq!(parse_time_field("  "), Ok(None));
    assert_eq!(parse_time_field("7"), Ok(Some(7)));
    assert_eq!(parse_time_field(" 45 "), Ok(Some(45)));
    assert!(parse_time_field("abc").is_err());
    assert!(parse_time_field("-3").is_err());
    assert!(parse_time_field("4.5").is_err());
  }

  #[test]
  fn test_parse_distance_field() {
    assert_eq!(parse_distance_field("10"), Ok(10.0));
    assert_eq!(parse_distance_field("42.195"), Ok(42.195));
    assert!(parse_distance_field("").is_err());
    assert!(parse_distance_field("far").is_err());
    assert!(parse_distance_field("inf").is_err());
  }

  #[test]
  fn test_pace_fields() {
    let blank = PaceFields::parse("", "").unwrap();
    assert!(blank.is_empty());
    assert_eq!(blank.total_seconds(), 0);

    // A single filled field makes the pair non-empty, even at zero
    let zero = PaceFields::parse("0", "0").unwrap();
    assert!(!zero.is_empty());
    assert_eq!(zero.total_seconds(), 0);

    let six_flat = PaceFields::parse("6", "").unwrap();
    assert_eq!(six_flat.total_seconds(), 360);
  }

  #[test]
  fn test_time_fields() {
    let fields = TimeFields::parse("", "50", "").unwrap();
    assert!(!fields.is_empty());
    assert_eq!(fields.total_seconds(), 3000);

    let full = TimeFields::parse("1", "30", "15").unwrap();
    assert_eq!(full.total_seconds(), 5415);

    assert!(TimeFields::parse("", "", "").unwrap().is_empty());
  }
}
