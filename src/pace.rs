//! Pace conversion and the detailed distance/time calculator
//!
//! Both calculators return records of display strings. Empty strings mean
//! the form is still waiting for input; explicit zero strings mean the
//! input parsed but described no movement. Callers render the two states
//! differently.

use serde::{Deserialize, Serialize};

use crate::timefmt::{self, PaceFields, TimeFields};
use crate::units::{CourseUnit, PaceUnit, KM_PER_MILE};

/// ---------------------------------------------------------------------------
/// Pace Converter
/// ---------------------------------------------------------------------------

/// A pace converted to the opposite unit, plus both speeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaceConversion {
  pub pace_minutes: String,
  pub pace_seconds: String,
  pub speed_kmh: String,
  pub speed_mph: String,
}

impl PaceConversion {
  fn awaiting_input() -> Self {
    Self {
      pace_minutes: String::new(),
      pace_seconds: String::new(),
      speed_kmh: String::new(),
      speed_mph: String::new(),
    }
  }

  fn zero() -> Self {
    Self {
      pace_minutes: "0".to_string(),
      pace_seconds: "00".to_string(),
      speed_kmh: "0.00".to_string(),
      speed_mph: "0.00".to_string(),
    }
  }
}

/// Convert a pace into the opposite unit and derive both speeds.
///
/// `unit` names the unit the input pace is expressed in; the converted pace
/// comes back in the other one. Speeds are two-decimal strings with no unit
/// suffix.
pub fn convert_pace(fields: &PaceFields, unit: PaceUnit) -> PaceConversion {
  if fields.is_empty() {
    return PaceConversion::awaiting_input();
  }

  let total = fields.total_seconds();
  if total == 0 {
    return PaceConversion::zero();
  }
  let total = f64::from(total);

  // Speed in the input unit is 3600 over the pace seconds; the cross speed
  // and the converted pace both go through the single km/mile constant.
  let (speed_kmh, speed_mph, converted_seconds) = match unit {
    PaceUnit::PerKilometer => {
      let kmh = 3600.0 / total;
      (kmh, kmh / KM_PER_MILE, total * KM_PER_MILE)
    }
    PaceUnit::PerMile => {
      let mph = 3600.0 / total;
      (mph * KM_PER_MILE, mph, total / KM_PER_MILE)
    }
  };

  let (minutes, seconds) = timefmt::normalize_time(converted_seconds);

  PaceConversion {
    pace_minutes: minutes.to_string(),
    pace_seconds: format!("{:02}", seconds),
    speed_kmh: timefmt::format_speed(speed_kmh),
    speed_mph: timefmt::format_speed(speed_mph),
  }
}

/// ---------------------------------------------------------------------------
/// Detailed Pace Calculator
/// ---------------------------------------------------------------------------

/// Pace in both units and both speeds for a (distance, time) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailedPace {
  pub pace_km: String,
  pub pace_mile: String,
  pub speed_kmh: String,
  pub speed_mph: String,
}

/// Work out pace and speed from a distance covered in a given time.
///
/// Returns the all-empty record unless the inputs describe a positive
/// distance covered in a positive time. Paces render strictly as `M:SS`
/// with no hour rollover.
pub fn calculate_detailed_pace(
  distance_raw: &str,
  unit: CourseUnit,
  time: &TimeFields,
) -> DetailedPace {
  let distance = match timefmt::parse_distance_field(distance_raw) {
    Ok(value) if value > 0.0 => value,
    _ => return DetailedPace::default(),
  };

  if time.is_empty() {
    return DetailedPace::default();
  }
  let total_seconds = time.total_seconds();
  if total_seconds == 0 {
    return DetailedPace::default();
  }

  let distance_km = unit.to_kilometers(distance);
  if distance_km <= 0.0 {
    return DetailedPace::default();
  }

  let total_seconds = f64::from(total_seconds);
  let total_hours = total_seconds / 3600.0;
  let speed_kmh = distance_km / total_hours;
  let speed_mph = speed_kmh / KM_PER_MILE;
  let pace_km = total_seconds / distance_km;
  let pace_mile = pace_km * KM_PER_MILE;

  DetailedPace {
    pace_km: timefmt::format_pace(pace_km),
    pace_mile: timefmt::format_pace(pace_mile),
    speed_kmh: timefmt::format_speed(speed_kmh),
    speed_mph: timefmt::format_speed(speed_mph),
  }
}
