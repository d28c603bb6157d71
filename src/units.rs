//! Distance units and conversion constants
//!
//! Kilometers are the canonical unit: every conversion routes a distance
//! through kilometers first, and km <-> mile only ever goes through
//! `KM_PER_MILE`.

use serde::{Deserialize, Serialize};

pub const KM_PER_MILE: f64 = 1.60934;
pub const METERS_PER_FOOT: f64 = 0.3048;
pub const METERS_PER_YARD: f64 = 0.9144;

/// Named race distances, kilometer rendering
pub const MARATHON_KM: f64 = 42.195;
pub const HALF_MARATHON_KM: f64 = 21.0975;
pub const HALF_MARATHON_MIDPOINT_KM: f64 = 10.54875;

/// Named race distances, mile rendering
pub const MARATHON_MILES: f64 = 26.21875;
pub const HALF_MARATHON_MILES: f64 = 13.109375;
pub const HALF_MARATHON_MIDPOINT_MILES: f64 = 6.5546875;

/// ---------------------------------------------------------------------------
/// Pace Unit
/// ---------------------------------------------------------------------------

/// The unit a pace is expressed against. Replaces the old boolean direction
/// flag, which did not mean the same thing in every calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceUnit {
  PerKilometer,
  PerMile,
}

impl PaceUnit {
  pub fn as_str(&self) -> &'static str {
    match self {
      PaceUnit::PerKilometer => "min/km",
      PaceUnit::PerMile => "min/mile",
    }
  }

  /// The unit a conversion lands in.
  pub fn opposite(&self) -> Self {
    match self {
      PaceUnit::PerKilometer => PaceUnit::PerMile,
      PaceUnit::PerMile => PaceUnit::PerKilometer,
    }
  }
}

impl std::fmt::Display for PaceUnit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// ---------------------------------------------------------------------------
/// Split Target Units
/// ---------------------------------------------------------------------------

/// Target distance units accepted by the split predictor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceUnit {
  #[serde(rename = "m")]
  Meters,
  #[serde(rename = "km")]
  Kilometers,
  #[serde(rename = "mile")]
  Miles,
  #[serde(rename = "ft")]
  Feet,
  #[serde(rename = "yd")]
  Yards,
}

impl DistanceUnit {
  /// Convert a value in this unit to kilometers.
  pub fn to_kilometers(&self, value: f64) -> f64 {
    match self {
      DistanceUnit::Meters => value / 1000.0,
      DistanceUnit::Kilometers => value,
      DistanceUnit::Miles => value * KM_PER_MILE,
      DistanceUnit::Feet => value * METERS_PER_FOOT / 1000.0,
      DistanceUnit::Yards => value * METERS_PER_YARD / 1000.0,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      DistanceUnit::Meters => "m",
      DistanceUnit::Kilometers => "km",
      DistanceUnit::Miles => "mile",
      DistanceUnit::Feet => "ft",
      DistanceUnit::Yards => "yd",
    }
  }
}

impl std::fmt::Display for DistanceUnit {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for DistanceUnit {
  type Err = String;
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "m" => Ok(DistanceUnit::Meters),
      "km" => Ok(DistanceUnit::Kilometers),
      "mile" => Ok(DistanceUnit::Miles),
      "ft" => Ok(DistanceUnit::Feet),
      "yd" => Ok(DistanceUnit::Yards),
      _ => Err(format!("Unknown distance unit: {}", s)),
    }
  }
}

/// ---------------------------------------------------------------------------
/// Course Units (detailed calculator input)
/// ---------------------------------------------------------------------------

/// Distance units the detailed pace calculator accepts. The two race presets
/// resolve to a fixed kilometer distance; they are input sugar, not real
/// units, and nothing downstream sees them as units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseUnit {
  #[serde(rename = "km")]
  Kilometers,
  #[serde(rename = "mile")]
  Miles,
  #[serde(rename = "m")]
  Meters,
  #[serde(rename = "yard")]
  Yards,
  #[serde(rename = "half-marathon")]
  HalfMarathon,
  #[serde(rename = "marathon")]
  Marathon,
}

impl CourseUnit {
  /// Kilometer distance for a raw input value. Presets ignore the value.
  pub fn to_kilometers(&self, value: f64) -> f64 {
    match self {
      CourseUnit::Kilometers => value,
      CourseUnit::Miles => value * KM_PER_MILE,
      CourseUnit::Meters => value / 1000.0,
      CourseUnit::Yards => value * METERS_PER_YARD / 1000.0,
      CourseUnit::HalfMarathon => HALF_MARATHON_KM,
      CourseUnit::Marathon => MARATHON_KM,
    }
  }

  /// The fixed distance a preset stands for, if this is one.
  pub fn preset_kilometers(&self) -> Option<f64> {
    match self {
      CourseUnit::HalfMarathon => Some(HALF_MARATHON_KM),
      CourseUnit::Marathon => Some(MARATHON_KM),
      _ => None,
    }
  }
}
