//! Split-time prediction and the milestone distance ladder
//!
//! A split is the elapsed time a pace predicts for a target distance. The
//! split screen asks for one pace and renders a table of predictions, either
//! over the fixed track distances or over the long-distance ladder built
//! here.

use serde::{Deserialize, Serialize};

use crate::timefmt::{self, PaceFields, TIME_PLACEHOLDER};
use crate::units::{
  DistanceUnit, PaceUnit, HALF_MARATHON_KM, HALF_MARATHON_MIDPOINT_KM,
  HALF_MARATHON_MIDPOINT_MILES, HALF_MARATHON_MILES, KM_PER_MILE, MARATHON_KM, MARATHON_MILES,
};

/// ---------------------------------------------------------------------------
/// Split Prediction
/// ---------------------------------------------------------------------------

/// Predicted elapsed time over `target_value` of `target_unit` at the given
/// pace.
///
/// Blank pace fields predict nothing (`--:--`); a parsed zero pace predicts
/// `0:00`. A per-mile pace over a mile target skips the kilometer hop so the
/// result only rounds once. Hour rollover is allowed here, unlike the pace
/// renderings.
pub fn predict_split(
  fields: &PaceFields,
  unit: PaceUnit,
  target_value: f64,
  target_unit: DistanceUnit,
) -> String {
  if fields.is_empty() {
    return TIME_PLACEHOLDER.to_string();
  }

  let pace_seconds = fields.total_seconds();
  if pace_seconds == 0 {
    return "0:00".to_string();
  }
  let pace_seconds = f64::from(pace_seconds);

  let total_seconds = match unit {
    PaceUnit::PerKilometer => pace_seconds * target_unit.to_kilometers(target_value),
    PaceUnit::PerMile => match target_unit {
      DistanceUnit::Miles => pace_seconds * target_value,
      _ => (pace_seconds / KM_PER_MILE) * target_unit.to_kilometers(target_value),
    },
  };

  timefmt::format_time(total_seconds)
}

/// ---------------------------------------------------------------------------
/// Distance Ladder
/// ---------------------------------------------------------------------------

/// Which unit family the long-distance ladder is built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LadderUnit {
  Kilometers,
  Miles,
}

impl LadderUnit {
  fn unit_label(&self) -> &'static str {
    match self {
      LadderUnit::Kilometers => "km",
      LadderUnit::Miles => "mile",
    }
  }

  /// Integer markers run from 1 up to the marathon distance, rounded down.
  fn marker_count(&self) -> u32 {
    match self {
      LadderUnit::Kilometers => 42,
      LadderUnit::Miles => 26,
    }
  }

  fn race_points(&self) -> [(f64, &'static str); 3] {
    match self {
      LadderUnit::Kilometers => [
        (HALF_MARATHON_MIDPOINT_KM, "Mid point of Half Marathon"),
        (HALF_MARATHON_KM, "Half Marathon"),
        (MARATHON_KM, "Marathon"),
      ],
      LadderUnit::Miles => [
        (HALF_MARATHON_MIDPOINT_MILES, "Mid point of Half Marathon"),
        (HALF_MARATHON_MILES, "Half Marathon"),
        (MARATHON_MILES, "Marathon"),
      ],
    }
  }

  /// The split-target unit a ladder distance is measured in.
  pub fn distance_unit(&self) -> DistanceUnit {
    match self {
      LadderUnit::Kilometers => DistanceUnit::Kilometers,
      LadderUnit::Miles => DistanceUnit::Miles,
    }
  }
}

/// One reference distance in the ladder. Special points are the named race
/// distances; the rest are plain integer markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestonePoint {
  pub distance: f64,
  pub label: String,
  pub unit: LadderUnit,
  pub special: bool,
}

/// Build the sorted, deduplicated milestone list for one unit family:
/// integer markers up to the marathon plus the three named race distances.
pub fn ladder(unit: LadderUnit) -> Vec<MilestonePoint> {
  let label_unit = unit.unit_label();

  let mut points: Vec<MilestonePoint> = (1..=unit.marker_count())
    .map(|n| MilestonePoint {
      distance: f64::from(n),
      label: format!("{} {}", n, label_unit),
      unit,
      special: false,
    })
    .collect();

  for (distance, name) in unit.race_points() {
    points.push(MilestonePoint {
      distance,
      label: format!("{} ({:.2} {})", name, distance, label_unit),
      unit,
      special: true,
    });
  }

  points.sort_by(|a, b| a.distance.total_cmp(&b.distance));
  dedupe(points)
}

/// Collapse points that agree at 3-decimal precision. The earlier point
/// keeps its position; a named race distance wins the label and flag over a
/// plain marker it collides with.
fn dedupe(points: Vec<MilestonePoint>) -> Vec<MilestonePoint> {
  let mut deduped: Vec<MilestonePoint> = Vec::with_capacity(points.len());

  for point in points {
    match deduped.iter_mut().find(|p| same_distance(p.distance, point.distance)) {
      None => deduped.push(point),
      Some(existing) => {
        if point.special && !existing.special {
          existing.label = point.label;
          existing.special = true;
        }
      }
    }
  }

  deduped
}

fn same_distance(a: f64, b: f64) -> bool {
  format!("{:.3}", a) == format!("{:.3}", b)
}

/// ---------------------------------------------------------------------------
/// Split Tables
/// ---------------------------------------------------------------------------

/// Track split distances, meters.
pub const TRACK_DISTANCES_M: [u32; 18] = [
  50, 60, 100, 110, 200, 300, 400, 500, 600, 700, 800, 900, 1000, 1100, 1200, 1300, 1400, 1500,
];

/// One row of a distance -> split-time table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitRow {
  pub label: String,
  pub split_time: String,
}

/// Predict one split per ladder row.
pub fn split_table(fields: &PaceFields, unit: PaceUnit, points: &[MilestonePoint]) -> Vec<SplitRow> {
  points
    .iter()
    .map(|point| SplitRow {
      label: point.label.clone(),
      split_time: predict_split(fields, unit, point.distance, point.unit.distance_unit()),
    })
    .collect()
}

/// Predict one split per track distance.
pub fn track_split_table(fields: &PaceFields, unit: PaceUnit) -> Vec<SplitRow> {
  TRACK_DISTANCES_M
    .iter()
    .map(|&meters| SplitRow {
      label: format!("{} m", meters),
      split_time: predict_split(fields, unit, f64::from(meters), DistanceUnit::Meters),
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn pace(minutes: u32, seconds: u32) -> PaceFields {
    PaceFields::new(Some(minutes), Some(seconds))
  }

  /// Clock string back to seconds, for ordering checks.
  fn clock_seconds(s: &str) -> u64 {
    let parts: Vec<u64> = s.split(':').map(|p| p.parse().unwrap()).collect();
    match parts.len() {
      3 => parts[0] * 3600 + parts[1] * 60 + parts[2],
      2 => parts[0] * 60 + parts[1],
      _ => panic!("unexpected clock string: {}", s),
    }
  }

  #[test]
  fn test_split_400m_at_five_per_km() {
    let result = predict_split(&pace(5, 0), PaceUnit::PerKilometer, 400.0, DistanceUnit::Meters);
    assert_eq!(result, "2:00");
  }

  #[test]
  fn test_split_sentinels() {
    let blank = PaceFields::default();
    assert_eq!(
      predict_split(&blank, PaceUnit::PerKilometer, 400.0, DistanceUnit::Meters),
      "--:--"
    );
    assert_eq!(
      predict_split(&pace(0, 0), PaceUnit::PerKilometer, 400.0, DistanceUnit::Meters),
      "0:00"
    );
  }

  #[test]
  fn test_split_mile_target_uses_per_mile_pace_directly() {
    // 6:00/mile over 2 miles is exactly 12:00; no kilometer hop involved
    let result = predict_split(&pace(6, 0), PaceUnit::PerMile, 2.0, DistanceUnit::Miles);
    assert_eq!(result, "12:00");
  }

  #[test]
  fn test_split_per_mile_pace_over_km_target() {
    // 8:03/mile is 483 / 1.60934 = 300.12 s/km -> 5:00 over 1 km
    let result = predict_split(&pace(8, 3), PaceUnit::PerMile, 1.0, DistanceUnit::Kilometers);
    assert_eq!(result, "5:00");
  }

  #[test]
  fn test_split_marathon_rolls_into_hours() {
    // 5:00/km over the marathon: 300 * 42.195 = 12658.5 -> 3:30:59
    let result = predict_split(
      &pace(5, 0),
      PaceUnit::PerKilometer,
      MARATHON_KM,
      DistanceUnit::Kilometers,
    );
    assert_eq!(result, "3:30:59");
  }

  #[test]
  fn test_split_degenerate_targets() {
    let five = pace(5, 0);
    assert_eq!(
      predict_split(&five, PaceUnit::PerKilometer, f64::NAN, DistanceUnit::Kilometers),
      "--:--"
    );
    assert_eq!(
      predict_split(&five, PaceUnit::PerKilometer, -3.0, DistanceUnit::Kilometers),
      "--:--"
    );
    assert_eq!(
      predict_split(&five, PaceUnit::PerKilometer, 0.0, DistanceUnit::Kilometers),
      "0:00"
    );
  }

  #[test]
  fn test_split_monotonic_over_ladder() {
    let five = pace(5, 0);
    for unit in [LadderUnit::Kilometers, LadderUnit::Miles] {
      let rows = split_table(&five, PaceUnit::PerKilometer, &ladder(unit));
      let mut previous = 0;
      for row in rows {
        let seconds = clock_seconds(&row.split_time);
        assert!(seconds >= previous, "split shrank at {}", row.label);
        previous = seconds;
      }
    }
  }

  #[test]
  fn test_ladder_km_keeps_race_points_distinct() {
    let points = ladder(LadderUnit::Kilometers);

    // 42 integer markers + 3 race points, no collisions at 3 decimals
    assert_eq!(points.len(), 45);

    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    assert!(labels.contains(&"21 km"));
    assert!(labels.contains(&"Half Marathon (21.10 km)"));
    assert!(labels.contains(&"42 km"));
    assert!(labels.contains(&"Marathon (42.20 km)"));
    assert!(labels.contains(&"Mid point of Half Marathon (10.55 km)"));
  }

  #[test]
  fn test_ladder_miles() {
    let points = ladder(LadderUnit::Miles);
    assert_eq!(points.len(), 29);

    let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    assert!(labels.contains(&"Half Marathon (13.11 mile)"));
    assert!(labels.contains(&"Marathon (26.22 mile)"));
  }

  #[test]
  fn test_ladder_sorted_with_no_near_duplicates() {
    for unit in [LadderUnit::Kilometers, LadderUnit::Miles] {
      let points = ladder(unit);
      for pair in points.windows(2) {
        assert!(
          pair[1].distance - pair[0].distance >= 0.001,
          "{} and {} too close",
          pair[0].label,
          pair[1].label
        );
      }
    }
  }

  #[test]
  fn test_dedupe_special_label_wins() {
    let unit = LadderUnit::Kilometers;
    let marker = MilestonePoint {
      distance: 21.0,
      label: "21 km".to_string(),
      unit,
      special: false,
    };
    let race = MilestonePoint {
      // Collides with the marker at 3-decimal precision
      distance: 21.0004,
      label: "Race Day (21.00 km)".to_string(),
      unit,
      special: true,
    };

    let deduped = dedupe(vec![marker, race]);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].distance, 21.0);
    assert_eq!(deduped[0].label, "Race Day (21.00 km)");
    assert!(deduped[0].special);
  }

  #[test]
  fn test_dedupe_keeps_first_special() {
    let unit = LadderUnit::Kilometers;
    let race = MilestonePoint {
      distance: 21.0,
      label: "Race Day (21.00 km)".to_string(),
      unit,
      special: true,
    };
    let marker = MilestonePoint {
      distance: 21.0002,
      label: "21 km".to_string(),
      unit,
      special: false,
    };

    let deduped = dedupe(vec![race, marker]);
    assert_eq!(deduped.len(), 1);
    assert_eq!(deduped[0].label, "Race Day (21.00 km)");
  }

  #[test]
  fn test_track_table() {
    let rows = track_split_table(&pace(5, 0), PaceUnit::PerKilometer);
    assert_eq!(rows.len(), TRACK_DISTANCES_M.len());
    assert_eq!(rows[0].label, "50 m");
    assert_eq!(rows[0].split_time, "0:15");
    assert_eq!(rows.last().unwrap().label, "1500 m");
    assert_eq!(rows.last().unwrap().split_time, "7:30");
  }
}
