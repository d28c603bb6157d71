//! The static training plan table
//!
//! Plans are authored offline and shipped as one JSON document keyed by
//! race distance, target pace, and sessions per week. The engine only reads
//! it: rows are immutable, and a missing key combination means no plan is
//! available for that mix, not an error.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Race distances the plan table is keyed by.
pub const RACE_OPTIONS: [&str; 4] = ["5k", "10k", "Half Marathon", "Marathon"];

/// Sessions-per-week counts the plan table is keyed by.
pub const SESSIONS_PER_WEEK_OPTIONS: [&str; 4] = ["2", "3", "4", "5"];

/// Target pace labels the plan table is keyed by: 4:00 through 7:50 in
/// ten-second steps, plus 8:00.
pub fn pace_options() -> Vec<String> {
  let mut paces = Vec::new();
  for minutes in 4..=7 {
    for seconds in (0..60).step_by(10) {
      paces.push(format!("{}:{:02}", minutes, seconds));
    }
  }
  paces.push("8:00".to_string());
  paces
}

/// ---------------------------------------------------------------------------
/// Plan Rows
/// ---------------------------------------------------------------------------

/// A single prescribed run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
  pub session: String,
  pub description: String,
  pub terrain: String,
}

/// One plan week. `week` counts down toward the race, so the largest index
/// is furthest out. A week carries up to three sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingWeek {
  pub week: u32,
  pub phase: String,
  pub run1: Session,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub run2: Option<Session>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub run3: Option<Session>,
}

impl TrainingWeek {
  /// The week's sessions in run order.
  pub fn sessions(&self) -> Vec<&Session> {
    let mut sessions = vec![&self.run1];
    sessions.extend(self.run2.as_ref());
    sessions.extend(self.run3.as_ref());
    sessions
  }
}

/// ---------------------------------------------------------------------------
/// Lookup
/// ---------------------------------------------------------------------------

type PlanTable = HashMap<String, HashMap<String, HashMap<String, Vec<TrainingWeek>>>>;

/// The loaded plan table, keyed race -> target pace -> sessions per week.
#[derive(Debug, Clone, Default)]
pub struct PlanLibrary {
  plans: PlanTable,
}

impl PlanLibrary {
  pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
    let plans: PlanTable = serde_json::from_str(raw)?;
    Ok(Self { plans })
  }

  /// The plan for a parameter combination, or `None` when no plan has been
  /// authored for that mix.
  pub fn lookup(
    &self,
    race: &str,
    target_pace: &str,
    sessions_per_week: &str,
  ) -> Option<&[TrainingWeek]> {
    self
      .plans
      .get(race)?
      .get(target_pace)?
      .get(sessions_per_week)
      .map(|weeks| weeks.as_slice())
  }
}

/// The tail of the plan that still fits before the race: the last
/// `min(full_weeks_before_race, plan length)` weeks. Truncation reads only
/// the Monday-aligned week count.
pub fn take_available_weeks(plan: &[TrainingWeek], full_weeks_before_race: u32) -> &[TrainingWeek] {
  let weeks_to_show = (full_weeks_before_race as usize).min(plan.len());
  &plan[plan.len() - weeks_to_show..]
}
