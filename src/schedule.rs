//! Calendar alignment between a training plan and a race date
//!
//! Weeks are Monday-aligned: a week starts on Monday and Sunday is its last
//! day. Two countdown figures coexist on the plan form - a ceiling estimate
//! over raw days and an exact count of whole Monday-aligned weeks - and they
//! can legitimately disagree by one. Plan truncation only ever reads the
//! Monday-aligned count.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::plan::TrainingWeek;

/// Races closer than this fail the lead-time check.
pub const MIN_LEAD_WEEKS: i64 = 4;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
  #[error("invalid race date: {0}")]
  InvalidDate(String),
  #[error("race date must be in the future")]
  RaceDateNotInFuture,
  #[error("race date must be at least 4 weeks from today")]
  RaceDateTooSoon,
}

/// Parse the race date from the form's ISO `YYYY-MM-DD` value.
pub fn parse_race_date(raw: &str) -> Result<NaiveDate, ScheduleError> {
  NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
    .map_err(|_| ScheduleError::InvalidDate(raw.to_string()))
}

/// Monday of the week containing `date`. Sunday belongs to the week that
/// started six days earlier.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
  date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Start date of plan week `week_index`: the race date minus that many whole
/// weeks, snapped back to its Monday.
pub fn week_start_date(race_date: NaiveDate, week_index: u32) -> NaiveDate {
  monday_of(race_date - Duration::days(i64::from(week_index) * 7))
}

/// ---------------------------------------------------------------------------
/// Countdown
/// ---------------------------------------------------------------------------

/// The two countdown figures shown on the plan form. Computed independently;
/// neither is derived from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceCountdown {
  /// Ceiling of the day difference over seven: a race six days out already
  /// counts as a week away.
  pub weeks_before_race: i64,
  /// Whole Monday-aligned weeks between this week and race week.
  pub full_weeks_before_race: i64,
}

impl RaceCountdown {
  /// Count down from `today` to `race_date`.
  ///
  /// A race date that is not strictly in the future is an input error, never
  /// a negative count.
  pub fn compute(race_date: NaiveDate, today: NaiveDate) -> Result<Self, ScheduleError> {
    if race_date <= today {
      return Err(ScheduleError::RaceDateNotInFuture);
    }

    // days >= 1 here, so the ceiling stays positive
    let days = (race_date - today).num_days();
    let weeks_before_race = (days + 6) / 7;

    let monday_gap = (monday_of(race_date) - monday_of(today)).num_days();
    let full_weeks_before_race = (monday_gap / 7).max(0);

    Ok(RaceCountdown {
      weeks_before_race,
      full_weeks_before_race,
    })
  }

  /// The lead-time rule the plan form enforces: the race must be at least
  /// `MIN_LEAD_WEEKS` away on the day-based count.
  pub fn check_lead_time(&self) -> Result<(), ScheduleError> {
    if self.weeks_before_race < MIN_LEAD_WEEKS {
      return Err(ScheduleError::RaceDateTooSoon);
    }
    Ok(())
  }
}

/// ---------------------------------------------------------------------------
/// Week Scheduling
/// ---------------------------------------------------------------------------

/// A plan week paired with the calendar Monday it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledWeek {
  pub start_date: NaiveDate,
  #[serde(flatten)]
  pub week: TrainingWeek,
}

/// Attach a start date to each plan week.
pub fn schedule_weeks(plan: &[TrainingWeek], race_date: NaiveDate) -> Vec<ScheduledWeek> {
  plan
    .iter()
    .map(|week| ScheduledWeek {
      start_date: week_start_date(race_date, week.week),
      week: week.clone(),
    })
    .collect()
}

/// Consecutive scheduled weeks sharing a phase label, in plan order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseGroup {
  pub phase: String,
  pub weeks: Vec<ScheduledWeek>,
}

/// Group scheduled weeks by phase, preserving plan order.
pub fn group_by_phase(weeks: &[ScheduledWeek]) -> Vec<PhaseGroup> {
  let mut groups: Vec<PhaseGroup> = Vec::new();

  for week in weeks {
    match groups.last_mut() {
      Some(group) if group.phase == week.week.phase => group.weeks.push(week.clone()),
      _ => groups.push(PhaseGroup {
        phase: week.week.phase.clone(),
        weeks: vec![week.clone()],
      }),
    }
  }

  groups
}
