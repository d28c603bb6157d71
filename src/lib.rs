//! Running pace calculator engine
//!
//! The deterministic core behind the calculator and training plan screens:
//! pace/speed conversion, the detailed distance-and-time calculator,
//! split-time prediction over the milestone ladder, and alignment of a
//! weekly plan onto calendar dates relative to a race.
//!
//! Everything here is a pure function of its explicit inputs. The UI layer
//! owns input wiring and rendering; it hands the engine raw field values and
//! displays the strings that come back. No I/O, no shared state.

pub mod pace;
pub mod plan;
pub mod schedule;
pub mod split;
pub mod timefmt;
pub mod units;
