//! Event value records exchanged with the parsing and presentation layers.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// When an event starts within its day.
///
/// The two variants carry the whole fixed/flexible distinction: a `Fixed`
/// event is never moved by the scheduler, a `Flexible` one has no time
/// until placement assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timing {
    /// Start time pinned by the user.
    Fixed(NaiveTime),
    /// Needs automatic placement.
    Flexible,
}

/// A calendar intent, either anchored to a time or awaiting placement.
///
/// Immutable value record; every transformation the scheduler applies
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: NaiveDate,
    pub timing: Timing,
    /// Length in minutes; must be positive (rejected by the scheduler otherwise).
    pub duration_minutes: i64,
    /// Higher is more important.
    pub priority: i32,
}

impl Event {
    /// An event whose start time is pinned by the user.
    pub fn fixed(
        title: impl Into<String>,
        date: NaiveDate,
        time: NaiveTime,
        duration_minutes: i64,
        priority: i32,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            timing: Timing::Fixed(time),
            duration_minutes,
            priority,
        }
    }

    /// An event awaiting automatic placement.
    pub fn flexible(
        title: impl Into<String>,
        date: NaiveDate,
        duration_minutes: i64,
        priority: i32,
    ) -> Self {
        Self {
            title: title.into(),
            date,
            timing: Timing::Flexible,
            duration_minutes,
            priority,
        }
    }
}

/// A committed placement. Unlike [`Event`], the time is always present.
///
/// Produced by the scheduler; also accepted by the slot builder as the
/// day's fixed commitments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: i64,
    pub priority: i32,
}
