//! Human-readable justification for placement decisions.
//!
//! Produced alongside the schedule, never consulted by it.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// What the scheduler did with one event on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PlacementDecision {
    /// The start time was pinned by the user; nothing was moved.
    UserFixed,
    /// Placed into the first free slot wide enough.
    AutoPlaced { slot_start: NaiveTime },
    /// No slot was wide enough; re-queued for a later day.
    Deferred { until: NaiveDate },
}

/// One placement decision, tagged with the event it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementReason {
    pub title: String,
    /// The day the decision was made for.
    pub date: NaiveDate,
    /// Committed start time; absent for deferred events.
    pub time: Option<NaiveTime>,
    pub decision: PlacementDecision,
}

impl PlacementReason {
    pub fn user_fixed(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time: Some(time),
            decision: PlacementDecision::UserFixed,
        }
    }

    /// First-fit places at the slot start, so the committed time and the
    /// slot start coincide.
    pub fn auto_placed(title: impl Into<String>, date: NaiveDate, slot_start: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time: Some(slot_start),
            decision: PlacementDecision::AutoPlaced { slot_start },
        }
    }

    pub fn deferred(title: impl Into<String>, date: NaiveDate, until: NaiveDate) -> Self {
        Self {
            title: title.into(),
            date,
            time: None,
            decision: PlacementDecision::Deferred { until },
        }
    }
}

impl fmt::Display for PlacementReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.decision {
            PlacementDecision::UserFixed => {
                write!(f, "'{}' on {}: start time set by the user", self.title, self.date)
            }
            PlacementDecision::AutoPlaced { slot_start } => write!(
                f,
                "'{}' on {}: auto-placed into the first available slot, starting {}",
                self.title, self.date, slot_start
            ),
            PlacementDecision::Deferred { until } => write!(
                f,
                "'{}' on {}: deferred to {} for lack of capacity",
                self.title, self.date, until
            ),
        }
    }
}
