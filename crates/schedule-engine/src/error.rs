//! Error types for scheduling operations.

use chrono::NaiveTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    #[error("invalid work day: start {start} is not before end {end}")]
    InvalidWorkDay { start: NaiveTime, end: NaiveTime },

    #[error("event '{title}' has non-positive duration ({duration_minutes} min)")]
    InvalidEventDuration { title: String, duration_minutes: i64 },

    #[error(
        "event '{title}' needs {duration_minutes} min but the work day only has {capacity_minutes} min"
    )]
    UnschedulableEvent {
        title: String,
        duration_minutes: i64,
        capacity_minutes: i64,
    },

    #[error("event '{title}' was deferred {hops} days without finding a slot")]
    DeferralLimitExceeded { title: String, hops: u32 },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
