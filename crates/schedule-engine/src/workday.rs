//! The bounded working window placement may occur in.

use chrono::NaiveTime;

use crate::error::{Result, ScheduleError};

/// A working window shared by every day of a scheduling run.
///
/// Construction enforces `start < end`, so a `WorkDay` in hand always has
/// positive capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkDay {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkDay {
    /// # Errors
    ///
    /// Returns [`ScheduleError::InvalidWorkDay`] when `start >= end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidWorkDay { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Day capacity in minutes — the authoritative bound on what can ever
    /// be placed within a single day.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
