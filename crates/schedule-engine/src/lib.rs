//! # schedule-engine
//!
//! Deterministic autoscheduling for day planners: turns a flat list of
//! calendar intents — each either anchored to a time or flexible — into a
//! per-day timetable inside a bounded working window, deferring whatever
//! does not fit to the next day.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{NaiveDate, NaiveTime};
//! use schedule_engine::{autoschedule, Event, WorkDay};
//!
//! let work_day = WorkDay::new(
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
//! )
//! .unwrap();
//!
//! let day = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
//! let events = vec![
//!     Event::fixed("Standup", day, NaiveTime::from_hms_opt(12, 0, 0).unwrap(), 60, 1),
//!     Event::flexible("Deep work", day, 90, 3),
//! ];
//!
//! let scheduled = autoschedule(&events, &work_day).unwrap();
//! // "Deep work" lands in the first free slot, before the standup.
//! assert_eq!(scheduled[0].time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
//! ```
//!
//! ## Modules
//!
//! - [`workday`] — the bounded working window
//! - [`event`] — event value records (fixed/flexible in, committed out)
//! - [`slots`] — free-slot computation for a single day
//! - [`sorter`] — placement ordering for flexible events
//! - [`overflow`] — next-day retry of events that did not fit
//! - [`scheduler`] — the per-day loop tying it all together
//! - [`explain`] — human-readable placement justifications
//! - [`conflict`] — double-booking report for fixed commitments
//! - [`error`] — error types

pub mod conflict;
pub mod error;
pub mod event;
pub mod explain;
pub mod overflow;
pub mod scheduler;
pub mod slots;
pub mod sorter;
pub mod workday;

pub use conflict::{find_fixed_overlaps, FixedOverlap};
pub use error::ScheduleError;
pub use event::{Event, ScheduledEvent, Timing};
pub use explain::{PlacementDecision, PlacementReason};
pub use overflow::defer_to_next_day;
pub use scheduler::{autoschedule, autoschedule_explained, ScheduleReport, MAX_DEFER_HOPS};
pub use slots::{build_free_slots, can_fit, consume, TimeSlot};
pub use workday::WorkDay;
