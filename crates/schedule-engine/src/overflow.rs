//! Next-day retry of events that did not fit.

use crate::event::{Event, Timing};

/// Re-issue an unplaced event on the following day, flexible again.
///
/// Title, duration, and priority carry over unchanged; the input is never
/// mutated. Returns `None` only when the calendar date range is exhausted.
pub fn defer_to_next_day(event: &Event) -> Option<Event> {
    Some(Event {
        title: event.title.clone(),
        date: event.date.succ_opt()?,
        timing: Timing::Flexible,
        duration_minutes: event.duration_minutes,
        priority: event.priority,
    })
}
