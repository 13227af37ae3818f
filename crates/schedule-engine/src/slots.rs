//! Free-slot computation for a single day.
//!
//! Sweeps the day's fixed events left to right and emits the gaps between
//! them, clipped to the working window.

use chrono::{Duration, NaiveTime, Timelike};

use crate::event::ScheduledEvent;
use crate::workday::WorkDay;

/// A free interval inside a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    /// Width of the slot in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Minute-of-day offset, ignoring seconds. The sweep runs on these offsets
/// so a fixed event spilling past midnight cannot wrap a `NaiveTime`.
fn minute_of_day(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

fn time_at(minute: i64, work_day: &WorkDay) -> NaiveTime {
    work_day.start() + Duration::minutes(minute - minute_of_day(work_day.start()))
}

/// Compute the ordered, non-overlapping free slots of a day.
///
/// Busy intervals are clipped to the working window and events entirely
/// outside it constrain nothing: a fixed event starting at the window start
/// produces no leading slot, one extending at or past the window end no
/// trailing slot. Overlapping fixed events merge — the cursor only ever
/// moves right, so coverage can never yield a negative-width slot.
pub fn build_free_slots(fixed: &[ScheduledEvent], work_day: &WorkDay) -> Vec<TimeSlot> {
    let day_start = minute_of_day(work_day.start());
    let day_end = minute_of_day(work_day.end());

    let mut busy: Vec<(i64, i64)> = fixed
        .iter()
        .map(|event| {
            let start = minute_of_day(event.time);
            (start, start + event.duration_minutes)
        })
        .filter(|&(start, end)| start < day_end && end > day_start)
        .map(|(start, end)| (start.max(day_start), end.min(day_end)))
        .collect();

    // Sort by start, then end: the explicit tie-break that keeps the slot
    // list deterministic when fixed events share a start time.
    busy.sort_unstable();

    let mut slots = Vec::new();
    let mut cursor = day_start;

    for (busy_start, busy_end) in busy {
        if cursor < busy_start {
            slots.push(TimeSlot {
                start: time_at(cursor, work_day),
                end: time_at(busy_start, work_day),
            });
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing slot after the last busy interval.
    if cursor < day_end {
        slots.push(TimeSlot {
            start: time_at(cursor, work_day),
            end: work_day.end(),
        });
    }

    slots
}

/// True when `slot` can hold `duration_minutes`; an exact fit qualifies.
pub fn can_fit(slot: &TimeSlot, duration_minutes: i64) -> bool {
    slot.duration_minutes() >= duration_minutes
}

/// Shrink `slot` from the left by `duration_minutes`.
///
/// Returns `None` when nothing remains — zero-width slots are never kept.
pub fn consume(slot: &TimeSlot, duration_minutes: i64) -> Option<TimeSlot> {
    if duration_minutes >= slot.duration_minutes() {
        return None;
    }
    Some(TimeSlot {
        start: slot.start + Duration::minutes(duration_minutes),
        end: slot.end,
    })
}
