//! The per-day scheduling loop.
//!
//! Groups events by date, converts fixed events straight into committed
//! placements, fills the gaps with flexible events first-fit in priority
//! order, and re-queues whatever did not fit onto the next day until the
//! pending queue drains.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::error::{Result, ScheduleError};
use crate::event::{Event, ScheduledEvent, Timing};
use crate::explain::PlacementReason;
use crate::overflow::defer_to_next_day;
use crate::slots::{build_free_slots, can_fit, consume};
use crate::sorter::placement_key;
use crate::workday::WorkDay;

/// Upper bound on how many times a single event may be pushed to the next
/// day. A flexible event that fits the window always lands once the input
/// dates run out, but a year of consecutive full days is a diagnosis, not
/// a schedule.
pub const MAX_DEFER_HOPS: u32 = 365;

/// A schedule plus the reasoning behind each placement.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    pub scheduled: Vec<ScheduledEvent>,
    pub decisions: Vec<PlacementReason>,
}

/// An event waiting in the day queue, tagged with its original input
/// position (the placement tie-break) and how often it has been deferred.
struct Pending {
    arrival: usize,
    hops: u32,
    event: Event,
}

/// Turn a flat set of calendar intents into committed placements.
///
/// Fixed events keep their given time; flexible events are placed
/// first-fit in priority order; whatever does not fit retries the next
/// day. The output is flat — one entry per input event, day results in
/// ascending date order. Ordering for display is the caller's concern.
///
/// See [`autoschedule_explained`] for the variant that also reports why
/// each event landed where it did.
///
/// # Errors
///
/// See [`autoschedule_explained`].
pub fn autoschedule(events: &[Event], work_day: &WorkDay) -> Result<Vec<ScheduledEvent>> {
    Ok(autoschedule_explained(events, work_day)?.scheduled)
}

/// Like [`autoschedule`], but additionally returns one [`PlacementReason`]
/// per decision made — fixed commitments, automatic placements, and every
/// deferral hop. The diagnostic layer never influences placement.
///
/// # Errors
///
/// - [`ScheduleError::InvalidEventDuration`] for any event with
///   `duration_minutes <= 0`.
/// - [`ScheduleError::UnschedulableEvent`] for a flexible event longer
///   than the working window, detected before any placement happens.
/// - [`ScheduleError::DeferralLimitExceeded`] when an event is starved
///   past [`MAX_DEFER_HOPS`].
///
/// Validation errors stop the run before any placement; no partial
/// schedule is ever returned.
pub fn autoschedule_explained(events: &[Event], work_day: &WorkDay) -> Result<ScheduleReport> {
    validate(events, work_day)?;

    // Day-keyed pending queue, owned by this call. Overflow merges into
    // the entry for the next date, so no date is ever queued twice.
    let mut queue: BTreeMap<NaiveDate, Vec<Pending>> = BTreeMap::new();
    for (arrival, event) in events.iter().enumerate() {
        queue.entry(event.date).or_default().push(Pending {
            arrival,
            hops: 0,
            event: event.clone(),
        });
    }

    let mut scheduled: Vec<ScheduledEvent> = Vec::new();
    let mut decisions: Vec<PlacementReason> = Vec::new();

    while let Some((date, day_events)) = queue.pop_first() {
        let mut fixed: Vec<ScheduledEvent> = Vec::new();
        let mut flexible: Vec<Pending> = Vec::new();

        for pending in day_events {
            match pending.event.timing {
                Timing::Fixed(time) => {
                    decisions.push(PlacementReason::user_fixed(
                        pending.event.title.clone(),
                        date,
                        time,
                    ));
                    fixed.push(ScheduledEvent {
                        title: pending.event.title,
                        date,
                        time,
                        duration_minutes: pending.event.duration_minutes,
                        priority: pending.event.priority,
                    });
                }
                Timing::Flexible => flexible.push(pending),
            }
        }

        let mut free_slots = build_free_slots(&fixed, work_day);
        flexible.sort_by_key(|pending| placement_key(&pending.event, pending.arrival));

        for pending in flexible {
            let duration = pending.event.duration_minutes;
            match free_slots.iter().position(|slot| can_fit(slot, duration)) {
                Some(i) => {
                    let slot = free_slots[i];
                    scheduled.push(ScheduledEvent {
                        title: pending.event.title.clone(),
                        date,
                        time: slot.start,
                        duration_minutes: duration,
                        priority: pending.event.priority,
                    });
                    decisions.push(PlacementReason::auto_placed(
                        pending.event.title,
                        date,
                        slot.start,
                    ));
                    match consume(&slot, duration) {
                        Some(rest) => free_slots[i] = rest,
                        None => {
                            free_slots.remove(i);
                        }
                    }
                }
                None => {
                    let hops = pending.hops + 1;
                    if hops > MAX_DEFER_HOPS {
                        return Err(ScheduleError::DeferralLimitExceeded {
                            title: pending.event.title,
                            hops,
                        });
                    }
                    let Some(next) = defer_to_next_day(&pending.event) else {
                        return Err(ScheduleError::DeferralLimitExceeded {
                            title: pending.event.title,
                            hops,
                        });
                    };
                    decisions.push(PlacementReason::deferred(next.title.clone(), date, next.date));
                    queue.entry(next.date).or_default().push(Pending {
                        arrival: pending.arrival,
                        hops,
                        event: next,
                    });
                }
            }
        }

        scheduled.append(&mut fixed);
    }

    Ok(ScheduleReport { scheduled, decisions })
}

/// Boundary validation, run before any placement.
fn validate(events: &[Event], work_day: &WorkDay) -> Result<()> {
    let capacity = work_day.duration_minutes();

    for event in events {
        if event.duration_minutes <= 0 {
            return Err(ScheduleError::InvalidEventDuration {
                title: event.title.clone(),
                duration_minutes: event.duration_minutes,
            });
        }
        // A flexible event longer than the window would otherwise cascade
        // through the day queue forever.
        if event.timing == Timing::Flexible && event.duration_minutes > capacity {
            return Err(ScheduleError::UnschedulableEvent {
                title: event.title.clone(),
                duration_minutes: event.duration_minutes,
                capacity_minutes: capacity,
            });
        }
    }

    Ok(())
}
