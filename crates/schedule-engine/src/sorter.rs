//! Placement ordering for flexible events.

use std::cmp::Reverse;

use crate::event::Event;

/// Sort key for flexible events awaiting placement.
///
/// Priority descending, then duration descending — placing long events
/// first limits the fragmentation that would strand them behind short
/// ones — then the caller-assigned arrival ordinal. The ordinal makes ties
/// part of the contract instead of a sort-stability accident.
pub fn placement_key(event: &Event, arrival: usize) -> (Reverse<i32>, Reverse<i64>, usize) {
    (
        Reverse(event.priority),
        Reverse(event.duration_minutes),
        arrival,
    )
}
