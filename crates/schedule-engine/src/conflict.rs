//! Detect double-booked fixed commitments.
//!
//! Pairwise comparison within each date. Adjacent events (one ends exactly
//! when the next starts) are NOT overlaps. Diagnostic only — the slot
//! builder merges overlapping coverage on its own.

use chrono::Timelike;

use crate::event::ScheduledEvent;

/// A detected overlap between two fixed events on the same date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOverlap {
    pub first: ScheduledEvent,
    pub second: ScheduledEvent,
    pub overlap_minutes: i64,
}

fn interval(event: &ScheduledEvent) -> (i64, i64) {
    let start = i64::from(event.time.hour() * 60 + event.time.minute());
    (start, start + event.duration_minutes)
}

/// Find all pairs of same-date fixed events whose intervals overlap.
///
/// Two events overlap when `a.start < b.end && b.start < a.end`, measured
/// at minute resolution. The overlap width is
/// `min(a.end, b.end) - max(a.start, b.start)`.
pub fn find_fixed_overlaps(fixed: &[ScheduledEvent]) -> Vec<FixedOverlap> {
    let mut overlaps = Vec::new();

    for (i, a) in fixed.iter().enumerate() {
        for b in &fixed[i + 1..] {
            if a.date != b.date {
                continue;
            }
            let (a_start, a_end) = interval(a);
            let (b_start, b_end) = interval(b);
            if a_start < b_end && b_start < a_end {
                overlaps.push(FixedOverlap {
                    first: a.clone(),
                    second: b.clone(),
                    overlap_minutes: a_end.min(b_end) - a_start.max(b_start),
                });
            }
        }
    }

    overlaps
}
