//! Property-based tests for the scheduling loop using proptest.
//!
//! These verify invariants that should hold for *any* valid input, not just
//! the specific examples in `scheduler_tests.rs`: nothing is dropped or
//! duplicated, placements stay inside the window, and placements never
//! collide.

use chrono::{NaiveDate, NaiveTime, Timelike};
use proptest::prelude::*;
use schedule_engine::{autoschedule, Event, ScheduledEvent, WorkDay};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn t(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap()
}

/// Window 08:00-18:00, capacity 600 minutes.
fn window() -> WorkDay {
    WorkDay::new(t(8, 0), t(18, 0)).unwrap()
}

fn minute(time: NaiveTime) -> i64 {
    i64::from(time.hour() * 60 + time.minute())
}

fn collide(a: &ScheduledEvent, b: &ScheduledEvent) -> bool {
    a.date == b.date
        && minute(a.time) < minute(b.time) + b.duration_minutes
        && minute(b.time) < minute(a.time) + a.duration_minutes
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (1u32..=28).prop_map(|day| NaiveDate::from_ymd_opt(2026, 4, day).unwrap())
}

/// Flexible events with index-stamped titles so they can be tracked
/// through the run. Durations stay below capacity, so scheduling always
/// succeeds.
fn arb_flexible_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((arb_date(), 15i64..=240, 0i32..=5), 1..24).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (date, duration, priority))| {
                Event::flexible(format!("task-{i}"), date, duration, priority)
            })
            .collect()
    })
}

/// Fixed commitments wholly inside the window (start 08:00-16:00, at most
/// an hour long).
fn arb_fixed_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((arb_date(), 480i64..=960, 15i64..=60), 0..6).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (date, start, duration))| {
                let time = t((start / 60) as u32, (start % 60) as u32);
                Event::fixed(format!("busy-{i}"), date, time, duration, 1)
            })
            .collect()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Property 1: Conservation — every input event appears exactly once
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn nothing_is_dropped_or_duplicated(events in arb_flexible_events()) {
        let result = autoschedule(&events, &window()).unwrap();
        prop_assert_eq!(result.len(), events.len());

        let mut expected: Vec<(String, i64, i32)> = events
            .iter()
            .map(|e| (e.title.clone(), e.duration_minutes, e.priority))
            .collect();
        let mut actual: Vec<(String, i64, i32)> = result
            .iter()
            .map(|e| (e.title.clone(), e.duration_minutes, e.priority))
            .collect();
        expected.sort();
        actual.sort();
        prop_assert_eq!(actual, expected);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Every placement lies inside the working window
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn placements_stay_inside_the_window(events in arb_flexible_events()) {
        let result = autoschedule(&events, &window()).unwrap();
        for event in &result {
            prop_assert!(minute(event.time) >= minute(t(8, 0)));
            prop_assert!(
                minute(event.time) + event.duration_minutes <= minute(t(18, 0)),
                "event '{}' runs past the window end",
                event.title
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 3: No two placements collide
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_two_placements_collide(events in arb_flexible_events()) {
        let result = autoschedule(&events, &window()).unwrap();
        for (i, a) in result.iter().enumerate() {
            for b in &result[i + 1..] {
                prop_assert!(
                    !collide(a, b),
                    "'{}' and '{}' collide on {}",
                    a.title,
                    b.title,
                    a.date
                );
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Property 4: Determinism — the same input schedules identically
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn scheduling_is_deterministic(events in arb_flexible_events()) {
        let first = autoschedule(&events, &window()).unwrap();
        let second = autoschedule(&events, &window()).unwrap();
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 5: Auto-placements never collide with fixed commitments
//   (fixed events may collide with each other — that is input, not ours)
// ---------------------------------------------------------------------------
proptest! {
    #![proptest_config(config())]

    #[test]
    fn auto_placements_avoid_fixed_commitments(
        fixed in arb_fixed_events(),
        flexible in arb_flexible_events(),
    ) {
        let mut events = fixed;
        events.extend(flexible);
        let result = autoschedule(&events, &window()).unwrap();

        for (i, a) in result.iter().enumerate() {
            for b in &result[i + 1..] {
                let both_fixed = a.title.starts_with("busy-") && b.title.starts_with("busy-");
                if both_fixed {
                    continue;
                }
                prop_assert!(
                    !collide(a, b),
                    "'{}' and '{}' collide on {}",
                    a.title,
                    b.title,
                    a.date
                );
            }
        }
    }
}
