// --- File: crates/meetline_scheduling/src/logic.rs ---
//! Slot computation for one host and one calendar day.
//!
//! The functions here are pure: rules, bookings and "now" come in as values,
//! the ordered list of bookable "HH:MM" start times comes out. Fetching is the
//! job of [`crate::service::SchedulingService`], which keeps this layer
//! deterministic and directly testable.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use meetline_common::models::{AvailabilityRule, Booking};
use tracing::debug;

/// Fixed distance between two consecutive slot candidates.
pub const SLOT_STEP_MINUTES: i64 = 30;

/// Strict half-open overlap test for `[a_start, a_end)` vs `[b_start, b_end)`.
///
/// A meeting that ends exactly when a booking starts, or starts exactly when
/// a booking ends, does not overlap: back-to-back scheduling is permitted.
pub fn spans_overlap(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Generate the accepted slot candidates for a single availability rule.
///
/// Candidates start at the rule's window start anchored on `date` and advance
/// in fixed 30-minute steps while the full meeting still fits before the
/// window end. A candidate in the past or colliding with a booking is
/// skipped, not the whole iteration: later candidates are still evaluated.
pub fn slots_for_rule(
    rule: &AvailabilityRule,
    date: NaiveDate,
    duration: Duration,
    now: NaiveDateTime,
    bookings: &[Booking],
) -> Vec<String> {
    let step = Duration::minutes(SLOT_STEP_MINUTES);
    let rule_end = date.and_time(rule.end_time);

    let mut slots = Vec::new();
    let mut candidate = date.and_time(rule.start_time);
    loop {
        let candidate_end = match candidate.checked_add_signed(duration) {
            Some(t) => t,
            None => break,
        };
        // No partial slots: the whole meeting must fit before the window end.
        if candidate_end > rule_end {
            break;
        }

        let in_past = candidate < now;
        let collides = bookings
            .iter()
            .any(|b| spans_overlap(candidate, candidate_end, b.start_time, b.end_time));

        if !in_past && !collides {
            slots.push(candidate.format("%H:%M").to_string());
        }

        candidate = match candidate.checked_add_signed(step) {
            Some(t) => t,
            None => break,
        };
    }
    slots
}

/// Compute the ordered bookable start times for one day.
///
/// Every rule is processed independently and the results are merged and
/// sorted ascending. Zero-padded "HH:MM" sorts lexicographically in
/// chronological order within one day. Duplicate times produced by
/// overlapping rules are preserved as-is.
pub fn calculate_day_slots(
    rules: &[AvailabilityRule],
    bookings: &[Booking],
    date: NaiveDate,
    duration: Duration,
    now: NaiveDateTime,
) -> Vec<String> {
    debug!(
        "Calculating slots for {} with {} rule(s) and {} booking(s)",
        date,
        rules.len(),
        bookings.len()
    );

    let mut slots: Vec<String> = rules
        .iter()
        .flat_map(|rule| slots_for_rule(rule, date, duration, now, bookings))
        .collect();
    slots.sort();
    slots
}
