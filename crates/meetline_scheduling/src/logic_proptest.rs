#[cfg(test)]
mod tests {
    use crate::logic::{calculate_day_slots, spans_overlap, SLOT_STEP_MINUTES};
    use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
    use meetline_common::models::{AvailabilityRule, Booking, BookingStatus};
    use proptest::prelude::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 7).unwrap()
    }

    fn distant_past() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn minutes_to_time(minutes: i64) -> NaiveTime {
        NaiveTime::from_hms_opt((minutes / 60) as u32, (minutes % 60) as u32, 0).unwrap()
    }

    // Build a rule from a start minute-of-day and a window length, clamped so
    // the window stays inside the day.
    fn make_rule(start_minutes: i64, window_minutes: i64) -> AvailabilityRule {
        let start = start_minutes.min(22 * 60);
        let end = (start + window_minutes).min(23 * 60 + 59);
        AvailabilityRule {
            id: 1,
            host_id: 1,
            day_of_week: 1,
            start_time: minutes_to_time(start),
            end_time: minutes_to_time(end),
        }
    }

    fn make_bookings(offsets: &[(i64, i64)]) -> Vec<Booking> {
        offsets
            .iter()
            .enumerate()
            .map(|(i, &(start_minutes, length_minutes))| {
                let start = start_minutes.min(22 * 60).max(0);
                let end = (start + length_minutes.max(15)).min(23 * 60 + 59);
                Booking {
                    id: i as i64 + 1,
                    host_id: 1,
                    event_type_id: None,
                    start_time: test_date().and_time(minutes_to_time(start)),
                    end_time: test_date().and_time(minutes_to_time(end)),
                    status: BookingStatus::Confirmed,
                    attendee_name: None,
                    attendee_email: None,
                }
            })
            .collect()
    }

    fn parse_slot(date: NaiveDate, slot: &str) -> NaiveDateTime {
        date.and_time(NaiveTime::parse_from_str(slot, "%H:%M").expect("slot is HH:MM"))
    }

    proptest! {
        // No returned slot may overlap any confirmed booking.
        #[test]
        fn prop_slots_never_overlap_bookings(
            start_minutes in (0i64..720).prop_map(|m| m / 30 * 30),
            window_minutes in 30i64..600,
            duration_minutes in 15i64..120,
            booking_offsets in prop::collection::vec((0i64..1320, 15i64..180), 0..5),
        ) {
            let rule = make_rule(start_minutes, window_minutes);
            let bookings = make_bookings(&booking_offsets);
            let duration = Duration::minutes(duration_minutes);

            let slots = calculate_day_slots(&[rule], &bookings, test_date(), duration, distant_past());

            for slot in &slots {
                let slot_start = parse_slot(test_date(), slot);
                let slot_end = slot_start + duration;
                for b in &bookings {
                    prop_assert!(
                        !spans_overlap(slot_start, slot_end, b.start_time, b.end_time),
                        "Slot {} to {} overlaps booking {} to {}",
                        slot_start, slot_end, b.start_time, b.end_time
                    );
                }
            }
        }

        // Every slot fits entirely inside the rule window.
        #[test]
        fn prop_slots_stay_within_rule_window(
            start_minutes in (0i64..720).prop_map(|m| m / 30 * 30),
            window_minutes in 30i64..600,
            duration_minutes in 15i64..120,
        ) {
            let rule = make_rule(start_minutes, window_minutes);
            let duration = Duration::minutes(duration_minutes);
            let rule_start = test_date().and_time(rule.start_time);
            let rule_end = test_date().and_time(rule.end_time);

            let slots = calculate_day_slots(&[rule], &[], test_date(), duration, distant_past());

            for slot in &slots {
                let slot_start = parse_slot(test_date(), slot);
                prop_assert!(slot_start >= rule_start);
                prop_assert!(slot_start + duration <= rule_end);
            }
        }

        // Candidates advance in fixed 30-minute steps from the window start,
        // and the merged output is sorted ascending.
        #[test]
        fn prop_slots_are_step_aligned_and_sorted(
            start_minutes in (0i64..720).prop_map(|m| m / 30 * 30),
            window_minutes in 30i64..600,
            duration_minutes in 15i64..120,
            booking_offsets in prop::collection::vec((0i64..1320, 15i64..180), 0..3),
        ) {
            let rule = make_rule(start_minutes, window_minutes);
            let bookings = make_bookings(&booking_offsets);
            let rule_start = test_date().and_time(rule.start_time);

            let slots = calculate_day_slots(
                &[rule],
                &bookings,
                test_date(),
                Duration::minutes(duration_minutes),
                distant_past(),
            );

            for slot in &slots {
                let offset = parse_slot(test_date(), slot) - rule_start;
                prop_assert_eq!(offset.num_minutes() % SLOT_STEP_MINUTES, 0);
            }
            let mut sorted = slots.clone();
            sorted.sort();
            prop_assert_eq!(slots, sorted);
        }

        // With no bookings and "now" in the past, the slot count is exactly
        // the number of step positions where the meeting still fits.
        #[test]
        fn prop_unobstructed_window_yields_full_grid(
            start_minutes in (0i64..720).prop_map(|m| m / 30 * 30),
            window_minutes in (30i64..600).prop_map(|m| m / 30 * 30),
            duration_minutes in 15i64..120,
        ) {
            let rule = make_rule(start_minutes, window_minutes);
            let duration = Duration::minutes(duration_minutes);
            let window = test_date().and_time(rule.end_time) - test_date().and_time(rule.start_time);

            let slots = calculate_day_slots(&[rule], &[], test_date(), duration, distant_past());

            let actual_window = window.num_minutes();
            let expected = if duration_minutes > actual_window {
                0
            } else {
                (actual_window - duration_minutes) / SLOT_STEP_MINUTES + 1
            };
            prop_assert_eq!(slots.len() as i64, expected);
        }
    }
}
