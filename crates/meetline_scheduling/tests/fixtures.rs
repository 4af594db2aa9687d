//! Test fixtures for scheduling tests
//!
//! This module provides common test fixtures and factory functions
//! to create seeded stores and configuration for scheduling tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use meetline_common::models::{BookingStatus, EventType, Host};
use meetline_config::{AppConfig, SchedulingConfig, ServerConfig};
use meetline_scheduling::memory::InMemoryScheduleStore;
use std::sync::Arc;

/// A Monday far enough in the future that no candidate is in the past.
pub fn future_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 9, 2).unwrap()
}

/// A "now" long before `future_monday`.
pub fn distant_past() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn time(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").unwrap()
}

pub fn at(date: NaiveDate, s: &str) -> NaiveDateTime {
    date.and_time(time(s))
}

/// Creates a store seeded with one host ("jane-doe"), an active and an
/// inactive event type, Monday windows 09:00-12:00 and 13:00-17:00, and a
/// confirmed booking 10:00-10:30 on [`future_monday`].
pub fn seeded_store() -> (Arc<InMemoryScheduleStore>, Host, EventType) {
    let store = Arc::new(InMemoryScheduleStore::new());

    let host = store.add_host("jane-doe", "Jane Doe");
    let event_type = store.add_event_type(host.id, "intro-call", "Intro Call", 30, true);
    store.add_event_type(host.id, "retired-call", "Retired Call", 60, false);

    // Monday = 1 in the 0=Sunday civil week.
    store.add_rule(host.id, 1, time("09:00"), time("12:00"));
    store.add_rule(host.id, 1, time("13:00"), time("17:00"));

    store.seed_booking(
        host.id,
        at(future_monday(), "10:00"),
        at(future_monday(), "10:30"),
        BookingStatus::Confirmed,
    );

    (store, host, event_type)
}

/// Creates a mock AppConfig for testing
pub fn create_mock_config() -> Arc<AppConfig> {
    Arc::new(AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        },
        use_scheduling: true,
        database: None,
        scheduling: Some(SchedulingConfig {
            time_zone: Some("Europe/Zurich".to_string()),
            default_duration_minutes: Some(30),
        }),
    })
}

/// Same as [`create_mock_config`] but with the scheduling flag off.
pub fn create_disabled_config() -> Arc<AppConfig> {
    let mut config = create_mock_config().as_ref().clone();
    config.use_scheduling = false;
    Arc::new(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use meetline_common::services::SchedulingStore;

    #[tokio::test]
    async fn test_seeded_store_has_monday_rules() {
        let (store, host, _) = seeded_store();
        let rules = store.fetch_availability_rules(host.id, 1).await.unwrap();
        assert_eq!(rules.len(), 2);

        let rules_tuesday = store.fetch_availability_rules(host.id, 2).await.unwrap();
        assert!(rules_tuesday.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_store_has_confirmed_booking() {
        let (store, host, _) = seeded_store();
        let day_start = future_monday().and_hms_opt(0, 0, 0).unwrap();
        let day_end = future_monday().and_hms_opt(23, 59, 59).unwrap();
        let bookings = store.fetch_bookings(host.id, day_start, day_end).await.unwrap();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].start_time, at(future_monday(), "10:00"));
    }
}
