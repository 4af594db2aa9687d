// --- File: crates/meetline_scheduling/src/service.rs ---
//! Orchestration around the pure slot computation.
//!
//! The service owns the two store fetches (rules, bookings) and the clock.
//! A fetch failure degrades to an empty slot list: "no slots available" is a
//! safe, non-destructive default for a scheduling UI, and the failure itself
//! is logged for operational visibility.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use meetline_common::services::{BoxedError, SchedulingStore};
use meetline_config::AppConfig;
use tracing::{error, warn};

use crate::logic::calculate_day_slots;

/// Computes available slots for a host on a given day.
pub struct SchedulingService {
    store: Arc<dyn SchedulingStore<Error = BoxedError>>,
    time_zone: Tz,
}

impl SchedulingService {
    /// Create a new scheduling service over the given store, using wall-clock
    /// time in `time_zone` to decide which candidates are already in the past.
    pub fn new(store: Arc<dyn SchedulingStore<Error = BoxedError>>, time_zone: Tz) -> Self {
        Self { store, time_zone }
    }

    /// Create a service with the time zone taken from the app configuration,
    /// falling back to Europe/Zurich when absent or unparseable.
    pub fn from_config(store: Arc<dyn SchedulingStore<Error = BoxedError>>, config: &AppConfig) -> Self {
        let time_zone = config
            .scheduling
            .as_ref()
            .and_then(|s| s.time_zone.as_deref())
            .map(|name| {
                Tz::from_str(name).unwrap_or_else(|_| {
                    warn!("Unknown time zone '{}', falling back to Europe/Zurich", name);
                    Tz::Europe__Zurich
                })
            })
            .unwrap_or(Tz::Europe__Zurich);
        Self::new(store, time_zone)
    }

    /// The time zone this service interprets wall-clock rules in.
    pub fn time_zone(&self) -> Tz {
        self.time_zone
    }

    /// Compute the ordered bookable "HH:MM" start times for `host_id` on
    /// `date` for a meeting of `duration_minutes`, relative to the current
    /// instant in the configured zone.
    pub async fn available_slots(
        &self,
        host_id: i64,
        date: NaiveDate,
        duration_minutes: i64,
    ) -> Vec<String> {
        let now = Utc::now().with_timezone(&self.time_zone).naive_local();
        self.available_slots_at(host_id, date, duration_minutes, now)
            .await
    }

    /// Same as [`available_slots`](Self::available_slots) but with an
    /// explicit "now", so callers and tests control the clock.
    pub async fn available_slots_at(
        &self,
        host_id: i64,
        date: NaiveDate,
        duration_minutes: i64,
        now: NaiveDateTime,
    ) -> Vec<String> {
        if duration_minutes <= 0 {
            warn!("Rejecting slot query with non-positive duration {}", duration_minutes);
            return Vec::new();
        }
        // Absurd durations must not panic the chrono conversion.
        let duration = match Duration::try_minutes(duration_minutes) {
            Some(d) => d,
            None => {
                warn!(
                    "Rejecting slot query with out-of-range duration {}",
                    duration_minutes
                );
                return Vec::new();
            }
        };

        // 0 = Sunday .. 6 = Saturday, the civil week the rules use.
        let day_of_week = date.weekday().num_days_from_sunday() as u8;

        let rules = match self
            .store
            .fetch_availability_rules(host_id, day_of_week)
            .await
        {
            Ok(rules) => rules,
            Err(e) => {
                error!("Failed to fetch availability rules for host {}: {}", host_id, e);
                return Vec::new();
            }
        };
        // A host with no rule for this weekday is fully closed that day.
        if rules.is_empty() {
            return Vec::new();
        }

        // Inclusive day window. A booking crossing midnight into this day is
        // not retrieved; see SchedulingStore::fetch_bookings.
        let day_start = date.and_hms_opt(0, 0, 0).unwrap();
        let day_end = date.and_hms_opt(23, 59, 59).unwrap();
        let bookings = match self.store.fetch_bookings(host_id, day_start, day_end).await {
            Ok(bookings) => bookings,
            Err(e) => {
                error!("Failed to fetch bookings for host {}: {}", host_id, e);
                return Vec::new();
            }
        };

        calculate_day_slots(&rules, &bookings, date, duration, now)
    }
}
