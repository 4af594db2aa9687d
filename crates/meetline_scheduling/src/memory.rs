// --- File: crates/meetline_scheduling/src/memory.rs ---
//! In-memory reference implementation of the store collaborators.
//!
//! Real persistence is an external concern; this store backs the HTTP surface
//! in development and the integration tests. It implements all three
//! collaborator traits and, importantly, performs the write-time overlap
//! re-check under its write lock, so the read-then-write race the slot engine
//! cannot prevent is resolved here.

use std::sync::RwLock;

use chrono::{NaiveDateTime, NaiveTime};
use meetline_common::models::{AvailabilityRule, Booking, BookingStatus, EventType, Host};
use meetline_common::services::{
    BookingWriteError, BookingWriter, BoxFuture, BoxedError, EventDirectory, NewBooking,
    SchedulingStore,
};
use tracing::info;

use crate::logic::spans_overlap;

#[derive(Default)]
struct StoreInner {
    hosts: Vec<Host>,
    event_types: Vec<EventType>,
    rules: Vec<AvailabilityRule>,
    bookings: Vec<Booking>,
    next_id: i64,
}

impl StoreInner {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// Thread-safe in-memory schedule store.
#[derive(Default)]
pub struct InMemoryScheduleStore {
    inner: RwLock<StoreInner>,
}

impl InMemoryScheduleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a host and return it with its allocated id.
    pub fn add_host(&self, handle: &str, display_name: &str) -> Host {
        let mut inner = self.inner.write().unwrap();
        let host = Host {
            id: inner.allocate_id(),
            handle: handle.to_string(),
            display_name: display_name.to_string(),
        };
        inner.hosts.push(host.clone());
        host
    }

    /// Add an event type for a host and return it with its allocated id.
    pub fn add_event_type(
        &self,
        host_id: i64,
        slug: &str,
        title: &str,
        duration_minutes: i64,
        active: bool,
    ) -> EventType {
        let mut inner = self.inner.write().unwrap();
        let event_type = EventType {
            id: inner.allocate_id(),
            host_id,
            slug: slug.to_string(),
            title: title.to_string(),
            description: None,
            duration_minutes,
            active,
        };
        inner.event_types.push(event_type.clone());
        event_type
    }

    /// Add a recurring weekly availability rule for a host.
    pub fn add_rule(
        &self,
        host_id: i64,
        day_of_week: u8,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> AvailabilityRule {
        let mut inner = self.inner.write().unwrap();
        let rule = AvailabilityRule {
            id: inner.allocate_id(),
            host_id,
            day_of_week,
            start_time,
            end_time,
        };
        inner.rules.push(rule.clone());
        rule
    }

    /// Seed a booking directly, bypassing the overlap re-check. Test setup
    /// and migrations use this; the HTTP write path goes through
    /// [`BookingWriter::create_booking`].
    pub fn seed_booking(
        &self,
        host_id: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        status: BookingStatus,
    ) -> Booking {
        let mut inner = self.inner.write().unwrap();
        let booking = Booking {
            id: inner.allocate_id(),
            host_id,
            event_type_id: None,
            start_time,
            end_time,
            status,
            attendee_name: None,
            attendee_email: None,
        };
        inner.bookings.push(booking.clone());
        booking
    }
}

impl SchedulingStore for InMemoryScheduleStore {
    type Error = BoxedError;

    fn fetch_availability_rules(
        &self,
        host_id: i64,
        day_of_week: u8,
    ) -> BoxFuture<'_, Vec<AvailabilityRule>, Self::Error> {
        Box::pin(async move {
            let inner = self.inner.read().unwrap();
            Ok(inner
                .rules
                .iter()
                .filter(|r| r.host_id == host_id && r.day_of_week == day_of_week)
                .cloned()
                .collect())
        })
    }

    fn fetch_bookings(
        &self,
        host_id: i64,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
    ) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        Box::pin(async move {
            let inner = self.inner.read().unwrap();
            // Window filter is on start_time only, both bounds inclusive.
            Ok(inner
                .bookings
                .iter()
                .filter(|b| {
                    b.is_active()
                        && b.host_id == host_id
                        && b.start_time >= day_start
                        && b.start_time <= day_end
                })
                .cloned()
                .collect())
        })
    }
}

impl EventDirectory for InMemoryScheduleStore {
    type Error = BoxedError;

    fn find_host_by_handle(&self, handle: &str) -> BoxFuture<'_, Option<Host>, Self::Error> {
        let handle = handle.to_string();
        Box::pin(async move {
            let inner = self.inner.read().unwrap();
            Ok(inner.hosts.iter().find(|h| h.handle == handle).cloned())
        })
    }

    fn find_event_type(
        &self,
        host_id: i64,
        slug: &str,
    ) -> BoxFuture<'_, Option<EventType>, Self::Error> {
        let slug = slug.to_string();
        Box::pin(async move {
            let inner = self.inner.read().unwrap();
            Ok(inner
                .event_types
                .iter()
                .find(|e| e.host_id == host_id && e.slug == slug)
                .cloned())
        })
    }
}

impl BookingWriter for InMemoryScheduleStore {
    fn create_booking(&self, booking: NewBooking) -> BoxFuture<'_, Booking, BookingWriteError> {
        Box::pin(async move {
            let mut inner = self.inner.write().unwrap();

            // Write-time re-check: the slot list the caller saw is advisory.
            // Under the write lock this check and the insert are atomic.
            let taken = inner.bookings.iter().any(|b| {
                b.is_active()
                    && b.host_id == booking.host_id
                    && spans_overlap(booking.start_time, booking.end_time, b.start_time, b.end_time)
            });
            if taken {
                return Err(BookingWriteError::Conflict);
            }

            let confirmed = Booking {
                id: inner.allocate_id(),
                host_id: booking.host_id,
                event_type_id: booking.event_type_id,
                start_time: booking.start_time,
                end_time: booking.end_time,
                status: BookingStatus::Confirmed,
                attendee_name: booking.attendee_name,
                attendee_email: booking.attendee_email,
            };
            inner.bookings.push(confirmed.clone());
            info!(
                "Confirmed booking {} for host {} at {}",
                confirmed.id, confirmed.host_id, confirmed.start_time
            );
            Ok(confirmed)
        })
    }

    fn mark_cancelled(&self, booking_id: i64) -> BoxFuture<'_, Booking, BookingWriteError> {
        Box::pin(async move {
            let mut inner = self.inner.write().unwrap();
            let booking = inner
                .bookings
                .iter_mut()
                .find(|b| b.id == booking_id)
                .ok_or(BookingWriteError::NotFound(booking_id))?;
            booking.status = BookingStatus::Cancelled;
            Ok(booking.clone())
        })
    }
}
