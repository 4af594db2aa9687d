// --- File: crates/meetline_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the collaborators the scheduling
//! core depends on. These traits allow for dependency injection and easier
//! testing by decoupling the engine from specific implementations of the
//! backing store (database, remote calendar, in-memory fixture).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::{AvailabilityRule, Booking, EventType, Host};

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// Read-only queries the slot computation engine issues against the store.
///
/// Both fetches are independent; the engine may issue them sequentially or
/// concurrently. Implementations must not return cancelled bookings from
/// [`fetch_bookings`](SchedulingStore::fetch_bookings).
pub trait SchedulingStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: StdError + Send + Sync + 'static;

    /// Get all availability rules for a host on a given day of week
    /// (0 = Sunday .. 6 = Saturday).
    fn fetch_availability_rules(
        &self,
        host_id: i64,
        day_of_week: u8,
    ) -> BoxFuture<'_, Vec<AvailabilityRule>, Self::Error>;

    /// Get the non-cancelled bookings for a host whose start time falls
    /// within `[day_start, day_end]` (inclusive upper bound).
    ///
    /// A booking that starts before `day_start` and runs past midnight into
    /// the queried day is not retrieved by this window. That is a known
    /// limitation of the day-window query, kept deliberately.
    fn fetch_bookings(
        &self,
        host_id: i64,
        day_start: NaiveDateTime,
        day_end: NaiveDateTime,
    ) -> BoxFuture<'_, Vec<Booking>, Self::Error>;
}

/// Lookup of hosts and the event types they offer, used by the resolver.
pub trait EventDirectory: Send + Sync {
    /// Error type returned by directory operations.
    type Error: StdError + Send + Sync + 'static;

    /// Find a host by its unique handle.
    fn find_host_by_handle(&self, handle: &str) -> BoxFuture<'_, Option<Host>, Self::Error>;

    /// Find an event type belonging to a host by slug. Returns inactive
    /// event types as well; the resolver decides what to do with them.
    fn find_event_type(
        &self,
        host_id: i64,
        slug: &str,
    ) -> BoxFuture<'_, Option<EventType>, Self::Error>;
}

/// Errors the booking write side can report.
///
/// The write path needs distinguishable variants (conflict maps to HTTP 409,
/// unknown id to 404), so unlike the read traits it uses a concrete error
/// type instead of an associated one.
#[derive(Debug, thiserror::Error)]
pub enum BookingWriteError {
    #[error("Requested time slot is no longer available")]
    Conflict,
    #[error("Booking not found: {0}")]
    NotFound(i64),
    #[error("Store error: {0}")]
    Store(#[source] BoxedError),
}

/// Parameters for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBooking {
    pub host_id: i64,
    pub event_type_id: Option<i64>,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub attendee_name: Option<String>,
    pub attendee_email: Option<String>,
}

/// Write side of the booking flow.
///
/// The engine's slot output is advisory only: between computing slots and
/// confirming a booking another caller may take the same interval. The
/// writer must therefore re-validate non-overlap transactionally and report
/// a conflict instead of double-booking.
pub trait BookingWriter: Send + Sync {
    /// Create a booking after re-checking that its interval does not overlap
    /// any confirmed booking for the host.
    fn create_booking(&self, booking: NewBooking) -> BoxFuture<'_, Booking, BookingWriteError>;

    /// Mark an existing booking as cancelled without deleting it.
    fn mark_cancelled(&self, booking_id: i64) -> BoxFuture<'_, Booking, BookingWriteError>;
}
