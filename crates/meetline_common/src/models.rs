// --- File: crates/meetline_common/src/models.rs ---
//! Domain models shared across the Meetline crates.
//!
//! These are the data structures the scheduling engine consumes: hosts, the
//! event types they offer, their recurring weekly availability rules, and the
//! bookings that obstruct their calendar. All timestamps are wall-clock values
//! in the host's configured time zone; the engine never reconciles zones.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The calendar owner whose time is being booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Host {
    /// The unique identifier for this host.
    pub id: i64,
    /// URL-safe unique handle, e.g. "jane-doe".
    pub handle: String,
    /// Name shown on the booking page.
    pub display_name: String,
}

/// A named, reusable meeting template offered by a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventType {
    /// The unique identifier for this event type.
    pub id: i64,
    /// The host offering this event type.
    pub host_id: i64,
    /// URL-safe slug unique per host, e.g. "intro-call".
    pub slug: String,
    /// Title shown on the booking page.
    pub title: String,
    /// Optional longer description.
    pub description: Option<String>,
    /// Meeting length in minutes.
    pub duration_minutes: i64,
    /// Inactive event types are hidden and cannot be resolved.
    pub active: bool,
}

/// A recurring weekly open window for a host.
///
/// Several rules may exist for the same day; the engine processes each one
/// independently, so overlapping rules are legal and emit their candidates
/// separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityRule {
    /// The unique identifier for this rule.
    pub id: i64,
    /// The host this rule belongs to.
    pub host_id: i64,
    /// Day of week, 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
    /// Wall-clock start of the open window.
    pub start_time: NaiveTime,
    /// Wall-clock end of the open window (exclusive for slot fitting).
    pub end_time: NaiveTime,
}

/// Lifecycle status of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A reserved interval on a host's calendar.
///
/// Immutable once confirmed, except for the transition to `Cancelled`.
/// The engine treats the set of confirmed bookings as its obstruction set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    /// The unique identifier for this booking.
    pub id: i64,
    /// The host whose calendar this booking occupies.
    pub host_id: i64,
    /// The event type this booking was made for, if any.
    pub event_type_id: Option<i64>,
    /// Wall-clock start of the reserved interval.
    pub start_time: NaiveDateTime,
    /// Wall-clock end of the reserved interval.
    pub end_time: NaiveDateTime,
    /// Current status.
    pub status: BookingStatus,
    /// Name supplied by the person who booked.
    pub attendee_name: Option<String>,
    /// Email supplied by the person who booked.
    pub attendee_email: Option<String>,
}

impl Booking {
    /// True unless this booking has been cancelled.
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}
