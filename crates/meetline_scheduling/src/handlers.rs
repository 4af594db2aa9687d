// File: crates/meetline_scheduling/src/handlers.rs
use crate::resolver::{resolve_event, ResolveError};
use crate::service::SchedulingService;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use meetline_common::models::{EventType, Host};
use meetline_common::services::{
    BookingWriteError, BookingWriter, BoxedError, EventDirectory, NewBooking,
};
use meetline_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// Define shared state needed by scheduling handlers
#[derive(Clone)]
pub struct SchedulingState {
    pub config: Arc<AppConfig>,
    pub service: Arc<SchedulingService>,
    pub directory: Arc<dyn EventDirectory<Error = BoxedError>>,
    pub writer: Arc<dyn BookingWriter>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// The host whose calendar is queried
    pub host_id: i64,

    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2026-09-07"))]
    pub date: String,

    /// Duration in minutes; falls back to the configured default when absent
    #[cfg_attr(feature = "openapi", schema(example = 30))]
    pub duration_minutes: Option<i64>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailableSlotsResponse {
    /// The queried date, echoed back
    pub date: String,
    /// Bookable start times as "HH:MM", ascending
    pub slots: Vec<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct EventResponse {
    pub host: Host,
    pub event_type: EventType,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    pub host_id: i64,
    pub event_type_id: Option<i64>,
    /// Wall-clock start in YYYY-MM-DDTHH:MM:SS format
    pub start_time: String,
    pub duration_minutes: i64,
    pub attendee_name: Option<String>,
    pub attendee_email: Option<String>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub booking_id: Option<i64>,
    pub message: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CancellationResponse {
    pub success: bool,
    pub message: String,
}

/// Handler to get available time slots for one day.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<SchedulingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailableSlotsResponse>, (StatusCode, String)> {
    // Ensure the scheduling feature is enabled via runtime config
    if !state.config.use_scheduling {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Scheduling service is disabled.".to_string(),
        ));
    }

    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d").map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            "Invalid date format (YYYY-MM-DD)".to_string(),
        )
    })?;

    let duration_minutes = query
        .duration_minutes
        .or_else(|| {
            state
                .config
                .scheduling
                .as_ref()
                .and_then(|s| s.default_duration_minutes)
        })
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "duration_minutes is required".to_string(),
            )
        })?;
    if duration_minutes <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "duration_minutes must be positive".to_string(),
        ));
    }

    let slots = state
        .service
        .available_slots(query.host_id, date, duration_minutes)
        .await;

    Ok(Json(AvailableSlotsResponse {
        date: query.date,
        slots,
    }))
}

/// Handler to resolve a public booking path to host and event-type metadata.
#[axum::debug_handler]
pub async fn resolve_event_handler(
    State(state): State<Arc<SchedulingState>>,
    Path((handle, slug)): Path<(String, String)>,
) -> Result<Json<EventResponse>, (StatusCode, String)> {
    match resolve_event(state.directory.as_ref(), &handle, &slug).await {
        Ok(resolved) => Ok(Json(EventResponse {
            host: resolved.host,
            event_type: resolved.event_type,
        })),
        Err(ResolveError::NotFound) => Err((
            StatusCode::NOT_FOUND,
            "Unknown host or event type.".to_string(),
        )),
        Err(ResolveError::Lookup(e)) => {
            info!("Error resolving event {}/{}: {}", handle, slug, e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to resolve event.".to_string(),
            ))
        }
    }
}

/// Handler to book a time slot.
///
/// The slot list returned by the availability endpoint is advisory; the
/// booking writer re-validates non-overlap at write time and a lost race
/// surfaces here as 409.
#[axum::debug_handler]
pub async fn book_slot_handler(
    State(state): State<Arc<SchedulingState>>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    if !state.config.use_scheduling {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Scheduling service is disabled.".to_string(),
        ));
    }

    let start_time =
        NaiveDateTime::parse_from_str(&payload.start_time, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
            (
                StatusCode::BAD_REQUEST,
                "Invalid start_time format (YYYY-MM-DDTHH:MM:SS)".to_string(),
            )
        })?;
    if payload.duration_minutes <= 0 {
        return Err((
            StatusCode::BAD_REQUEST,
            "duration_minutes must be positive".to_string(),
        ));
    }
    // try_minutes: a huge duration must surface as 400, not a panic.
    let end_time = Duration::try_minutes(payload.duration_minutes)
        .and_then(|d| start_time.checked_add_signed(d))
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                "duration_minutes is out of range".to_string(),
            )
        })?;

    match state
        .writer
        .create_booking(NewBooking {
            host_id: payload.host_id,
            event_type_id: payload.event_type_id,
            start_time,
            end_time,
            attendee_name: payload.attendee_name,
            attendee_email: payload.attendee_email,
        })
        .await
    {
        Ok(booking) => {
            info!("Successfully created booking: {}", booking.id);
            Ok(Json(BookingResponse {
                success: true,
                booking_id: Some(booking.id),
                message: "Appointment booked successfully.".to_string(),
            }))
        }
        Err(BookingWriteError::Conflict) => Err((
            StatusCode::CONFLICT,
            "Requested time slot is no longer available.".to_string(),
        )),
        Err(e) => {
            info!("Error booking slot: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to book appointment.".to_string(),
            ))
        }
    }
}

/// Handler to mark a booking as cancelled without deleting it.
#[axum::debug_handler]
pub async fn mark_booking_cancelled_handler(
    State(state): State<Arc<SchedulingState>>,
    Path(booking_id): Path<i64>,
) -> Result<Json<CancellationResponse>, (StatusCode, String)> {
    if !state.config.use_scheduling {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Scheduling service is disabled.".to_string(),
        ));
    }

    match state.writer.mark_cancelled(booking_id).await {
        Ok(_) => Ok(Json(CancellationResponse {
            success: true,
            message: "Appointment marked as cancelled successfully.".to_string(),
        })),
        Err(BookingWriteError::NotFound(_)) => {
            Err((StatusCode::NOT_FOUND, "Booking not found.".to_string()))
        }
        Err(e) => {
            info!("Error marking booking as cancelled: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to mark appointment as cancelled.".to_string(),
            ))
        }
    }
}
