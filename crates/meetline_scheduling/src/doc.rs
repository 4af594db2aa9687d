// File: crates/meetline_scheduling/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::handlers::{
    AvailabilityQuery, AvailableSlotsResponse, BookSlotRequest, BookingResponse,
    CancellationResponse, EventResponse,
};

#[utoipa::path(
    get,
    path = "/availability",
    params(
        ("host_id" = i64, Query, description = "The host whose calendar is queried", example = 1),
        ("date" = String, Query, description = "Date in YYYY-MM-DD format", example = "2026-09-07", format = "date"),
        ("duration_minutes" = Option<i64>, Query, description = "Duration in minutes", example = 30)
    ),
    responses(
        (status = 200, description = "Bookable start times for the day", body = AvailableSlotsResponse,
         example = json!({
             "date": "2026-09-07",
             "slots": ["09:00", "09:30", "10:30"]
         })
        ),
        (status = 400, description = "Invalid date or duration", body = String),
        (status = 503, description = "Scheduling disabled", body = String)
    )
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    get,
    path = "/events/{handle}/{slug}",
    params(
        ("handle" = String, Path, description = "Host handle", example = "jane-doe"),
        ("slug" = String, Path, description = "Event type slug", example = "intro-call")
    ),
    responses(
        (status = 200, description = "Resolved host and event type", body = EventResponse),
        (status = 404, description = "Unknown host or event type", body = String)
    )
)]
fn doc_resolve_event_handler() {}

#[utoipa::path(
    post,
    path = "/book",
    request_body(content = BookSlotRequest, example = json!({
        "host_id": 1,
        "event_type_id": 2,
        "start_time": "2026-09-07T10:00:00",
        "duration_minutes": 30,
        "attendee_name": "Sam Client",
        "attendee_email": "sam@example.com"
    })),
    responses(
        (status = 200, description = "Booking result", body = BookingResponse,
         example = json!({
             "success": true,
             "booking_id": 17,
             "message": "Appointment booked successfully."
         })
        ),
        (status = 409, description = "Slot already booked",
         example = json!("Requested time slot is no longer available.")
        ),
        (status = 500, description = "Booking failed",
         example = json!("Failed to book appointment.")
        )
    )
)]
fn doc_book_slot_handler() {}

#[utoipa::path(
    patch,
    path = "/admin/mark_cancelled/{booking_id}",
    params(
        ("booking_id" = i64, Path, description = "The ID of the booking to mark as cancelled")
    ),
    responses(
        (status = 200, description = "Cancellation result", body = CancellationResponse,
         example = json!({
             "success": true,
             "message": "Appointment marked as cancelled successfully."
         })
        ),
        (status = 404, description = "Booking not found",
         example = json!("Booking not found.")
        )
    )
)]
fn doc_mark_booking_cancelled_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_get_availability_handler,
        doc_resolve_event_handler,
        doc_book_slot_handler,
        doc_mark_booking_cancelled_handler
    ),
    components(
        schemas(
            AvailabilityQuery,
            AvailableSlotsResponse,
            EventResponse,
            BookSlotRequest,
            BookingResponse,
            CancellationResponse
        )
    ),
    tags(
        (name = "scheduling", description = "Meetline Scheduling API")
    ),
    servers(
        (url = "/api", description = "Main API Prefix")
    )
)]
pub struct SchedulingApiDoc;
