// --- File: crates/meetline_scheduling/src/routes.rs ---

use crate::handlers::{
    book_slot_handler, get_availability_handler, mark_booking_cancelled_handler,
    resolve_event_handler, SchedulingState,
};
use crate::memory::InMemoryScheduleStore;
use crate::service::SchedulingService;
use axum::{
    routing::{get, patch, post},
    Router,
};
use meetline_common::services::{BookingWriter, BoxedError, EventDirectory, SchedulingStore};
use meetline_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the scheduling feature,
/// backed by the given store.
pub fn routes(config: Arc<AppConfig>, store: Arc<InMemoryScheduleStore>) -> Router {
    let service = Arc::new(SchedulingService::from_config(
        store.clone() as Arc<dyn SchedulingStore<Error = BoxedError>>,
        &config,
    ));
    let state = Arc::new(SchedulingState {
        config,
        service,
        directory: store.clone() as Arc<dyn EventDirectory<Error = BoxedError>>,
        writer: store as Arc<dyn BookingWriter>,
    });

    Router::new()
        .route("/availability", get(get_availability_handler))
        .route("/events/{handle}/{slug}", get(resolve_event_handler))
        .route("/book", post(book_slot_handler))
        .route(
            "/admin/mark_cancelled/{booking_id}",
            patch(mark_booking_cancelled_handler),
        )
        .with_state(state)
}
