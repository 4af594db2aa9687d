// --- File: crates/meetline_scheduling/src/resolver.rs ---
//! Resolution of a bookable event from its public path.
//!
//! A booking page is addressed as `/{owner_handle}/{event_slug}`. The
//! resolver turns that pair into the host and event-type metadata the slot
//! engine needs. Pure lookup, no side effects; the caller decides the UI
//! fallback on `NotFound`.

use meetline_common::models::{EventType, Host};
use meetline_common::services::{BoxedError, EventDirectory};
use thiserror::Error;
use tracing::debug;

/// Errors reported by event resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Unknown host handle, unknown event slug, or inactive event type.
    #[error("Unknown host or event type")]
    NotFound,
    /// The directory collaborator failed.
    #[error("Directory lookup failed: {0}")]
    Lookup(#[from] BoxedError),
}

/// A resolved bookable event: the host plus the event-type metadata that
/// feeds the slot engine (host id and duration).
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub host: Host,
    pub event_type: EventType,
}

/// Resolve `(owner_handle, event_slug)` to a host and an active event type.
///
/// Inactive event types resolve to `NotFound` just like absent ones, so a
/// disabled meeting template disappears from the public surface without
/// leaking its existence.
pub async fn resolve_event(
    directory: &dyn EventDirectory<Error = BoxedError>,
    owner_handle: &str,
    event_slug: &str,
) -> Result<ResolvedEvent, ResolveError> {
    let host = directory
        .find_host_by_handle(owner_handle)
        .await?
        .ok_or(ResolveError::NotFound)?;

    let event_type = directory
        .find_event_type(host.id, event_slug)
        .await?
        .ok_or(ResolveError::NotFound)?;

    if !event_type.active {
        debug!(
            "Event type {}/{} exists but is inactive",
            owner_handle, event_slug
        );
        return Err(ResolveError::NotFound);
    }

    Ok(ResolvedEvent { host, event_type })
}
