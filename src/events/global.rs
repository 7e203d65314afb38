//! Process-wide access to the event bus for OS callbacks.
//!
//! The focus-change hook is a bare `extern "system"` function and cannot
//! capture state, so it publishes through a publisher installed once at
//! startup.

use std::sync::OnceLock;

use super::bus::EventPublisher;
use super::types::DimEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

/// Install the process-wide publisher. Returns `false` if one was already installed.
pub fn install_publisher(publisher: EventPublisher) -> bool {
    PUBLISHER.set(publisher).is_ok()
}

/// Publish through the process-wide publisher.
///
/// Returns `false` if none is installed or the consumer is gone.
pub fn publish(event: DimEvent) -> bool {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => false,
    }
}
