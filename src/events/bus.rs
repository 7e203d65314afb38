//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple multi-producer, single-consumer queue:
//! - Any thread (or the OS notification callback) publishes via `EventPublisher::publish()`
//! - The controller's worker consumes via `EventBus::recv()`, one event at a time

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::DimEvent;

/// Single-consumer event queue in front of the dim controller.
///
/// # Example
///
/// ```
/// use focusdim::events::{DimEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(DimEvent::EnableToggled);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<DimEvent>,
    receiver: Receiver<DimEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Block until the next event arrives.
    ///
    /// The bus keeps its own sender alive, so this only returns `None`
    /// if the channel is torn down underneath it.
    pub fn recv(&self) -> Option<DimEvent> {
        self.receiver.recv().ok()
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<DimEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<DimEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<DimEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// Non-blocking. Returns `false` if the consumer is gone (app shutting down).
    pub fn publish(&self, event: DimEvent) -> bool {
        self.sender.send(event).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::WindowHandle;
    use crate::model::DimConfig;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_multiple_events() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(DimEvent::EnableToggled);
        publisher.publish(DimEvent::FocusChanged(WindowHandle::from_raw(3)));
        publisher.publish(DimEvent::Shutdown);

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                DimEvent::EnableToggled,
                DimEvent::FocusChanged(WindowHandle::from_raw(3)),
                DimEvent::Shutdown,
            ]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_from_other_thread_reaches_blocking_recv() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        let handle = std::thread::spawn(move || {
            publisher.publish(DimEvent::ConfigUpdated(DimConfig::default().with_transparency(9)))
        });
        assert!(handle.join().unwrap());

        assert_eq!(
            bus.recv(),
            Some(DimEvent::ConfigUpdated(DimConfig::default().with_transparency(9)))
        );
    }

    #[test]
    fn test_publish_fails_after_bus_dropped() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        assert!(!publisher.publish(DimEvent::EnableToggled));
    }
}
