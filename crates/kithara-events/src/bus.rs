#![forbid(unsafe_code)]

use tokio::sync::broadcast;

use crate::Event;

/// Capacity used by [`EventBus::default`].
const DEFAULT_CAPACITY: usize = 64;

/// Event bus shared by kithara components.
///
/// Every component receives a cloned `EventBus` and publishes directly.
/// Subscribers receive all events from all components.
///
/// `publish()` never blocks and needs no runtime, so it is safe to call from
/// synchronous ingestion paths. If there are no subscribers, events are dropped.
#[derive(Clone, Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event to all subscribers.
    ///
    /// Accepts anything that converts `Into<Event>`, so sub-enum values can be
    /// passed directly: `bus.publish(TextEvent::Disposed { .. })`.
    pub fn publish<E: Into<Event>>(&self, event: E) {
        let _ = self.tx.send(event.into());
    }

    /// Subscribe to all future events.
    ///
    /// Slow subscribers receive `RecvError::Lagged(n)` instead of blocking
    /// producers.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
