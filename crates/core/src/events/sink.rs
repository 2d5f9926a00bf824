//! Domain event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::DomainEvent;

/// Receiver for domain events.
///
/// `emit()` is called synchronously on the mutating thread right after the
/// state change, so implementations must return quickly and must not call
/// back into the emitter.
pub trait DomainEventSink: Send + Sync {
    fn emit(&self, event: DomainEvent);
}

/// Sink that drops every event.
#[derive(Clone, Default)]
pub struct NoOpDomainEventSink;

impl DomainEventSink for NoOpDomainEventSink {
    fn emit(&self, _event: DomainEvent) {}
}

/// Sink that forwards every event to a closure, e.g. a UI redraw hook.
pub struct CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    pub fn new(callback: F) -> Self {
        Self { callback }
    }
}

impl<F> DomainEventSink for CallbackEventSink<F>
where
    F: Fn(&DomainEvent) + Send + Sync,
{
    fn emit(&self, event: DomainEvent) {
        (self.callback)(&event);
    }
}

/// Sink that records events, for tests.
#[derive(Clone, Default)]
pub struct MockDomainEventSink {
    events: Arc<Mutex<Vec<DomainEvent>>>,
}

impl MockDomainEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DomainEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn last(&self) -> Option<DomainEvent> {
        self.events.lock().ok().and_then(|e| e.last().cloned())
    }

    pub fn len(&self) -> usize {
        self.events.lock().map(|e| e.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DomainEventSink for MockDomainEventSink {
    fn emit(&self, event: DomainEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}
