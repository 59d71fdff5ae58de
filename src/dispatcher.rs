//! Event dispatch interface between shortcut handles and the host.
//!
//! A [`ShortcutHandle`](crate::ShortcutHandle) never owns its dispatcher. It
//! holds a `Weak<dyn Dispatcher>` and every emission goes through
//! [`Dispatcher::try_send`], which reports whether the event was accepted.
//!
//! [`EventQueue`] is an in-process dispatcher that records events for later
//! draining. Hosts with a real event bus implement [`Dispatcher`] themselves.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Identifier of a shortcut handle, chosen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortcutId(u64);

impl ShortcutId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ShortcutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Lifecycle event of a shortcut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutEvent {
    /// The shortcut's key combination was pressed.
    Active,
    /// The shortcut could not be set up.
    Failed {
        /// Human-readable reason
        message: String,
    },
}

impl ShortcutEvent {
    /// Wire name of the event.
    pub fn name(&self) -> &'static str {
        match self {
            ShortcutEvent::Active => "active",
            ShortcutEvent::Failed { .. } => "failed",
        }
    }

    /// Argument list delivered with the event.
    pub fn args(&self) -> Vec<Value> {
        match self {
            ShortcutEvent::Active => Vec::new(),
            ShortcutEvent::Failed { message } => vec![Value::String(message.clone())],
        }
    }
}

/// Receiver of shortcut events with an explicit liveness contract.
pub trait Dispatcher: Send + Sync {
    /// Deliver `event` emitted by the handle `source`.
    ///
    /// Returns `false` if the dispatcher can no longer accept events.
    fn try_send(&self, source: ShortcutId, event: &ShortcutEvent) -> bool;
}

/// An event as recorded by [`EventQueue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchedEvent {
    /// Handle that emitted the event
    pub source: ShortcutId,
    /// Event name ("active", "failed")
    pub name: String,
    /// Event arguments
    pub args: Vec<Value>,
}

impl DispatchedEvent {
    pub fn new(source: ShortcutId, event: &ShortcutEvent) -> Self {
        Self {
            source,
            name: event.name().to_string(),
            args: event.args(),
        }
    }
}

/// In-process dispatcher buffering events until drained.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Mutex<Vec<DispatchedEvent>>,
    closed: AtomicBool,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all buffered events, oldest first.
    pub fn drain_events(&self) -> Vec<DispatchedEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Stop accepting events. Buffered events stay drainable.
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }
}

impl Dispatcher for EventQueue {
    fn try_send(&self, source: ShortcutId, event: &ShortcutEvent) -> bool {
        if self.is_closed() {
            log::debug!("Event queue closed, dropping '{}' from {}", event.name(), source);
            return false;
        }
        self.events.lock().push(DispatchedEvent::new(source, event));
        true
    }
}
