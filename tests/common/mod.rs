//! Shared integration test helpers for shortcut-bridge.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::TestDispatcher;
//! ```

#![allow(dead_code)]

use shortcut_bridge::{
    DispatchedEvent, Dispatcher, EventQueue, Platform, ShortcutHandle, ShortcutId,
    ShortcutOptions,
};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Weak};
use tempfile::TempDir;

/// An [`EventQueue`] together with the strong `Arc<dyn Dispatcher>` that
/// keeps it alive. Dropping the fixture drops the dispatcher.
pub struct TestDispatcher {
    queue: Arc<EventQueue>,
    dispatcher: Arc<dyn Dispatcher>,
}

impl TestDispatcher {
    pub fn new() -> Self {
        let queue = Arc::new(EventQueue::new());
        let dispatcher: Arc<dyn Dispatcher> = queue.clone();
        Self { queue, dispatcher }
    }

    /// Weak reference to hand to handles.
    pub fn weak(&self) -> Weak<dyn Dispatcher> {
        Arc::downgrade(&self.dispatcher)
    }

    pub fn queue(&self) -> &EventQueue {
        &self.queue
    }

    pub fn drain(&self) -> Vec<DispatchedEvent> {
        self.queue.drain_events()
    }

    /// Create a Linux-platform handle for `key`.
    pub fn handle(&self, id: u64, key: &str) -> ShortcutHandle {
        ShortcutHandle::with_platform(
            ShortcutId::new(id),
            self.weak(),
            &ShortcutOptions::new(key),
            Platform::Linux,
        )
    }
}

/// Write `contents` to `shortcuts.yaml` inside a fresh temp dir.
///
/// The `TempDir` must be kept alive for as long as the file is used.
pub fn shortcut_file(contents: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("shortcuts.yaml");
    fs::write(&path, contents).expect("Failed to write shortcut file");
    (path, temp_dir)
}
