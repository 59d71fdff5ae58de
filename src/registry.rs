//! Registry routing key presses to shortcut handles.

use crate::dispatcher::{Dispatcher, ShortcutId};
use crate::error::ShortcutError;
use crate::handle::ShortcutHandle;
use shortcut_bridge_config::{Platform, ShortcutConfig, ShortcutOptions};
use shortcut_bridge_keys::Accelerator;
use std::collections::HashMap;
use std::sync::Weak;

/// Registry of shortcut handles keyed by id.
#[derive(Debug)]
pub struct ShortcutRegistry {
    platform: Platform,
    handles: HashMap<ShortcutId, ShortcutHandle>,
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new(Platform::current())
    }
}

impl ShortcutRegistry {
    /// Create an empty registry interpreting shortcuts for `platform`.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            handles: HashMap::new(),
        }
    }

    /// Build a registry from a shortcut file.
    ///
    /// Entries with an id that is already registered are logged and skipped.
    /// Unparsable entries are registered and report `"failed"` themselves.
    pub fn from_config(config: &ShortcutConfig, dispatcher: Weak<dyn Dispatcher>) -> Self {
        let mut registry = Self::new(config.effective_platform());

        log::info!(
            "Building shortcut registry from {} entries for {}",
            config.shortcuts.len(),
            registry.platform
        );
        for entry in &config.shortcuts {
            let id = ShortcutId::new(entry.id);
            if let Err(e) = registry.register(id, dispatcher.clone(), &entry.options()) {
                log::warn!("Skipping shortcut '{}': {}", entry.key, e);
            }
        }

        log::info!("Shortcut registry initialized with {} handles", registry.len());
        registry
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Create and register a handle.
    ///
    /// Fails with [`ShortcutError::DuplicateId`] if `id` is taken; the
    /// existing handle is kept and no handle is constructed.
    pub fn register(
        &mut self,
        id: ShortcutId,
        dispatcher: Weak<dyn Dispatcher>,
        options: &ShortcutOptions,
    ) -> Result<&ShortcutHandle, ShortcutError> {
        if self.handles.contains_key(&id) {
            return Err(ShortcutError::DuplicateId(id));
        }
        let handle = ShortcutHandle::with_platform(id, dispatcher, options, self.platform);
        let handle = self.handles.entry(id).or_insert(handle);
        Ok(&*handle)
    }

    /// Remove a handle, returning it to the caller.
    pub fn unregister(&mut self, id: ShortcutId) -> Option<ShortcutHandle> {
        let handle = self.handles.remove(&id);
        if handle.is_some() {
            log::debug!("Unregistered shortcut {}", id);
        }
        handle
    }

    pub fn get(&self, id: ShortcutId) -> Option<&ShortcutHandle> {
        self.handles.get(&id)
    }

    /// Ids of the handles bound to `accelerator`, in ascending order.
    ///
    /// An invalid accelerator matches nothing.
    pub fn lookup(&self, accelerator: &Accelerator) -> Vec<ShortcutId> {
        if !accelerator.is_valid() {
            return Vec::new();
        }
        let mut ids: Vec<ShortcutId> = self
            .handles
            .values()
            .filter(|handle| handle.accelerator() == accelerator)
            .map(ShortcutHandle::id)
            .collect();
        ids.sort();
        ids
    }

    /// Deliver a key press to every handle bound to `accelerator`.
    ///
    /// Returns the number of `"active"` events the dispatchers accepted.
    pub fn dispatch_key_pressed(&self, accelerator: &Accelerator) -> usize {
        let mut delivered = 0;
        for id in self.lookup(accelerator) {
            let Some(handle) = self.handles.get(&id) else {
                continue;
            };
            match handle.on_key_pressed(accelerator) {
                Ok(true) => delivered += 1,
                Ok(false) => log::debug!("Shortcut {} press not delivered", id),
                Err(e) => log::error!("Routing error: {}", e),
            }
        }
        delivered
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Iterate over the registered handles in id order.
    pub fn handles(&self) -> impl Iterator<Item = &ShortcutHandle> {
        let mut handles: Vec<&ShortcutHandle> = self.handles.values().collect();
        handles.sort_by_key(|handle| handle.id());
        handles.into_iter()
    }
}
