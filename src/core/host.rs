//! Seams to the environment: time, persistence and status announcements.
//!
//! The browser implementations live in the wasm frontend; the ones here are
//! platform-free and back static rendering and the host-side tests.

use super::error::StorageError;
use fnv::FnvHashMap;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub trait Clock {
    /// Seconds since the clock was created; never decreases.
    fn elapsed_seconds(&self) -> f64;
}

pub struct InstantClock {
    origin: Instant,
}

impl InstantClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for InstantClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for InstantClock {
    fn elapsed_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Externally driven clock; clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves time forward; going backwards is ignored.
    pub fn set(&self, seconds: f64) {
        if seconds > self.now.get() {
            self.now.set(seconds);
        }
    }

    pub fn advance(&self, seconds: f64) {
        self.set(self.now.get() + seconds.max(0.0));
    }
}

impl Clock for ManualClock {
    fn elapsed_seconds(&self) -> f64 {
        self.now.get()
    }
}

pub trait PresetStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage; clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<FnvHashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl PresetStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage that remembers nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStorage;

impl PresetStorage for NullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }
}

pub trait Announcer {
    fn announce(&mut self, text: &str);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&mut self, text: &str) {
        log::info!("[preset] {}", text);
    }
}
