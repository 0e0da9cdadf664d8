//! Key-value preference storage.
//!
//! The widget only ever persists two scalar strings (language and timeframe).
//! On the web eframe's storage is `localStorage`; natively it is a file.

use std::collections::HashMap;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;
    fn set_string(&mut self, key: &str, value: String);
}

impl PreferenceStore for dyn eframe::Storage + '_ {
    fn get_string(&self, key: &str) -> Option<String> {
        eframe::Storage::get_string(self, key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        eframe::Storage::set_string(self, key, value);
    }
}

/// In-memory store. Used directly by tests and as the write-through buffer in
/// front of eframe storage, which is only reachable from inside the frame loop.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    pending: Vec<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the buffer with the given keys from `storage` without marking them dirty.
    pub fn preload(storage: &dyn eframe::Storage, keys: &[&str]) -> Self {
        let mut store = Self::default();
        for key in keys {
            if let Some(value) = eframe::Storage::get_string(storage, key) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_preference_io {
                    log::info!("[prefs] loaded {} = {}", key, value);
                }
                store.values.insert(key.to_string(), value);
            }
        }
        store
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Copies every write made since the last flush into `target`.
    pub fn flush_into<S: PreferenceStore + ?Sized>(&mut self, target: &mut S) {
        for key in self.pending.drain(..) {
            if let Some(value) = self.values.get(&key) {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_preference_io {
                    log::info!("[prefs] flushing {} = {}", key, value);
                }
                target.set_string(&key, value.clone());
            }
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
        if !self.pending.iter().any(|k| k == key) {
            self.pending.push(key.to_string());
        }
    }
}
