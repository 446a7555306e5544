//! Mock shared-memory provider for testing the hardware-info driver
//!
//! This provides a mock implementation of the `Smem` trait that can be used
//! for unit testing the resolver without a real SMEM partition table.

#![no_std]
extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicU64, Ordering};
use hqsys_smem::{Smem, SmemError, SmemHost, SmemItem};
use spin::Mutex;

/// Mock SMEM for unit testing
///
/// Items are stored per (host, item) pair. Every call to `get` is counted,
/// whether it succeeds or not.
pub struct MockSmem {
    /// Populated items
    items: Mutex<BTreeMap<(SmemHost, SmemItem), Vec<u8>>>,
    /// Forced failure for every read
    failure: Mutex<Option<SmemError>>,
    /// Number of `get` calls
    reads: AtomicU64,
    /// Captured debug messages
    debug_log: Mutex<Vec<String>>,
}

impl MockSmem {
    /// Create an empty mock SMEM
    pub fn new() -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
            failure: Mutex::new(None),
            reads: AtomicU64::new(0),
            debug_log: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock SMEM holding a single item
    pub fn with_item(host: SmemHost, item: SmemItem, bytes: &[u8]) -> Self {
        let smem = Self::new();
        smem.set_item(host, item, bytes);
        smem
    }

    /// Create a mock SMEM whose vendor item holds `code` as a native-endian i32
    pub fn with_board_code(code: i32) -> Self {
        Self::with_item(SmemHost::Any, hqsys_smem::SMEM_ID_VENDOR1, &code.to_ne_bytes())
    }

    /// Populate or replace an item
    pub fn set_item(&self, host: SmemHost, item: SmemItem, bytes: &[u8]) {
        self.items.lock().insert((host, item), bytes.to_vec());
    }

    /// Remove an item
    pub fn remove_item(&self, host: SmemHost, item: SmemItem) {
        self.items.lock().remove(&(host, item));
    }

    /// Make every subsequent read fail with `err`
    pub fn fail_with(&self, err: SmemError) {
        *self.failure.lock() = Some(err);
    }

    /// Stop forcing read failures
    pub fn clear_failure(&self) {
        *self.failure.lock() = None;
    }

    /// Number of `get` calls so far
    pub fn read_count(&self) -> u64 {
        self.reads.load(Ordering::SeqCst)
    }

    /// Get all captured debug messages
    pub fn get_debug_log(&self) -> Vec<String> {
        self.debug_log.lock().clone()
    }

    /// Clear the debug log
    pub fn clear_debug_log(&self) {
        self.debug_log.lock().clear();
    }

    /// Check if a specific message was logged
    pub fn has_log_containing(&self, substr: &str) -> bool {
        self.debug_log.lock().iter().any(|msg| msg.contains(substr))
    }
}

impl Default for MockSmem {
    fn default() -> Self {
        Self::new()
    }
}

impl Smem for MockSmem {
    fn get(&self, host: SmemHost, item: SmemItem) -> Result<Vec<u8>, SmemError> {
        self.reads.fetch_add(1, Ordering::SeqCst);

        if let Some(err) = *self.failure.lock() {
            return Err(err);
        }

        self.items
            .lock()
            .iter()
            .find(|((stored_host, stored_item), _)| {
                *stored_item == item && host.matches(*stored_host)
            })
            .map(|(_, bytes)| bytes.clone())
            .ok_or(SmemError::NotFound)
    }

    fn debug_write(&self, msg: &str) {
        self.debug_log.lock().push(String::from(msg));
    }
}
