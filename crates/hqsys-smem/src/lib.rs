//! Shared-memory provider trait for the Huaqin hardware-info driver
//!
//! This crate defines the interface the board-id resolver needs from the
//! platform's shared-memory (SMEM) subsystem. Firmware and the bootloader
//! populate named SMEM items before the kernel starts; the driver only ever
//! reads them.
//!
//! # Platform Implementations
//!
//! - **Qualcomm SoCs**: `qcom_smem_get()` against the partition table
//! - **Tests**: `hqsys-smem-mock` with configurable items and a read counter

#![no_std]

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

/// Vendor item carrying the PCBA board code.
pub const SMEM_ID_VENDOR1: SmemItem = SmemItem(135);

/// Host scope of an SMEM lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SmemHost {
    /// Item may live in any partition (`QCOM_SMEM_HOST_ANY`)
    Any,
    /// Item lives in the partition shared with a specific remote processor
    Remote(u32),
}

impl SmemHost {
    /// Whether an item stored under `other` satisfies a lookup in this scope.
    pub fn matches(&self, other: SmemHost) -> bool {
        match self {
            SmemHost::Any => true,
            SmemHost::Remote(_) => *self == other,
        }
    }
}

/// SMEM item identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SmemItem(pub u32);

impl SmemItem {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn id(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for SmemItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "smem item {}", self.0)
    }
}

/// Shared-memory provider trait
///
/// Implementations expose read-only access to firmware-populated regions
/// and a diagnostic sink for the driver's log lines.
pub trait Smem: Send + Sync + 'static {
    /// Read an item
    ///
    /// # Arguments
    /// * `host` - Partition scope to search
    /// * `item` - Item identifier
    ///
    /// # Returns
    /// * `Ok(bytes)` - Copy of the region; its length is the region size
    /// * `Err(SmemError::NotFound)` - No such item in the requested scope
    /// * `Err(SmemError::NotReady)` - SMEM has not been probed yet
    fn get(&self, host: SmemHost, item: SmemItem) -> Result<Vec<u8>, SmemError>;

    /// Write a diagnostic message to the platform's log
    fn debug_write(&self, msg: &str);
}

impl<S: Smem> Smem for Arc<S> {
    fn get(&self, host: SmemHost, item: SmemItem) -> Result<Vec<u8>, SmemError> {
        (**self).get(host, item)
    }

    fn debug_write(&self, msg: &str) {
        (**self).debug_write(msg)
    }
}

/// SMEM errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SmemError {
    /// Item is not present in the requested scope
    NotFound,
    /// SMEM driver has not been probed
    NotReady,
    /// Malformed host or item identifier
    InvalidArgument,
    /// Partition header or item descriptor is corrupt
    IoError,
}

impl fmt::Display for SmemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SmemError::NotFound => write!(f, "not found"),
            SmemError::NotReady => write!(f, "smem not ready"),
            SmemError::InvalidArgument => write!(f, "invalid argument"),
            SmemError::IoError => write!(f, "i/o error"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_host_matches_every_partition() {
        assert!(SmemHost::Any.matches(SmemHost::Any));
        assert!(SmemHost::Any.matches(SmemHost::Remote(1)));
    }

    #[test]
    fn test_remote_host_matches_only_itself() {
        assert!(SmemHost::Remote(2).matches(SmemHost::Remote(2)));
        assert!(!SmemHost::Remote(2).matches(SmemHost::Remote(3)));
        assert!(!SmemHost::Remote(2).matches(SmemHost::Any));
    }

    #[test]
    fn test_vendor_item_id() {
        assert_eq!(SMEM_ID_VENDOR1.id(), 135);
        assert_eq!(alloc::format!("{}", SMEM_ID_VENDOR1), "smem item 135");
    }
}
