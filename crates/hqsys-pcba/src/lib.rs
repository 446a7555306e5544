//! Huaqin PCBA identification core
//!
//! Identifies, once per boot, which board assembly ("PCBA") the device is
//! running on and exposes it as a stable display name.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  get(Any, 135)  ┌──────────────────┐
//! │  hqsys-smem  │◀────────────────│  BoardIdResolver │  resolve-once cache
//! │  (provider)  │   (at most 1x)  └────────┬─────────┘
//! └──────────────┘                          │ BoardVariant
//!                                           ▼
//!                                  ┌──────────────────┐
//!                                  │     Registry     │  variant -> name
//!                                  └────────┬─────────┘
//!                                           │ &'static str
//!                                           ▼
//!                                  ┌──────────────────┐
//!                                  │    PcbaService   │  query_display_name()
//!                                  └──────────────────┘
//! ```
//!
//! Every public operation is total. SMEM failures, short regions and
//! out-of-range codes degrade to `BoardVariant::Unknown`; variants without a
//! registry entry are named `PCBA_UNKNOWN`.
//!
//! # Module Organization
//!
//! - `types` - `BoardVariant` and `VariantEntry`
//! - `registry` - The canonical name table and lookups
//! - `resolver` - One-shot SMEM read and validation
//! - `service` - Resolver + registry composition for the host adapter
//! - `invariants` - Runtime-checkable table and identity invariants
//! - `error` - Internal fault taxonomy

#![no_std]
extern crate alloc;

pub mod error;
pub mod invariants;
pub mod registry;
pub mod resolver;
pub mod service;
pub mod types;

#[cfg(any(test, feature = "loom"))]
mod loom_tests;

/// Bytes occupied by the board code at the start of the SMEM item
pub const BOARD_CODE_SIZE: usize = core::mem::size_of::<i32>();

pub use error::ResolveError;
pub use invariants::{check_coverage, check_identity, check_registry, InvariantViolation};
pub use registry::{Registry, PCBA_TABLE, PCBA_UNKNOWN_NAME};
pub use resolver::{classify, decode_board_code, BoardIdResolver, ResolvedIdentity, ResolverConfig};
pub use service::{PcbaReport, PcbaService};
pub use types::{BoardVariant, VariantEntry};
