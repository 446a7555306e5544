//! Board-ID resolver
//!
//! Reads the PCBA code out of SMEM once and caches the outcome for the rest
//! of the boot. A failed or out-of-range read is terminal: the resolver
//! commits to `Unknown` and never asks the provider again.
//!
//! # Concurrency
//!
//! The cache is a `spin::Once`. The first caller runs the read while any
//! concurrent caller spins until the whole `ResolvedIdentity` is published,
//! so nobody sees a resolved flag paired with a stale variant and the
//! provider is queried at most once.

use alloc::format;
use hqsys_smem::{Smem, SmemHost, SmemItem, SMEM_ID_VENDOR1};
use spin::Once;

use crate::error::ResolveError;
use crate::types::BoardVariant;
use crate::BOARD_CODE_SIZE;

const LOG_TAG: &str = "[pcba]";

/// Where the board code lives
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolverConfig {
    pub host: SmemHost,
    pub item: SmemItem,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            host: SmemHost::Any,
            item: SMEM_ID_VENDOR1,
        }
    }
}

/// Outcome of the single SMEM read
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// Cached variant, always in `[Unknown, End)`
    pub variant: BoardVariant,
    /// Board code as read, if the region could be decoded
    pub raw: Option<i32>,
    /// Why the variant degraded to `Unknown`, if it did
    pub fault: Option<ResolveError>,
}

impl ResolvedIdentity {
    fn resolved(variant: BoardVariant, raw: i32) -> Self {
        Self {
            variant,
            raw: Some(raw),
            fault: None,
        }
    }

    fn degraded(raw: Option<i32>, fault: ResolveError) -> Self {
        Self {
            variant: BoardVariant::Unknown,
            raw,
            fault: Some(fault),
        }
    }
}

/// Decode the board code from the start of an SMEM region.
///
/// The firmware stores a C enum, so the code is a native-endian `i32`.
/// Trailing bytes are ignored.
pub fn decode_board_code(region: &[u8]) -> Result<i32, ResolveError> {
    region
        .get(..BOARD_CODE_SIZE)
        .and_then(|word| word.try_into().ok())
        .map(i32::from_ne_bytes)
        .ok_or(ResolveError::ShortRegion(region.len()))
}

/// Validate a raw board code: only `Unknown < raw < End` names hardware.
pub fn classify(raw: i32) -> Result<BoardVariant, ResolveError> {
    if !BoardVariant::is_valid_code(raw) {
        return Err(ResolveError::OutOfRange(raw));
    }
    BoardVariant::from_raw(raw).ok_or(ResolveError::OutOfRange(raw))
}

/// One-shot, cached board-id resolver
pub struct BoardIdResolver<S: Smem> {
    smem: S,
    config: ResolverConfig,
    identity: Once<ResolvedIdentity>,
}

impl<S: Smem> BoardIdResolver<S> {
    /// Resolver reading `SMEM_ID_VENDOR1` from any host.
    pub fn new(smem: S) -> Self {
        Self::with_config(smem, ResolverConfig::default())
    }

    pub fn with_config(smem: S, config: ResolverConfig) -> Self {
        Self {
            smem,
            config,
            identity: Once::new(),
        }
    }

    /// Resolve the board variant.
    ///
    /// The first call reads SMEM; every later call returns the cached value.
    /// Never fails: every fault degrades to `BoardVariant::Unknown`.
    pub fn resolve(&self) -> BoardVariant {
        self.resolve_identity().variant
    }

    /// Resolve and return the full cached outcome.
    pub fn resolve_identity(&self) -> &ResolvedIdentity {
        self.identity.call_once(|| self.read_identity())
    }

    /// Whether the single read has completed.
    pub fn is_resolved(&self) -> bool {
        self.identity.is_completed()
    }

    /// Cached outcome, without triggering a read.
    pub fn identity(&self) -> Option<&ResolvedIdentity> {
        self.identity.get()
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn smem(&self) -> &S {
        &self.smem
    }

    fn read_identity(&self) -> ResolvedIdentity {
        let region = match self.smem.get(self.config.host, self.config.item) {
            Ok(region) => region,
            Err(e) => {
                self.smem
                    .debug_write(&format!("{} pcba config failed: {}", LOG_TAG, e));
                return ResolvedIdentity::degraded(None, e.into());
            }
        };

        let raw = match decode_board_code(&region) {
            Ok(raw) => raw,
            Err(fault) => {
                self.smem
                    .debug_write(&format!("{} pcba config failed: {}", LOG_TAG, fault));
                return ResolvedIdentity::degraded(None, fault);
            }
        };

        self.smem
            .debug_write(&format!("{} pcba config = {} 0x{:x}", LOG_TAG, raw, raw));

        match classify(raw) {
            Ok(variant) => ResolvedIdentity::resolved(variant, raw),
            Err(fault) => ResolvedIdentity::degraded(Some(raw), fault),
        }
    }
}
