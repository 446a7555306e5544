//! Resolution faults
//!
//! None of these reach callers of `resolve`, `name_of` or
//! `query_display_name`; each one degrades to `Unknown` or to the fallback
//! name. They are kept on the cached identity for diagnostics.

use core::fmt;
use hqsys_smem::SmemError;

use crate::types::BoardVariant;

/// Why a board code could not be turned into a named variant
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolveError {
    /// SMEM read failed outright
    ProviderUnavailable(SmemError),

    /// Region is too small to hold a board code
    ShortRegion(usize),

    /// Board code is `<= Unknown` or `>= End`
    OutOfRange(i32),

    /// Variant has no registry entry
    UnmappedVariant(BoardVariant),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::ProviderUnavailable(e) => write!(f, "provider unavailable: {}", e),
            ResolveError::ShortRegion(size) => {
                write!(f, "region too short: {} bytes, need {}", size, crate::BOARD_CODE_SIZE)
            }
            ResolveError::OutOfRange(raw) => write!(f, "board code {} out of range", raw),
            ResolveError::UnmappedVariant(v) => write!(f, "no registry entry for {:?}", v),
        }
    }
}

impl From<SmemError> for ResolveError {
    fn from(e: SmemError) -> Self {
        ResolveError::ProviderUnavailable(e)
    }
}
