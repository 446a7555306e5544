//! Variant registry
//!
//! Immutable table mapping each `BoardVariant` to the name exported through
//! `hw_info/pcba_config`. Lookups are a linear scan; the table is small and
//! order carries no meaning.

use crate::error::ResolveError;
use crate::types::{BoardVariant, VariantEntry};

/// Name returned for a variant with no entry.
///
/// Deliberately differs from the `Unknown` entry's own name
/// (`"PCBA_UNKNOW"`), so consumers can tell the two apart.
pub const PCBA_UNKNOWN_NAME: &str = "PCBA_UNKNOWN";

/// Canonical board names
pub static PCBA_TABLE: [VariantEntry; 36] = [
    VariantEntry::new(BoardVariant::Unknown, "PCBA_UNKNOW"),
    VariantEntry::new(BoardVariant::M17_P0_1_CN, "PCBA_M17_P0-1_CN"),
    VariantEntry::new(BoardVariant::M17_P0_1_GL, "PCBA_M17_P0-1_GL"),
    VariantEntry::new(BoardVariant::M17_P0_1_IN, "PCBA_M17_P0-1_IN"),
    VariantEntry::new(BoardVariant::M17_P0_1_CN_NEW, "PCBA_M17_P0-1_CN_NEW"),
    VariantEntry::new(BoardVariant::M17P_P0_1_IN, "PCBA_M17P_P0-1_IN"),
    VariantEntry::new(BoardVariant::M17P_P0_1_GL, "PCBA_M17P_P0-1_GL"),
    VariantEntry::new(BoardVariant::M17P_P0_1_ID, "PCBA_M17P_P0-1_ID"),
    VariantEntry::new(BoardVariant::M17_P1_CN, "PCBA_M17_P1_CN"),
    VariantEntry::new(BoardVariant::M17_P1_GL, "PCBA_M17_P1_GL"),
    VariantEntry::new(BoardVariant::M17_P1_IN, "PCBA_M17_P1_IN"),
    VariantEntry::new(BoardVariant::M17_P1_CN_NEW, "PCBA_M17_P1_CN_NEW"),
    VariantEntry::new(BoardVariant::M17P_P1_IN, "PCBA_M17P_P1_IN"),
    VariantEntry::new(BoardVariant::M17P_P1_GL, "PCBA_M17P_P1_GL"),
    VariantEntry::new(BoardVariant::M17P_P1_ID, "PCBA_M17P_P1_ID"),
    VariantEntry::new(BoardVariant::M17_P1_1_CN, "PCBA_M17_P1-1_CN"),
    VariantEntry::new(BoardVariant::M17_P1_1_GL, "PCBA_M17_P1-1_GL"),
    VariantEntry::new(BoardVariant::M17_P1_1_IN, "PCBA_M17_P1-1_IN"),
    VariantEntry::new(BoardVariant::M17_P1_1_CN_NEW, "PCBA_M17_P1-1_CN_NEW"),
    VariantEntry::new(BoardVariant::M17P_P1_1_IN, "PCBA_M17P_P1-1_IN"),
    VariantEntry::new(BoardVariant::M17P_P1_1_GL, "PCBA_M17P_P1-1_GL"),
    VariantEntry::new(BoardVariant::M17P_P1_1_ID, "PCBA_M17P_P1-1_ID"),
    VariantEntry::new(BoardVariant::M17_P2_CN, "PCBA_M17_P2_CN"),
    VariantEntry::new(BoardVariant::M17_P2_GL, "PCBA_M17_P2_GL"),
    VariantEntry::new(BoardVariant::M17_P2_IN, "PCBA_M17_P2_IN"),
    VariantEntry::new(BoardVariant::M17_P2_CN_NEW, "PCBA_M17_P2_CN_NEW"),
    VariantEntry::new(BoardVariant::M17P_P2_IN, "PCBA_M17P_P2_IN"),
    VariantEntry::new(BoardVariant::M17P_P2_GL, "PCBA_M17P_P2_GL"),
    VariantEntry::new(BoardVariant::M17P_P2_ID, "PCBA_M17P_P2_ID"),
    VariantEntry::new(BoardVariant::M17_MP_CN, "PCBA_M17_MP_CN"),
    VariantEntry::new(BoardVariant::M17_MP_GL, "PCBA_M17_MP_GL"),
    VariantEntry::new(BoardVariant::M17_MP_IN, "PCBA_M17_MP_IN"),
    VariantEntry::new(BoardVariant::M17_MP_CN_NEW, "PCBA_M17_MP_CN_NEW"),
    VariantEntry::new(BoardVariant::M17P_MP_IN, "PCBA_M17P_MP_IN"),
    VariantEntry::new(BoardVariant::M17P_MP_GL, "PCBA_M17P_MP_GL"),
    VariantEntry::new(BoardVariant::M17P_MP_ID, "PCBA_M17P_MP_ID"),
];

/// Read-only view over a variant table
#[derive(Clone, Copy, Debug)]
pub struct Registry {
    entries: &'static [VariantEntry],
}

impl Registry {
    /// Registry over an arbitrary table.
    ///
    /// Each variant should appear at most once; `invariants::check_registry`
    /// reports tables that break this.
    pub const fn new(entries: &'static [VariantEntry]) -> Self {
        Self { entries }
    }

    /// Registry over `PCBA_TABLE`
    pub const fn builtin() -> Self {
        Self::new(&PCBA_TABLE)
    }

    /// Display name of `variant`, or `PCBA_UNKNOWN_NAME` if it has no entry.
    pub fn name_of(&self, variant: BoardVariant) -> &'static str {
        self.lookup(variant).unwrap_or(PCBA_UNKNOWN_NAME)
    }

    /// Display name of `variant`, reporting a miss instead of substituting.
    pub fn lookup(&self, variant: BoardVariant) -> Result<&'static str, ResolveError> {
        self.entries
            .iter()
            .find(|entry| entry.variant == variant)
            .map(|entry| entry.name)
            .ok_or(ResolveError::UnmappedVariant(variant))
    }

    pub fn entries(&self) -> &'static [VariantEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
