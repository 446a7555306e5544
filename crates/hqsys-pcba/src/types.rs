//! Board-variant types
//!
//! `BoardVariant` has the same layout as the firmware's C enum: an `int`
//! counting up from `Unknown = 0`, closed by the `End` marker. New hardware
//! must be inserted before `End`, otherwise its code fails the range check
//! and resolves to `Unknown`.

use serde::{Deserialize, Serialize};

/// PCBA board variant (region, revision and production stage)
#[allow(non_camel_case_types)]
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[repr(i32)]
pub enum BoardVariant {
    /// Absent, invalid or out-of-range board code
    #[default]
    Unknown = 0,

    M17_P0_1_CN,
    M17_P0_1_GL,
    M17_P0_1_IN,
    M17_P0_1_CN_NEW,
    M17P_P0_1_IN,
    M17P_P0_1_GL,
    M17P_P0_1_ID,

    M17_P1_CN,
    M17_P1_GL,
    M17_P1_IN,
    M17_P1_CN_NEW,
    M17P_P1_IN,
    M17P_P1_GL,
    M17P_P1_ID,

    M17_P1_1_CN,
    M17_P1_1_GL,
    M17_P1_1_IN,
    M17_P1_1_CN_NEW,
    M17P_P1_1_IN,
    M17P_P1_1_GL,
    M17P_P1_1_ID,

    M17_P2_CN,
    M17_P2_GL,
    M17_P2_IN,
    M17_P2_CN_NEW,
    M17P_P2_IN,
    M17P_P2_GL,
    M17P_P2_ID,

    M17_MP_CN,
    M17_MP_GL,
    M17_MP_IN,
    M17_MP_CN_NEW,
    M17P_MP_IN,
    M17P_MP_GL,
    M17P_MP_ID,

    /// Exclusive upper bound for range checks; never a board identity
    End,
}

impl BoardVariant {
    /// Every identity member in code order, `Unknown` first. Excludes `End`.
    pub const ALL: [BoardVariant; 36] = [
        BoardVariant::Unknown,
        BoardVariant::M17_P0_1_CN,
        BoardVariant::M17_P0_1_GL,
        BoardVariant::M17_P0_1_IN,
        BoardVariant::M17_P0_1_CN_NEW,
        BoardVariant::M17P_P0_1_IN,
        BoardVariant::M17P_P0_1_GL,
        BoardVariant::M17P_P0_1_ID,
        BoardVariant::M17_P1_CN,
        BoardVariant::M17_P1_GL,
        BoardVariant::M17_P1_IN,
        BoardVariant::M17_P1_CN_NEW,
        BoardVariant::M17P_P1_IN,
        BoardVariant::M17P_P1_GL,
        BoardVariant::M17P_P1_ID,
        BoardVariant::M17_P1_1_CN,
        BoardVariant::M17_P1_1_GL,
        BoardVariant::M17_P1_1_IN,
        BoardVariant::M17_P1_1_CN_NEW,
        BoardVariant::M17P_P1_1_IN,
        BoardVariant::M17P_P1_1_GL,
        BoardVariant::M17P_P1_1_ID,
        BoardVariant::M17_P2_CN,
        BoardVariant::M17_P2_GL,
        BoardVariant::M17_P2_IN,
        BoardVariant::M17_P2_CN_NEW,
        BoardVariant::M17P_P2_IN,
        BoardVariant::M17P_P2_GL,
        BoardVariant::M17P_P2_ID,
        BoardVariant::M17_MP_CN,
        BoardVariant::M17_MP_GL,
        BoardVariant::M17_MP_IN,
        BoardVariant::M17_MP_CN_NEW,
        BoardVariant::M17P_MP_IN,
        BoardVariant::M17P_MP_GL,
        BoardVariant::M17P_MP_ID,
    ];

    /// Firmware board code
    pub const fn raw(self) -> i32 {
        self as i32
    }

    /// Convert from a firmware board code.
    ///
    /// Accepts every member including `End`; callers that need an identity
    /// must range-check first (see `is_valid_code`).
    pub fn from_raw(raw: i32) -> Option<Self> {
        if raw == BoardVariant::End.raw() {
            return Some(BoardVariant::End);
        }
        usize::try_from(raw)
            .ok()
            .and_then(|idx| Self::ALL.get(idx))
            .copied()
    }

    /// Whether a raw code names real hardware: `Unknown < raw < End`.
    pub const fn is_valid_code(raw: i32) -> bool {
        raw > BoardVariant::Unknown.raw() && raw < BoardVariant::End.raw()
    }

    /// Whether this value may be handed to consumers (`[Unknown, End)`).
    pub const fn is_identity(self) -> bool {
        !matches!(self, BoardVariant::End)
    }
}

/// Registry row: a variant and its canonical display name
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantEntry {
    pub variant: BoardVariant,
    pub name: &'static str,
}

impl VariantEntry {
    pub const fn new(variant: BoardVariant, name: &'static str) -> Self {
        Self { variant, name }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_contiguous() {
        for (idx, variant) in BoardVariant::ALL.iter().enumerate() {
            assert_eq!(variant.raw(), idx as i32);
        }
        assert_eq!(BoardVariant::End.raw(), BoardVariant::ALL.len() as i32);
    }

    #[test]
    fn test_from_raw() {
        assert_eq!(BoardVariant::from_raw(0), Some(BoardVariant::Unknown));
        assert_eq!(BoardVariant::from_raw(3), Some(BoardVariant::M17_P0_1_IN));
        assert_eq!(BoardVariant::from_raw(35), Some(BoardVariant::M17P_MP_ID));
        assert_eq!(BoardVariant::from_raw(36), Some(BoardVariant::End));
        assert_eq!(BoardVariant::from_raw(37), None);
        assert_eq!(BoardVariant::from_raw(-1), None);
        assert_eq!(BoardVariant::from_raw(i32::MIN), None);
    }

    #[test]
    fn test_valid_code_bounds_are_exclusive() {
        assert!(!BoardVariant::is_valid_code(0));
        assert!(BoardVariant::is_valid_code(1));
        assert!(BoardVariant::is_valid_code(35));
        assert!(!BoardVariant::is_valid_code(36));
        assert!(!BoardVariant::is_valid_code(-7));
    }

    #[test]
    fn test_end_is_not_an_identity() {
        assert!(BoardVariant::Unknown.is_identity());
        assert!(BoardVariant::M17_MP_GL.is_identity());
        assert!(!BoardVariant::End.is_identity());
        assert!(!BoardVariant::ALL.contains(&BoardVariant::End));
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(BoardVariant::default(), BoardVariant::Unknown);
    }
}
