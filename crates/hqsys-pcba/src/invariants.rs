//! Runtime-checkable invariants
//!
//! # Invariants
//!
//! 1. **Unique Entries**: Each variant appears at most once in a registry
//! 2. **No Sentinel Entry**: `End` is never registered
//! 3. **Non-empty Names**: Every registered name is non-empty
//! 4. **Full Coverage**: Every identity member has an entry (builtin table)
//! 5. **Identity Range**: A cached variant lies in `[Unknown, End)`
//! 6. **Fault Implies Unknown**: A degraded identity is always `Unknown`

use alloc::string::String;
use alloc::vec::Vec;

use crate::registry::Registry;
use crate::resolver::ResolvedIdentity;
use crate::types::BoardVariant;

/// An invariant violation with details
#[derive(Clone, Debug)]
pub struct InvariantViolation {
    /// Name of the violated invariant
    pub invariant: &'static str,
    /// Description of what went wrong
    pub description: String,
}

/// Check registry invariants 1-3.
pub fn check_registry(registry: &Registry) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let entries = registry.entries();

    for (idx, entry) in entries.iter().enumerate() {
        if entries[..idx].iter().any(|prev| prev.variant == entry.variant) {
            violations.push(InvariantViolation {
                invariant: "unique_entries",
                description: alloc::format!("{:?} registered more than once", entry.variant),
            });
        }

        if entry.variant == BoardVariant::End {
            violations.push(InvariantViolation {
                invariant: "no_sentinel_entry",
                description: alloc::format!("End registered as {:?}", entry.name),
            });
        }

        if entry.name.is_empty() {
            violations.push(InvariantViolation {
                invariant: "non_empty_names",
                description: alloc::format!("{:?} has an empty name", entry.variant),
            });
        }
    }

    violations
}

/// Invariant 4: every identity member has an entry
pub fn check_coverage(registry: &Registry) -> Vec<InvariantViolation> {
    BoardVariant::ALL
        .iter()
        .filter(|variant| registry.lookup(**variant).is_err())
        .map(|variant| InvariantViolation {
            invariant: "full_coverage",
            description: alloc::format!("{:?} has no registry entry", variant),
        })
        .collect()
}

/// Check invariants 5-6 on a resolved identity.
pub fn check_identity(identity: &ResolvedIdentity) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    if !identity.variant.is_identity() {
        violations.push(InvariantViolation {
            invariant: "identity_range",
            description: alloc::format!("resolved to sentinel {:?}", identity.variant),
        });
    }

    if identity.fault.is_some() && identity.variant != BoardVariant::Unknown {
        violations.push(InvariantViolation {
            invariant: "fault_implies_unknown",
            description: alloc::format!(
                "fault {:?} but variant {:?}",
                identity.fault,
                identity.variant
            ),
        });
    }

    violations
}
