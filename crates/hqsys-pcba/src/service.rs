//! PCBA query service
//!
//! Composes the resolver and the registry into the single read-only query
//! exposed to the host: the board's display name.

use alloc::string::String;
use hqsys_smem::Smem;
use serde::{Deserialize, Serialize};

use crate::registry::Registry;
use crate::resolver::{BoardIdResolver, ResolverConfig};
use crate::types::BoardVariant;

/// Snapshot of the resolved identity for tooling
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PcbaReport {
    pub variant: BoardVariant,
    pub name: String,
    /// Board code as read from SMEM, if decodable
    pub raw: Option<i32>,
    /// Whether the board code named real hardware
    pub recognized: bool,
}

/// Resolver plus registry, owned by the host adapter
pub struct PcbaService<S: Smem> {
    resolver: BoardIdResolver<S>,
    registry: Registry,
}

impl<S: Smem> PcbaService<S> {
    pub fn new(smem: S) -> Self {
        Self::with_parts(BoardIdResolver::new(smem), Registry::builtin())
    }

    pub fn with_config(smem: S, config: ResolverConfig) -> Self {
        Self::with_parts(BoardIdResolver::with_config(smem, config), Registry::builtin())
    }

    pub fn with_parts(resolver: BoardIdResolver<S>, registry: Registry) -> Self {
        Self { resolver, registry }
    }

    /// Pre-warm the cache during early boot so the first reader never pays
    /// for the SMEM read.
    pub fn early_init(&self) {
        self.resolver.resolve();
    }

    pub fn resolve(&self) -> BoardVariant {
        self.resolver.resolve()
    }

    /// `name_of(resolve())`
    pub fn query_display_name(&self) -> &'static str {
        self.registry.name_of(self.resolver.resolve())
    }

    /// Attribute body: the display name followed by a newline.
    pub fn show(&self) -> String {
        let mut buf = String::from(self.query_display_name());
        buf.push('\n');
        buf
    }

    pub fn identity_report(&self) -> PcbaReport {
        let identity = self.resolver.resolve_identity();
        PcbaReport {
            variant: identity.variant,
            name: String::from(self.registry.name_of(identity.variant)),
            raw: identity.raw,
            recognized: identity.fault.is_none(),
        }
    }

    pub fn resolver(&self) -> &BoardIdResolver<S> {
        &self.resolver
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
