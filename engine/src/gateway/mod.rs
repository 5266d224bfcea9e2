//! The upstream seam
//!
//! The pipeline only ever talks to the catalog through [`Gateway`]. The
//! HTTP implementation lives in `counterdex-client`; [`MemoryGateway`]
//! serves fixture data for tests and offline runs.

mod memory;

use async_trait::async_trait;
use counterdex_api::CanonicalName;

use crate::error::GatewayError;
use crate::types::{SpeciesTypes, StatProfile, Type, TypeRelation};

pub use memory::{GatewayCall, MemoryGateway};

/// Single-resource lookups against the catalog.
///
/// Implementations report a missing resource as [`GatewayError::NotFound`]
/// and everything else (bad status, transport failure, unparseable payload)
/// with the matching variant. They never retry.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Types of a creature, in slot order
    async fn species_types(&self, name: &CanonicalName) -> Result<SpeciesTypes, GatewayError>;

    /// Double-damage relations and member list of one type
    async fn type_relation(&self, kind: Type) -> Result<TypeRelation, GatewayError>;

    /// Offensive base stats of a creature
    async fn stat_profile(&self, name: &CanonicalName) -> Result<StatProfile, GatewayError>;
}
