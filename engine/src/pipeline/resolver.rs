//! Target → counter types

use std::collections::BTreeSet;

use counterdex_api::CanonicalName;

use crate::error::{CounterError, GatewayError, Stage};
use crate::gateway::Gateway;
use crate::types::{SpeciesTypes, Type};

/// Types dealing double damage to at least one of the target's types
pub type CounterTypeSet = BTreeSet<Type>;

/// Resolve the target's types, then the union of their double-damage relations.
///
/// A missing target aborts with [`CounterError::NotFound`]. Any other failure,
/// including one relation lookup out of two, aborts with
/// [`CounterError::Upstream`]; a partial union is never returned.
pub async fn resolve_counter_types<G>(
    gateway: &G,
    name: &CanonicalName,
) -> Result<(SpeciesTypes, CounterTypeSet), CounterError>
where
    G: Gateway + ?Sized,
{
    let species = gateway
        .species_types(name)
        .await
        .map_err(|e| match e {
            GatewayError::NotFound { .. } => CounterError::NotFound { name: name.clone() },
            source => CounterError::Upstream {
                stage: Stage::SpeciesTypes,
                source,
            },
        })?;

    tracing::info!(
        pokemon = %species.name,
        types = ?species.types,
        "Resolved species types"
    );

    let mut counter_types = CounterTypeSet::new();
    for kind in &species.types {
        let relation = gateway
            .type_relation(*kind)
            .await
            .map_err(|source| CounterError::Upstream {
                stage: Stage::TypeRelations,
                source,
            })?;
        counter_types.extend(relation.double_damage_from);
    }

    tracing::info!(
        pokemon = %species.name,
        counter_types = ?counter_types,
        "Resolved counter types"
    );

    Ok((species, counter_types))
}
