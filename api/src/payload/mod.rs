//! Catalog payloads
//!
//! These types mirror the JSON documents served under `/api/v2`. Only the
//! fields this workspace reads are declared; serde ignores the rest.

mod ability;
mod evolution;
mod moves;
mod pokemon;
mod species;
mod type_info;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::{CanonicalName, ParseError};

pub use ability::{AbilityMember, AbilityPayload, parse_ability};
pub use evolution::{ChainLink, EvolutionChainPayload, parse_evolution_chain};
pub use moves::{EffectEntry, MovePayload, parse_move};
pub use pokemon::{AbilitySlot, PokemonPayload, StatEntry, TypeSlot, parse_pokemon};
pub use species::{FlavorTextEntry, SpeciesPayload, UrlResource, parse_species};
pub use type_info::{DamageRelations, TypeMember, TypePayload, parse_type};

/// `{ "name": ..., "url": ... }` reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: CanonicalName,

    #[serde(default)]
    pub url: String,
}

fn parse_json<T: DeserializeOwned>(text: &str) -> Result<T, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Language code the lookups pick localized text for
pub(crate) const ENGLISH: &str = "en";
