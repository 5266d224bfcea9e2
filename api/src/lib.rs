//! Payload types and parsing for the PokeAPI v2 catalog.
//!
//! Every creature, type, move and ability in the catalog is addressed by a
//! lowercase name. [`CanonicalName`] is the only form those names take once
//! they cross into this workspace; the payload structs mirror the JSON the
//! catalog returns and are parsed with the `parse_*` functions.

use thiserror::Error;

pub mod name;
pub mod payload;
mod resource;

pub use name::{CanonicalName, capitalize};
pub use payload::{
    AbilityPayload, ChainLink, DamageRelations, EvolutionChainPayload, MovePayload,
    NamedResource, PokemonPayload, SpeciesPayload, StatEntry, TypePayload, parse_ability,
    parse_evolution_chain, parse_move, parse_pokemon, parse_species, parse_type,
};
pub use resource::Resource;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Unknown type: {0}")]
    UnknownType(String),

    #[error("Stat total out of range for {0}")]
    StatOverflow(String),
}
