use serde::Deserialize;

use super::{NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /pokemon/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonPayload {
    #[serde(default)]
    pub id: u32,

    pub name: CanonicalName,

    /// Decimetres
    #[serde(default)]
    pub height: u32,

    /// Hectograms
    #[serde(default)]
    pub weight: u32,

    pub types: Vec<TypeSlot>,

    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,

    pub stats: Vec<StatEntry>,

    pub species: Option<NamedResource>,
}

impl PokemonPayload {
    /// Type names in slot order
    pub fn type_names(&self) -> Vec<&CanonicalName> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| &t.kind.name).collect()
    }

    /// Base value of a named stat, if the payload lists it
    pub fn base_stat(&self, stat: &str) -> Option<u32> {
        self.stats
            .iter()
            .find(|s| s.stat.name.as_str() == stat)
            .map(|s| s.base_stat)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeSlot {
    pub slot: u8,

    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,

    #[serde(default)]
    pub is_hidden: bool,

    #[serde(default)]
    pub slot: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

pub fn parse_pokemon(text: &str) -> Result<PokemonPayload, ParseError> {
    let payload: PokemonPayload = parse_json(text)?;
    if payload.types.is_empty() {
        return Err(ParseError::MissingField("types".to_string()));
    }
    Ok(payload)
}
