use serde::Deserialize;

use super::{NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /type/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypePayload {
    pub name: CanonicalName,

    pub damage_relations: DamageRelations,

    /// Creatures classified under this type
    #[serde(default)]
    pub pokemon: Vec<TypeMember>,
}

impl TypePayload {
    pub fn member_names(&self) -> impl Iterator<Item = &CanonicalName> {
        self.pokemon.iter().map(|m| &m.pokemon.name)
    }
}

/// Defensive relations of a type: which attacking types hit it for how much
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DamageRelations {
    pub double_damage_from: Vec<NamedResource>,

    #[serde(default)]
    pub half_damage_from: Vec<NamedResource>,

    #[serde(default)]
    pub no_damage_from: Vec<NamedResource>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TypeMember {
    #[serde(default)]
    pub slot: u8,

    pub pokemon: NamedResource,
}

pub fn parse_type(text: &str) -> Result<TypePayload, ParseError> {
    parse_json(text)
}
