//! Type data resolved for a creature and for each type

use std::collections::BTreeSet;

use counterdex_api::{CanonicalName, ParseError, PokemonPayload, TypePayload};

use super::pokemon_type::Type;

/// A creature's types, in slot order (one or two entries)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeciesTypes {
    pub name: CanonicalName,
    pub types: Vec<Type>,
}

impl SpeciesTypes {
    pub fn from_payload(payload: &PokemonPayload) -> Result<Self, ParseError> {
        let types = payload
            .type_names()
            .into_iter()
            .map(Type::from_api)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: payload.name.clone(),
            types,
        })
    }
}

/// Defensive relations of one type plus the creatures classified under it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRelation {
    pub kind: Type,
    pub double_damage_from: BTreeSet<Type>,
    pub members: Vec<CanonicalName>,
}

impl TypeRelation {
    pub fn from_payload(payload: &TypePayload) -> Result<Self, ParseError> {
        let double_damage_from = payload
            .damage_relations
            .double_damage_from
            .iter()
            .map(|r| Type::from_api(&r.name))
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            kind: Type::from_api(&payload.name)?,
            double_damage_from,
            members: payload.member_names().cloned().collect(),
        })
    }
}
