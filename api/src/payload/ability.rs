use serde::Deserialize;

use super::{NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /ability/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityPayload {
    pub name: CanonicalName,

    #[serde(default)]
    pub pokemon: Vec<AbilityMember>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AbilityMember {
    #[serde(default)]
    pub is_hidden: bool,

    pub pokemon: NamedResource,
}

pub fn parse_ability(text: &str) -> Result<AbilityPayload, ParseError> {
    parse_json(text)
}
