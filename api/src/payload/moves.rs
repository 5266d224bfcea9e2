use serde::Deserialize;

use super::{ENGLISH, NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /move/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovePayload {
    pub name: CanonicalName,

    #[serde(rename = "type")]
    pub kind: NamedResource,

    /// Null for status moves
    pub power: Option<u32>,

    /// Null for moves that never miss
    pub accuracy: Option<u32>,

    pub pp: Option<u32>,

    pub damage_class: NamedResource,

    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
}

impl MovePayload {
    pub fn english_short_effect(&self) -> Option<&str> {
        self.effect_entries
            .iter()
            .find(|e| e.language.name.as_str() == ENGLISH)
            .map(|e| e.short_effect.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EffectEntry {
    pub short_effect: String,
    pub language: NamedResource,
}

pub fn parse_move(text: &str) -> Result<MovePayload, ParseError> {
    parse_json(text)
}
