use serde::Deserialize;

use super::{ENGLISH, NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /pokemon-species/{name}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpeciesPayload {
    pub name: CanonicalName,

    #[serde(default)]
    pub is_legendary: bool,

    #[serde(default)]
    pub is_mythical: bool,

    #[serde(default)]
    pub capture_rate: u32,

    /// Null for some recent species
    pub base_happiness: Option<u32>,

    /// Eighths female, -1 for genderless
    #[serde(default)]
    pub gender_rate: i32,

    #[serde(default)]
    pub egg_groups: Vec<NamedResource>,

    pub evolution_chain: Option<UrlResource>,

    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,

    pub habitat: Option<NamedResource>,
}

impl SpeciesPayload {
    /// First English flavor text with form feeds and newlines flattened to spaces
    pub fn english_flavor_text(&self) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|e| e.language.name.as_str() == ENGLISH)
            .map(|e| e.flavor_text.replace(['\n', '\u{c}'], " "))
    }
}

/// Unnamed resource reference, e.g. `evolution_chain`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UrlResource {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

pub fn parse_species(text: &str) -> Result<SpeciesPayload, ParseError> {
    parse_json(text)
}
