use serde::Deserialize;

use super::{NamedResource, parse_json};
use crate::{CanonicalName, ParseError};

/// `GET /evolution-chain/{id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EvolutionChainPayload {
    pub chain: ChainLink,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,

    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

impl EvolutionChainPayload {
    /// Species along the first branch, base form first.
    ///
    /// Branching chains (Eevee, Tyrogue) only report their first evolution.
    pub fn first_branch(&self) -> Vec<&CanonicalName> {
        let mut names = Vec::new();
        let mut link = Some(&self.chain);
        while let Some(current) = link {
            names.push(&current.species.name);
            link = current.evolves_to.first();
        }
        names
    }
}

pub fn parse_evolution_chain(text: &str) -> Result<EvolutionChainPayload, ParseError> {
    parse_json(text)
}
