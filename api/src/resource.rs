use std::fmt;

/// Catalog endpoints, named by their path segment under `/api/v2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Pokemon,
    Species,
    Type,
    Move,
    Ability,
    EvolutionChain,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match self {
            Resource::Pokemon => "pokemon",
            Resource::Species => "pokemon-species",
            Resource::Type => "type",
            Resource::Move => "move",
            Resource::Ability => "ability",
            Resource::EvolutionChain => "evolution-chain",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
