use std::fmt;
use std::time::Duration;

use counterdex_api::{CanonicalName, ParseError, Resource};
use thiserror::Error;

/// Failure of a single upstream lookup
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{resource} '{name}' not found")]
    NotFound { resource: Resource, name: String },

    #[error("{resource} '{name}' returned status {status}")]
    Status {
        resource: Resource,
        name: String,
        status: u16,
    },

    #[error("request for {resource} '{name}' failed: {message}")]
    Transport {
        resource: Resource,
        name: String,
        message: String,
    },

    #[error("{resource} '{name}' timed out after {elapsed:?}")]
    Timeout {
        resource: Resource,
        name: String,
        elapsed: Duration,
    },

    #[error("malformed {resource} payload for '{name}': {source}")]
    Malformed {
        resource: Resource,
        name: String,
        #[source]
        source: ParseError,
    },
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }
}

/// Pipeline stage whose upstream lookups must all succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SpeciesTypes,
    TypeRelations,
    TypeMembers,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Stage::SpeciesTypes => "species type lookup",
            Stage::TypeRelations => "type relation lookup",
            Stage::TypeMembers => "type membership lookup",
        };
        f.write_str(s)
    }
}

/// Reasons a counter request produces no ranking at all
#[derive(Error, Debug)]
pub enum CounterError {
    #[error("Pokémon '{name}' not found.")]
    NotFound { name: CanonicalName },

    #[error("{stage} failed: {source}")]
    Upstream {
        stage: Stage,
        #[source]
        source: GatewayError,
    },

    #[error("invalid target name: {0}")]
    InvalidName(#[from] ParseError),
}
