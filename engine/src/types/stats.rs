//! Offensive stat profiles and the ranked result

use counterdex_api::{CanonicalName, ParseError, PokemonPayload};
use serde::{Serialize, Serializer};

const ATTACK: &str = "attack";
const SPECIAL_ATTACK: &str = "special-attack";
const SPEED: &str = "speed";

/// Offensive base stats of one candidate.
///
/// The total score is fixed at construction and has no setter, so
/// `total == attack + special_attack + speed` holds for every value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatProfile {
    #[serde(rename = "Name", serialize_with = "serialize_display_name")]
    name: CanonicalName,

    #[serde(rename = "Attack")]
    attack: u32,

    #[serde(rename = "Special Attack")]
    special_attack: u32,

    #[serde(rename = "Speed")]
    speed: u32,

    #[serde(rename = "Total Score")]
    total: u32,
}

impl StatProfile {
    /// Fails when the three stats do not sum within `u32`
    pub fn new(
        name: CanonicalName,
        attack: u32,
        special_attack: u32,
        speed: u32,
    ) -> Result<Self, ParseError> {
        let total = attack
            .checked_add(special_attack)
            .and_then(|sum| sum.checked_add(speed))
            .ok_or_else(|| ParseError::StatOverflow(name.to_string()))?;

        Ok(Self {
            name,
            attack,
            special_attack,
            speed,
            total,
        })
    }

    /// Build from a `/pokemon` payload; stats the payload omits count as zero
    pub fn from_payload(payload: &PokemonPayload) -> Result<Self, ParseError> {
        Self::new(
            payload.name.clone(),
            payload.base_stat(ATTACK).unwrap_or(0),
            payload.base_stat(SPECIAL_ATTACK).unwrap_or(0),
            payload.base_stat(SPEED).unwrap_or(0),
        )
    }

    pub fn name(&self) -> &CanonicalName {
        &self.name
    }

    pub fn attack(&self) -> u32 {
        self.attack
    }

    pub fn special_attack(&self) -> u32 {
        self.special_attack
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn total(&self) -> u32 {
        self.total
    }
}

fn serialize_display_name<S: Serializer>(name: &CanonicalName, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&name.display_name())
}

/// Strongest counters first, at most the requested number of entries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    entries: Vec<StatProfile>,
}

impl RankedResult {
    pub(crate) fn new(entries: Vec<StatProfile>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatProfile> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[StatProfile] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<StatProfile> {
        self.entries
    }

    /// Canonical names in rank order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|p| p.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a RankedResult {
    type Item = &'a StatProfile;
    type IntoIter = std::slice::Iter<'a, StatProfile>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
