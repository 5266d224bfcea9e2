//! Fixture-backed gateway

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use counterdex_api::{CanonicalName, Resource};

use super::Gateway;
use crate::error::GatewayError;
use crate::types::{SpeciesTypes, StatProfile, Type, TypeRelation};

/// A lookup made against a [`MemoryGateway`], in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    SpeciesTypes(CanonicalName),
    TypeRelation(Type),
    StatProfile(CanonicalName),
}

#[derive(Debug, Clone)]
struct Entry {
    types: Vec<Type>,
    stats: Option<(u32, u32, u32)>,
}

/// In-memory catalog.
///
/// Type relations start empty; [`with_chart_relations`](Self::with_chart_relations)
/// fills them from the built-in chart. Member lists are derived from the
/// creatures added with [`with_pokemon`](Self::with_pokemon). Every lookup
/// is recorded and can be inspected with [`calls`](Self::calls).
#[derive(Debug, Default)]
pub struct MemoryGateway {
    pokemon: HashMap<CanonicalName, Entry>,
    relations: HashMap<Type, BTreeSet<Type>>,
    extra_members: HashMap<Type, Vec<CanonicalName>>,
    failing_types: HashSet<Type>,
    failing_stats: HashSet<CanonicalName>,
    stat_delays: HashMap<CanonicalName, Duration>,
    stat_latency: Duration,
    calls: Mutex<Vec<GatewayCall>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive every type's double-damage relations from the type chart
    pub fn with_chart_relations(mut self) -> Self {
        for kind in Type::ALL {
            self.relations
                .insert(kind, kind.double_damage_from().collect());
        }
        self
    }

    /// Override the double-damage relations of one type
    pub fn with_relation(mut self, kind: Type, double_damage_from: &[Type]) -> Self {
        self.relations
            .insert(kind, double_damage_from.iter().copied().collect());
        self
    }

    /// Add a creature; it joins the member list of each of its types
    pub fn with_pokemon(
        mut self,
        name: CanonicalName,
        types: &[Type],
        attack: u32,
        special_attack: u32,
        speed: u32,
    ) -> Self {
        self.pokemon.insert(
            name,
            Entry {
                types: types.to_vec(),
                stats: Some((attack, special_attack, speed)),
            },
        );
        self
    }

    /// Add a creature whose stat lookup reports not found
    pub fn with_statless_pokemon(mut self, name: CanonicalName, types: &[Type]) -> Self {
        self.pokemon.insert(
            name,
            Entry {
                types: types.to_vec(),
                stats: None,
            },
        );
        self
    }

    /// List a name under a type without making it a known creature
    pub fn with_member(mut self, kind: Type, name: CanonicalName) -> Self {
        self.extra_members.entry(kind).or_default().push(name);
        self
    }

    /// Make the relation lookup of a type fail with a server error
    pub fn failing_type(mut self, kind: Type) -> Self {
        self.failing_types.insert(kind);
        self
    }

    /// Make the stat lookup of a creature fail with a server error
    pub fn failing_stats(mut self, name: CanonicalName) -> Self {
        self.failing_stats.insert(name);
        self
    }

    /// Delay the stat lookup of one creature
    pub fn with_stat_delay(mut self, name: CanonicalName, delay: Duration) -> Self {
        self.stat_delays.insert(name, delay);
        self
    }

    /// Delay every stat lookup, so concurrent lookups overlap
    pub fn with_stat_latency(mut self, latency: Duration) -> Self {
        self.stat_latency = latency;
        self
    }

    /// Lookups made so far
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    /// Highest number of stat lookups that were in progress at once
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: GatewayCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }

    fn members_of(&self, kind: Type) -> Vec<CanonicalName> {
        let mut members: Vec<CanonicalName> = self
            .pokemon
            .iter()
            .filter(|(_, entry)| entry.types.contains(&kind))
            .map(|(name, _)| name.clone())
            .collect();
        members.sort();
        if let Some(extra) = self.extra_members.get(&kind) {
            members.extend(extra.iter().cloned());
        }
        members
    }
}

#[async_trait]
impl Gateway for MemoryGateway {
    async fn species_types(&self, name: &CanonicalName) -> Result<SpeciesTypes, GatewayError> {
        self.record(GatewayCall::SpeciesTypes(name.clone()));

        let entry = self.pokemon.get(name).ok_or_else(|| GatewayError::NotFound {
            resource: Resource::Pokemon,
            name: name.to_string(),
        })?;

        Ok(SpeciesTypes {
            name: name.clone(),
            types: entry.types.clone(),
        })
    }

    async fn type_relation(&self, kind: Type) -> Result<TypeRelation, GatewayError> {
        self.record(GatewayCall::TypeRelation(kind));

        if self.failing_types.contains(&kind) {
            return Err(GatewayError::Status {
                resource: Resource::Type,
                name: kind.to_string(),
                status: 500,
            });
        }

        Ok(TypeRelation {
            kind,
            double_damage_from: self.relations.get(&kind).cloned().unwrap_or_default(),
            members: self.members_of(kind),
        })
    }

    async fn stat_profile(&self, name: &CanonicalName) -> Result<StatProfile, GatewayError> {
        self.record(GatewayCall::StatProfile(name.clone()));

        let _in_flight = InFlight::enter(&self.in_flight, &self.peak_in_flight);

        let delay = self
            .stat_delays
            .get(name)
            .copied()
            .unwrap_or(self.stat_latency);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if self.failing_stats.contains(name) {
            return Err(GatewayError::Status {
                resource: Resource::Pokemon,
                name: name.to_string(),
                status: 503,
            });
        }

        match self.pokemon.get(name).and_then(|entry| entry.stats) {
            Some((attack, special_attack, speed)) => {
                StatProfile::new(name.clone(), attack, special_attack, speed).map_err(|source| {
                    GatewayError::Malformed {
                        resource: Resource::Pokemon,
                        name: name.to_string(),
                        source,
                    }
                })
            }
            None => Err(GatewayError::NotFound {
                resource: Resource::Pokemon,
                name: name.to_string(),
            }),
        }
    }
}

/// Counts a stat lookup as in flight until dropped, including when a
/// timeout drops the lookup mid-delay
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize, peak: &AtomicUsize) -> Self {
        let current = counter.fetch_add(1, Ordering::SeqCst) + 1;
        peak.fetch_max(current, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
