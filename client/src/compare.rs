//! Side-by-side comparison of two creatures

use counterdex_api::{CanonicalName, SpeciesPayload};
use counterdex_engine::GatewayError;
use serde::{Serialize, Serializer};
use tracing::Instrument;

use crate::PokeApiClient;
use crate::lookup::{Habitat, PokemonInfo};

/// Everything known about one creature, flattened into a single row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRecord {
    #[serde(flatten)]
    pub info: PokemonInfo,

    #[serde(rename = "Habitat")]
    pub habitat: Habitat,

    #[serde(rename = "Is Legendary")]
    pub is_legendary: bool,

    #[serde(rename = "Is Mythical")]
    pub is_mythical: bool,

    #[serde(rename = "Capture Rate")]
    pub capture_rate: u32,

    #[serde(rename = "Base Happiness")]
    pub base_happiness: Option<u32>,

    #[serde(rename = "Gender Rate")]
    pub gender_rate: i32,

    /// Comma separated
    #[serde(rename = "Egg Groups")]
    pub egg_groups: String,

    /// Arrow separated, base form first
    #[serde(rename = "Evolution Chain")]
    pub evolution_chain: String,

    #[serde(rename = "Flavor Text")]
    pub flavor_text: Option<String>,
}

impl ComparisonRecord {
    pub fn new(info: PokemonInfo, species: &SpeciesPayload, evolution_chain: &[String]) -> Self {
        Self {
            info,
            habitat: Habitat::from_species(species),
            is_legendary: species.is_legendary,
            is_mythical: species.is_mythical,
            capture_rate: species.capture_rate,
            base_happiness: species.base_happiness,
            gender_rate: species.gender_rate,
            egg_groups: species
                .egg_groups
                .iter()
                .map(|g| g.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            evolution_chain: evolution_chain.join(" → "),
            flavor_text: species.english_flavor_text(),
        }
    }
}

/// Two records in request order; serializes as a two-element list
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: ComparisonRecord,
    pub second: ComparisonRecord,
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [&self.first, &self.second].serialize(serializer)
    }
}

impl PokeApiClient {
    /// Gather both creatures concurrently; either failing fails the comparison
    pub async fn compare(
        &self,
        first: &CanonicalName,
        second: &CanonicalName,
    ) -> Result<Comparison, GatewayError> {
        let span = tracing::info_span!("compare", %first, %second);

        async {
            let (first, second) = tokio::try_join!(self.gather(first), self.gather(second))
                .inspect_err(|e| tracing::error!(error = %e, "Comparison failed"))?;

            tracing::info!("Compared");
            Ok::<_, GatewayError>(Comparison { first, second })
        }
        .instrument(span)
        .await
    }

    async fn gather(&self, name: &CanonicalName) -> Result<ComparisonRecord, GatewayError> {
        let pokemon = self.pokemon_payload(name).await?;
        let species = self.species_of(&pokemon).await?;
        let chain = self.evolution_of(&species).await?;

        tracing::debug!(pokemon = %name, "Gathered comparison data");

        Ok(ComparisonRecord::new(
            PokemonInfo::from_payload(&pokemon),
            &species,
            &chain,
        ))
    }
}

#[cfg(test)]
mod tests {
    use counterdex_api::{parse_pokemon, parse_species};

    use super::*;
    use crate::test_server::{TestServer, chain_json, pokemon_json, species_json};

    fn name(s: &str) -> CanonicalName {
        CanonicalName::new(s).unwrap()
    }

    fn starter_server() -> TestServer {
        TestServer::new()
            .route(
                "/pokemon/charizard",
                200,
                pokemon_json("charizard", 6, &["fire", "flying"], [84, 109, 100]),
            )
            .route(
                "/pokemon-species/charizard",
                200,
                species_json("charizard", Some("mountain"), Some(2)),
            )
            .route(
                "/evolution-chain/2",
                200,
                chain_json(&["charmander", "charmeleon", "charizard"]),
            )
            .route(
                "/pokemon/mewtwo",
                200,
                pokemon_json("mewtwo", 150, &["psychic"], [110, 154, 130]),
            )
            .route("/pokemon-species/mewtwo", 200, species_json("mewtwo", None, None))
    }

    #[test]
    fn test_record_flattens_species_fields() {
        let pokemon =
            parse_pokemon(&pokemon_json("charizard", 6, &["fire"], [84, 109, 100])).unwrap();
        let species = parse_species(&species_json("charizard", Some("mountain"), Some(2))).unwrap();
        let chain = ["Charmander".to_string(), "Charmeleon".to_string(), "Charizard".to_string()];

        let record = ComparisonRecord::new(PokemonInfo::from_payload(&pokemon), &species, &chain);

        assert_eq!(record.egg_groups, "monster, dragon");
        assert_eq!(record.evolution_chain, "Charmander → Charmeleon → Charizard");
        assert_eq!(record.habitat, Habitat::Named(name("mountain")));

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["Name"], "Charizard");
        assert_eq!(json["Habitat"], "mountain");
        assert_eq!(json["Capture Rate"], 45);
        assert_eq!(json["Height"], "1.7 m");
        assert_eq!(json["Base Stats"]["Attack"], 84);
    }

    #[tokio::test]
    async fn test_compare_two_creatures() {
        let server = starter_server().serve().await;

        let comparison = server
            .client()
            .compare(&name("charizard"), &name("mewtwo"))
            .await
            .unwrap();

        assert_eq!(comparison.first.info.name, "Charizard");
        assert_eq!(comparison.second.info.name, "Mewtwo");
        assert_eq!(comparison.second.evolution_chain, "Mewtwo");
        assert_eq!(comparison.second.habitat, Habitat::Unspecified);

        let rows = serde_json::to_value(&comparison).unwrap();
        assert_eq!(rows.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_compare_fails_when_either_side_is_missing() {
        let server = starter_server().serve().await;

        let err = server
            .client()
            .compare(&name("charizard"), &name("digimon"))
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
