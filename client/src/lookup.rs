//! Single-entity lookups: creature info, species, habitat, moves,
//! abilities and evolution chains

use std::fmt;

use counterdex_api::{
    CanonicalName, EvolutionChainPayload, MovePayload, ParseError, PokemonPayload, Resource,
    SpeciesPayload, capitalize, parse_ability, parse_evolution_chain, parse_move, parse_pokemon,
    parse_species,
};
use counterdex_engine::GatewayError;
use serde::{Serialize, Serializer};

use crate::PokeApiClient;
use crate::http::malformed;

const NO_HABITAT: &str = "No specific habitat (possibly legendary or event Pokémon).";

/// Display-ready summary of a creature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PokemonInfo {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "ID")]
    pub id: u32,

    #[serde(rename = "Height", serialize_with = "serialize_metres")]
    pub height_m: f64,

    #[serde(rename = "Weight", serialize_with = "serialize_kilograms")]
    pub weight_kg: f64,

    #[serde(rename = "Types")]
    pub types: Vec<String>,

    #[serde(rename = "Abilities")]
    pub abilities: Vec<String>,

    /// Stat name → base value, in catalog order
    #[serde(rename = "Base Stats", serialize_with = "serialize_pairs")]
    pub base_stats: Vec<(String, u32)>,
}

impl PokemonInfo {
    pub fn from_payload(payload: &PokemonPayload) -> Self {
        Self {
            name: payload.name.display_name(),
            id: payload.id,
            height_m: f64::from(payload.height) / 10.0,
            weight_kg: f64::from(payload.weight) / 10.0,
            types: payload
                .type_names()
                .into_iter()
                .map(CanonicalName::display_name)
                .collect(),
            abilities: payload
                .abilities
                .iter()
                .map(|a| capitalize(&a.ability.name.as_str().replace('-', " ")))
                .collect(),
            base_stats: payload
                .stats
                .iter()
                .map(|s| (s.stat.name.display_name(), s.base_stat))
                .collect(),
        }
    }
}

fn serialize_metres<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.1} m"))
}

fn serialize_kilograms<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!("{value:.1} kg"))
}

fn serialize_pairs<S: Serializer>(
    pairs: &[(String, u32)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(pairs.iter().map(|(k, v)| (k, v)))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpeciesDetails {
    pub name: CanonicalName,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub capture_rate: u32,
    pub base_happiness: Option<u32>,
    pub gender_rate: i32,
    pub egg_groups: Vec<CanonicalName>,
    pub evolution_chain_url: Option<String>,
    pub flavor_text: Option<String>,
}

impl SpeciesDetails {
    pub fn from_payload(payload: &SpeciesPayload) -> Self {
        Self {
            name: payload.name.clone(),
            is_legendary: payload.is_legendary,
            is_mythical: payload.is_mythical,
            capture_rate: payload.capture_rate,
            base_happiness: payload.base_happiness,
            gender_rate: payload.gender_rate,
            egg_groups: payload.egg_groups.iter().map(|g| g.name.clone()).collect(),
            evolution_chain_url: payload.evolution_chain.as_ref().map(|c| c.url.clone()),
            flavor_text: payload.english_flavor_text(),
        }
    }
}

/// Where a species lives in the wild
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Habitat {
    Named(CanonicalName),
    /// Legendaries and event creatures usually have none
    Unspecified,
}

impl Habitat {
    pub fn from_species(payload: &SpeciesPayload) -> Self {
        match &payload.habitat {
            Some(habitat) => Habitat::Named(habitat.name.clone()),
            None => Habitat::Unspecified,
        }
    }
}

impl fmt::Display for Habitat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Habitat::Named(name) => f.write_str(name.as_str()),
            Habitat::Unspecified => f.write_str(NO_HABITAT),
        }
    }
}

impl Serialize for Habitat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveDetails {
    pub name: CanonicalName,
    #[serde(rename = "type")]
    pub kind: CanonicalName,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub damage_class: CanonicalName,
    pub effect: Option<String>,
}

impl MoveDetails {
    pub fn from_payload(payload: &MovePayload) -> Self {
        Self {
            name: payload.name.clone(),
            kind: payload.kind.name.clone(),
            power: payload.power,
            accuracy: payload.accuracy,
            pp: payload.pp,
            damage_class: payload.damage_class.name.clone(),
            effect: payload.english_short_effect().map(str::to_string),
        }
    }
}

/// Capitalized species names along the first evolution branch
pub fn evolution_names(payload: &EvolutionChainPayload) -> Vec<String> {
    payload
        .first_branch()
        .into_iter()
        .map(CanonicalName::display_name)
        .collect()
}

/// Trailing id segment of an `evolution-chain` resource url
fn chain_id(url: &str) -> Option<&str> {
    url.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit()))
}

impl PokeApiClient {
    pub async fn pokemon_info(&self, name: &CanonicalName) -> Result<PokemonInfo, GatewayError> {
        tracing::info!(pokemon = %name, "Fetching info");
        let payload = self.pokemon_payload(name).await?;
        Ok(PokemonInfo::from_payload(&payload))
    }

    /// Species details, addressed by species name
    pub async fn species_details(
        &self,
        name: &CanonicalName,
    ) -> Result<SpeciesDetails, GatewayError> {
        tracing::info!(pokemon = %name, "Fetching species details");
        let payload = self
            .fetch(Resource::Species, name.as_str(), parse_species)
            .await?;
        Ok(SpeciesDetails::from_payload(&payload))
    }

    /// Habitat of a creature, found through its species
    pub async fn habitat(&self, name: &CanonicalName) -> Result<Habitat, GatewayError> {
        tracing::info!(pokemon = %name, "Fetching habitat");
        let pokemon = self.pokemon_payload(name).await?;
        let species = self.species_of(&pokemon).await?;
        Ok(Habitat::from_species(&species))
    }

    pub async fn move_details(&self, name: &CanonicalName) -> Result<MoveDetails, GatewayError> {
        tracing::info!(move_name = %name, "Fetching move details");
        let payload = self.fetch(Resource::Move, name.as_str(), parse_move).await?;
        Ok(MoveDetails::from_payload(&payload))
    }

    /// Every creature that can have the ability, hidden or not, in catalog order
    pub async fn pokemon_by_ability(
        &self,
        ability: &CanonicalName,
    ) -> Result<Vec<CanonicalName>, GatewayError> {
        tracing::info!(%ability, "Fetching creatures by ability");
        let payload = self
            .fetch(Resource::Ability, ability.as_str(), parse_ability)
            .await?;
        Ok(payload.pokemon.into_iter().map(|m| m.pokemon.name).collect())
    }

    /// Evolution line of a creature, base form first, first branch only
    pub async fn evolution_chain(&self, name: &CanonicalName) -> Result<Vec<String>, GatewayError> {
        tracing::info!(pokemon = %name, "Fetching evolution chain");
        let pokemon = self.pokemon_payload(name).await?;
        let species = self.species_of(&pokemon).await?;
        self.evolution_of(&species).await
    }

    pub(crate) async fn pokemon_payload(
        &self,
        name: &CanonicalName,
    ) -> Result<PokemonPayload, GatewayError> {
        self.fetch(Resource::Pokemon, name.as_str(), parse_pokemon).await
    }

    /// Species record of a creature; forms such as `charizard-mega` share
    /// their base species
    pub(crate) async fn species_of(
        &self,
        pokemon: &PokemonPayload,
    ) -> Result<SpeciesPayload, GatewayError> {
        let species = pokemon
            .species
            .as_ref()
            .map(|s| &s.name)
            .unwrap_or(&pokemon.name);
        self.fetch(Resource::Species, species.as_str(), parse_species)
            .await
    }

    /// A species without a chain is its own one-stage line
    pub(crate) async fn evolution_of(
        &self,
        species: &SpeciesPayload,
    ) -> Result<Vec<String>, GatewayError> {
        let Some(chain) = &species.evolution_chain else {
            return Ok(vec![species.name.display_name()]);
        };

        let id = chain_id(&chain.url).ok_or_else(|| {
            malformed(
                Resource::Species,
                species.name.as_str(),
                ParseError::MissingField("evolution_chain.url".to_string()),
            )
        })?;

        let payload = self
            .fetch(Resource::EvolutionChain, id, parse_evolution_chain)
            .await?;
        Ok(evolution_names(&payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_server::{TestServer, chain_json, pokemon_json, species_json};

    fn name(s: &str) -> CanonicalName {
        CanonicalName::new(s).unwrap()
    }

    #[test]
    fn test_pokemon_info_from_payload() {
        let payload =
            parse_pokemon(&pokemon_json("charizard", 6, &["fire", "flying"], [84, 109, 100]))
                .unwrap();

        let info = PokemonInfo::from_payload(&payload);

        assert_eq!(info.name, "Charizard");
        assert_eq!(info.id, 6);
        assert_eq!(info.height_m, 1.7);
        assert_eq!(info.weight_kg, 90.5);
        assert_eq!(info.types, vec!["Fire", "Flying"]);
        assert_eq!(info.abilities, vec!["Blaze", "Solar power"]);
        assert_eq!(info.base_stats[0], ("Hp".to_string(), 78));
        assert_eq!(info.base_stats[2], ("Special-attack".to_string(), 109));
    }

    #[test]
    fn test_pokemon_info_serializes_stats_in_order() {
        let payload =
            parse_pokemon(&pokemon_json("charizard", 6, &["fire"], [84, 109, 100])).unwrap();

        let json = serde_json::to_string(&PokemonInfo::from_payload(&payload)).unwrap();

        assert!(json.contains(
            r#""Base Stats":{"Hp":78,"Attack":84,"Special-attack":109,"Speed":100}"#
        ));
        assert!(json.contains(r#""Name":"Charizard""#));
        assert!(json.contains(r#""Height":"1.7 m""#));
        assert!(json.contains(r#""Weight":"90.5 kg""#));
    }

    #[test]
    fn test_species_details_from_payload() {
        let payload = parse_species(&species_json("charizard", Some("mountain"), Some(2))).unwrap();

        let details = SpeciesDetails::from_payload(&payload);

        assert_eq!(details.capture_rate, 45);
        assert_eq!(details.egg_groups, vec![name("monster"), name("dragon")]);
        assert_eq!(
            details.evolution_chain_url.as_deref(),
            Some("https://pokeapi.co/api/v2/evolution-chain/2/")
        );
        assert_eq!(
            details.flavor_text.as_deref(),
            Some("Spits fire that is hot enough to melt boulders.")
        );
    }

    #[test]
    fn test_habitat_display() {
        let named = parse_species(&species_json("charizard", Some("mountain"), None)).unwrap();
        let missing = parse_species(&species_json("mewtwo", None, None)).unwrap();

        assert_eq!(Habitat::from_species(&named), Habitat::Named(name("mountain")));
        assert_eq!(Habitat::from_species(&missing).to_string(), NO_HABITAT);
        assert_eq!(
            serde_json::to_string(&Habitat::Unspecified).unwrap(),
            format!("\"{NO_HABITAT}\"")
        );
    }

    #[test]
    fn test_move_details_from_payload() {
        let payload = parse_move(
            r#"{
                "name": "swords-dance",
                "type": {"name": "normal", "url": ""},
                "power": null,
                "accuracy": null,
                "pp": 20,
                "damage_class": {"name": "status", "url": ""},
                "effect_entries": [
                    {"short_effect": "Raises the user's Attack by two stages.",
                     "language": {"name": "en", "url": ""}}
                ]
            }"#,
        )
        .unwrap();

        let details = MoveDetails::from_payload(&payload);

        assert_eq!(details.kind.as_str(), "normal");
        assert_eq!(details.power, None);
        assert_eq!(details.pp, Some(20));
        assert_eq!(
            details.effect.as_deref(),
            Some("Raises the user's Attack by two stages.")
        );
    }

    #[test]
    fn test_chain_id() {
        assert_eq!(chain_id("https://pokeapi.co/api/v2/evolution-chain/67/"), Some("67"));
        assert_eq!(chain_id("https://pokeapi.co/api/v2/evolution-chain/67"), Some("67"));
        assert_eq!(chain_id("https://pokeapi.co/api/v2/evolution-chain/"), None);
        assert_eq!(chain_id(""), None);
    }

    #[tokio::test]
    async fn test_evolution_chain_follows_species() {
        let server = TestServer::new()
            .route(
                "/pokemon/charmeleon",
                200,
                pokemon_json("charmeleon", 5, &["fire"], [64, 80, 80]),
            )
            .route(
                "/pokemon-species/charmeleon",
                200,
                species_json("charmeleon", Some("mountain"), Some(2)),
            )
            .route(
                "/evolution-chain/2",
                200,
                chain_json(&["charmander", "charmeleon", "charizard"]),
            )
            .serve()
            .await;

        let chain = server.client().evolution_chain(&name("charmeleon")).await.unwrap();

        assert_eq!(chain, vec!["Charmander", "Charmeleon", "Charizard"]);
    }

    #[tokio::test]
    async fn test_evolution_chain_without_chain_is_single_stage() {
        let server = TestServer::new()
            .route(
                "/pokemon/zeraora",
                200,
                pokemon_json("zeraora", 807, &["electric"], [112, 102, 143]),
            )
            .route("/pokemon-species/zeraora", 200, species_json("zeraora", None, None))
            .serve()
            .await;

        let chain = server.client().evolution_chain(&name("zeraora")).await.unwrap();

        assert_eq!(chain, vec!["Zeraora"]);
    }

    #[tokio::test]
    async fn test_habitat_lookup() {
        let server = TestServer::new()
            .route(
                "/pokemon/mewtwo",
                200,
                pokemon_json("mewtwo", 150, &["psychic"], [110, 154, 130]),
            )
            .route("/pokemon-species/mewtwo", 200, species_json("mewtwo", None, None))
            .serve()
            .await;

        let habitat = server.client().habitat(&name("mewtwo")).await.unwrap();

        assert_eq!(habitat, Habitat::Unspecified);
    }

    #[tokio::test]
    async fn test_pokemon_by_ability() {
        let server = TestServer::new()
            .route(
                "/ability/levitate",
                200,
                r#"{"name": "levitate", "pokemon": [
                    {"is_hidden": false, "slot": 1, "pokemon": {"name": "gastly", "url": ""}},
                    {"is_hidden": false, "slot": 1, "pokemon": {"name": "haunter", "url": ""}}
                ]}"#
                .to_string(),
            )
            .serve()
            .await;

        let client = server.client();
        let members = client.pokemon_by_ability(&name("Levitate")).await.unwrap();
        assert_eq!(members, vec![name("gastly"), name("haunter")]);

        let err = client.pokemon_by_ability(&name("overgrowth")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_missing_species_surfaces_not_found() {
        let server = TestServer::new()
            .route(
                "/pokemon/pikachu",
                200,
                pokemon_json("pikachu", 25, &["electric"], [55, 50, 90]),
            )
            .serve()
            .await;

        let err = server.client().habitat(&name("pikachu")).await.unwrap_err();

        assert!(matches!(
            err,
            GatewayError::NotFound {
                resource: Resource::Species,
                ..
            }
        ));
    }
}
