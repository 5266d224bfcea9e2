use async_trait::async_trait;
use counterdex_api::{CanonicalName, Resource, parse_pokemon, parse_type};
use counterdex_engine::{Gateway, GatewayError, SpeciesTypes, StatProfile, Type, TypeRelation};

use crate::PokeApiClient;
use crate::http::malformed;

#[async_trait]
impl Gateway for PokeApiClient {
    async fn species_types(&self, name: &CanonicalName) -> Result<SpeciesTypes, GatewayError> {
        let payload = self
            .fetch(Resource::Pokemon, name.as_str(), parse_pokemon)
            .await?;

        SpeciesTypes::from_payload(&payload)
            .map_err(|e| malformed(Resource::Pokemon, name.as_str(), e))
    }

    async fn type_relation(&self, kind: Type) -> Result<TypeRelation, GatewayError> {
        let payload = self.fetch(Resource::Type, kind.as_str(), parse_type).await?;

        TypeRelation::from_payload(&payload).map_err(|e| malformed(Resource::Type, kind.as_str(), e))
    }

    async fn stat_profile(&self, name: &CanonicalName) -> Result<StatProfile, GatewayError> {
        let payload = self
            .fetch(Resource::Pokemon, name.as_str(), parse_pokemon)
            .await?;

        StatProfile::from_payload(&payload)
            .map_err(|e| malformed(Resource::Pokemon, name.as_str(), e))
    }
}
