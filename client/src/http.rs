//! Request plumbing shared by every lookup

use std::time::Instant;

use counterdex_api::{ParseError, Resource};
use counterdex_engine::GatewayError;
use reqwest::StatusCode;

use crate::PokeApiClient;

impl PokeApiClient {
    pub(crate) fn resource_url(&self, resource: Resource, key: &str) -> String {
        format!("{}/{}/{}", self.config.base_url, resource.path(), key)
    }

    /// GET `{base_url}/{resource}/{key}` and parse the body with `parse`
    pub(crate) async fn fetch<T>(
        &self,
        resource: Resource,
        key: &str,
        parse: fn(&str) -> Result<T, ParseError>,
    ) -> Result<T, GatewayError> {
        let url = self.resource_url(resource, key);
        let started = Instant::now();

        tracing::debug!(%resource, key, %url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(resource, key, e, started))?;

        if let Some(e) = status_error(resource, key, response.status()) {
            tracing::debug!(%resource, key, status = %response.status(), "Lookup failed");
            return Err(e);
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(resource, key, e, started))?;

        tracing::debug!(
            %resource,
            key,
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Fetched"
        );

        parse(&body).map_err(|source| malformed(resource, key, source))
    }
}

pub(crate) fn malformed(resource: Resource, key: &str, source: ParseError) -> GatewayError {
    GatewayError::Malformed {
        resource,
        name: key.to_string(),
        source,
    }
}

/// `None` for any 2xx status
fn status_error(resource: Resource, key: &str, status: StatusCode) -> Option<GatewayError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(GatewayError::NotFound {
            resource,
            name: key.to_string(),
        })
    } else {
        Some(GatewayError::Status {
            resource,
            name: key.to_string(),
            status: status.as_u16(),
        })
    }
}

fn transport_error(
    resource: Resource,
    key: &str,
    error: reqwest::Error,
    started: Instant,
) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout {
            resource,
            name: key.to_string(),
            elapsed: started.elapsed(),
        }
    } else {
        GatewayError::Transport {
            resource,
            name: key.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;

    #[test]
    fn test_resource_url() {
        let client =
            PokeApiClient::new(ClientConfig::default().with_base_url("http://localhost:9000/api/v2/"))
                .unwrap();

        assert_eq!(
            client.resource_url(Resource::Species, "charizard"),
            "http://localhost:9000/api/v2/pokemon-species/charizard"
        );
        assert_eq!(
            client.resource_url(Resource::EvolutionChain, "2"),
            "http://localhost:9000/api/v2/evolution-chain/2"
        );
    }

    #[test]
    fn test_status_mapping() {
        assert!(status_error(Resource::Pokemon, "mew", StatusCode::OK).is_none());

        let not_found = status_error(Resource::Pokemon, "agumon", StatusCode::NOT_FOUND).unwrap();
        assert!(not_found.is_not_found());
        assert_eq!(not_found.to_string(), "pokemon 'agumon' not found");

        let unavailable =
            status_error(Resource::Type, "fire", StatusCode::SERVICE_UNAVAILABLE).unwrap();
        assert!(matches!(unavailable, GatewayError::Status { status: 503, .. }));
    }
}
