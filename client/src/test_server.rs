//! Canned-response HTTP server and catalog JSON builders for tests

use std::collections::HashMap;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::{ClientConfig, PokeApiClient};

const API_PREFIX: &str = "/api/v2";

/// Serves fixed bodies keyed by path under `/api/v2`; anything else is 404
#[derive(Default)]
pub(crate) struct TestServer {
    routes: HashMap<String, (StatusCode, String)>,
}

pub(crate) struct RunningServer {
    base_url: String,
    server: JoinHandle<()>,
}

impl TestServer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn route(mut self, path: &str, status: u16, body: String) -> Self {
        let status = StatusCode::from_u16(status).unwrap();
        self.routes.insert(path.to_string(), (status, body));
        self
    }

    fn into_router(self) -> Router {
        self.routes
            .into_iter()
            .fold(Router::new(), |router, (path, (status, body))| {
                router.route(
                    &format!("{API_PREFIX}{path}"),
                    get(move || {
                        let body = body.clone();
                        async move { (status, [(header::CONTENT_TYPE, "application/json")], body) }
                    }),
                )
            })
            .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
    }

    pub(crate) async fn serve(self) -> RunningServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = self.into_router();

        let server = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        RunningServer {
            base_url: format!("http://{addr}{API_PREFIX}"),
            server,
        }
    }
}

impl RunningServer {
    pub(crate) fn client(&self) -> PokeApiClient {
        PokeApiClient::new(ClientConfig::default().with_base_url(&self.base_url)).unwrap()
    }
}

impl Drop for RunningServer {
    fn drop(&mut self) {
        self.server.abort();
    }
}

fn named(name: &str) -> serde_json::Value {
    json!({ "name": name, "url": "" })
}

/// `/pokemon/{name}` body with the three offensive stats and hp
pub(crate) fn pokemon_json(name: &str, id: u32, types: &[&str], offense: [u32; 3]) -> String {
    let [attack, special_attack, speed] = offense;
    json!({
        "id": id,
        "name": name,
        "height": 17,
        "weight": 905,
        "types": types
            .iter()
            .enumerate()
            .map(|(i, t)| json!({ "slot": i + 1, "type": named(t) }))
            .collect::<Vec<_>>(),
        "abilities": [
            { "ability": named("blaze"), "is_hidden": false, "slot": 1 },
            { "ability": named("solar-power"), "is_hidden": true, "slot": 3 }
        ],
        "stats": [
            { "base_stat": 78, "stat": named("hp") },
            { "base_stat": attack, "stat": named("attack") },
            { "base_stat": special_attack, "stat": named("special-attack") },
            { "base_stat": speed, "stat": named("speed") }
        ],
        "species": named(name)
    })
    .to_string()
}

/// `/type/{name}` body
pub(crate) fn type_json(name: &str, double_damage_from: &[&str], members: &[&str]) -> String {
    json!({
        "name": name,
        "damage_relations": {
            "double_damage_from": double_damage_from.iter().map(|t| named(t)).collect::<Vec<_>>(),
            "half_damage_from": [],
            "no_damage_from": []
        },
        "pokemon": members
            .iter()
            .map(|m| json!({ "slot": 1, "pokemon": named(m) }))
            .collect::<Vec<_>>()
    })
    .to_string()
}

/// `/pokemon-species/{name}` body; `chain_id` of `None` omits the chain
pub(crate) fn species_json(name: &str, habitat: Option<&str>, chain_id: Option<u32>) -> String {
    json!({
        "name": name,
        "is_legendary": false,
        "is_mythical": false,
        "capture_rate": 45,
        "base_happiness": 50,
        "gender_rate": 1,
        "egg_groups": [named("monster"), named("dragon")],
        "evolution_chain": chain_id
            .map(|id| json!({ "url": format!("https://pokeapi.co/api/v2/evolution-chain/{id}/") })),
        "flavor_text_entries": [
            { "flavor_text": "Il crache du feu.", "language": named("fr") },
            { "flavor_text": "Spits fire that\nis hot enough\u{c}to melt boulders.", "language": named("en") }
        ],
        "habitat": habitat.map(named)
    })
    .to_string()
}

/// `/evolution-chain/{id}` body for a linear chain
pub(crate) fn chain_json(species: &[&str]) -> String {
    let mut link = serde_json::Value::Null;
    for name in species.iter().rev() {
        let evolves_to = if link.is_null() { vec![] } else { vec![link] };
        link = json!({ "species": named(name), "evolves_to": evolves_to });
    }
    json!({ "chain": link }).to_string()
}
