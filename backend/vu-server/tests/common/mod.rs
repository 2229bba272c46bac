#![allow(dead_code)]

//! Test infrastructure for vu-server API tests

use vu_config::Config;
use vu_core::{CredentialRecord, DiscordId, MappingRecord, MinecraftUuid};
use vu_db::Database;
use vu_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const NOTCH_UUID: &str = "069a79f444e94726a5befca90e38aaf5";
pub const NOTCH_UUID_HYPHENATED: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";
pub const DISCORD_ID: &str = "123456789012345678";

/// Mock upstreams, a migrated store and the state built from them
pub struct TestApp {
    pub server: MockServer,
    pub state: AppState,
    _temp: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    /// `configure` runs after provider URLs point at the mock server
    pub async fn with_config(configure: impl FnOnce(&mut Config)) -> Self {
        let server = MockServer::start().await;
        let temp = TempDir::new().expect("temp dir");
        let database = Database::open(&temp.path().join("links.db"), 1)
            .await
            .expect("open database");
        database.migrate().await.expect("migrate");

        let mut config = Config::default();
        config.providers.mojang_api_url = server.uri();
        config.providers.mojang_session_url = server.uri();
        config.providers.discord_api_url = server.uri();
        config.providers.hypixel_api_url = server.uri();
        config.providers.discord_bot_token = Some("bot".to_string());
        config.providers.hypixel_api_key = Some("key".to_string());
        config.providers.timeout_secs = 5;
        config.bot_challenge.verify_url = format!("{}/siteverify", server.uri());
        configure(&mut config);

        let state = AppState::from_config(&config, database).expect("app state");

        Self {
            server,
            state,
            _temp: temp,
        }
    }

    pub fn router(&self) -> Router {
        build_router(self.state.clone())
    }

    pub async fn send(&self, request: Request<Body>) -> (u16, Value) {
        let response = self.router().oneshot(request).await.unwrap();
        read_json(response).await
    }

    pub async fn seed_key(&self, key: &str, permissions: &[&str]) {
        self.state
            .database
            .api_keys()
            .create(&CredentialRecord {
                id: format!("id-{}", key),
                key: key.to_string(),
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            })
            .await
            .expect("seed api key");
    }

    pub async fn link(&self, uuid: &str, discord_id: &str) {
        self.state
            .database
            .links()
            .upsert(&MappingRecord::new(
                MinecraftUuid::parse(uuid).unwrap(),
                DiscordId::parse(discord_id).unwrap(),
            ))
            .await
            .expect("seed link");
    }

    pub async fn stored_by_discord_id(&self, discord_id: &str) -> Option<MappingRecord> {
        self.state
            .database
            .links()
            .find_by_discord_id(DiscordId::parse(discord_id).unwrap())
            .await
            .expect("find link")
    }

    pub async fn mock_name(&self, ign: &str, uuid: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/profiles/minecraft/{}", ign)))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": uuid, "name": ign})),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_profile(&self, uuid: &str, name: &str) {
        let value = STANDARD.encode(
            json!({
                "profileId": uuid,
                "textures": { "SKIN": { "url": "http://textures.minecraft.net/texture/skin" } }
            })
            .to_string(),
        );

        Mock::given(method("GET"))
            .and(path(format!("/session/minecraft/profile/{}", uuid)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": uuid,
                "name": name,
                "properties": [{ "name": "textures", "value": value }]
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_discord(&self, id: &str, username: &str, discriminator: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", id)))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": id,
                "username": username,
                "discriminator": discriminator
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_discord_status(&self, id: &str, status: u16) {
        Mock::given(method("GET"))
            .and(path(format!("/users/{}", id)))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_hypixel(&self, discord_tag: &str) {
        Mock::given(method("GET"))
            .and(path("/player"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "player": { "socialMedia": { "links": { "DISCORD": discord_tag } } }
            })))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_hypixel_status(&self, status: u16) {
        Mock::given(method("GET"))
            .and(path("/player"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    pub async fn mock_siteverify(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path("/siteverify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }
}

pub async fn read_json(response: Response<Body>) -> (u16, Value) {
    let status = response.status().as_u16();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn request_with_key(method: &str, uri: &str, key: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", key)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request_with_key(method: &str, uri: &str, key: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Authorization", key)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}
