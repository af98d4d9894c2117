#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use blockcopy_api::config::{ServerConfig, DEFAULT_MAX_UPLOAD_BYTES};
use blockcopy_api::router::build_app_router;
use blockcopy_api::state::AppState;
use blockcopy_core::provider::{
    LanguageModel, MediaStore, MediaUpload, ModelInfo, PromptMessage, ProviderError, StoredMedia,
};
use blockcopy_core::session::SessionPolicy;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults and no external providers.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        session: SessionPolicy::default(),
        openrouter: None,
        cloudinary: None,
    }
}

// ---------------------------------------------------------------------------
// Fake providers
// ---------------------------------------------------------------------------

/// Language model returning canned replies and recording every request.
#[derive(Default)]
pub struct FakeLlm {
    /// Reply text; `None` makes every completion fail with a 500 from "upstream".
    pub reply: Mutex<Option<String>>,
    pub requests: Mutex<Vec<(String, Vec<PromptMessage>)>>,
}

impl FakeLlm {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Mutex::new(Some(reply.to_string())),
            requests: Mutex::default(),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last_request(&self) -> Option<(String, Vec<PromptMessage>)> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LanguageModel for FakeLlm {
    fn default_model(&self) -> &str {
        "openai/gpt-4o"
    }

    async fn complete(
        &self,
        model: &str,
        messages: &[PromptMessage],
    ) -> Result<String, ProviderError> {
        self.requests
            .lock()
            .unwrap()
            .push((model.to_string(), messages.to_vec()));
        self.reply
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ProviderError::Api {
                status: 500,
                message: "model overloaded".into(),
            })
    }

    async fn list_models(&self) -> Result<Vec<ModelInfo>, ProviderError> {
        Ok(vec![ModelInfo {
            id: "openai/gpt-4o".into(),
            name: "GPT-4o".into(),
            description: None,
            context_length: Some(128_000),
        }])
    }

    async fn verify_key(&self, api_key: Option<&str>) -> Result<bool, ProviderError> {
        Ok(api_key.map_or(true, |k| k == "sk-valid"))
    }
}

/// Media host keeping uploads in memory.
#[derive(Default)]
pub struct FakeMedia {
    pub uploads: Mutex<Vec<MediaUpload>>,
    pub destroyed: Mutex<Vec<String>>,
}

impl FakeMedia {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn destroyed(&self) -> Vec<String> {
        self.destroyed.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaStore for FakeMedia {
    async fn upload(&self, upload: MediaUpload) -> Result<StoredMedia, ProviderError> {
        let public_id = format!("{}/{}", upload.folder, upload.file_name);
        let stored = StoredMedia {
            secure_url: format!("https://media.test/{public_id}"),
            public_id,
            resource_type: "raw".into(),
            bytes: upload.bytes.len() as i64,
        };
        self.uploads.lock().unwrap().push(upload);
        Ok(stored)
    }

    async fn destroy(&self, public_id: &str) -> Result<(), ProviderError> {
        self.destroyed.lock().unwrap().push(public_id.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router with no external providers.
///
/// Uses the production [`build_app_router`] so integration tests exercise
/// the same middleware stack (CORS, request ID, timeout, tracing, panic
/// recovery, body limit).
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, None, None)
}

pub fn build_test_app_with(
    pool: PgPool,
    llm: Option<Arc<dyn LanguageModel>>,
    media: Option<Arc<dyn MediaStore>>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        llm,
        media,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub const TEST_PASSWORD: &str = "secret123";

/// Register a user through the API and return the session token.
pub async fn register(pool: &PgPool, email: &str) -> String {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/auth/register",
        serde_json::json!({ "email": email, "password": TEST_PASSWORD, "name": "Test User" }),
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["token"]
        .as_str()
        .expect("token in register response")
        .to_string()
}

/// Create a project through the API and return its id.
pub async fn create_project(pool: &PgPool, token: &str, name: &str) -> i64 {
    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/projects",
        serde_json::json!({ "name": name }),
        token,
    )
    .await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    body_json(response).await["project"]["id"]
        .as_i64()
        .expect("project id")
}
