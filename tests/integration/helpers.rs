//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::{TimeZone, Utc};
use http::{HeaderMap, Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use resumehub_core::config::AppConfig;
use resumehub_core::traits::{Clock, ManualClock};
use resumehub_database::Stores;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stores behind the router, for direct inspection
    pub stores: Stores,
    /// Clock driving expiry and timestamps
    pub clock: Arc<ManualClock>,
}

impl TestApp {
    /// In-memory app without debug endpoints
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// In-memory app with `GET /api/debug/shares` mounted
    pub fn with_debug_endpoints() -> Self {
        let mut config = test_config();
        config.share.debug_endpoints = true;
        Self::with_config(config)
    }

    /// App over the stores `config` selects
    pub fn with_config(config: AppConfig) -> Self {
        let stores = Stores::from_config(&config).expect("Failed to build stores");
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        ));
        let router = resumehub_api::build_app(
            config,
            stores.clone(),
            Arc::clone(&clock) as Arc<dyn Clock>,
        );

        Self {
            router,
            stores,
            clock,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        self.send(
            Request::builder()
                .method(method)
                .uri(path)
                .header("Content-Type", "application/json")
                .body(Body::from(body_str))
                .expect("Failed to build request"),
        )
        .await
    }

    /// Send a raw request, for tests that need custom headers or bodies
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }

    /// Create a resume for `user_id` and return its id
    pub async fn create_resume(&self, user_id: &str) -> String {
        let response = self
            .request("POST", "/api/resumes", Some(sample_resume(user_id)))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["id"]
            .as_str()
            .expect("resume id")
            .to_string()
    }

    /// Publish a share link and return its id
    pub async fn create_share(&self, body: Value) -> String {
        let response = self.request("POST", "/api/shares", Some(body)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{}", response.body);
        response.body["data"]["shareId"]
            .as_str()
            .expect("share id")
            .to_string()
    }
}

/// Test response wrapper
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body
    pub body: Value,
}

/// Configuration backed by the in-memory store
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.store.provider = "memory".to_string();
    config.share.base_url = "https://cv.example.com/".to_string();
    config.share.sweep_interval_seconds = 0;
    config
}

/// A complete, valid resume body
pub fn sample_resume(user_id: &str) -> Value {
    json!({
        "userId": user_id,
        "firstName": "Ada",
        "lastName": "Lovelace",
        "name": "Ada Lovelace",
        "nick": "ada",
        "nameLink": "https://example.com/ada",
        "locations": [{ "name": "London", "link": "https://maps.example.com/london" }],
        "languages": { "en": "native" },
        "about": [{ "title": "About", "description": "Analyst" }],
        "aboutLink": "https://example.com/about",
        "help": [],
        "helpLink": "https://example.com/help",
        "avatar": "https://example.com/ada.png",
        "avatarLink": "https://example.com/avatar",
        "summary": "First programmer",
        "summaryLink": "https://example.com/summary",
        "website": "https://example.com",
        "contact": { "email": "ada@example.com", "github": "ada" },
        "technologies": [],
        "experiences": [],
        "educations": [],
        "skills": [{ "name": "Mathematics", "years": 20 }],
        "projects": [],
        "contributions": [],
        "characteristics": ["curious"],
        "keywords": ["math"]
    })
}
