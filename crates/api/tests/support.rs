#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use mergington_api::{router, AppContext};
use mergington_common::testing::TempDir;
use mergington_domain::{CapacityPolicy, Config};
use serde_json::Value;
use tower::ServiceExt;

pub const INDEX_HTML: &str = "<!DOCTYPE html><title>Mergington High School</title>";

/// Router over a fresh directory plus the temp folder backing `/static`.
pub struct TestApp {
    pub ctx: Arc<AppContext>,
    router: Router,
    _static_dir: TempDir,
}

impl TestApp {
    /// Built-in activities, advisory capacity
    pub fn new() -> Self {
        Self::build(|_| {})
    }

    /// Activities from a TOML seed written next to the static files
    pub fn with_seed(seed: &str, policy: CapacityPolicy) -> Self {
        let seed = seed.to_string();
        Self::build(move |config| {
            config.directory.capacity = policy;
            let path = config.server.static_dir.join("seed.toml");
            std::fs::write(&path, &seed).expect("failed to write seed file");
            config.directory.seed_file = Some(path);
        })
    }

    fn build(customize: impl FnOnce(&mut Config)) -> Self {
        let static_dir = TempDir::new("api-static").expect("failed to create static dir");
        static_dir.write_file("index.html", INDEX_HTML).expect("failed to write index.html");

        let mut config = Config::default();
        config.server.static_dir = static_dir.path().to_path_buf();
        customize(&mut config);

        let ctx = Arc::new(AppContext::new(config).expect("failed to build context"));
        let router = router(Arc::clone(&ctx));

        Self { ctx, router, _static_dir: static_dir }
    }

    pub async fn send(&self, method: Method, uri: &str) -> (StatusCode, String) {
        let request =
            Request::builder().method(method).uri(uri).body(Body::empty()).expect("bad request");
        let response = self.router.clone().oneshot(request).await.expect("router failed");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body read failed");
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    pub async fn json(&self, method: Method, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.send(method, uri).await;
        let value = serde_json::from_str(&body).expect("response is not JSON");
        (status, value)
    }

    pub async fn participants(&self, activity: &str) -> Vec<String> {
        let (_, activities) = self.json(Method::GET, "/activities").await;
        serde_json::from_value(activities[activity]["participants"].clone())
            .expect("participants is not a string array")
    }
}
