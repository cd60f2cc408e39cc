#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use uuid::Uuid;

use configs::{AppConfig, AuthSettings};

pub const BOUNDARY: &str = "X-MARKET-BOUNDARY";

pub struct TestApp {
    pub router: Router,
    pub cfg: AppConfig,
    pub root: PathBuf,
}

impl TestApp {
    pub fn data_file(&self, name: &str) -> PathBuf {
        PathBuf::from(&self.cfg.storage.data_dir).join(name)
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.cfg.uploads.upload_dir()
    }

    /// Rebuild the router from the same directories, as a restart would.
    pub async fn restart(&self) -> anyhow::Result<Router> {
        server::startup::build_app(&self.cfg).await
    }

    pub async fn send(&self, req: Request<Body>) -> anyhow::Result<Reply> {
        send(&self.router, req).await
    }

    pub async fn cleanup(self) {
        let _ = tokio::fs::remove_dir_all(&self.root).await;
    }
}

pub struct Reply {
    pub status: StatusCode,
    pub location: Option<String>,
    pub body: String,
}

impl Reply {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

pub fn test_config(root: &std::path::Path) -> AppConfig {
    let mut cfg = AppConfig::default();
    cfg.storage.data_dir = root.join("data").to_string_lossy().into_owned();
    cfg.uploads.public_dir = root.join("public").to_string_lossy().into_owned();
    cfg.uploads.max_file_bytes = 1024;
    cfg.auth = AuthSettings { memory_kib: 1024, iterations: 1, parallelism: 1 };
    cfg
}

pub async fn spawn_app() -> anyhow::Result<TestApp> {
    let root = std::env::temp_dir().join(format!("marketplace_test_{}", Uuid::new_v4()));
    let cfg = test_config(&root);
    let router = server::startup::build_app(&cfg).await?;
    Ok(TestApp { router, cfg, root })
}

pub async fn send(router: &Router, req: Request<Body>) -> anyhow::Result<Reply> {
    let resp = router.clone().oneshot(req).await?;
    let status = resp.status();
    let location = resp
        .headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let bytes = resp.into_body().collect().await?.to_bytes();
    Ok(Reply { status, location, body: String::from_utf8_lossy(&bytes).into_owned() })
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).expect("request")
}

pub fn form_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub struct FilePart<'a> {
    pub file_name: &'a str,
    pub content_type: &'a str,
    pub bytes: &'a [u8],
}

pub fn multipart_post(uri: &str, fields: &[(&str, &str)], file: Option<FilePart<'_>>) -> Request<Body> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n").as_bytes(),
        );
    }
    if let Some(f) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"productImage\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                f.file_name, f.content_type
            )
            .as_bytes(),
        );
        body.extend_from_slice(f.bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .expect("request")
}

pub const ANN_LISTING: &[(&str, &str)] = &[
    ("sellerName", "Ann"),
    ("sellerEmail", "a@x.com"),
    ("sellerPhone", "555"),
    ("productName", "Jacket"),
    ("productPrice", "25.50"),
];
