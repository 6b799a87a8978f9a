//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode, header};
use tempfile::TempDir;
use tower::ServiceExt;

use sharegate_api::AppState;
use sharegate_auth::{Token, TokenCodec, TokenV1};
use sharegate_core::config::AppConfig;

/// Key shared by the app under test and the helpers that mint tokens.
pub const TEST_KEY: &str = "integration-test-key-32-bytes!!!";

/// `root:hunter2`
pub const ADMIN_AUTH: &str = "Basic cm9vdDpodW50ZXIy";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Codec using the app's key
    pub codec: TokenCodec,
    /// Holds the content roots for the lifetime of the test
    pub dir: TempDir,
}

/// A buffered response
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of the `Location` header
    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// `name=value` pair of the first `Set-Cookie` header
    pub fn cookie_pair(&self) -> Option<String> {
        let value = self.headers.get(header::SET_COOKIE)?.to_str().ok()?;
        value.split(';').next().map(str::to_string)
    }
}

impl TestApp {
    /// Create a new test application over a fresh content tree
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let routes = dir.path().join("routes");
        let assets = dir.path().join("static");

        write(&routes.join("index.html"), "<h1>home</h1>");
        write(&routes.join("secret.txt"), "top secret");
        write(&routes.join("docs/index.html"), "<h1>docs</h1>");
        write(&routes.join("docs/readme.txt"), "read me");
        write(&routes.join("docs/guide/intro.txt"), "intro");
        write(&routes.join("docsecret/notes.txt"), "notes");
        write(&routes.join("api/v1.json"), "{\"v\":1}");
        write(&assets.join("favicon.ico"), "ico");
        write(&assets.join("style.css"), "body {}");
        write(&assets.join("fonts/index.html"), "fonts");

        let mut config = AppConfig::default();
        config.token.encryption_key = Some(TEST_KEY.to_string());
        config.admin.username = Some("root".to_string());
        config.admin.password = Some("hunter2".to_string());
        config.content.routes_root = routes.display().to_string();
        config.content.static_root = assets.display().to_string();

        let state = AppState::new(config).unwrap();
        let router = sharegate_api::build_app(state);
        let codec = TokenCodec::new(TEST_KEY.as_bytes()).unwrap();

        Self { router, codec, dir }
    }

    /// Encrypts a grant with the app's key
    pub fn mint(&self, grant: TokenV1) -> String {
        self.codec.encrypt(&Token::V1(grant)).unwrap()
    }

    /// Cookie header carrying `raw`
    pub fn cookie(raw: &str) -> String {
        format!("auth#data={raw}")
    }

    /// Make a request against the app
    pub async fn request(&self, method: &str, uri: &str, headers: &[(&str, &str)]) -> TestResponse {
        self.send(method, uri, headers, Body::empty()).await
    }

    /// GET with the authentication cookie for `raw`
    pub async fn get_with_token(&self, uri: &str, raw: &str) -> TestResponse {
        let cookie = Self::cookie(raw);
        self.request("GET", uri, &[("cookie", cookie.as_str())]).await
    }

    /// POST a url-encoded form
    pub async fn post_form(&self, uri: &str, form: &str, headers: &[(&str, &str)]) -> TestResponse {
        let mut all = vec![("content-type", "application/x-www-form-urlencoded")];
        all.extend_from_slice(headers);
        self.send("POST", uri, &all, Body::from(form.to_string()))
            .await
    }

    async fn send(
        &self,
        method: &str,
        uri: &str,
        headers: &[(&str, &str)],
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}

fn write(path: &std::path::Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
