//! Shared fixtures for router-level tests.
//!
//! Each `TestApp` owns a temp directory holding the SQLite database, the
//! project catalog and the download directory.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use subweb::{
    config::{AuthConfig, Config, DatabaseConfig, ServerConfig, StorageConfig, WakeConfig},
    models::User,
    router,
    services::{hash_password, UserStore},
    AppState,
};

pub const CATALOG: &str = r#"{
    "project1": {
        "title": "Public project",
        "description": "visible",
        "download_link": "/download/public.txt",
        "private": false,
        "role": 0
    },
    "project2": {
        "title": "Private project",
        "description": "hidden",
        "download_link": "/download/private.txt",
        "private": true,
        "role": 1
    }
}"#;

pub struct TestApp {
    pub dir: TempDir,
    pub state: AppState,
    pub router: Router,
}

pub fn test_config(dir: &TempDir) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
            max_body_size: 64 * 1024,
        },
        database: DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("users.db").display()),
        },
        storage: StorageConfig {
            download_dir: dir.path().join("downloads").display().to_string(),
            projects_file: dir.path().join("projects.json").display().to_string(),
        },
        auth: AuthConfig {
            secret_key: Some("testing-secret".into()),
            disable_login: false,
            bcrypt_cost: 4,
        },
        wake: WakeConfig {
            url: "http://127.0.0.1:1".into(),
            timeout_secs: 5,
        },
    }
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    pub async fn with_config(customize: impl FnOnce(&mut Config)) -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::create_dir(dir.path().join("downloads")).expect("downloads dir");
        std::fs::write(dir.path().join("projects.json"), CATALOG).expect("catalog");

        let mut config = test_config(&dir);
        customize(&mut config);

        let state = AppState::new(config).await.expect("app state");
        let router = router(state.clone());
        Self { dir, state, router }
    }

    /// Same database and key, different settings.
    pub fn reconfigured(&self, customize: impl FnOnce(&mut Config)) -> Router {
        let mut state = self.state.clone();
        customize(&mut state.config);
        router(state)
    }

    pub fn store(&self) -> &UserStore {
        &self.state.users
    }

    pub async fn create_user(&self, username: &str, password: &str, role: i64) -> User {
        let hash = hash_password(password, 4).expect("hash");
        self.store().create(username, &hash, role).await.expect("create user")
    }

    pub fn write_download(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join("downloads").join(name), contents).expect("write file");
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.expect("infallible")
    }

    /// Log in through the real endpoint and return the session cookie.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .send(post_form("/login", &format!("username={}&password={}", username, password), None))
            .await;
        assert_eq!(response.status(), StatusCode::FOUND, "login failed for {}", username);
        session_cookie(&response).expect("session cookie")
    }

    /// Create a user with `role` and return their session cookie.
    pub async fn user_session(&self, username: &str, role: i64) -> (User, String) {
        let user = self.create_user(username, "pw", role).await;
        let cookie = self.login(username, "pw").await;
        (user, cookie)
    }

    pub async fn index(&self, cookie: Option<&str>) -> Value {
        let response = self.send(get("/", cookie)).await;
        assert_eq!(response.status(), StatusCode::OK);
        body_json(response).await
    }
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

/// `name=value` of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter(|value| value.starts_with("session=") && !value.contains("Max-Age=0"))
        .map(|value| value.split(';').next().unwrap_or_default().to_string())
        .next()
}

/// True when `response` tells the browser to drop the session cookie.
pub fn clears_session(response: &Response) -> bool {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with("session=") && value.contains("Max-Age=0"))
}

pub fn location(response: &Response) -> &str {
    response.headers()[header::LOCATION].to_str().unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
}

pub async fn body_string(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
