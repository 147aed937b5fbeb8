//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use authhub_api::state::AppState;
use authhub_auth::account::AccountService;
use authhub_auth::authenticator;
use authhub_auth::password::{PasswordHasher, PasswordValidator};
use authhub_auth::session::SessionStore;
use authhub_core::config::AppConfig;
use authhub_directory::{MemoryUserDirectory, UserDirectory};

/// A response captured from the router.
pub struct TestResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Parsed JSON body; `Null` when empty or non-JSON.
    pub body: Value,
    /// Raw `Set-Cookie` header, if any.
    pub set_cookie: Option<String>,
}

/// Test application context driving the full router in memory.
pub struct TestApp {
    /// The Axum router for making test requests.
    pub router: Router,
    /// Application config used to build the app.
    pub config: Arc<AppConfig>,
}

impl TestApp {
    /// Create a test application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a test application with a custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let config = Arc::new(config);
        let directory: Arc<dyn UserDirectory> = Arc::new(MemoryUserDirectory::new());
        let sessions = Arc::new(SessionStore::new(config.session.clone()));
        let auth = authenticator::from_config(
            &config.auth,
            Arc::clone(&directory),
            Arc::clone(&sessions),
        );
        let accounts = Arc::new(AccountService::new(
            Arc::clone(&directory),
            Arc::clone(&sessions),
            PasswordHasher::new(),
            PasswordValidator::new(&config.auth),
        ));

        let state = AppState {
            config: Arc::clone(&config),
            directory,
            sessions,
            authenticator: auth,
            accounts,
        };

        Self {
            router: authhub_api::build_router(state),
            config,
        }
    }

    /// Issue a request against the router.
    ///
    /// `cookie` is a session token; it is sent under the configured
    /// session cookie name. `auth_header` is sent verbatim as the
    /// `Authorization` header.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        cookie: Option<&str>,
        auth_header: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(token) = cookie {
            builder = builder.header(
                header::COOKIE,
                format!("{}={}", self.config.auth.session_cookie, token),
            );
        }
        if let Some(value) = auth_header {
            builder = builder.header(header::AUTHORIZATION, value);
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse {
            status,
            body,
            set_cookie,
        }
    }

    /// Register a user, asserting success.
    pub async fn register(&self, email: &str, password: &str) {
        let response = self
            .request(
                "POST",
                "/api/v1/users",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "register failed: {:?}", response.body);
    }

    /// Log a user in and return the session token from the `Set-Cookie`
    /// header.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/sessions",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {:?}", response.body);

        let set_cookie = response.set_cookie.expect("login set no cookie");
        let pair = set_cookie.split(';').next().unwrap();
        let (_, token) = pair.split_once('=').unwrap();
        token.to_string()
    }
}
