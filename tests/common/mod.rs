//! Shared test utilities for integration tests.
//!
//! This module provides a `TestClient` that drives the full application router
//! in-process. It keeps the analyzer session cookie between requests so a
//! sequence of calls behaves like one browser session.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use financeai::config::Config;
use financeai::server::build_app;
use financeai::state::AppState;
use http_body_util::BodyExt;
use std::sync::Mutex;
use tower::ServiceExt;

/// A test client that simulates a browser session, allowing sequential requests
/// against the application.
pub struct TestClient {
    state: AppState,
    app: Router,
    cookie: Mutex<Option<String>>,
}

impl TestClient {
    /// Create a new test client with default configuration.
    pub fn new() -> Self {
        Self::with_config(Config {
            host: "127.0.0.1".into(),
            ..Config::default()
        })
    }

    pub fn with_config(config: Config) -> Self {
        let (state, app) = build_app(config);
        Self {
            state,
            app,
            cookie: Mutex::new(None),
        }
    }

    /// A second browser session against the same server.
    pub fn new_session(&self) -> Self {
        Self {
            state: self.state.clone(),
            app: self.app.clone(),
            cookie: Mutex::new(None),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session_cookie(&self) -> Option<String> {
        self.cookie.lock().unwrap().clone()
    }

    async fn send(&self, builder: axum::http::request::Builder, body: Body) -> Response<Body> {
        let builder = match self.session_cookie() {
            Some(cookie) => builder.header(COOKIE, cookie),
            None => builder,
        };

        let response = self
            .app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        if let Some(set_cookie) = response.headers().get(SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .to_string();
            *self.cookie.lock().unwrap() = Some(pair);
        }

        response
    }

    async fn read(response: Response<Body>) -> (StatusCode, String) {
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&body).to_string())
    }

    /// Make a GET request and return status and body.
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .send(Request::builder().uri(uri), Body::empty())
            .await;
        Self::read(response).await
    }

    /// Make a POST request with form data and return status and the
    /// `Location` header, if any.
    pub async fn post_form(
        &self,
        uri: &str,
        form_data: &[(&str, &str)],
    ) -> (StatusCode, Option<String>) {
        let body = form_data
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded"),
                Body::from(body),
            )
            .await;

        let location = response
            .headers()
            .get(LOCATION)
            .map(|v| v.to_str().unwrap().to_string());
        (response.status(), location)
    }

    /// POST a JSON body and return status and parsed JSON response.
    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .send(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/json"),
                Body::from(body.to_string()),
            )
            .await;
        let (status, body) = Self::read(response).await;
        (status, serde_json::from_str(&body).unwrap_or_default())
    }

    /// Get JSON from an endpoint and parse it.
    pub async fn get_json(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap_or_default())
    }

    // =========================================================================
    // Analyzer helpers
    // =========================================================================

    /// Submit the analyzer form and return whether it redirected back.
    pub async fn analyze(&self, income: &str, expenses: &str, savings: &str) -> bool {
        let (status, location) = self
            .post_form(
                "/analyzer",
                &[("income", income), ("expenses", expenses), ("savings", savings)],
            )
            .await;
        status == StatusCode::SEE_OTHER && location.as_deref() == Some("/analyzer")
    }

    /// Submit through the JSON API.
    pub async fn submit_json(
        &self,
        income: &str,
        expenses: &str,
        savings: &str,
    ) -> (StatusCode, serde_json::Value) {
        self.post_json(
            "/api/analyzer/submit",
            serde_json::json!({
                "income": income,
                "expenses": expenses,
                "savings": savings,
            }),
        )
        .await
    }
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}
