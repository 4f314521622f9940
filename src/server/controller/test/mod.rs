//! Request-level tests driving the full router against an in-memory database.

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, context::TestContext, factory};
use tower::ServiceExt;

use crate::server::{
    config::PaginationConfig,
    middleware::throttle::{Rate, ThrottleGate, ThrottleScope},
    router::router,
    state::AppState,
};

mod competition;
mod root;
mod toy;

struct TestApp {
    // Keeps the in-memory database alive for the duration of the test.
    _context: TestContext,
    db: DatabaseConnection,
    router: Router,
}

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Value,
}

/// Builds the app with rates high enough that no test trips the throttle by accident.
async fn app() -> TestApp {
    let generous = Rate::new(1_000, Duration::from_secs(60));
    app_with_rates(generous, generous).await
}

async fn app_with_rates(drones: Rate, pilots: Rate) -> TestApp {
    let mut context = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = context.connection().await.unwrap();

    let rates = HashMap::from([(ThrottleScope::Drones, drones), (ThrottleScope::Pilots, pilots)]);
    let state = AppState::new(
        db.clone(),
        Arc::new(ThrottleGate::new(rates)),
        PaginationConfig::default(),
    );

    TestApp {
        _context: context,
        db,
        router: router().with_state(state),
    }
}

impl TestApp {
    async fn send(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        self.send_with_headers(method, uri, token, body, &[]).await
    }

    async fn send_with_headers(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
        extra_headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::HOST, "testserver");

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Token {}", token));
        }
        for (name, value) in extra_headers {
            builder = builder.header(*name, *value);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }

    async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.send(Method::GET, uri, token, None).await
    }

    async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.send(Method::POST, uri, token, Some(body)).await
    }

    /// Registers a user through the API and returns `(id, token)`.
    async fn register(&self, username: &str) -> (i64, String) {
        let response = self
            .post("/api/users", None, json!({ "username": username }))
            .await;
        assert_eq!(response.status, StatusCode::CREATED);

        (
            response.body["pk"].as_i64().unwrap(),
            response.body["token"].as_str().unwrap().to_string(),
        )
    }

    /// Creates a drone category directly in the database.
    async fn category(&self, name: &str) -> entity::drone_category::Model {
        factory::drone_category::DroneCategoryFactory::new(&self.db)
            .name(name)
            .build()
            .await
            .unwrap()
    }
}
