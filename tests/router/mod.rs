//! End to end tests driving the full router with `tower::ServiceExt::oneshot`.

mod docs;
mod live_match;
mod roles;
mod teams;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    response::Response,
    Router,
};
use pavilion::server::router;
use pavilion_test_utils::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::util::{json_body, TestContextExt};

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.into_app_state())
}

/// Sends one request, with an optional role header and JSON body
async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    role: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(role) = role {
        builder = builder.header("x-club-role", role);
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}
