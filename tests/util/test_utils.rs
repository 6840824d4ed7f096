use axum::{body::Body, response::Response};
use pavilion::server::model::app::AppState;
use pavilion_test_utils::prelude::*;

/// Over limit given to live innings started through the test application state
pub static TEST_DEFAULT_MAX_OVERS: i32 = 20;

pub trait TestContextExt {
    /// Application state sharing the test database with a fresh set of live sessions
    fn into_app_state(&self) -> AppState;
}

impl TestContextExt for TestContext {
    fn into_app_state(&self) -> AppState {
        AppState::new(self.db.clone(), Some(TEST_DEFAULT_MAX_OVERS))
    }
}

/// Reads a response body as JSON
pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}
