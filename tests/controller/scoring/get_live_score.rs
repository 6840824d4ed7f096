use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pavilion::server::controller::scoring::get_live_score;

use super::*;

/// Expect 404 Not Found when no innings has been started
#[tokio::test]
async fn no_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let lions = test.club().insert_team("Lions").await?;
    let tigers = test.club().insert_team("Tigers").await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    let resp = get_live_score(State(test.into_app_state()), Path(fixture.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Live session not found");

    Ok(())
}
