use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pavilion::server::controller::team::delete_team;

use super::*;

/// Expect 200 OK with a confirmation message
#[tokio::test]
async fn deleted() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let team = test.club().insert_team("Lions").await?;

    let resp = delete_team(State(test.into_app_state()), Path(team.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["message"], "Team deleted");

    Ok(())
}

/// Expect 409 Conflict while the team has recorded matches
#[tokio::test]
async fn has_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_all_tables().build().await?;
    let lions = test.club().insert_team("Lions").await?;
    let tigers = test.club().insert_team("Tigers").await?;
    test.fixture().insert_match(lions.id, tigers.id).await?;

    let resp = delete_team(State(test.into_app_state()), Path(lions.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::CONFLICT);

    Ok(())
}
