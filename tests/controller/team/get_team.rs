use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pavilion::server::controller::team::get_team;

use super::*;

/// Expect 200 OK with the roster and match IDs
#[tokio::test]
async fn found() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, players) = test.club().insert_team_with_players("Lions", 2).await?;
    let tigers = test.club().insert_team("Tigers").await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    let resp = get_team(State(test.into_app_state()), Path(lions.id))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["players"].as_array().map(Vec::len), Some(players.len()));
    assert_eq!(body["match_ids"][0], fixture.id);

    Ok(())
}

/// Expect 404 Not Found for a missing team
#[tokio::test]
async fn not_found() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let resp = get_team(State(test.into_app_state()), Path(7))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
