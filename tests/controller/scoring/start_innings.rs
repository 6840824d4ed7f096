use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use pavilion::{
    model::scoring::StartInningsDto, server::controller::scoring::start_innings,
};

use super::*;

/// Expect 201 Created with the application's default over limit
#[tokio::test]
async fn started_by_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, _) = test.club().insert_team_with_players("Lions", 3).await?;
    let (tigers, _) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    let resp = start_innings(
        State(test.into_app_state()),
        CurrentRole(Role::Admin),
        Path(fixture.id),
        Json(StartInningsDto {
            batting_team_id: Some(lions.id),
            max_overs: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["innings"], 1);
    assert_eq!(body["status"], "in_progress");
    assert_eq!(body["max_overs"], 20);

    Ok(())
}

/// Expect 403 Forbidden for a non-admin caller
#[tokio::test]
async fn forbidden_for_player() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, _) = test.club().insert_team_with_players("Lions", 3).await?;
    let (tigers, _) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    let resp = start_innings(
        State(test.into_app_state()),
        CurrentRole(Role::Player),
        Path(fixture.id),
        Json(StartInningsDto {
            batting_team_id: Some(lions.id),
            max_overs: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
