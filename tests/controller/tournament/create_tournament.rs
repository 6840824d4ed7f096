use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pavilion::{
    model::tournament::TournamentInputDto, server::controller::tournament::create_tournament,
};

use super::*;

fn input(team_ids: Vec<i32>) -> TournamentInputDto {
    TournamentInputDto {
        name: "Summer Cup".to_string(),
        start_date: opening_day(),
        end_date: opening_day() + chrono::Duration::days(10),
        status: None,
        team_ids,
    }
}

/// Expect 201 Created for an admin
#[tokio::test]
async fn created_by_admin() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tournament_tables().build().await?;
    let lions = test.club().insert_team("Lions").await?;
    let tigers = test.club().insert_team("Tigers").await?;

    let resp = create_tournament(
        State(test.into_app_state()),
        CurrentRole(Role::Admin),
        Json(input(vec![lions.id, tigers.id])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["status"], "upcoming");
    assert_eq!(body["teams"].as_array().map(Vec::len), Some(2));

    Ok(())
}

/// Expect 403 Forbidden for the player role
#[tokio::test]
async fn forbidden_for_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let resp = create_tournament(
        State(test.into_app_state()),
        CurrentRole(Role::Player),
        Json(input(Vec::new())),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 Bad Request when a team does not exist
#[tokio::test]
async fn unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let resp = create_tournament(
        State(test.into_app_state()),
        CurrentRole(Role::Admin),
        Json(input(vec![99])),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "One or more teams do not exist");

    Ok(())
}
