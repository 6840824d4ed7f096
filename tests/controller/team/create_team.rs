use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use pavilion::{model::team::CreateTeamDto, server::controller::team::create_team};

use super::*;

/// Expect 201 Created with the new team and its captain on the roster
#[tokio::test]
async fn created_with_captain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let player = test.club().insert_player("Ravi", None).await?;

    let resp = create_team(
        State(test.into_app_state()),
        Json(CreateTeamDto {
            name: "Lions".to_string(),
            captain_id: Some(player.id),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body = json_body(resp).await;
    assert_eq!(body["name"], "Lions");
    assert_eq!(body["captain"]["id"], player.id);
    assert_eq!(body["players"][0]["id"], player.id);

    Ok(())
}

/// Expect 400 Bad Request for a blank name
#[tokio::test]
async fn blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let resp = create_team(
        State(test.into_app_state()),
        Json(CreateTeamDto {
            name: "   ".to_string(),
            captain_id: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when the captain does not exist
#[tokio::test]
async fn unknown_captain() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let resp = create_team(
        State(test.into_app_state()),
        Json(CreateTeamDto {
            name: "Lions".to_string(),
            captain_id: Some(42),
        }),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = json_body(resp).await;
    assert_eq!(body["error"], "Player not found");

    Ok(())
}
