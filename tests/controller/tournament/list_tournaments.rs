use axum::{extract::State, http::StatusCode, response::IntoResponse};
use pavilion::server::controller::tournament::list_tournaments;

use super::*;

/// Expect 200 OK for the player role
#[tokio::test]
async fn allowed_for_player() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tournament_tables().build().await?;
    test.tournament()
        .insert_tournament("Summer Cup", opening_day(), &[])
        .await?;

    let resp = list_tournaments(State(test.into_app_state()), CurrentRole(Role::Player))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body[0]["name"], "Summer Cup");

    Ok(())
}

/// Expect 200 OK for the admin role
#[tokio::test]
async fn allowed_for_admin() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let resp = list_tournaments(State(test.into_app_state()), CurrentRole(Role::Admin))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 403 Forbidden for a plain user
#[tokio::test]
async fn forbidden_for_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let resp = list_tournaments(State(test.into_app_state()), CurrentRole(Role::User))
        .await
        .into_response();

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}
