use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use pavilion::server::controller::trainer::list_trainers_by_specialization;

use super::*;

/// Expect 200 OK with only the trainers of the requested specialization
#[tokio::test]
async fn filters_by_specialization() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trainer_tables().build().await?;
    test.trainer().insert_trainer("Anil", "Bowling").await?;
    test.trainer().insert_trainer("Sunil", "Batting").await?;

    let resp = list_trainers_by_specialization(
        State(test.into_app_state()),
        Path("Bowling".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["name"], "Anil");

    Ok(())
}

/// Expect 400 Bad Request for an unknown specialization
#[tokio::test]
async fn unknown_specialization() -> Result<(), TestError> {
    let test = TestBuilder::new().with_trainer_tables().build().await?;

    let resp = list_trainers_by_specialization(
        State(test.into_app_state()),
        Path("Juggling".to_string()),
    )
    .await
    .into_response();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}
