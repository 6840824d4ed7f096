use super::*;

/// Expect a team and player created over HTTP to show up on the roster
#[tokio::test]
async fn build_roster() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;
    let app = app(&test);

    let resp = send(
        &app,
        Method::POST,
        "/api/teams",
        None,
        Some(json!({ "name": "Lions" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let team_id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        Method::POST,
        "/api/players",
        None,
        Some(json!({ "name": "Ravi", "age": 24, "role": "Batsman" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let player_id = json_body(resp).await["id"].as_i64().unwrap();

    let resp = send(
        &app,
        Method::POST,
        &format!("/api/teams/{}/players", team_id),
        None,
        Some(json!({ "player_id": player_id })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/players/team/{}", team_id),
        None,
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let roster = json_body(resp).await;
    assert_eq!(roster[0]["name"], "Ravi");
    assert_eq!(roster[0]["team"]["name"], "Lions");

    let resp = send(
        &app,
        Method::DELETE,
        &format!("/api/teams/{}/players/{}", team_id, player_id),
        None,
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let team = json_body(resp).await;
    assert_eq!(team["players"].as_array().map(Vec::len), Some(0));

    Ok(())
}

/// Expect 404 Not Found with a JSON error body for a missing player
#[tokio::test]
async fn missing_player() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/players/12", None, None).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(resp).await["error"], "Player not found");

    Ok(())
}
