use super::*;

/// Expect a request without a role header to be treated as a plain user
#[tokio::test]
async fn missing_header_is_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/tournaments", None, None).await;

    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

/// Expect 400 Bad Request for an unknown role
#[tokio::test]
async fn unknown_role() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/tournaments", Some("umpire"), None).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect the player role to read tournaments but not create them
#[tokio::test]
async fn player_reads_only() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/tournaments", Some("player"), None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let tournament = json!({
        "name": "Summer Cup",
        "start_date": "2026-06-01",
        "end_date": "2026-06-14",
    });
    let resp = send(
        &app,
        Method::POST,
        "/api/tournaments",
        Some("player"),
        Some(tournament.clone()),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = send(
        &app,
        Method::POST,
        "/api/tournaments",
        Some("admin"),
        Some(tournament),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}
