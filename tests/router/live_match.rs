use super::*;

/// Sends a request as the scorer
async fn score(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    send(app, method, uri, Some("admin"), body).await
}

/// Scores a whole two over match over HTTP and checks the stored result
#[tokio::test]
async fn scores_match_to_completion() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, lions_players) = test.club().insert_team_with_players("Lions", 3).await?;
    let (tigers, tigers_players) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;
    let app = app(&test);
    let live = format!("/api/matches/{}/live", fixture.id);

    // First innings: Lions make 7 off one over
    let resp = send(
        &app,
        Method::POST,
        &format!("{}/innings", live),
        Some("admin"),
        Some(json!({ "batting_team_id": lions.id, "max_overs": 1 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let batters = json!({
        "striker_id": lions_players[0].id,
        "non_striker_id": lions_players[1].id,
    });
    let resp = score(&app, Method::PUT, &format!("{}/batters", live), Some(batters)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let bowler = json!({ "bowler_id": tigers_players[0].id });
    let resp = score(&app, Method::PUT, &format!("{}/bowler", live), Some(bowler)).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let deliveries = [
        json!({ "kind": "runs", "runs": 4 }),
        json!({ "kind": "no_ball", "runs": 1 }),
        json!({ "kind": "runs", "runs": 0 }),
        json!({ "kind": "wicket", "dismissal_type": "Bowled" }),
        json!({ "kind": "runs", "runs": 0 }),
        json!({ "kind": "runs", "runs": 0 }),
        json!({ "kind": "runs", "runs": 0 }),
    ];
    for (i, delivery) in deliveries.into_iter().enumerate() {
        if i == 4 {
            let next = json!({ "striker_id": lions_players[2].id });
            let resp = score(&app, Method::PUT, &format!("{}/batters", live), Some(next)).await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let resp = send(
            &app,
            Method::POST,
            &format!("{}/deliveries", live),
            Some("admin"),
            Some(delivery),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = send(&app, Method::GET, &live, None, None).await;
    let live_score = json_body(resp).await;
    assert_eq!(live_score["runs"], 6);
    assert_eq!(live_score["wickets"], 1);
    assert_eq!(live_score["status"], "overs_complete");
    assert_eq!(live_score["extras"]["no_balls"], 1);
    assert_eq!(
        live_score["over_history"][0]["balls"],
        json!(["4", "nb1", "0", "W", "0", "0", "0"])
    );

    // Anyone may read, only admins may score
    let resp = send(
        &app,
        Method::POST,
        &format!("{}/innings/end", live),
        Some("player"),
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = score(&app, Method::POST, &format!("{}/innings/end", live), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(json_body(resp).await["scores_recorded"], 4);

    // Second innings: Tigers chase 7 and get there with a six and a single
    let resp = send(
        &app,
        Method::POST,
        &format!("{}/innings", live),
        Some("admin"),
        Some(json!({})),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(json_body(resp).await["target"], 7);

    let batters = json!({
        "striker_id": tigers_players[0].id,
        "non_striker_id": tigers_players[1].id,
    });
    score(&app, Method::PUT, &format!("{}/batters", live), Some(batters)).await;
    let bowler = json!({ "bowler_id": lions_players[0].id });
    score(&app, Method::PUT, &format!("{}/bowler", live), Some(bowler)).await;

    for runs in [6, 1] {
        let resp = send(
            &app,
            Method::POST,
            &format!("{}/deliveries", live),
            Some("admin"),
            Some(json!({ "kind": "runs", "runs": runs })),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    // The target has been reached, so further play is rejected
    let resp = send(
        &app,
        Method::POST,
        &format!("{}/deliveries", live),
        Some("admin"),
        Some(json!({ "kind": "runs", "runs": 1 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = score(&app, Method::POST, &format!("{}/innings/end", live), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let closed = json_body(resp).await;
    assert_eq!(closed["match_result"]["status"], "Completed");
    assert_eq!(closed["match_result"]["result"]["winner"]["id"], tigers.id);
    assert_eq!(closed["match_result"]["result"]["team1_score"]["runs"], 6);
    assert_eq!(closed["match_result"]["result"]["team1_score"]["wickets"], 1);
    assert_eq!(closed["match_result"]["result"]["team2_score"]["overs"], 0.2);

    let resp = send(&app, Method::GET, &format!("/api/teams/{}", tigers.id), None, None).await;
    assert_eq!(json_body(resp).await["wins"], 1);

    let resp = send(
        &app,
        Method::GET,
        &format!("/api/scores/match/{}", fixture.id),
        None,
        None,
    )
    .await;
    let scores = json_body(resp).await;
    // Three Lions batters, the Tigers opener who also bowled, the other Tigers batter
    assert_eq!(scores.as_array().map(Vec::len), Some(5));

    let resp = send(&app, Method::GET, &live, None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect deleting a match to end its live session and players in it to stay until then
#[tokio::test]
async fn deleting_match_ends_live_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_trainer_tables().build().await?;
    let (lions, lions_players) = test.club().insert_team_with_players("Lions", 3).await?;
    let (tigers, _) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;
    let app = app(&test);
    let live = format!("/api/matches/{}/live", fixture.id);
    let player = format!("/api/players/{}", lions_players[2].id);

    let resp = score(
        &app,
        Method::POST,
        &format!("{}/innings", live),
        Some(json!({ "batting_team_id": lions.id })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let resp = send(&app, Method::DELETE, &player, None, None).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let resp = send(
        &app,
        Method::DELETE,
        &format!("/api/matches/{}", fixture.id),
        None,
        None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = send(&app, Method::GET, &live, None, None).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = send(&app, Method::DELETE, &player, None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
