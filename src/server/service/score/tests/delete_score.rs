use super::*;

/// Expect the score's contribution to be removed from the career totals
#[tokio::test]
async fn reverts_career_totals() -> Result<(), TestError> {
    let (test, match_id, player_id) = setup().await?;

    let score_service = ScoreService::new(&test.db);
    let created = score_service
        .create_score(batting_score(match_id, player_id, 64, 50))
        .await
        .unwrap();
    score_service.delete_score(created.id).await.unwrap();

    assert_eq!(career(&test, player_id).await?, (0, 0, 0));
    assert!(matches!(
        score_service.get_score(created.id).await,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}
