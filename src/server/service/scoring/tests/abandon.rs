use super::*;

/// Expect the session to be dropped without writing scores
#[tokio::test]
async fn drops_session() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();
    setup.bowl(&[4, 4]).await.unwrap();

    let result = setup.service().abandon(setup.match_id).await;
    assert!(result.is_ok());

    let scores = entity::prelude::Score::find().all(&setup.test.db).await?;
    assert!(scores.is_empty());

    let result = setup.service().get_live_score(setup.match_id).await;
    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect NotFound error without a live session
#[tokio::test]
async fn no_session() -> Result<(), TestError> {
    let setup = setup().await?;

    let result = setup.service().abandon(setup.match_id).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}
