use super::*;

/// Expect the first innings to open and put the match in progress
#[tokio::test]
async fn starts_first_innings() -> Result<(), TestError> {
    let setup = setup().await?;
    let service = setup.service();

    let live = service
        .start_innings(
            setup.match_id,
            StartInningsDto {
                batting_team_id: Some(setup.lions_id),
                max_overs: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(live.innings, 1);
    assert_eq!(live.batting_team_id, setup.lions_id);
    assert_eq!(live.bowling_team_id, setup.tigers_id);
    assert_eq!(live.max_overs, Some(1));
    assert_eq!(live.runs, 0);
    assert!(live.target.is_none());

    let fixture = entity::prelude::CricketMatch::find_by_id(setup.match_id)
        .one(&setup.test.db)
        .await?
        .unwrap();
    assert_eq!(fixture.status, "In Progress");

    Ok(())
}

/// Expect an over limit of zero to mean an unlimited innings
#[tokio::test]
async fn zero_over_limit_is_unlimited() -> Result<(), TestError> {
    let setup = setup().await?;

    let live = setup
        .service()
        .start_innings(
            setup.match_id,
            StartInningsDto {
                batting_team_id: Some(setup.tigers_id),
                max_overs: Some(0),
            },
        )
        .await
        .unwrap();

    assert!(live.max_overs.is_none());

    Ok(())
}

/// Expect Validation error when no batting team is given for the first innings
#[tokio::test]
async fn requires_batting_team() -> Result<(), TestError> {
    let setup = setup().await?;

    let result = setup
        .service()
        .start_innings(setup.match_id, StartInningsDto::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect Validation error when the batting team is not playing in the match
#[tokio::test]
async fn rejects_foreign_batting_team() -> Result<(), TestError> {
    let mut setup = setup().await?;
    let outsiders = setup.test.club().insert_team("Outsiders").await?;

    let result = setup
        .service()
        .start_innings(
            setup.match_id,
            StartInningsDto {
                batting_team_id: Some(outsiders.id),
                max_overs: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect Validation error when the batting side cannot field two batters
#[tokio::test]
async fn rejects_short_roster() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, _) = test.club().insert_team_with_players("Lions", 1).await?;
    let (tigers, _) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;
    let sessions = LiveSessions::default();
    let service = LiveScoringService::new(&test.db, &sessions, None);

    let result = service
        .start_innings(
            fixture.id,
            StartInningsDto {
                batting_team_id: Some(lions.id),
                max_overs: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect Conflict error when the match has already been completed
#[tokio::test]
async fn rejects_completed_match() -> Result<(), TestError> {
    let mut setup = setup().await?;
    let fixture = setup
        .test
        .fixture()
        .insert_match_with_status(setup.lions_id, setup.tigers_id, "Completed")
        .await?;

    let result = setup
        .service()
        .start_innings(
            fixture.id,
            StartInningsDto {
                batting_team_id: Some(setup.lions_id),
                max_overs: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Conflict(_)))
    ));

    Ok(())
}

/// Expect NotFound error when the match does not exist
#[tokio::test]
async fn unknown_match() -> Result<(), TestError> {
    let setup = setup().await?;

    let result = setup
        .service()
        .start_innings(
            999,
            StartInningsDto {
                batting_team_id: Some(setup.lions_id),
                max_overs: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect Conflict error when an innings is already in play
#[tokio::test]
async fn rejects_second_start_while_in_play() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    let result = setup
        .service()
        .start_innings(setup.match_id, StartInningsDto::default())
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Conflict(_)))
    ));

    Ok(())
}
