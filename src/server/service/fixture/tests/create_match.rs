use chrono::NaiveDate;

use crate::model::fixture::{CreateMatchDto, MatchStatus};

use super::*;

fn new_match(team1_id: i32, team2_id: i32) -> CreateMatchDto {
    CreateMatchDto {
        team1_id,
        team2_id,
        date: NaiveDate::from_ymd_opt(2026, 6, 14)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap(),
        venue: "Riverside Ground".to_string(),
        status: None,
        umpires: vec!["A. Umpire".to_string(), "B. Umpire".to_string()],
    }
}

/// Expect a scheduled match with both teams populated
#[tokio::test]
async fn creates_scheduled_match() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_club_tables()
        .with_mock_team("Lions")
        .with_mock_team("Tigers")
        .build()
        .await?;

    let fixture_service = FixtureService::new(&test.db);
    let fixture = fixture_service.create_match(new_match(1, 2)).await.unwrap();

    assert_eq!(fixture.status, MatchStatus::Scheduled);
    assert_eq!(fixture.team1.name, "Lions");
    assert_eq!(fixture.team2.name, "Tigers");
    assert_eq!(fixture.umpires.len(), 2);
    assert!(fixture.result.winner.is_none());

    Ok(())
}

/// Expect a validation error when a team is drawn against itself
#[tokio::test]
async fn rejects_same_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_club_tables()
        .with_mock_team("Lions")
        .build()
        .await?;

    let fixture_service = FixtureService::new(&test.db);
    let result = fixture_service.create_match(new_match(1, 1)).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect NotFound when one of the teams does not exist
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_club_tables()
        .with_mock_team("Lions")
        .build()
        .await?;

    let fixture_service = FixtureService::new(&test.db);
    let result = fixture_service.create_match(new_match(1, 2)).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound {
            resource: "Team",
            id: 2
        }))
    ));

    Ok(())
}
