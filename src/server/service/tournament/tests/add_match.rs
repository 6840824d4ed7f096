use crate::model::{fixture::MatchStatus, tournament::AddTournamentMatchDto};

use super::*;

fn new_match(team1_id: i32, team2_id: i32) -> AddTournamentMatchDto {
    AddTournamentMatchDto {
        team1_id,
        team2_id,
        date: date(6, 5).and_hms_opt(14, 0, 0).unwrap(),
        venue: "Club Ground".to_string(),
    }
}

/// Expect a scheduled match between participating teams
#[tokio::test]
async fn adds_scheduled_match() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_tournament_tables()
        .with_mock_team("Lions")
        .with_mock_team("Tigers")
        .build()
        .await?;
    let tournament = test
        .tournament()
        .insert_tournament("Summer Cup", date(6, 1), &[1, 2])
        .await?;

    let tournament_service = TournamentService::new(&test.db);
    let tournament = tournament_service
        .add_match(tournament.id, new_match(1, 2))
        .await
        .unwrap();

    assert_eq!(tournament.matches.len(), 1);
    assert_eq!(tournament.matches[0].status, MatchStatus::Scheduled);
    assert_eq!(tournament.matches[0].team2.name, "Tigers");

    Ok(())
}

/// Expect a validation error for a team outside the tournament
#[tokio::test]
async fn rejects_non_participating_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_tournament_tables()
        .with_mock_team("Lions")
        .with_mock_team("Tigers")
        .with_mock_team("Eagles")
        .build()
        .await?;
    let tournament = test
        .tournament()
        .insert_tournament("Summer Cup", date(6, 1), &[1, 2])
        .await?;

    let tournament_service = TournamentService::new(&test.db);
    let result = tournament_service
        .add_match(tournament.id, new_match(1, 3))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}
