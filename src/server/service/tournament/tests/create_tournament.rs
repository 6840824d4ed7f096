use crate::model::tournament::{TournamentInputDto, TournamentStatus};

use super::*;

fn input(name: &str, start: NaiveDate, end: NaiveDate, team_ids: Vec<i32>) -> TournamentInputDto {
    TournamentInputDto {
        name: name.to_string(),
        start_date: start,
        end_date: end,
        status: None,
        team_ids,
    }
}

/// Expect an upcoming tournament with each team listed once
#[tokio::test]
async fn creates_upcoming_tournament() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_mock_team("Lions")
        .with_mock_team("Tigers")
        .build()
        .await?;

    let tournament_service = TournamentService::new(&test.db);
    let tournament = tournament_service
        .create_tournament(input("Summer Cup", date(6, 1), date(6, 20), vec![2, 1, 2]))
        .await
        .unwrap();

    assert_eq!(tournament.status, TournamentStatus::Upcoming);
    assert_eq!(tournament.teams.len(), 2);
    assert!(tournament.matches.is_empty());

    Ok(())
}

/// Expect a validation error when a team does not exist
#[tokio::test]
async fn rejects_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tournament_tables()
        .with_mock_team("Lions")
        .build()
        .await?;

    let tournament_service = TournamentService::new(&test.db);
    let result = tournament_service
        .create_tournament(input("Summer Cup", date(6, 1), date(6, 20), vec![1, 5]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(message)))
            if message == "One or more teams do not exist"
    ));

    Ok(())
}

/// Expect a validation error when the end date precedes the start date
#[tokio::test]
async fn rejects_end_before_start() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tournament_tables().build().await?;

    let tournament_service = TournamentService::new(&test.db);
    let result = tournament_service
        .create_tournament(input("Summer Cup", date(6, 20), date(6, 1), vec![]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect tournaments listed latest start date first
#[tokio::test]
async fn lists_latest_first() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_tournament_tables().build().await?;
    test.tournament()
        .insert_tournament("Spring Cup", date(3, 1), &[])
        .await?;
    test.tournament()
        .insert_tournament("Autumn Cup", date(9, 1), &[])
        .await?;

    let tournament_service = TournamentService::new(&test.db);
    let tournaments = tournament_service.list_tournaments().await.unwrap();

    let names: Vec<&str> = tournaments.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Autumn Cup", "Spring Cup"]);

    Ok(())
}
