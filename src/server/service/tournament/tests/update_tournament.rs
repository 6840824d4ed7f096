use crate::model::tournament::TournamentInputDto;

use super::*;

fn input(team_ids: Vec<i32>) -> TournamentInputDto {
    TournamentInputDto {
        name: "Summer Cup".to_string(),
        start_date: date(6, 1),
        end_date: date(6, 20),
        status: None,
        team_ids,
    }
}

/// Expect the team list to be replaced
#[tokio::test]
async fn replaces_team_list() -> Result<(), TestError> {
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
    let updated = tournament_service
        .update_tournament(tournament.id, input(vec![2, 3]))
        .await
        .unwrap();

    let mut team_ids: Vec<i32> = updated.teams.iter().map(|t| t.id).collect();
    team_ids.sort_unstable();
    assert_eq!(team_ids, vec![2, 3]);

    Ok(())
}

/// Expect a conflict when a team with tournament matches is left out
#[tokio::test]
async fn rejects_dropping_team_with_matches() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_tournament_tables()
        .with_mock_team("Lions")
        .with_mock_team("Tigers")
        .with_mock_team("Eagles")
        .build()
        .await?;
    let tournament = test
        .tournament()
        .insert_tournament("Summer Cup", date(6, 1), &[1, 2, 3])
        .await?;
    test.tournament().insert_match(tournament.id, 1, 2).await?;

    let tournament_service = TournamentService::new(&test.db);
    let result = tournament_service
        .update_tournament(tournament.id, input(vec![1, 3]))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Conflict(_)))
    ));

    let unchanged = tournament_service
        .get_tournament(tournament.id)
        .await
        .unwrap();
    assert_eq!(unchanged.teams.len(), 3);

    Ok(())
}
