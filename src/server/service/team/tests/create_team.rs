use crate::{model::team::CreateTeamDto, server::error::resource::ResourceError};

use super::*;

/// Expect the captain to be moved onto the new team and appear on its roster
#[tokio::test]
async fn moves_captain_onto_new_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (old_team, players) = test.club().insert_team_with_players("Lions", 2).await?;
    let old_team = test.club().set_captain(old_team, players[0].id).await?;

    let team_service = TeamService::new(&test.db);
    let team = team_service
        .create_team(CreateTeamDto {
            name: "  Tigers ".to_string(),
            captain_id: Some(players[0].id),
        })
        .await
        .unwrap();

    assert_eq!(team.name, "Tigers");
    assert_eq!(team.captain.as_ref().map(|c| c.id), Some(players[0].id));
    assert_eq!(team.players.len(), 1);

    let old_team = team_service.get_team(old_team.id).await.unwrap();
    assert!(old_team.captain.is_none());
    assert_eq!(old_team.players.len(), 1);

    Ok(())
}

/// Expect a validation error for a blank team name
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service
        .create_team(CreateTeamDto {
            name: "   ".to_string(),
            captain_id: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect NotFound when the captain does not exist, with no team created
#[tokio::test]
async fn fails_for_unknown_captain() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service
        .create_team(CreateTeamDto {
            name: "Lions".to_string(),
            captain_id: Some(42),
        })
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));
    assert!(team_service.list_teams().await.unwrap().is_empty());

    Ok(())
}

/// Expect Error when required tables are not present
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service
        .create_team(CreateTeamDto {
            name: "Lions".to_string(),
            captain_id: None,
        })
        .await;

    assert!(matches!(result, Err(Error::DbErr(_))));

    Ok(())
}
