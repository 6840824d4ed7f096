use crate::{model::team::UpdateTeamDto, server::error::resource::ResourceError};

use super::*;

/// Expect a captain from another team to be moved onto this team's roster
#[tokio::test]
async fn appoints_captain_from_other_team() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, _) = test.club().insert_team_with_players("Lions", 1).await?;
    let (tigers, tiger_players) = test.club().insert_team_with_players("Tigers", 2).await?;
    test.club().set_captain(tigers.clone(), tiger_players[0].id).await?;

    let team_service = TeamService::new(&test.db);
    let lions = team_service
        .update_team(
            lions.id,
            UpdateTeamDto {
                name: None,
                captain_id: Some(Some(tiger_players[0].id)),
            },
        )
        .await
        .unwrap();

    assert_eq!(lions.captain.map(|c| c.id), Some(tiger_players[0].id));
    assert_eq!(lions.players.len(), 2);

    let tigers = team_service.get_team(tigers.id).await.unwrap();
    assert!(tigers.captain.is_none());
    assert_eq!(tigers.players.len(), 1);

    Ok(())
}

/// Expect an explicit null captain to clear the captaincy and keep the name
#[tokio::test]
async fn clears_captain() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, players) = test.club().insert_team_with_players("Lions", 1).await?;
    let lions = test.club().set_captain(lions, players[0].id).await?;

    let team_service = TeamService::new(&test.db);
    let updated = team_service
        .update_team(
            lions.id,
            UpdateTeamDto {
                name: None,
                captain_id: Some(None),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Lions");
    assert!(updated.captain.is_none());
    assert_eq!(updated.players.len(), 1);

    Ok(())
}

/// Expect NotFound for a team that does not exist
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service
        .update_team(
            1,
            UpdateTeamDto {
                name: Some("Lions".to_string()),
                captain_id: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}
