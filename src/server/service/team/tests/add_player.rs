use crate::{model::team::AddTeamPlayerDto, server::error::resource::ResourceError};

use super::*;

/// Expect a player to move between rosters, losing captaincy of the old team
#[tokio::test]
async fn moves_player_between_teams() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, lion_players) = test.club().insert_team_with_players("Lions", 1).await?;
    let lions = test.club().set_captain(lions, lion_players[0].id).await?;
    let tigers = test.club().insert_team("Tigers").await?;

    let team_service = TeamService::new(&test.db);
    let tigers = team_service
        .add_player(
            tigers.id,
            AddTeamPlayerDto {
                player_id: lion_players[0].id,
            },
        )
        .await
        .unwrap();

    assert_eq!(tigers.players.len(), 1);
    assert!(tigers.captain.is_none());

    let lions = team_service.get_team(lions.id).await.unwrap();
    assert!(lions.players.is_empty());
    assert!(lions.captain.is_none());

    Ok(())
}

/// Expect NotFound when the player does not exist
#[tokio::test]
async fn fails_for_unknown_player() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_club_tables()
        .with_mock_team("Lions")
        .build()
        .await?;

    let team_service = TeamService::new(&test.db);
    let result = team_service
        .add_player(1, AddTeamPlayerDto { player_id: 9 })
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound {
            resource: "Player",
            ..
        }))
    ));

    Ok(())
}
