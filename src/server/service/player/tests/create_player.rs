use crate::model::player::{BowlingStyle, CreatePlayerDto, PlayerRole};

use super::*;

fn new_player(name: &str, age: i32, team_id: Option<i32>) -> CreatePlayerDto {
    CreatePlayerDto {
        name: name.to_string(),
        age,
        role: PlayerRole::Bowler,
        team_id,
        batting_style: None,
        bowling_style: Some(BowlingStyle::LeftArmSpin),
    }
}

/// Expect the player to be created on the team with zeroed stats
#[tokio::test]
async fn creates_player_on_team() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_club_tables()
        .with_mock_team("Lions")
        .build()
        .await?;

    let player_service = PlayerService::new(&test.db);
    let player = player_service
        .create_player(new_player("Meera Rao", 19, Some(1)))
        .await
        .unwrap();

    assert_eq!(player.role, PlayerRole::Bowler);
    assert_eq!(player.bowling_style, Some(BowlingStyle::LeftArmSpin));
    assert_eq!(player.team.map(|t| t.name), Some("Lions".to_string()));
    assert_eq!(player.stats.matches, 0);

    Ok(())
}

/// Expect a validation error for a non-positive age
#[tokio::test]
async fn rejects_non_positive_age() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let player_service = PlayerService::new(&test.db);
    let result = player_service
        .create_player(new_player("Meera Rao", 0, None))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect NotFound when the team does not exist
#[tokio::test]
async fn fails_for_unknown_team() -> Result<(), TestError> {
    let test = TestBuilder::new().with_club_tables().build().await?;

    let player_service = PlayerService::new(&test.db);
    let result = player_service
        .create_player(new_player("Meera Rao", 19, Some(3)))
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound {
            resource: "Team",
            id: 3
        }))
    ));

    Ok(())
}
