use sea_orm::EntityTrait;

use crate::{
    model::score::{BattingInputDto, CreateScoreDto},
    server::service::score::ScoreService,
};

use super::*;

/// Expect scores to be deleted and career totals reverted
#[tokio::test]
async fn deletes_scores_and_reverts_stats() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, players) = test.club().insert_team_with_players("Lions", 1).await?;
    let tigers = test.club().insert_team("Tigers").await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    ScoreService::new(&test.db)
        .create_score(CreateScoreDto {
            match_id: fixture.id,
            player_id: players[0].id,
            team_id: lions.id,
            batting: BattingInputDto {
                runs: 45,
                balls: 30,
                ..Default::default()
            },
            bowling: Default::default(),
            fielding: Default::default(),
        })
        .await
        .unwrap();

    let fixture_service = FixtureService::new(&test.db);
    fixture_service.delete_match(fixture.id).await.unwrap();

    let player = entity::prelude::Player::find_by_id(players[0].id)
        .one(&test.db)
        .await?
        .unwrap();
    assert_eq!(player.matches, 0);
    assert_eq!(player.runs, 0);
    assert!(entity::prelude::Score::find().all(&test.db).await?.is_empty());
    assert!(matches!(
        fixture_service.get_match(fixture.id).await,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}
