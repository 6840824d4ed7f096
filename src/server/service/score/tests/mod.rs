mod delete_score;

use pavilion_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{
    model::score::{BattingInputDto, BowlingInputDto, CreateScoreDto},
    server::{
        error::{resource::ResourceError, Error},
        service::score::ScoreService,
    },
};

/// Lions (team 1) with one player and Tigers (team 2), plus a match between them
async fn setup() -> Result<(TestContext, i32, i32), TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, players) = test.club().insert_team_with_players("Lions", 1).await?;
    let tigers = test.club().insert_team("Tigers").await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    Ok((test, fixture.id, players[0].id))
}

fn batting_score(match_id: i32, player_id: i32, runs: i32, balls: i32) -> CreateScoreDto {
    CreateScoreDto {
        match_id,
        player_id,
        team_id: 1,
        batting: BattingInputDto {
            runs,
            balls,
            ..Default::default()
        },
        bowling: BowlingInputDto::default(),
        fielding: Default::default(),
    }
}

async fn career(test: &TestContext, player_id: i32) -> Result<(i32, i32, i32), TestError> {
    let player = entity::prelude::Player::find_by_id(player_id)
        .one(&test.db)
        .await?
        .unwrap();

    Ok((player.matches, player.runs, player.wickets))
}
