use sea_orm::{ColumnTrait, QueryFilter};

use super::*;

impl LiveSetup {
    /// Plays the first innings to 14 off the single over and closes it
    async fn play_first_innings(&self) -> Result<(), Error> {
        self.open_first_innings().await?;
        self.bowl(&[4, 1, 0]).await?;
        self.service()
            .record_delivery(self.match_id, DeliveryInput::Wide { runs: 0 })
            .await?;
        self.bowl(&[6, 2, 0]).await?;
        self.service().end_innings(self.match_id).await?;

        Ok(())
    }

    /// Opens the second innings with Tigers batting and the first Lions player bowling
    async fn open_second_innings(&self) -> Result<(), Error> {
        let service = self.service();

        service
            .start_innings(self.match_id, StartInningsDto::default())
            .await?;
        service
            .set_batters(
                self.match_id,
                SetBattersDto {
                    striker_id: Some(self.tigers[0]),
                    non_striker_id: Some(self.tigers[1]),
                },
            )
            .await?;
        service
            .set_bowler(
                self.match_id,
                SetBowlerDto {
                    bowler_id: self.lions[0],
                },
            )
            .await?;

        Ok(())
    }
}

async fn scores_for(setup: &LiveSetup) -> Result<Vec<entity::score::Model>, TestError> {
    Ok(entity::prelude::Score::find()
        .filter(entity::score::Column::MatchId.eq(setup.match_id))
        .all(&setup.test.db)
        .await?)
}

/// Expect closing the first innings to write a score for every batter and bowler
#[tokio::test]
async fn writes_first_innings_scores() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();
    setup.bowl(&[4, 1, 0, 6, 2, 0]).await.unwrap();

    let closed = setup.service().end_innings(setup.match_id).await.unwrap();

    assert_eq!(closed.innings, 1);
    assert_eq!(closed.scores_recorded, 3);
    assert!(closed.match_result.is_none());

    let scores = scores_for(&setup).await?;
    let opener = scores
        .iter()
        .find(|s| s.player_id == setup.lions[0])
        .unwrap();
    assert_eq!(opener.batting_runs, 5);
    assert_eq!(opener.dismissal.as_deref(), Some("Not Out"));
    assert!(!opener.is_out);

    let bowler = scores
        .iter()
        .find(|s| s.player_id == setup.tigers[0])
        .unwrap();
    assert_eq!(bowler.team_id, setup.tigers_id);
    assert_eq!(bowler.bowling_balls, 6);
    assert_eq!(bowler.bowling_runs, 13);

    let player = entity::prelude::Player::find_by_id(setup.lions[1])
        .one(&setup.test.db)
        .await?
        .unwrap();
    assert_eq!(player.matches, 1);
    assert_eq!(player.runs, 8);

    Ok(())
}

/// Expect the second innings to chase the first innings total plus one
#[tokio::test]
async fn second_innings_sets_target() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.play_first_innings().await.unwrap();

    let live = setup
        .service()
        .start_innings(setup.match_id, StartInningsDto::default())
        .await
        .unwrap();

    assert_eq!(live.innings, 2);
    assert_eq!(live.batting_team_id, setup.tigers_id);
    assert_eq!(live.target, Some(15));
    assert_eq!(live.runs_needed, Some(15));
    assert_eq!(live.required_run_rate, Some(15.0));
    assert_eq!(live.first_innings.map(|i| i.runs), Some(14));

    Ok(())
}

/// Expect Validation error when the same side tries to bat again
#[tokio::test]
async fn second_innings_rejects_same_side() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.play_first_innings().await.unwrap();

    let result = setup
        .service()
        .start_innings(
            setup.match_id,
            StartInningsDto {
                batting_team_id: Some(setup.lions_id),
                max_overs: None,
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    Ok(())
}

/// Expect closing the second innings to complete the match and tally the result
#[tokio::test]
async fn completes_match() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.play_first_innings().await.unwrap();
    setup.open_second_innings().await.unwrap();
    setup.bowl(&[6, 6, 4]).await.unwrap();

    let closed = setup.service().end_innings(setup.match_id).await.unwrap();

    assert_eq!(closed.innings, 2);
    assert_eq!(closed.scores_recorded, 3);

    let fixture = closed.match_result.unwrap();
    assert_eq!(fixture.status, crate::model::fixture::MatchStatus::Completed);
    assert_eq!(fixture.result.winner.map(|t| t.id), Some(setup.tigers_id));
    assert_eq!(fixture.result.team1_score.runs, 14);
    assert_eq!(fixture.result.team1_score.overs, 1.0);
    assert_eq!(fixture.result.team2_score.runs, 16);
    assert_eq!(fixture.result.team2_score.overs, 0.3);

    let lions = entity::prelude::Team::find_by_id(setup.lions_id)
        .one(&setup.test.db)
        .await?
        .unwrap();
    let tigers = entity::prelude::Team::find_by_id(setup.tigers_id)
        .one(&setup.test.db)
        .await?
        .unwrap();
    assert_eq!((lions.wins, lions.losses), (0, 1));
    assert_eq!((tigers.wins, tigers.losses), (1, 0));

    // The Tigers opener bowled in the first innings and batted in the second
    let scores = scores_for(&setup).await?;
    assert_eq!(scores.len(), 4);
    let all_rounder = entity::prelude::Player::find_by_id(setup.tigers[0])
        .one(&setup.test.db)
        .await?
        .unwrap();
    assert_eq!(all_rounder.matches, 1);
    assert_eq!(all_rounder.runs, 16);

    let result = setup.service().get_live_score(setup.match_id).await;
    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::NotFound { .. }))
    ));

    Ok(())
}

/// Expect Conflict error when the innings has already been closed
#[tokio::test]
async fn rejects_closing_twice() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.play_first_innings().await.unwrap();

    let result = setup.service().end_innings(setup.match_id).await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Conflict(_)))
    ));

    Ok(())
}

/// Expect equal totals to complete the match without a winner and draw both sides
#[tokio::test]
async fn completes_tied_match() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.play_first_innings().await.unwrap();
    setup.open_second_innings().await.unwrap();
    setup.bowl(&[6, 6, 2, 0, 0, 0]).await.unwrap();

    let closed = setup.service().end_innings(setup.match_id).await.unwrap();

    let fixture = closed.match_result.unwrap();
    assert_eq!(fixture.status, crate::model::fixture::MatchStatus::Completed);
    assert!(fixture.result.winner.is_none());
    assert_eq!(fixture.result.team1_score.runs, 14);
    assert_eq!(fixture.result.team2_score.runs, 14);
    assert_eq!(fixture.result.team2_score.overs, 1.0);

    for team_id in [setup.lions_id, setup.tigers_id] {
        let team = entity::prelude::Team::find_by_id(team_id)
            .one(&setup.test.db)
            .await?
            .unwrap();
        assert_eq!((team.wins, team.losses, team.draws), (0, 0, 1));
    }

    Ok(())
}
