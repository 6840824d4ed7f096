use crate::model::{score::DismissalType, scoring::CreaseEnd};

use super::*;

/// Expect runs, strike and the over marks to follow each delivery
#[tokio::test]
async fn scores_an_over() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    setup.bowl(&[4, 1]).await.unwrap();
    let live = setup
        .service()
        .record_delivery(setup.match_id, DeliveryInput::Wide { runs: 0 })
        .await
        .unwrap();

    assert_eq!(live.runs, 6);
    assert_eq!(live.overs, 0.2);
    assert_eq!(live.extras.wides, 1);
    assert_eq!(live.current_over, vec!["4", "1", "wd"]);
    // A single rotates the strike
    assert_eq!(live.striker.map(|b| b.player_id), Some(setup.lions[1]));

    Ok(())
}

/// Expect the over limit to end play in the innings
#[tokio::test]
async fn stops_after_over_limit() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    setup.bowl(&[0, 0, 0, 0, 0, 0]).await.unwrap();
    let live = setup.service().get_live_score(setup.match_id).await.unwrap();
    assert_eq!(live.over_history.len(), 1);
    assert!(live.over_history[0].maiden);

    let result = setup
        .service()
        .record_delivery(setup.match_id, DeliveryInput::Runs { runs: 1 })
        .await;

    assert!(matches!(
        result,
        Err(Error::ScoringError(ScoringError::InningsComplete))
    ));

    Ok(())
}

/// Expect a catch to credit the bowler and the named fielder
#[tokio::test]
async fn records_catch() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    let live = setup
        .service()
        .record_delivery(
            setup.match_id,
            DeliveryInput::Wicket {
                dismissal_type: DismissalType::Caught,
                batter: CreaseEnd::Striker,
                runs: 0,
                fielder_id: Some(setup.tigers[1]),
            },
        )
        .await
        .unwrap();

    assert_eq!(live.wickets, 1);
    assert!(live.striker.is_none());
    assert_eq!(live.bowler.map(|b| b.wickets), Some(1));

    let out = live
        .batters
        .iter()
        .find(|b| b.player_id == setup.lions[0])
        .unwrap();
    assert!(out.out);
    assert_eq!(out.dismissal_type, Some(DismissalType::Caught));

    Ok(())
}

/// Expect Validation error when the fielder is not on the fielding side
#[tokio::test]
async fn rejects_fielder_from_batting_side() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    let result = setup
        .service()
        .record_delivery(
            setup.match_id,
            DeliveryInput::Wicket {
                dismissal_type: DismissalType::Caught,
                batter: CreaseEnd::Striker,
                runs: 0,
                fielder_id: Some(setup.lions[2]),
            },
        )
        .await;

    assert!(matches!(
        result,
        Err(Error::ResourceError(ResourceError::Validation(_)))
    ));

    let live = setup.service().get_live_score(setup.match_id).await.unwrap();
    assert_eq!(live.wickets, 0);

    Ok(())
}

/// Expect ScoringError when no bowler has been selected
#[tokio::test]
async fn requires_bowler() -> Result<(), TestError> {
    let setup = setup().await?;
    let service = setup.service();
    service
        .start_innings(
            setup.match_id,
            StartInningsDto {
                batting_team_id: Some(setup.lions_id),
                max_overs: None,
            },
        )
        .await
        .unwrap();
    service
        .set_batters(
            setup.match_id,
            SetBattersDto {
                striker_id: Some(setup.lions[0]),
                non_striker_id: Some(setup.lions[1]),
            },
        )
        .await
        .unwrap();

    let result = service
        .record_delivery(setup.match_id, DeliveryInput::Runs { runs: 2 })
        .await;

    assert!(matches!(
        result,
        Err(Error::ScoringError(ScoringError::MissingBowler))
    ));

    Ok(())
}

/// Expect the swap to exchange the striker and non-striker
#[tokio::test]
async fn swaps_strike() -> Result<(), TestError> {
    let setup = setup().await?;
    setup.open_first_innings().await.unwrap();

    let live = setup.service().swap_strike(setup.match_id).await.unwrap();

    assert_eq!(live.striker.map(|b| b.player_id), Some(setup.lions[1]));
    assert_eq!(live.non_striker.map(|b| b.player_id), Some(setup.lions[0]));

    Ok(())
}
