mod abandon;
mod end_innings;
mod record_delivery;
mod start_innings;

use pavilion_test_utils::prelude::*;
use sea_orm::EntityTrait;

use crate::{
    model::scoring::{DeliveryInput, SetBattersDto, SetBowlerDto, StartInningsDto},
    scoring::ScoringError,
    server::{
        error::{resource::ResourceError, Error},
        model::live::LiveSessions,
        service::scoring::LiveScoringService,
    },
};

/// Lions (team 1) and Tigers (team 2) with three players each and a scheduled match
struct LiveSetup {
    test: TestContext,
    sessions: LiveSessions,
    match_id: i32,
    lions_id: i32,
    tigers_id: i32,
    lions: Vec<i32>,
    tigers: Vec<i32>,
}

async fn setup() -> Result<LiveSetup, TestError> {
    let mut test = TestBuilder::new().with_club_tables().build().await?;
    let (lions, lions_players) = test.club().insert_team_with_players("Lions", 3).await?;
    let (tigers, tigers_players) = test.club().insert_team_with_players("Tigers", 3).await?;
    let fixture = test.fixture().insert_match(lions.id, tigers.id).await?;

    Ok(LiveSetup {
        test,
        sessions: LiveSessions::default(),
        match_id: fixture.id,
        lions_id: lions.id,
        tigers_id: tigers.id,
        lions: lions_players.iter().map(|p| p.id).collect(),
        tigers: tigers_players.iter().map(|p| p.id).collect(),
    })
}

impl LiveSetup {
    /// Service with a one over limit
    fn service(&self) -> LiveScoringService<'_> {
        LiveScoringService::new(&self.test.db, &self.sessions, Some(1))
    }

    /// Starts the first innings with Lions batting, their first two players at the crease and
    /// the first Tigers player bowling
    async fn open_first_innings(&self) -> Result<(), Error> {
        let service = self.service();

        service
            .start_innings(
                self.match_id,
                StartInningsDto {
                    batting_team_id: Some(self.lions_id),
                    max_overs: None,
                },
            )
            .await?;
        service
            .set_batters(
                self.match_id,
                SetBattersDto {
                    striker_id: Some(self.lions[0]),
                    non_striker_id: Some(self.lions[1]),
                },
            )
            .await?;
        service
            .set_bowler(
                self.match_id,
                SetBowlerDto {
                    bowler_id: self.tigers[0],
                },
            )
            .await?;

        Ok(())
    }

    /// Records a legal delivery for each entry in `runs`
    async fn bowl(&self, runs: &[i32]) -> Result<(), Error> {
        for runs in runs {
            self.service()
                .record_delivery(self.match_id, DeliveryInput::Runs { runs: *runs })
                .await?;
        }

        Ok(())
    }
}
