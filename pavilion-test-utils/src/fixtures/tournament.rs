use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn tournament<'a>(&'a mut self) -> TournamentFixtures<'a> {
        TournamentFixtures { setup: self }
    }
}

pub struct TournamentFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TournamentFixtures<'a> {
    /// Insert an upcoming tournament starting on `start_date` and lasting two weeks.
    ///
    /// # Arguments
    /// - `name` - Tournament name
    /// - `start_date` - First day of the tournament
    /// - `team_ids` - Participating teams, which must already exist
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted tournament
    /// - `Err(TestError::DbErr)` - Insertion failed
    pub async fn insert_tournament(
        &self,
        name: &str,
        start_date: NaiveDate,
        team_ids: &[i32],
    ) -> Result<entity::tournament::Model, TestError> {
        let tournament = entity::prelude::Tournament::insert(entity::tournament::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            start_date: ActiveValue::Set(start_date),
            end_date: ActiveValue::Set(start_date + Duration::days(14)),
            status: ActiveValue::Set("upcoming".to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?;

        for team_id in team_ids {
            entity::prelude::TournamentTeam::insert(entity::tournament_team::ActiveModel {
                tournament_id: ActiveValue::Set(tournament.id),
                team_id: ActiveValue::Set(*team_id),
            })
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        Ok(tournament)
    }

    /// Insert a scheduled tournament match between two participating teams.
    pub async fn insert_match(
        &self,
        tournament_id: i32,
        team1_id: i32,
        team2_id: i32,
    ) -> Result<entity::tournament_match::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::TournamentMatch::insert(entity::tournament_match::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                team1_id: ActiveValue::Set(team1_id),
                team2_id: ActiveValue::Set(team2_id),
                date: ActiveValue::Set(now),
                venue: ActiveValue::Set("Club Ground".to_string()),
                status: ActiveValue::Set("Scheduled".to_string()),
                winner_id: ActiveValue::Set(None),
                team1_runs: ActiveValue::Set(0),
                team1_wickets: ActiveValue::Set(0),
                team1_balls: ActiveValue::Set(0),
                team2_runs: ActiveValue::Set(0),
                team2_wickets: ActiveValue::Set(0),
                team2_balls: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
