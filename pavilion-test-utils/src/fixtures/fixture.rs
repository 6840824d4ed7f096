use chrono::{Duration, Utc};
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn fixture<'a>(&'a mut self) -> MatchFixtures<'a> {
        MatchFixtures { setup: self }
    }
}

pub struct MatchFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> MatchFixtures<'a> {
    /// Insert a scheduled match between two teams one week from now.
    pub async fn insert_match(
        &self,
        team1_id: i32,
        team2_id: i32,
    ) -> Result<entity::cricket_match::Model, TestError> {
        self.insert_match_with_status(team1_id, team2_id, "Scheduled")
            .await
    }

    pub async fn insert_match_with_status(
        &self,
        team1_id: i32,
        team2_id: i32,
        status: &str,
    ) -> Result<entity::cricket_match::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::CricketMatch::insert(entity::cricket_match::ActiveModel {
                team1_id: ActiveValue::Set(team1_id),
                team2_id: ActiveValue::Set(team2_id),
                date: ActiveValue::Set(now + Duration::days(7)),
                venue: ActiveValue::Set("Club Ground".to_string()),
                status: ActiveValue::Set(status.to_string()),
                winner_id: ActiveValue::Set(None),
                team1_runs: ActiveValue::Set(0),
                team1_wickets: ActiveValue::Set(0),
                team1_balls: ActiveValue::Set(0),
                team2_runs: ActiveValue::Set(0),
                team2_wickets: ActiveValue::Set(0),
                team2_balls: ActiveValue::Set(0),
                tallied: ActiveValue::Set(false),
                umpires: ActiveValue::Set(serde_json::json!([])),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a score row with the given batting runs and bowling wickets.
    ///
    /// Player career stats are not touched; use the score service when the
    /// test depends on career totals.
    pub async fn insert_score(
        &self,
        match_id: i32,
        player_id: i32,
        team_id: i32,
        runs: i32,
        wickets: i32,
    ) -> Result<entity::score::Model, TestError> {
        Ok(entity::prelude::Score::insert(entity::score::ActiveModel {
            match_id: ActiveValue::Set(match_id),
            player_id: ActiveValue::Set(player_id),
            team_id: ActiveValue::Set(team_id),
            batting_runs: ActiveValue::Set(runs),
            batting_balls: ActiveValue::Set(runs),
            fours: ActiveValue::Set(0),
            sixes: ActiveValue::Set(0),
            is_out: ActiveValue::Set(false),
            dismissal: ActiveValue::Set(None),
            bowling_balls: ActiveValue::Set(0),
            maidens: ActiveValue::Set(0),
            bowling_runs: ActiveValue::Set(0),
            bowling_wickets: ActiveValue::Set(wickets),
            wides: ActiveValue::Set(0),
            no_balls: ActiveValue::Set(0),
            catches: ActiveValue::Set(0),
            stumpings: ActiveValue::Set(0),
            run_outs: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
