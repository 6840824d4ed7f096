use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::fixture::MatchStatus;

/// Columns of a new match.
pub struct NewMatch {
    pub team1_id: i32,
    pub team2_id: i32,
    pub date: NaiveDateTime,
    pub venue: String,
    pub status: MatchStatus,
    pub umpires: Vec<String>,
}

/// Result columns written when a match is completed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MatchResult {
    pub winner_id: Option<i32>,
    /// (runs, wickets, legal balls) for team 1
    pub team1: (i32, i32, i32),
    /// (runs, wickets, legal balls) for team 2
    pub team2: (i32, i32, i32),
}

/// Columns changed by a general match update; `None` leaves a column unchanged.
#[derive(Default)]
pub struct MatchChanges {
    pub team1_id: Option<i32>,
    pub team2_id: Option<i32>,
    pub date: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub umpires: Option<Vec<String>>,
}

pub struct FixtureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FixtureRepository<'a, C> {
    /// Creates a new instance of [`FixtureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a match with an empty result
    pub async fn create(&self, new_match: NewMatch) -> Result<entity::cricket_match::Model, DbErr> {
        let fixture = entity::cricket_match::ActiveModel {
            team1_id: ActiveValue::Set(new_match.team1_id),
            team2_id: ActiveValue::Set(new_match.team2_id),
            date: ActiveValue::Set(new_match.date),
            venue: ActiveValue::Set(new_match.venue),
            status: ActiveValue::Set(new_match.status.to_string()),
            winner_id: ActiveValue::Set(None),
            team1_runs: ActiveValue::Set(0),
            team1_wickets: ActiveValue::Set(0),
            team1_balls: ActiveValue::Set(0),
            team2_runs: ActiveValue::Set(0),
            team2_wickets: ActiveValue::Set(0),
            team2_balls: ActiveValue::Set(0),
            tallied: ActiveValue::Set(false),
            umpires: ActiveValue::Set(serde_json::json!(new_match.umpires)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        fixture.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        match_id: i32,
    ) -> Result<Option<entity::cricket_match::Model>, DbErr> {
        entity::prelude::CricketMatch::find_by_id(match_id)
            .one(self.db)
            .await
    }

    /// Gets all matches ordered by date
    pub async fn find_all(&self) -> Result<Vec<entity::cricket_match::Model>, DbErr> {
        entity::prelude::CricketMatch::find()
            .order_by_asc(entity::cricket_match::Column::Date)
            .order_by_asc(entity::cricket_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the matches a team plays in, as either side, ordered by date
    pub async fn find_by_team(
        &self,
        team_id: i32,
    ) -> Result<Vec<entity::cricket_match::Model>, DbErr> {
        entity::prelude::CricketMatch::find()
            .filter(Self::involving(team_id))
            .order_by_asc(entity::cricket_match::Column::Date)
            .order_by_asc(entity::cricket_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Counts the matches a team plays in
    pub async fn count_by_team(&self, team_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CricketMatch::find()
            .filter(Self::involving(team_id))
            .count(self.db)
            .await
    }

    fn involving(team_id: i32) -> Condition {
        Condition::any()
            .add(entity::cricket_match::Column::Team1Id.eq(team_id))
            .add(entity::cricket_match::Column::Team2Id.eq(team_id))
    }

    /// Applies a general update; changing either side drops the stored winner
    pub async fn update(
        &self,
        fixture: entity::cricket_match::Model,
        changes: MatchChanges,
    ) -> Result<entity::cricket_match::Model, DbErr> {
        let sides_changed = changes.team1_id.is_some_and(|id| id != fixture.team1_id)
            || changes.team2_id.is_some_and(|id| id != fixture.team2_id);
        let mut fixture_am = fixture.into_active_model();

        if sides_changed {
            fixture_am.winner_id = ActiveValue::Set(None);
        }
        if let Some(team1_id) = changes.team1_id {
            fixture_am.team1_id = ActiveValue::Set(team1_id);
        }
        if let Some(team2_id) = changes.team2_id {
            fixture_am.team2_id = ActiveValue::Set(team2_id);
        }
        if let Some(date) = changes.date {
            fixture_am.date = ActiveValue::Set(date);
        }
        if let Some(venue) = changes.venue {
            fixture_am.venue = ActiveValue::Set(venue);
        }
        if let Some(umpires) = changes.umpires {
            fixture_am.umpires = ActiveValue::Set(serde_json::json!(umpires));
        }

        fixture_am.update(self.db).await
    }

    /// Sets the match status, replacing the result when one is given
    ///
    /// `tallied` records whether the stored result is counted in the team tallies.
    pub async fn set_status(
        &self,
        fixture: entity::cricket_match::Model,
        status: MatchStatus,
        result: Option<MatchResult>,
        tallied: bool,
    ) -> Result<entity::cricket_match::Model, DbErr> {
        let mut fixture_am = fixture.into_active_model();
        fixture_am.status = ActiveValue::Set(status.to_string());
        fixture_am.tallied = ActiveValue::Set(tallied);

        if let Some(result) = result {
            fixture_am.winner_id = ActiveValue::Set(result.winner_id);
            fixture_am.team1_runs = ActiveValue::Set(result.team1.0);
            fixture_am.team1_wickets = ActiveValue::Set(result.team1.1);
            fixture_am.team1_balls = ActiveValue::Set(result.team1.2);
            fixture_am.team2_runs = ActiveValue::Set(result.team2.0);
            fixture_am.team2_wickets = ActiveValue::Set(result.team2.1);
            fixture_am.team2_balls = ActiveValue::Set(result.team2.2);
        }

        fixture_am.update(self.db).await
    }

    /// Deletes a match
    ///
    /// Returns OK regardless of the match existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, match_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::CricketMatch::delete_by_id(match_id)
            .exec(self.db)
            .await
    }
}
