use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::{
    model::{
        fixture::MatchStatus,
        tournament::{AddTournamentMatchDto, TournamentInputDto},
    },
    server::data::fixture::MatchResult,
};

pub struct TournamentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TournamentRepository<'a, C> {
    /// Creates a new instance of [`TournamentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a tournament row; participating teams are set with [`Self::set_teams`]
    pub async fn create(
        &self,
        tournament: &TournamentInputDto,
    ) -> Result<entity::tournament::Model, DbErr> {
        let tournament = entity::tournament::ActiveModel {
            name: ActiveValue::Set(tournament.name.trim().to_string()),
            start_date: ActiveValue::Set(tournament.start_date),
            end_date: ActiveValue::Set(tournament.end_date),
            status: ActiveValue::Set(tournament.status.unwrap_or_default().to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tournament.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        tournament_id: i32,
    ) -> Result<Option<entity::tournament::Model>, DbErr> {
        entity::prelude::Tournament::find_by_id(tournament_id)
            .one(self.db)
            .await
    }

    /// Gets all tournaments, latest start date first
    pub async fn find_all(&self) -> Result<Vec<entity::tournament::Model>, DbErr> {
        entity::prelude::Tournament::find()
            .order_by_desc(entity::tournament::Column::StartDate)
            .order_by_desc(entity::tournament::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces the tournament row's fields; a missing status keeps the current one
    pub async fn update(
        &self,
        tournament: entity::tournament::Model,
        input: &TournamentInputDto,
    ) -> Result<entity::tournament::Model, DbErr> {
        let mut tournament_am = tournament.into_active_model();
        tournament_am.name = ActiveValue::Set(input.name.trim().to_string());
        tournament_am.start_date = ActiveValue::Set(input.start_date);
        tournament_am.end_date = ActiveValue::Set(input.end_date);
        if let Some(status) = input.status {
            tournament_am.status = ActiveValue::Set(status.to_string());
        }

        tournament_am.update(self.db).await
    }

    /// Deletes a tournament along with its teams and matches
    ///
    /// Returns OK regardless of the tournament existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, tournament_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TournamentMatch::delete_many()
            .filter(entity::tournament_match::Column::TournamentId.eq(tournament_id))
            .exec(self.db)
            .await?;
        entity::prelude::TournamentTeam::delete_many()
            .filter(entity::tournament_team::Column::TournamentId.eq(tournament_id))
            .exec(self.db)
            .await?;

        entity::prelude::Tournament::delete_by_id(tournament_id)
            .exec(self.db)
            .await
    }

    /// Replaces the participating teams of a tournament
    pub async fn set_teams(&self, tournament_id: i32, team_ids: &[i32]) -> Result<(), DbErr> {
        entity::prelude::TournamentTeam::delete_many()
            .filter(entity::tournament_team::Column::TournamentId.eq(tournament_id))
            .exec(self.db)
            .await?;

        for team_id in team_ids {
            entity::prelude::TournamentTeam::insert(entity::tournament_team::ActiveModel {
                tournament_id: ActiveValue::Set(tournament_id),
                team_id: ActiveValue::Set(*team_id),
            })
            .exec_without_returning(self.db)
            .await?;
        }

        Ok(())
    }

    /// Gets (tournament ID, team ID) rows of the given tournaments
    pub async fn find_teams(
        &self,
        tournament_ids: &[i32],
    ) -> Result<Vec<entity::tournament_team::Model>, DbErr> {
        if tournament_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TournamentTeam::find()
            .filter(
                entity::tournament_team::Column::TournamentId.is_in(tournament_ids.iter().copied()),
            )
            .order_by_asc(entity::tournament_team::Column::TeamId)
            .all(self.db)
            .await
    }

    pub async fn create_match(
        &self,
        tournament_id: i32,
        new_match: &AddTournamentMatchDto,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let tournament_match = entity::tournament_match::ActiveModel {
            tournament_id: ActiveValue::Set(tournament_id),
            team1_id: ActiveValue::Set(new_match.team1_id),
            team2_id: ActiveValue::Set(new_match.team2_id),
            date: ActiveValue::Set(new_match.date),
            venue: ActiveValue::Set(new_match.venue.trim().to_string()),
            status: ActiveValue::Set(MatchStatus::Scheduled.to_string()),
            winner_id: ActiveValue::Set(None),
            team1_runs: ActiveValue::Set(0),
            team1_wickets: ActiveValue::Set(0),
            team1_balls: ActiveValue::Set(0),
            team2_runs: ActiveValue::Set(0),
            team2_wickets: ActiveValue::Set(0),
            team2_balls: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        tournament_match.insert(self.db).await
    }

    /// Gets a match only if it belongs to the tournament
    pub async fn find_match(
        &self,
        tournament_id: i32,
        match_id: i32,
    ) -> Result<Option<entity::tournament_match::Model>, DbErr> {
        entity::prelude::TournamentMatch::find_by_id(match_id)
            .filter(entity::tournament_match::Column::TournamentId.eq(tournament_id))
            .one(self.db)
            .await
    }

    /// Gets the matches of the given tournaments ordered by date
    pub async fn find_matches(
        &self,
        tournament_ids: &[i32],
    ) -> Result<Vec<entity::tournament_match::Model>, DbErr> {
        if tournament_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TournamentMatch::find()
            .filter(
                entity::tournament_match::Column::TournamentId
                    .is_in(tournament_ids.iter().copied()),
            )
            .order_by_asc(entity::tournament_match::Column::Date)
            .order_by_asc(entity::tournament_match::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update_match_result(
        &self,
        tournament_match: entity::tournament_match::Model,
        status: MatchStatus,
        result: MatchResult,
    ) -> Result<entity::tournament_match::Model, DbErr> {
        let mut match_am = tournament_match.into_active_model();
        match_am.status = ActiveValue::Set(status.to_string());
        match_am.winner_id = ActiveValue::Set(result.winner_id);
        match_am.team1_runs = ActiveValue::Set(result.team1.0);
        match_am.team1_wickets = ActiveValue::Set(result.team1.1);
        match_am.team1_balls = ActiveValue::Set(result.team1.2);
        match_am.team2_runs = ActiveValue::Set(result.team2.0);
        match_am.team2_wickets = ActiveValue::Set(result.team2.1);
        match_am.team2_balls = ActiveValue::Set(result.team2.2);

        match_am.update(self.db).await
    }
}
