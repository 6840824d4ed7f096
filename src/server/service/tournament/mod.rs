//! Tournament service.
//!
//! Tournaments keep their own match list, separate from club fixtures; recording a tournament
//! match result does not touch team tallies.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::tournament::{
        AddTournamentMatchDto, TournamentDto, TournamentInputDto, TournamentMatchDto,
        TournamentMatchResultDto,
    },
    server::{
        data::{fixture::MatchResult, team::TeamRepository, tournament::TournamentRepository},
        error::{resource::ResourceError, Error},
        model::db::TournamentModel,
        service::{
            fixture::{innings_score, parse_innings_score, validate_winner},
            lookup::{referenced_team, required_name, team_summaries},
            retry::RetryContext,
        },
    },
};

/// Builds tournament DTOs with their teams and matches
async fn tournament_dtos<C: ConnectionTrait>(
    db: &C,
    tournaments: Vec<TournamentModel>,
) -> Result<Vec<TournamentDto>, Error> {
    let tournament_repo = TournamentRepository::new(db);
    let tournament_ids: Vec<i32> = tournaments.iter().map(|t| t.id).collect();

    let entries = tournament_repo.find_teams(&tournament_ids).await?;
    let matches = tournament_repo.find_matches(&tournament_ids).await?;

    let mut team_ids: Vec<i32> = entries
        .iter()
        .map(|e| e.team_id)
        .chain(matches.iter().flat_map(|m| [m.team1_id, m.team2_id]))
        .collect();
    team_ids.sort_unstable();
    team_ids.dedup();
    let teams = team_summaries(db, &team_ids).await?;

    tournaments
        .into_iter()
        .map(|tournament| {
            let participants = entries
                .iter()
                .filter(|e| e.tournament_id == tournament.id)
                .map(|e| referenced_team(&teams, e.team_id))
                .collect::<Result<Vec<_>, _>>()?;

            let tournament_matches = matches
                .iter()
                .filter(|m| m.tournament_id == tournament.id)
                .map(|m| {
                    Ok(TournamentMatchDto {
                        id: m.id,
                        team1: referenced_team(&teams, m.team1_id)?,
                        team2: referenced_team(&teams, m.team2_id)?,
                        date: m.date,
                        venue: m.venue.clone(),
                        status: m.status.parse()?,
                        team1_score: innings_score(m.team1_runs, m.team1_wickets, m.team1_balls),
                        team2_score: innings_score(m.team2_runs, m.team2_wickets, m.team2_balls),
                        winner: m
                            .winner_id
                            .map(|winner_id| referenced_team(&teams, winner_id))
                            .transpose()?,
                    })
                })
                .collect::<Result<Vec<_>, Error>>()?;

            Ok(TournamentDto {
                id: tournament.id,
                status: tournament.status.parse()?,
                name: tournament.name,
                start_date: tournament.start_date,
                end_date: tournament.end_date,
                teams: participants,
                matches: tournament_matches,
                created_at: tournament.created_at,
            })
        })
        .collect()
}

/// Validates the tournament details, returning the deduplicated team IDs
async fn validate_input<C: ConnectionTrait>(
    db: &C,
    input: &TournamentInputDto,
) -> Result<Vec<i32>, Error> {
    required_name("Tournament", &input.name)?;

    if input.end_date < input.start_date {
        return Err(ResourceError::validation("End date cannot be before the start date").into());
    }

    let mut team_ids = input.team_ids.clone();
    team_ids.sort_unstable();
    team_ids.dedup();

    let found = TeamRepository::new(db).find_by_ids(&team_ids).await?;
    if found.len() != team_ids.len() {
        return Err(ResourceError::validation("One or more teams do not exist").into());
    }

    Ok(team_ids)
}

async fn find_tournament<C: ConnectionTrait>(
    db: &C,
    tournament_id: i32,
) -> Result<TournamentModel, Error> {
    Ok(TournamentRepository::new(db)
        .find_by_id(tournament_id)
        .await?
        .ok_or_else(|| ResourceError::not_found("Tournament", tournament_id))?)
}

pub struct TournamentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TournamentService<'a> {
    /// Creates a new instance of [`TournamentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tournament with its participating teams.
    ///
    /// # Returns
    /// - `Ok(TournamentDto)` - The created tournament, `upcoming` unless a status was given
    /// - `Err(Error::ResourceError)` - Blank name, dates out of order or unknown teams (400)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_tournament(
        &self,
        tournament: TournamentInputDto,
    ) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;

        let team_ids = validate_input(&txn, &tournament).await?;
        let tournament_repo = TournamentRepository::new(&txn);
        let created = tournament_repo.create(&tournament).await?;
        tournament_repo.set_teams(created.id, &team_ids).await?;

        txn.commit().await?;

        tracing::debug!(tournament_id = created.id, "Created tournament");

        self.get_tournament(created.id).await
    }

    /// Gets every tournament, latest start date first.
    pub async fn list_tournaments(&self) -> Result<Vec<TournamentDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list tournaments", || {
            let db = db.clone();

            Box::pin(async move {
                let tournaments = TournamentRepository::new(&db).find_all().await?;

                tournament_dtos(&db, tournaments).await
            })
        })
        .await
    }

    pub async fn get_tournament(&self, tournament_id: i32) -> Result<TournamentDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get tournament ID {}", tournament_id), || {
            let db = db.clone();

            Box::pin(async move {
                let tournament = find_tournament(&db, tournament_id).await?;

                tournament_dtos(&db, vec![tournament])
                    .await?
                    .pop()
                    .ok_or_else(|| {
                        Error::InternalError("Tournament DTO was not built".to_string())
                    })
            })
        })
        .await
    }

    /// Replaces a tournament's details and participating teams.
    ///
    /// A team with tournament matches must stay in the team list.
    ///
    /// # Returns
    /// - `Ok(TournamentDto)` - The updated tournament
    /// - `Err(Error::ResourceError)` - Invalid details (400), unknown tournament (404) or a team
    ///   with tournament matches left out (409)
    pub async fn update_tournament(
        &self,
        tournament_id: i32,
        input: TournamentInputDto,
    ) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;

        let tournament = find_tournament(&txn, tournament_id).await?;
        let team_ids = validate_input(&txn, &input).await?;

        let tournament_repo = TournamentRepository::new(&txn);
        let matches = tournament_repo.find_matches(&[tournament_id]).await?;
        if let Some(team_id) = matches
            .iter()
            .flat_map(|m| [m.team1_id, m.team2_id])
            .find(|team_id| !team_ids.contains(team_id))
        {
            return Err(ResourceError::conflict(format!(
                "Team {} has tournament matches and cannot be removed",
                team_id
            ))
            .into());
        }

        tournament_repo.update(tournament, &input).await?;
        tournament_repo.set_teams(tournament_id, &team_ids).await?;

        txn.commit().await?;

        self.get_tournament(tournament_id).await
    }

    /// Deletes a tournament with its teams and matches.
    ///
    /// # Returns
    /// - `Ok(())` - Tournament deleted
    /// - `Err(Error::ResourceError)` - Tournament does not exist (404)
    pub async fn delete_tournament(&self, tournament_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        find_tournament(&txn, tournament_id).await?;
        TournamentRepository::new(&txn).delete(tournament_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Schedules a match between two participating teams.
    ///
    /// # Returns
    /// - `Ok(TournamentDto)` - The tournament including the new match
    /// - `Err(Error::ResourceError)` - Same team twice, team outside the tournament or blank
    ///   venue (400), unknown tournament (404)
    pub async fn add_match(
        &self,
        tournament_id: i32,
        new_match: AddTournamentMatchDto,
    ) -> Result<TournamentDto, Error> {
        if new_match.team1_id == new_match.team2_id {
            return Err(ResourceError::validation("A team cannot play itself").into());
        }
        if new_match.venue.trim().is_empty() {
            return Err(ResourceError::validation("Venue is required").into());
        }

        let txn = self.db.begin().await?;

        find_tournament(&txn, tournament_id).await?;

        let tournament_repo = TournamentRepository::new(&txn);
        let entries = tournament_repo.find_teams(&[tournament_id]).await?;
        let participates = |team_id: i32| entries.iter().any(|e| e.team_id == team_id);
        if !participates(new_match.team1_id) || !participates(new_match.team2_id) {
            return Err(ResourceError::validation(
                "Both teams must be part of the tournament",
            )
            .into());
        }

        let created = tournament_repo.create_match(tournament_id, &new_match).await?;

        txn.commit().await?;

        tracing::debug!(tournament_id, match_id = created.id, "Added tournament match");

        self.get_tournament(tournament_id).await
    }

    /// Records the status and result of a tournament match.
    ///
    /// # Returns
    /// - `Ok(TournamentDto)` - The tournament including the updated match
    /// - `Err(Error::ResourceError)` - Invalid result (400), unknown tournament or match (404)
    pub async fn update_match_result(
        &self,
        tournament_id: i32,
        match_id: i32,
        update: TournamentMatchResultDto,
    ) -> Result<TournamentDto, Error> {
        let txn = self.db.begin().await?;

        find_tournament(&txn, tournament_id).await?;

        let tournament_repo = TournamentRepository::new(&txn);
        let tournament_match = tournament_repo
            .find_match(tournament_id, match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Tournament match", match_id))?;

        validate_winner(
            update.winner_id,
            tournament_match.team1_id,
            tournament_match.team2_id,
        )?;
        let result = MatchResult {
            winner_id: update.winner_id,
            team1: parse_innings_score(&update.team1_score)?,
            team2: parse_innings_score(&update.team2_score)?,
        };

        tournament_repo
            .update_match_result(tournament_match, update.status, result)
            .await?;

        txn.commit().await?;

        self.get_tournament(tournament_id).await
    }
}
