//! Match service.
//!
//! Besides CRUD, the service owns team tallies: a match moving into `Completed` with a result
//! adds one win/loss or two draws to the teams involved. [`apply_status`] is shared with the
//! live scoring service so a match completed from the scorebook is tallied the same way.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        fixture::{
            CreateMatchDto, InningsScoreDto, MatchDto, MatchResultDto, MatchResultInputDto,
            MatchStatus, UpdateMatchDto, UpdateMatchStatusDto,
        },
        overs::Overs,
        team::TeamSummaryDto,
    },
    server::{
        data::{
            fixture::{FixtureRepository, MatchChanges, MatchResult, NewMatch},
            player::PlayerRepository,
            score::{ScoreFigures, ScoreRepository},
            team::{TeamOutcome, TeamRepository},
        },
        error::{resource::ResourceError, Error},
        model::db::MatchModel,
        service::{
            lookup::{referenced_team, team_summaries},
            retry::RetryContext,
        },
    },
};

/// Converts a stored side total into its API form
pub(crate) fn innings_score(runs: i32, wickets: i32, balls: i32) -> InningsScoreDto {
    InningsScoreDto {
        runs,
        wickets,
        overs: Overs::from_balls(balls).as_notation(),
    }
}

/// Validates a submitted side total, returning `(runs, wickets, balls)`
pub(crate) fn parse_innings_score(score: &InningsScoreDto) -> Result<(i32, i32, i32), Error> {
    if score.runs < 0 || score.wickets < 0 {
        return Err(ResourceError::validation("Runs and wickets cannot be negative").into());
    }
    if score.wickets > 10 {
        return Err(ResourceError::validation("A side cannot lose more than 10 wickets").into());
    }

    let overs = Overs::from_notation(score.overs)
        .map_err(|e| ResourceError::validation(e.to_string()))?;

    Ok((score.runs, score.wickets, overs.balls()))
}

/// Checks that a winner, when given, is one of the two sides
pub(crate) fn validate_winner(
    winner_id: Option<i32>,
    team1_id: i32,
    team2_id: i32,
) -> Result<(), Error> {
    match winner_id {
        Some(winner_id) if winner_id != team1_id && winner_id != team2_id => Err(
            ResourceError::validation("Winner must be one of the two match teams").into(),
        ),
        _ => Ok(()),
    }
}

fn match_dto(fixture: MatchModel, teams: &HashMap<i32, TeamSummaryDto>) -> Result<MatchDto, Error> {
    let umpires: Vec<String> = serde_json::from_value(fixture.umpires)
        .map_err(|e| Error::InternalError(format!("Stored umpires could not be read: {}", e)))?;

    let winner = fixture
        .winner_id
        .map(|winner_id| referenced_team(teams, winner_id))
        .transpose()?;

    Ok(MatchDto {
        id: fixture.id,
        team1: referenced_team(teams, fixture.team1_id)?,
        team2: referenced_team(teams, fixture.team2_id)?,
        date: fixture.date,
        venue: fixture.venue,
        status: fixture.status.parse()?,
        result: MatchResultDto {
            winner,
            team1_score: innings_score(
                fixture.team1_runs,
                fixture.team1_wickets,
                fixture.team1_balls,
            ),
            team2_score: innings_score(
                fixture.team2_runs,
                fixture.team2_wickets,
                fixture.team2_balls,
            ),
        },
        umpires,
        created_at: fixture.created_at,
    })
}

async fn match_dtos<C: ConnectionTrait>(
    db: &C,
    fixtures: Vec<MatchModel>,
) -> Result<Vec<MatchDto>, Error> {
    let mut team_ids: Vec<i32> = fixtures
        .iter()
        .flat_map(|m| [Some(m.team1_id), Some(m.team2_id), m.winner_id])
        .flatten()
        .collect();
    team_ids.sort_unstable();
    team_ids.dedup();

    let teams = team_summaries(db, &team_ids).await?;

    fixtures
        .into_iter()
        .map(|fixture| match_dto(fixture, &teams))
        .collect()
}

/// The win/loss or draw each side gets from a result
fn outcomes(winner_id: Option<i32>, team1_id: i32, team2_id: i32) -> [(i32, TeamOutcome); 2] {
    match winner_id {
        Some(winner_id) if winner_id == team1_id => {
            [(team1_id, TeamOutcome::Win), (team2_id, TeamOutcome::Loss)]
        }
        Some(_) => [(team2_id, TeamOutcome::Win), (team1_id, TeamOutcome::Loss)],
        None => [(team1_id, TeamOutcome::Draw), (team2_id, TeamOutcome::Draw)],
    }
}

/// Sets a match status, tallying the result when the match becomes completed.
///
/// A result already counted is taken back first when the match leaves `Completed` or a new
/// result replaces it, so a match is never counted twice.
pub(crate) async fn apply_status<C: ConnectionTrait>(
    db: &C,
    fixture: MatchModel,
    status: MatchStatus,
    result: Option<MatchResult>,
) -> Result<MatchModel, Error> {
    let (team1_id, team2_id) = (fixture.team1_id, fixture.team2_id);
    let team_repo = TeamRepository::new(db);
    let mut tallied = fixture.tallied;

    if tallied && (status != MatchStatus::Completed || result.is_some()) {
        for (team_id, outcome) in outcomes(fixture.winner_id, team1_id, team2_id) {
            team_repo.revert_outcome(team_id, outcome).await?;
        }
        tallied = false;

        tracing::debug!(match_id = fixture.id, "Withdrew counted match result");
    }

    let counted = result.filter(|_| status == MatchStatus::Completed);
    if let Some(result) = counted {
        for (team_id, outcome) in outcomes(result.winner_id, team1_id, team2_id) {
            team_repo.record_outcome(team_id, outcome).await?;
        }
        tallied = true;

        tracing::debug!(
            match_id = fixture.id,
            winner_id = ?result.winner_id,
            "Recorded match result"
        );
    }

    let updated = FixtureRepository::new(db)
        .set_status(fixture, status, result, tallied)
        .await?;

    Ok(updated)
}

pub struct FixtureService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FixtureService<'a> {
    /// Creates a new instance of [`FixtureService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Both sides must exist and be different teams
    async fn validate_teams<C: ConnectionTrait>(
        db: &C,
        team1_id: i32,
        team2_id: i32,
    ) -> Result<(), Error> {
        if team1_id == team2_id {
            return Err(ResourceError::validation("A team cannot play itself").into());
        }

        let team_repo = TeamRepository::new(db);
        for team_id in [team1_id, team2_id] {
            team_repo
                .find_by_id(team_id)
                .await?
                .ok_or_else(|| ResourceError::not_found("Team", team_id))?;
        }

        Ok(())
    }

    /// Schedules a match between two teams.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The created match, `Scheduled` unless a status was given
    /// - `Err(Error::ResourceError)` - Same team twice or blank venue (400), unknown team (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_match(&self, fixture: CreateMatchDto) -> Result<MatchDto, Error> {
        let venue = fixture.venue.trim();
        if venue.is_empty() {
            return Err(ResourceError::validation("Venue is required").into());
        }

        Self::validate_teams(self.db, fixture.team1_id, fixture.team2_id).await?;

        let created = FixtureRepository::new(self.db)
            .create(NewMatch {
                team1_id: fixture.team1_id,
                team2_id: fixture.team2_id,
                date: fixture.date,
                venue: venue.to_string(),
                status: fixture.status.unwrap_or_default(),
                umpires: fixture.umpires,
            })
            .await?;

        tracing::debug!(match_id = created.id, "Created match");

        self.get_match(created.id).await
    }

    pub async fn list_matches(&self) -> Result<Vec<MatchDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list matches", || {
            let db = db.clone();

            Box::pin(async move {
                let fixtures = FixtureRepository::new(&db).find_all().await?;

                match_dtos(&db, fixtures).await
            })
        })
        .await
    }

    /// Gets the matches a team plays in.
    ///
    /// # Returns
    /// - `Ok(Vec<MatchDto>)` - Matches with the team on either side, by date
    /// - `Err(Error::ResourceError)` - Team does not exist (404)
    pub async fn list_matches_by_team(&self, team_id: i32) -> Result<Vec<MatchDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("list matches of team ID {}", team_id), || {
            let db = db.clone();

            Box::pin(async move {
                TeamRepository::new(&db)
                    .find_by_id(team_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Team", team_id))?;
                let fixtures = FixtureRepository::new(&db).find_by_team(team_id).await?;

                match_dtos(&db, fixtures).await
            })
        })
        .await
    }

    pub async fn get_match(&self, match_id: i32) -> Result<MatchDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get match ID {}", match_id), || {
            let db = db.clone();

            Box::pin(async move {
                let fixture = FixtureRepository::new(&db)
                    .find_by_id(match_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Match", match_id))?;

                match_dtos(&db, vec![fixture])
                    .await?
                    .pop()
                    .ok_or_else(|| Error::InternalError("Match DTO was not built".to_string()))
            })
        })
        .await
    }

    /// Applies a partial update to the match details.
    ///
    /// Teams can only be changed before a match is under way; a new side drops any stored winner.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The updated match
    /// - `Err(Error::ResourceError)` - Resulting teams are the same or venue blank (400),
    ///   unknown match or team (404), teams changed on a match in progress or completed (409)
    pub async fn update_match(
        &self,
        match_id: i32,
        update: UpdateMatchDto,
    ) -> Result<MatchDto, Error> {
        let venue = match update.venue.as_deref().map(str::trim) {
            Some("") => return Err(ResourceError::validation("Venue is required").into()),
            venue => venue.map(str::to_string),
        };

        let fixture_repo = FixtureRepository::new(self.db);
        let fixture = fixture_repo
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Match", match_id))?;

        if update.team1_id.is_some() || update.team2_id.is_some() {
            let status: MatchStatus = fixture.status.parse()?;
            if matches!(status, MatchStatus::InProgress | MatchStatus::Completed) {
                return Err(ResourceError::conflict(format!(
                    "Teams cannot be changed once a match is {}",
                    status.as_str().to_lowercase()
                ))
                .into());
            }

            Self::validate_teams(
                self.db,
                update.team1_id.unwrap_or(fixture.team1_id),
                update.team2_id.unwrap_or(fixture.team2_id),
            )
            .await?;
        }

        fixture_repo
            .update(
                fixture,
                MatchChanges {
                    team1_id: update.team1_id,
                    team2_id: update.team2_id,
                    date: update.date,
                    venue,
                    umpires: update.umpires,
                },
            )
            .await?;

        self.get_match(match_id).await
    }

    /// Changes a match status, recording the result when it is completed.
    ///
    /// # Returns
    /// - `Ok(MatchDto)` - The updated match
    /// - `Err(Error::ResourceError)` - Invalid result (400) or unknown match (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_match_status(
        &self,
        match_id: i32,
        update: UpdateMatchStatusDto,
    ) -> Result<MatchDto, Error> {
        let txn = self.db.begin().await?;

        let fixture = FixtureRepository::new(&txn)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Match", match_id))?;

        let result = update
            .result
            .map(|result| Self::parse_result(&result, fixture.team1_id, fixture.team2_id))
            .transpose()?;

        apply_status(&txn, fixture, update.status, result).await?;

        txn.commit().await?;

        self.get_match(match_id).await
    }

    fn parse_result(
        result: &MatchResultInputDto,
        team1_id: i32,
        team2_id: i32,
    ) -> Result<MatchResult, Error> {
        validate_winner(result.winner_id, team1_id, team2_id)?;

        Ok(MatchResult {
            winner_id: result.winner_id,
            team1: parse_innings_score(&result.team1_score)?,
            team2: parse_innings_score(&result.team2_score)?,
        })
    }

    /// Deletes a match and its scores, reverting the players' career totals.
    ///
    /// Team tallies from a completed match are left as recorded.
    ///
    /// # Returns
    /// - `Ok(())` - Match deleted
    /// - `Err(Error::ResourceError)` - Match does not exist (404)
    pub async fn delete_match(&self, match_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        FixtureRepository::new(&txn)
            .find_by_id(match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Match", match_id))?;

        let score_repo = ScoreRepository::new(&txn);
        let player_repo = PlayerRepository::new(&txn);
        let scores = score_repo.find_by_match(match_id).await?;
        let score_count = scores.len();

        for score in scores {
            let figures = ScoreFigures::from_model(&score)?;
            player_repo
                .adjust_stats(score.player_id, figures.career_contribution().negate())
                .await?;
            score_repo.delete(score.id).await?;
        }

        FixtureRepository::new(&txn).delete(match_id).await?;

        txn.commit().await?;

        tracing::debug!(match_id, scores = score_count, "Deleted match");

        Ok(())
    }
}
