//! Score service.
//!
//! A score holds one player's figures in one match. Every write here keeps the player's career
//! totals in step: creating a score adds its contribution, updating applies the difference and
//! deleting subtracts it again.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        overs::{economy, strike_rate, Overs},
        score::{
            BattingFiguresDto, BattingInputDto, BowlingFiguresDto, BowlingInputDto,
            CreateScoreDto, DismissalType, FieldingFiguresDto, ScoreDto, UpdateScoreDto,
        },
        team::{PlayerSummaryDto, TeamSummaryDto},
    },
    server::{
        data::{
            fixture::FixtureRepository,
            player::PlayerRepository,
            score::{ScoreFigures, ScoreRepository},
            team::TeamRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::ScoreModel,
        service::{
            lookup::{player_summaries, referenced_player, referenced_team, team_summaries},
            retry::RetryContext,
        },
    },
};

fn non_negative(values: &[i32], section: &str) -> Result<(), Error> {
    if values.iter().any(|value| *value < 0) {
        return Err(
            ResourceError::validation(format!("{} figures cannot be negative", section)).into(),
        );
    }

    Ok(())
}

fn apply_batting(figures: &mut ScoreFigures, batting: &BattingInputDto) -> Result<(), Error> {
    non_negative(
        &[batting.runs, batting.balls, batting.fours, batting.sixes],
        "Batting",
    )?;

    figures.batting_runs = batting.runs;
    figures.batting_balls = batting.balls;
    figures.fours = batting.fours;
    figures.sixes = batting.sixes;
    figures.dismissal = batting.dismissal_type;
    figures.is_out = batting.out
        || batting
            .dismissal_type
            .is_some_and(|d| d != DismissalType::NotOut);

    Ok(())
}

fn apply_bowling(figures: &mut ScoreFigures, bowling: &BowlingInputDto) -> Result<(), Error> {
    non_negative(
        &[
            bowling.maidens,
            bowling.runs,
            bowling.wickets,
            bowling.wides,
            bowling.no_balls,
        ],
        "Bowling",
    )?;

    let overs = Overs::from_notation(bowling.overs)
        .map_err(|e| ResourceError::validation(e.to_string()))?;
    if bowling.maidens > overs.completed() {
        return Err(
            ResourceError::validation("Maidens cannot exceed the completed overs bowled").into(),
        );
    }

    figures.bowling_balls = overs.balls();
    figures.maidens = bowling.maidens;
    figures.bowling_runs = bowling.runs;
    figures.bowling_wickets = bowling.wickets;
    figures.wides = bowling.wides;
    figures.no_balls = bowling.no_balls;

    Ok(())
}

fn apply_fielding(figures: &mut ScoreFigures, fielding: &FieldingFiguresDto) -> Result<(), Error> {
    non_negative(
        &[fielding.catches, fielding.stumpings, fielding.run_outs],
        "Fielding",
    )?;

    figures.catches = fielding.catches;
    figures.stumpings = fielding.stumpings;
    figures.run_outs = fielding.run_outs;

    Ok(())
}

fn score_dto(
    score: ScoreModel,
    player: PlayerSummaryDto,
    team: TeamSummaryDto,
) -> Result<ScoreDto, Error> {
    let figures = ScoreFigures::from_model(&score)?;
    let overs = Overs::from_balls(figures.bowling_balls);

    Ok(ScoreDto {
        id: score.id,
        match_id: score.match_id,
        player,
        team,
        batting: BattingFiguresDto {
            runs: figures.batting_runs,
            balls: figures.batting_balls,
            fours: figures.fours,
            sixes: figures.sixes,
            strike_rate: strike_rate(figures.batting_runs, figures.batting_balls),
            out: figures.is_out,
            dismissal_type: figures.dismissal,
        },
        bowling: BowlingFiguresDto {
            overs: overs.as_notation(),
            maidens: figures.maidens,
            runs: figures.bowling_runs,
            wickets: figures.bowling_wickets,
            wides: figures.wides,
            no_balls: figures.no_balls,
            economy: economy(figures.bowling_runs, overs.balls()),
        },
        fielding: FieldingFiguresDto {
            catches: figures.catches,
            stumpings: figures.stumpings,
            run_outs: figures.run_outs,
        },
        created_at: score.created_at,
    })
}

async fn score_dtos<C: ConnectionTrait>(
    db: &C,
    scores: Vec<ScoreModel>,
) -> Result<Vec<ScoreDto>, Error> {
    let mut player_ids: Vec<i32> = scores.iter().map(|s| s.player_id).collect();
    player_ids.sort_unstable();
    player_ids.dedup();
    let mut team_ids: Vec<i32> = scores.iter().map(|s| s.team_id).collect();
    team_ids.sort_unstable();
    team_ids.dedup();

    let players: HashMap<i32, PlayerSummaryDto> = player_summaries(db, &player_ids).await?;
    let teams: HashMap<i32, TeamSummaryDto> = team_summaries(db, &team_ids).await?;

    scores
        .into_iter()
        .map(|score| {
            let player = referenced_player(&players, score.player_id)?;
            let team = referenced_team(&teams, score.team_id)?;
            score_dto(score, player, team)
        })
        .collect()
}

/// Records figures for a player in a match, merging into an existing score.
///
/// The player's career totals are adjusted by what the write adds; merging into an existing
/// score does not count the match a second time.
pub(crate) async fn record_figures<C: ConnectionTrait>(
    db: &C,
    match_id: i32,
    player_id: i32,
    team_id: i32,
    figures: &ScoreFigures,
) -> Result<ScoreModel, Error> {
    let score_repo = ScoreRepository::new(db);
    let player_repo = PlayerRepository::new(db);

    match score_repo
        .find_by_match_and_player(match_id, player_id)
        .await?
    {
        Some(existing) => {
            let previous = ScoreFigures::from_model(&existing)?;
            let merged = previous.merge(figures);
            let delta = merged.career_contribution() - previous.career_contribution();

            let score = score_repo.update_figures(existing, &merged).await?;
            player_repo.adjust_stats(player_id, delta).await?;

            Ok(score)
        }
        None => {
            let score = score_repo
                .create(match_id, player_id, team_id, figures)
                .await?;
            player_repo
                .adjust_stats(player_id, figures.career_contribution())
                .await?;

            Ok(score)
        }
    }
}

pub struct ScoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreService<'a> {
    /// Creates a new instance of [`ScoreService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a player's figures for a match and adds them to the career totals.
    ///
    /// # Returns
    /// - `Ok(ScoreDto)` - The created score with derived strike rate and economy
    /// - `Err(Error::ResourceError)` - Invalid figures or a team outside the match (400),
    ///   unknown match, player or team (404), existing score for the player (409)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_score(&self, score: CreateScoreDto) -> Result<ScoreDto, Error> {
        let mut figures = ScoreFigures::default();
        apply_batting(&mut figures, &score.batting)?;
        apply_bowling(&mut figures, &score.bowling)?;
        apply_fielding(&mut figures, &score.fielding)?;

        let txn = self.db.begin().await?;

        let fixture = FixtureRepository::new(&txn)
            .find_by_id(score.match_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Match", score.match_id))?;
        PlayerRepository::new(&txn)
            .find_by_id(score.player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", score.player_id))?;
        TeamRepository::new(&txn)
            .find_by_id(score.team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", score.team_id))?;

        if score.team_id != fixture.team1_id && score.team_id != fixture.team2_id {
            return Err(
                ResourceError::validation("Team must be one of the two match teams").into(),
            );
        }

        let score_repo = ScoreRepository::new(&txn);
        if score_repo
            .find_by_match_and_player(score.match_id, score.player_id)
            .await?
            .is_some()
        {
            return Err(ResourceError::conflict(
                "A score for this player already exists in this match",
            )
            .into());
        }

        let created = score_repo
            .create(score.match_id, score.player_id, score.team_id, &figures)
            .await?;
        PlayerRepository::new(&txn)
            .adjust_stats(score.player_id, figures.career_contribution())
            .await?;

        txn.commit().await?;

        tracing::debug!(
            score_id = created.id,
            match_id = score.match_id,
            player_id = score.player_id,
            "Recorded score"
        );

        self.get_score(created.id).await
    }

    pub async fn list_scores(&self) -> Result<Vec<ScoreDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list scores", || {
            let db = db.clone();

            Box::pin(async move {
                let scores = ScoreRepository::new(&db).find_all().await?;

                score_dtos(&db, scores).await
            })
        })
        .await
    }

    /// Gets every score recorded in a match.
    ///
    /// # Returns
    /// - `Ok(Vec<ScoreDto>)` - Scores of the match
    /// - `Err(Error::ResourceError)` - Match does not exist (404)
    pub async fn list_scores_by_match(&self, match_id: i32) -> Result<Vec<ScoreDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("list scores of match ID {}", match_id), || {
            let db = db.clone();

            Box::pin(async move {
                FixtureRepository::new(&db)
                    .find_by_id(match_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Match", match_id))?;
                let scores = ScoreRepository::new(&db).find_by_match(match_id).await?;

                score_dtos(&db, scores).await
            })
        })
        .await
    }

    /// Gets every score recorded for a player.
    ///
    /// # Returns
    /// - `Ok(Vec<ScoreDto>)` - Scores of the player
    /// - `Err(Error::ResourceError)` - Player does not exist (404)
    pub async fn list_scores_by_player(&self, player_id: i32) -> Result<Vec<ScoreDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("list scores of player ID {}", player_id), || {
            let db = db.clone();

            Box::pin(async move {
                PlayerRepository::new(&db)
                    .find_by_id(player_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Player", player_id))?;
                let scores = ScoreRepository::new(&db).find_by_player(player_id).await?;

                score_dtos(&db, scores).await
            })
        })
        .await
    }

    pub async fn get_score(&self, score_id: i32) -> Result<ScoreDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get score ID {}", score_id), || {
            let db = db.clone();

            Box::pin(async move {
                let score = ScoreRepository::new(&db)
                    .find_by_id(score_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Score", score_id))?;

                score_dtos(&db, vec![score])
                    .await?
                    .pop()
                    .ok_or_else(|| Error::InternalError("Score DTO was not built".to_string()))
            })
        })
        .await
    }

    /// Replaces the given sections of a score's figures.
    ///
    /// The player's career totals lose the old figures and gain the new ones.
    ///
    /// # Returns
    /// - `Ok(ScoreDto)` - The updated score
    /// - `Err(Error::ResourceError)` - Invalid figures (400) or unknown score (404)
    pub async fn update_score(
        &self,
        score_id: i32,
        update: UpdateScoreDto,
    ) -> Result<ScoreDto, Error> {
        let txn = self.db.begin().await?;

        let score_repo = ScoreRepository::new(&txn);
        let score = score_repo
            .find_by_id(score_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Score", score_id))?;

        let previous = ScoreFigures::from_model(&score)?;
        let mut figures = previous.clone();
        if let Some(batting) = &update.batting {
            apply_batting(&mut figures, batting)?;
        }
        if let Some(bowling) = &update.bowling {
            apply_bowling(&mut figures, bowling)?;
        }
        if let Some(fielding) = &update.fielding {
            apply_fielding(&mut figures, fielding)?;
        }

        let player_id = score.player_id;
        score_repo.update_figures(score, &figures).await?;
        PlayerRepository::new(&txn)
            .adjust_stats(
                player_id,
                figures.career_contribution() - previous.career_contribution(),
            )
            .await?;

        txn.commit().await?;

        self.get_score(score_id).await
    }

    /// Deletes a score, reverting its contribution to the player's career totals.
    ///
    /// # Returns
    /// - `Ok(())` - Score deleted
    /// - `Err(Error::ResourceError)` - Score does not exist (404)
    pub async fn delete_score(&self, score_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let score_repo = ScoreRepository::new(&txn);
        let score = score_repo
            .find_by_id(score_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Score", score_id))?;

        let figures = ScoreFigures::from_model(&score)?;
        PlayerRepository::new(&txn)
            .adjust_stats(score.player_id, figures.career_contribution().negate())
            .await?;
        score_repo.delete(score_id).await?;

        txn.commit().await?;

        Ok(())
    }
}
