//! Player service.
//!
//! Players carry their career totals. Those totals are normally maintained by the score service
//! as scores are recorded, with [`PlayerService::update_stats`] as a manual override.

#[cfg(test)]
mod tests;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        player::{
            CreatePlayerDto, PlayerDto, PlayerStatsDto, UpdatePlayerDto, UpdatePlayerStatsDto,
        },
        team::TeamSummaryDto,
    },
    server::{
        data::{
            player::PlayerRepository, score::ScoreRepository, team::TeamRepository,
            trainer::TrainerRepository,
        },
        error::{resource::ResourceError, Error},
        model::db::PlayerModel,
        service::{
            lookup::{required_name, team_summaries},
            retry::RetryContext,
            team::move_player,
        },
    },
};

fn player_dto(player: PlayerModel, team: Option<TeamSummaryDto>) -> Result<PlayerDto, Error> {
    Ok(PlayerDto {
        id: player.id,
        role: player.role.parse()?,
        batting_style: player.batting_style.map(|s| s.parse()).transpose()?,
        bowling_style: player.bowling_style.map(|s| s.parse()).transpose()?,
        stats: PlayerStatsDto {
            matches: player.matches,
            runs: player.runs,
            wickets: player.wickets,
            catches: player.catches,
            stumpings: player.stumpings,
        },
        name: player.name,
        age: player.age,
        team,
        created_at: player.created_at,
    })
}

/// Builds player DTOs, resolving each player's team in a single query
async fn player_dtos<C: ConnectionTrait>(
    db: &C,
    players: Vec<PlayerModel>,
) -> Result<Vec<PlayerDto>, Error> {
    let mut team_ids: Vec<i32> = players.iter().filter_map(|p| p.team_id).collect();
    team_ids.sort_unstable();
    team_ids.dedup();

    let teams = team_summaries(db, &team_ids).await?;

    players
        .into_iter()
        .map(|player| {
            let team = player.team_id.and_then(|id| teams.get(&id).cloned());
            player_dto(player, team)
        })
        .collect()
}

fn validate_age(age: i32) -> Result<(), Error> {
    if age <= 0 {
        return Err(ResourceError::validation("Age must be a positive number").into());
    }

    Ok(())
}

async fn ensure_team_exists<C: ConnectionTrait>(db: &C, team_id: i32) -> Result<(), Error> {
    TeamRepository::new(db)
        .find_by_id(team_id)
        .await?
        .ok_or_else(|| ResourceError::not_found("Team", team_id))?;

    Ok(())
}

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    /// Creates a new instance of [`PlayerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a player with zeroed career totals.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The created player
    /// - `Err(Error::ResourceError)` - Blank name or non-positive age (400), unknown team (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_player(&self, player: CreatePlayerDto) -> Result<PlayerDto, Error> {
        required_name("Player", &player.name)?;
        validate_age(player.age)?;

        if let Some(team_id) = player.team_id {
            ensure_team_exists(self.db, team_id).await?;
        }

        let created = PlayerRepository::new(self.db).create(player).await?;

        tracing::debug!(player_id = created.id, "Created player");

        self.get_player(created.id).await
    }

    pub async fn list_players(&self) -> Result<Vec<PlayerDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list players", || {
            let db = db.clone();

            Box::pin(async move {
                let players = PlayerRepository::new(&db).find_all().await?;

                player_dtos(&db, players).await
            })
        })
        .await
    }

    /// Gets the roster of a team.
    ///
    /// # Returns
    /// - `Ok(Vec<PlayerDto>)` - Players whose team is the given team
    /// - `Err(Error::ResourceError)` - Team does not exist (404)
    pub async fn list_players_by_team(&self, team_id: i32) -> Result<Vec<PlayerDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("list players of team ID {}", team_id), || {
            let db = db.clone();

            Box::pin(async move {
                ensure_team_exists(&db, team_id).await?;
                let players = PlayerRepository::new(&db).find_by_team(team_id).await?;

                player_dtos(&db, players).await
            })
        })
        .await
    }

    pub async fn get_player(&self, player_id: i32) -> Result<PlayerDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get player ID {}", player_id), || {
            let db = db.clone();

            Box::pin(async move {
                let player = PlayerRepository::new(&db)
                    .find_by_id(player_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

                let team = match player.team_id {
                    Some(team_id) => team_summaries(&db, &[team_id]).await?.remove(&team_id),
                    None => None,
                };

                player_dto(player, team)
            })
        })
        .await
    }

    /// Applies a partial update to a player.
    ///
    /// Changing the player's team gives up any captaincy it held.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The updated player
    /// - `Err(Error::ResourceError)` - Invalid name or age (400), unknown player or team (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_player(
        &self,
        player_id: i32,
        mut update: UpdatePlayerDto,
    ) -> Result<PlayerDto, Error> {
        if let Some(name) = &update.name {
            required_name("Player", name)?;
        }
        if let Some(age) = update.age {
            validate_age(age)?;
        }

        let txn = self.db.begin().await?;

        let mut player = PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        if let Some(team_id) = update.team_id.take() {
            if let Some(team_id) = team_id {
                ensure_team_exists(&txn, team_id).await?;
            }

            player = move_player(&txn, player, team_id).await?;
        }

        PlayerRepository::new(&txn).update(player, update).await?;

        txn.commit().await?;

        self.get_player(player_id).await
    }

    /// Overwrites the given career counters.
    ///
    /// # Returns
    /// - `Ok(PlayerDto)` - The player with updated totals
    /// - `Err(Error::ResourceError)` - Negative counter (400) or unknown player (404)
    pub async fn update_stats(
        &self,
        player_id: i32,
        stats: UpdatePlayerStatsDto,
    ) -> Result<PlayerDto, Error> {
        let counters = [
            stats.matches,
            stats.runs,
            stats.wickets,
            stats.catches,
            stats.stumpings,
        ];
        if counters.into_iter().flatten().any(|value| value < 0) {
            return Err(ResourceError::validation("Career statistics cannot be negative").into());
        }

        let player_repo = PlayerRepository::new(self.db);
        let player = player_repo
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        player_repo.set_stats(player, stats).await?;

        self.get_player(player_id).await
    }

    /// Deletes a player along with its scores, captaincy and trainer assignments.
    ///
    /// # Returns
    /// - `Ok(())` - Player deleted
    /// - `Err(Error::ResourceError)` - Player does not exist (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_player(&self, player_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        TeamRepository::new(&txn).clear_captain(player_id).await?;
        let scores = ScoreRepository::new(&txn).delete_by_player(player_id).await?;
        TrainerRepository::new(&txn)
            .remove_player_everywhere(player_id)
            .await?;
        PlayerRepository::new(&txn).delete(player_id).await?;

        txn.commit().await?;

        tracing::debug!(
            player_id,
            scores = scores.rows_affected,
            "Deleted player"
        );

        Ok(())
    }
}
