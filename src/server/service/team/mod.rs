//! Team service.
//!
//! Teams own no roster column: the roster is every player whose `team_id` points at the team,
//! so moving a player between teams is a single update. The service keeps the remaining
//! invariant, a captain always being on the roster, by clearing captaincy whenever a player
//! leaves a team and by moving a newly appointed captain onto the team.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::team::{AddTeamPlayerDto, CreateTeamDto, TeamDto, UpdateTeamDto},
    server::{
        data::{fixture::FixtureRepository, player::PlayerRepository, team::TeamRepository},
        error::{resource::ResourceError, Error},
        model::db::{MatchModel, PlayerModel, TeamModel},
        service::{
            lookup::{player_summary, required_name},
            retry::RetryContext,
        },
    },
};

/// Moves a player onto a team's roster, or off any roster with `None`.
///
/// A player leaving a team gives up its captaincy.
pub(crate) async fn move_player<C: ConnectionTrait>(
    db: &C,
    player: PlayerModel,
    team_id: Option<i32>,
) -> Result<PlayerModel, Error> {
    if player.team_id == team_id {
        return Ok(player);
    }

    TeamRepository::new(db).clear_captain(player.id).await?;
    let player = PlayerRepository::new(db).set_team(player, team_id).await?;

    Ok(player)
}

/// Assembles team DTOs from preloaded rosters and matches
fn build_team_dtos(
    teams: Vec<TeamModel>,
    players: &[PlayerModel],
    matches: &[MatchModel],
) -> Result<Vec<TeamDto>, Error> {
    let mut rosters: HashMap<i32, Vec<&PlayerModel>> = HashMap::new();
    for player in players {
        if let Some(team_id) = player.team_id {
            rosters.entry(team_id).or_default().push(player);
        }
    }

    teams
        .into_iter()
        .map(|team| {
            let roster = rosters.get(&team.id).map(Vec::as_slice).unwrap_or_default();

            let captain = team
                .captain_id
                .and_then(|captain_id| roster.iter().find(|p| p.id == captain_id))
                .map(|p| player_summary(p))
                .transpose()?;

            let players = roster
                .iter()
                .map(|p| player_summary(p))
                .collect::<Result<Vec<_>, _>>()?;

            let match_ids = matches
                .iter()
                .filter(|m| m.team1_id == team.id || m.team2_id == team.id)
                .map(|m| m.id)
                .collect();

            Ok(TeamDto {
                id: team.id,
                name: team.name,
                captain,
                players,
                match_ids,
                wins: team.wins,
                losses: team.losses,
                draws: team.draws,
                created_at: team.created_at,
            })
        })
        .collect()
}

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    /// Creates a new instance of [`TeamService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a team, optionally appointing an existing player as captain.
    ///
    /// The captain is moved onto the new team's roster, giving up any captaincy elsewhere.
    ///
    /// # Arguments
    /// - `team` - Name and optional captain ID
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The created team
    /// - `Err(Error::ResourceError)` - Blank name (400) or unknown captain (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_team(&self, team: CreateTeamDto) -> Result<TeamDto, Error> {
        let name = required_name("Team", &team.name)?;

        let txn = self.db.begin().await?;

        let captain = match team.captain_id {
            Some(captain_id) => Some(
                PlayerRepository::new(&txn)
                    .find_by_id(captain_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Player", captain_id))?,
            ),
            None => None,
        };

        // Clear previous captaincy before the new team claims the player
        if let Some(captain) = &captain {
            TeamRepository::new(&txn).clear_captain(captain.id).await?;
        }

        let created = TeamRepository::new(&txn)
            .create(name, captain.as_ref().map(|c| c.id))
            .await?;

        if let Some(captain) = captain {
            PlayerRepository::new(&txn)
                .set_team(captain, Some(created.id))
                .await?;
        }

        txn.commit().await?;

        tracing::debug!(team_id = created.id, "Created team");

        self.get_team(created.id).await
    }

    /// Gets every team with roster, captain and match IDs.
    pub async fn list_teams(&self) -> Result<Vec<TeamDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list teams", || {
            let db = db.clone();

            Box::pin(async move {
                let teams = TeamRepository::new(&db).find_all().await?;
                let team_ids: Vec<i32> = teams.iter().map(|t| t.id).collect();
                let players = PlayerRepository::new(&db).find_by_teams(&team_ids).await?;
                let matches = FixtureRepository::new(&db).find_all().await?;

                build_team_dtos(teams, &players, &matches)
            })
        })
        .await
    }

    /// Gets a team with roster, captain and match IDs.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team
    /// - `Err(Error::ResourceError)` - Team does not exist (404)
    /// - `Err(Error::DbErr)` - Database operation failed after retries
    pub async fn get_team(&self, team_id: i32) -> Result<TeamDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get team ID {}", team_id), || {
            let db = db.clone();

            Box::pin(async move {
                let team = TeamRepository::new(&db)
                    .find_by_id(team_id)
                    .await?
                    .ok_or_else(|| ResourceError::not_found("Team", team_id))?;
                let players = PlayerRepository::new(&db).find_by_team(team_id).await?;
                let matches = FixtureRepository::new(&db).find_by_team(team_id).await?;

                build_team_dtos(vec![team], &players, &matches)?
                    .pop()
                    .ok_or_else(|| Error::InternalError("Team DTO was not built".to_string()))
            })
        })
        .await
    }

    /// Renames a team and/or changes its captain.
    ///
    /// A new captain is moved onto this team's roster; `captain_id: null` clears the captain.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The updated team
    /// - `Err(Error::ResourceError)` - Blank name (400), unknown team or captain (404)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_team(&self, team_id: i32, update: UpdateTeamDto) -> Result<TeamDto, Error> {
        let name = update
            .name
            .as_deref()
            .map(|name| required_name("Team", name))
            .transpose()?;

        let txn = self.db.begin().await?;
        let team_repo = TeamRepository::new(&txn);

        let team = team_repo
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;

        if let Some(Some(captain_id)) = update.captain_id {
            let captain = PlayerRepository::new(&txn)
                .find_by_id(captain_id)
                .await?
                .ok_or_else(|| ResourceError::not_found("Player", captain_id))?;

            move_player(&txn, captain, Some(team_id)).await?;
        }

        team_repo.update(team, name, update.captain_id).await?;

        txn.commit().await?;

        self.get_team(team_id).await
    }

    /// Deletes a team, unassigning its roster.
    ///
    /// # Returns
    /// - `Ok(())` - Team deleted
    /// - `Err(Error::ResourceError)` - Team does not exist (404) or has matches (409)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_team(&self, team_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        TeamRepository::new(&txn)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;

        if FixtureRepository::new(&txn).count_by_team(team_id).await? > 0 {
            return Err(ResourceError::conflict(
                "Team has recorded matches and cannot be deleted",
            )
            .into());
        }

        let released = PlayerRepository::new(&txn).unassign_team(team_id).await?;
        TeamRepository::new(&txn).delete(team_id).await?;

        txn.commit().await?;

        tracing::debug!(team_id, released, "Deleted team");

        Ok(())
    }

    /// Puts a player on this team's roster, moving it off any previous roster.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team with its updated roster
    /// - `Err(Error::ResourceError)` - Team or player does not exist (404)
    pub async fn add_player(&self, team_id: i32, add: AddTeamPlayerDto) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;

        TeamRepository::new(&txn)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;
        let player = PlayerRepository::new(&txn)
            .find_by_id(add.player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", add.player_id))?;

        move_player(&txn, player, Some(team_id)).await?;

        txn.commit().await?;

        self.get_team(team_id).await
    }

    /// Takes a player off this team's roster; a player on another roster is left alone.
    ///
    /// # Returns
    /// - `Ok(TeamDto)` - The team with its updated roster
    /// - `Err(Error::ResourceError)` - Team or player does not exist (404)
    pub async fn remove_player(&self, team_id: i32, player_id: i32) -> Result<TeamDto, Error> {
        let txn = self.db.begin().await?;

        TeamRepository::new(&txn)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;
        let player = PlayerRepository::new(&txn)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        if player.team_id == Some(team_id) {
            move_player(&txn, player, None).await?;
        }

        txn.commit().await?;

        self.get_team(team_id).await
    }
}
