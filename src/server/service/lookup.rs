//! Reference lookups shared by the services when assembling response DTOs.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use crate::{
    model::team::{PlayerSummaryDto, TeamSummaryDto},
    server::{
        data::{player::PlayerRepository, team::TeamRepository},
        error::{resource::ResourceError, Error},
        model::db::{PlayerModel, TeamModel},
    },
};

pub(super) fn team_summary(team: &TeamModel) -> TeamSummaryDto {
    TeamSummaryDto {
        id: team.id,
        name: team.name.clone(),
    }
}

pub(super) fn player_summary(player: &PlayerModel) -> Result<PlayerSummaryDto, Error> {
    Ok(PlayerSummaryDto {
        id: player.id,
        name: player.name.clone(),
        role: player.role.parse()?,
    })
}

/// Team summaries keyed by ID
pub(super) async fn team_summaries<C: ConnectionTrait>(
    db: &C,
    team_ids: &[i32],
) -> Result<HashMap<i32, TeamSummaryDto>, Error> {
    let teams = TeamRepository::new(db).find_by_ids(team_ids).await?;

    Ok(teams.iter().map(|t| (t.id, team_summary(t))).collect())
}

/// Player summaries keyed by ID
pub(super) async fn player_summaries<C: ConnectionTrait>(
    db: &C,
    player_ids: &[i32],
) -> Result<HashMap<i32, PlayerSummaryDto>, Error> {
    let players = PlayerRepository::new(db).find_by_ids(player_ids).await?;

    players
        .iter()
        .map(|p| Ok((p.id, player_summary(p)?)))
        .collect()
}

/// Gets a referenced team from a lookup, which must contain it
pub(super) fn referenced_team(
    teams: &HashMap<i32, TeamSummaryDto>,
    team_id: i32,
) -> Result<TeamSummaryDto, Error> {
    teams.get(&team_id).cloned().ok_or_else(|| {
        Error::InternalError(format!("Referenced team ID {} does not exist", team_id))
    })
}

/// Gets a referenced player from a lookup, which must contain it
pub(super) fn referenced_player(
    players: &HashMap<i32, PlayerSummaryDto>,
    player_id: i32,
) -> Result<PlayerSummaryDto, Error> {
    players.get(&player_id).cloned().ok_or_else(|| {
        Error::InternalError(format!("Referenced player ID {} does not exist", player_id))
    })
}

/// Trims a required name, rejecting blank values
pub(super) fn required_name(kind: &str, name: &str) -> Result<String, Error> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ResourceError::validation(format!("{} name is required", kind)).into());
    }

    Ok(name.to_string())
}
