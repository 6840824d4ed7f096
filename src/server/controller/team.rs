use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        team::{AddTeamPlayerDto, CreateTeamDto, TeamDto, UpdateTeamDto},
    },
    server::{error::Error, model::app::AppState, service::team::TeamService},
};

pub static TEAM_TAG: &str = "team";

/// Create a team, optionally naming its captain
#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAM_TAG,
    request_body = CreateTeamDto,
    responses(
        (status = 201, description = "Team created", body = TeamDto),
        (status = 400, description = "Invalid team name", body = ErrorDto),
        (status = 404, description = "Captain not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_team(
    State(state): State<AppState>,
    Json(team): Json<CreateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db).create_team(team).await?;

    Ok((StatusCode::CREATED, Json(team)))
}

/// List all teams with their rosters
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    responses(
        (status = 200, description = "All teams", body = Vec<TeamDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_teams(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let teams = TeamService::new(&state.db).list_teams().await?;

    Ok((StatusCode::OK, Json(teams)))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "The team", body = TeamDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db).get_team(team_id).await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Rename a team or change its captain
#[utoipa::path(
    put,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = UpdateTeamDto,
    responses(
        (status = 200, description = "Team updated", body = TeamDto),
        (status = 400, description = "Invalid team name", body = ErrorDto),
        (status = 404, description = "Team or captain not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Json(update): Json<UpdateTeamDto>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db)
        .update_team(team_id, update)
        .await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Delete a team without recorded matches, leaving its players unassigned
#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Team deleted", body = MessageDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 409, description = "Team has recorded matches", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TeamService::new(&state.db).delete_team(team_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Team deleted"))))
}

/// Move a player onto the team's roster
#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAM_TAG,
    params(("id" = i32, Path, description = "Team ID")),
    request_body = AddTeamPlayerDto,
    responses(
        (status = 200, description = "Player added to the roster", body = TeamDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_team_player(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
    Json(add): Json<AddTeamPlayerDto>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db).add_player(team_id, add).await?;

    Ok((StatusCode::OK, Json(team)))
}

/// Take a player off the team's roster
#[utoipa::path(
    delete,
    path = "/api/teams/{id}/players/{player_id}",
    tag = TEAM_TAG,
    params(
        ("id" = i32, Path, description = "Team ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player removed from the roster", body = TeamDto),
        (status = 404, description = "Team or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_team_player(
    State(state): State<AppState>,
    Path((team_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let team = TeamService::new(&state.db)
        .remove_player(team_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(team)))
}
