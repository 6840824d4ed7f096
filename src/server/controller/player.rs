use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        player::{CreatePlayerDto, PlayerDto, UpdatePlayerDto, UpdatePlayerStatsDto},
    },
    server::{
        controller::scoring::live_service,
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::player::PlayerService,
    },
};

pub static PLAYER_TAG: &str = "player";

#[utoipa::path(
    post,
    path = "/api/players",
    tag = PLAYER_TAG,
    request_body = CreatePlayerDto,
    responses(
        (status = 201, description = "Player created", body = PlayerDto),
        (status = 400, description = "Invalid name or age", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_player(
    State(state): State<AppState>,
    Json(player): Json<CreatePlayerDto>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db).create_player(player).await?;

    Ok((StatusCode::CREATED, Json(player)))
}

#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    responses(
        (status = 200, description = "All players", body = Vec<PlayerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let players = PlayerService::new(&state.db).list_players().await?;

    Ok((StatusCode::OK, Json(players)))
}

/// List the players on a team's roster
#[utoipa::path(
    get,
    path = "/api/players/team/{team_id}",
    tag = PLAYER_TAG,
    params(("team_id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Players of the team", body = Vec<PlayerDto>),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let players = PlayerService::new(&state.db)
        .list_players_by_team(team_id)
        .await?;

    Ok((StatusCode::OK, Json(players)))
}

#[utoipa::path(
    get,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "The player", body = PlayerDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db).get_player(player_id).await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Update a player's details, moving them to another team if `team_id` is given
#[utoipa::path(
    put,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerDto,
    responses(
        (status = 200, description = "Player updated", body = PlayerDto),
        (status = 400, description = "Invalid name or age", body = ErrorDto),
        (status = 404, description = "Player or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
    Json(update): Json<UpdatePlayerDto>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db)
        .update_player(player_id, update)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Overwrite the given career statistics counters
#[utoipa::path(
    put,
    path = "/api/players/{id}/stats",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    request_body = UpdatePlayerStatsDto,
    responses(
        (status = 200, description = "Statistics updated", body = PlayerDto),
        (status = 400, description = "Negative statistics", body = ErrorDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
    Json(stats): Json<UpdatePlayerStatsDto>,
) -> Result<impl IntoResponse, Error> {
    let player = PlayerService::new(&state.db)
        .update_stats(player_id, stats)
        .await?;

    Ok((StatusCode::OK, Json(player)))
}

/// Delete a player along with their scores and trainer assignments
#[utoipa::path(
    delete,
    path = "/api/players/{id}",
    tag = PLAYER_TAG,
    params(("id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Player deleted", body = MessageDto),
        (status = 404, description = "Player not found", body = ErrorDto),
        (status = 409, description = "Player is in an innings being scored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    if live_service(&state).is_playing(player_id).await {
        return Err(ResourceError::conflict(
            "Player is on a roster of an innings being scored live",
        )
        .into());
    }

    PlayerService::new(&state.db)
        .delete_player(player_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Player deleted"))))
}
