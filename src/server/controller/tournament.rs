use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        role::Role,
        tournament::{
            AddTournamentMatchDto, TournamentDto, TournamentInputDto, TournamentMatchResultDto,
        },
    },
    server::{
        controller::util::role::CurrentRole, error::Error, model::app::AppState,
        service::tournament::TournamentService,
    },
};

pub static TOURNAMENT_TAG: &str = "tournament";

/// List tournaments, newest first
///
/// Requires the `player` role.
#[utoipa::path(
    get,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    responses(
        (status = 200, description = "All tournaments", body = Vec<TournamentDto>),
        (status = 400, description = "Unknown role header", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tournaments(
    State(state): State<AppState>,
    role: CurrentRole,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Player)?;

    let tournaments = TournamentService::new(&state.db).list_tournaments().await?;

    Ok((StatusCode::OK, Json(tournaments)))
}

/// Get a tournament with its teams and matches
///
/// Requires the `player` role.
#[utoipa::path(
    get,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament ID")),
    responses(
        (status = 200, description = "The tournament", body = TournamentDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tournament(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Player)?;

    let tournament = TournamentService::new(&state.db)
        .get_tournament(tournament_id)
        .await?;

    Ok((StatusCode::OK, Json(tournament)))
}

/// Create a tournament (admin only)
#[utoipa::path(
    post,
    path = "/api/tournaments",
    tag = TOURNAMENT_TAG,
    request_body = TournamentInputDto,
    responses(
        (status = 201, description = "Tournament created", body = TournamentDto),
        (status = 400, description = "Invalid dates or unknown teams", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tournament(
    State(state): State<AppState>,
    role: CurrentRole,
    Json(tournament): Json<TournamentInputDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let tournament = TournamentService::new(&state.db)
        .create_tournament(tournament)
        .await?;

    Ok((StatusCode::CREATED, Json(tournament)))
}

/// Replace a tournament's details and teams (admin only)
#[utoipa::path(
    put,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament ID")),
    request_body = TournamentInputDto,
    responses(
        (status = 200, description = "Tournament updated", body = TournamentDto),
        (status = 400, description = "Invalid dates or unknown teams", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 409, description = "Team with tournament matches left out", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tournament(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(tournament_id): Path<i32>,
    Json(tournament): Json<TournamentInputDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let tournament = TournamentService::new(&state.db)
        .update_tournament(tournament_id, tournament)
        .await?;

    Ok((StatusCode::OK, Json(tournament)))
}

/// Delete a tournament and its matches (admin only)
#[utoipa::path(
    delete,
    path = "/api/tournaments/{id}",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament ID")),
    responses(
        (status = 200, description = "Tournament deleted", body = MessageDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tournament(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(tournament_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    TournamentService::new(&state.db)
        .delete_tournament(tournament_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Tournament deleted"))))
}

/// Schedule a match between two of the tournament's teams (admin only)
#[utoipa::path(
    post,
    path = "/api/tournaments/{id}/matches",
    tag = TOURNAMENT_TAG,
    params(("id" = i32, Path, description = "Tournament ID")),
    request_body = AddTournamentMatchDto,
    responses(
        (status = 201, description = "Match added", body = TournamentDto),
        (status = 400, description = "Teams not part of the tournament", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Tournament not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_tournament_match(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(tournament_id): Path<i32>,
    Json(new_match): Json<AddTournamentMatchDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let tournament = TournamentService::new(&state.db)
        .add_match(tournament_id, new_match)
        .await?;

    Ok((StatusCode::CREATED, Json(tournament)))
}

/// Record the status and result of a tournament match (admin only)
#[utoipa::path(
    put,
    path = "/api/tournaments/{id}/matches/{match_id}",
    tag = TOURNAMENT_TAG,
    params(
        ("id" = i32, Path, description = "Tournament ID"),
        ("match_id" = i32, Path, description = "Tournament match ID")
    ),
    request_body = TournamentMatchResultDto,
    responses(
        (status = 200, description = "Result recorded", body = TournamentDto),
        (status = 400, description = "Invalid result", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Tournament or match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tournament_match_result(
    State(state): State<AppState>,
    role: CurrentRole,
    Path((tournament_id, match_id)): Path<(i32, i32)>,
    Json(update): Json<TournamentMatchResultDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let tournament = TournamentService::new(&state.db)
        .update_match_result(tournament_id, match_id, update)
        .await?;

    Ok((StatusCode::OK, Json(tournament)))
}
