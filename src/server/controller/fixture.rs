use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        fixture::{CreateMatchDto, MatchDto, UpdateMatchDto, UpdateMatchStatusDto},
    },
    server::{
        controller::scoring::live_service,
        error::Error,
        model::app::AppState,
        service::fixture::FixtureService,
    },
};

pub static MATCH_TAG: &str = "match";

#[utoipa::path(
    post,
    path = "/api/matches",
    tag = MATCH_TAG,
    request_body = CreateMatchDto,
    responses(
        (status = 201, description = "Match created", body = MatchDto),
        (status = 400, description = "Invalid teams or venue", body = ErrorDto),
        (status = 404, description = "Team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_match(
    State(state): State<AppState>,
    Json(fixture): Json<CreateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let fixture = FixtureService::new(&state.db).create_match(fixture).await?;

    Ok((StatusCode::CREATED, Json(fixture)))
}

/// List all matches ordered by date
#[utoipa::path(
    get,
    path = "/api/matches",
    tag = MATCH_TAG,
    responses(
        (status = 200, description = "All matches", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_matches(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let fixtures = FixtureService::new(&state.db).list_matches().await?;

    Ok((StatusCode::OK, Json(fixtures)))
}

/// List the matches a team plays in
#[utoipa::path(
    get,
    path = "/api/matches/team/{team_id}",
    tag = MATCH_TAG,
    params(("team_id" = i32, Path, description = "Team ID")),
    responses(
        (status = 200, description = "Matches of the team", body = Vec<MatchDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_matches_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let fixtures = FixtureService::new(&state.db)
        .list_matches_by_team(team_id)
        .await?;

    Ok((StatusCode::OK, Json(fixtures)))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "The match", body = MatchDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let fixture = FixtureService::new(&state.db).get_match(match_id).await?;

    Ok((StatusCode::OK, Json(fixture)))
}

/// Update a match's teams, date, venue or umpires
#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchDto,
    responses(
        (status = 200, description = "Match updated", body = MatchDto),
        (status = 400, description = "Invalid teams or venue", body = ErrorDto),
        (status = 404, description = "Match or team not found", body = ErrorDto),
        (status = 409, description = "Teams changed after the match started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
    Json(update): Json<UpdateMatchDto>,
) -> Result<impl IntoResponse, Error> {
    let fixture = FixtureService::new(&state.db)
        .update_match(match_id, update)
        .await?;

    Ok((StatusCode::OK, Json(fixture)))
}

/// Change a match's status, tallying the result when it is completed
#[utoipa::path(
    put,
    path = "/api/matches/{id}/status",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = UpdateMatchStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MatchDto),
        (status = 400, description = "Invalid result", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_match_status(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
    Json(update): Json<UpdateMatchStatusDto>,
) -> Result<impl IntoResponse, Error> {
    let fixture = FixtureService::new(&state.db)
        .update_match_status(match_id, update)
        .await?;

    Ok((StatusCode::OK, Json(fixture)))
}

/// Delete a match and every score recorded for it, dropping any live session
#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    tag = MATCH_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Match deleted", body = MessageDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    FixtureService::new(&state.db).delete_match(match_id).await?;
    live_service(&state).discard(match_id).await;

    Ok((StatusCode::OK, Json(MessageDto::new("Match deleted"))))
}
