use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        score::{CreateScoreDto, ScoreDto, UpdateScoreDto},
    },
    server::{error::Error, model::app::AppState, service::score::ScoreService},
};

pub static SCORE_TAG: &str = "score";

/// Record a player's figures for a match
#[utoipa::path(
    post,
    path = "/api/scores",
    tag = SCORE_TAG,
    request_body = CreateScoreDto,
    responses(
        (status = 201, description = "Score recorded", body = ScoreDto),
        (status = 400, description = "Invalid figures or team not in the match", body = ErrorDto),
        (status = 404, description = "Match, player or team not found", body = ErrorDto),
        (status = 409, description = "Player already has a score for the match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_score(
    State(state): State<AppState>,
    Json(score): Json<CreateScoreDto>,
) -> Result<impl IntoResponse, Error> {
    let score = ScoreService::new(&state.db).create_score(score).await?;

    Ok((StatusCode::CREATED, Json(score)))
}

#[utoipa::path(
    get,
    path = "/api/scores",
    tag = SCORE_TAG,
    responses(
        (status = 200, description = "All scores", body = Vec<ScoreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_scores(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let scores = ScoreService::new(&state.db).list_scores().await?;

    Ok((StatusCode::OK, Json(scores)))
}

#[utoipa::path(
    get,
    path = "/api/scores/match/{match_id}",
    tag = SCORE_TAG,
    params(("match_id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Scores of the match", body = Vec<ScoreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_scores_by_match(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let scores = ScoreService::new(&state.db)
        .list_scores_by_match(match_id)
        .await?;

    Ok((StatusCode::OK, Json(scores)))
}

#[utoipa::path(
    get,
    path = "/api/scores/player/{player_id}",
    tag = SCORE_TAG,
    params(("player_id" = i32, Path, description = "Player ID")),
    responses(
        (status = 200, description = "Scores of the player", body = Vec<ScoreDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_scores_by_player(
    State(state): State<AppState>,
    Path(player_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let scores = ScoreService::new(&state.db)
        .list_scores_by_player(player_id)
        .await?;

    Ok((StatusCode::OK, Json(scores)))
}

#[utoipa::path(
    get,
    path = "/api/scores/{id}",
    tag = SCORE_TAG,
    params(("id" = i32, Path, description = "Score ID")),
    responses(
        (status = 200, description = "The score", body = ScoreDto),
        (status = 404, description = "Score not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_score(
    State(state): State<AppState>,
    Path(score_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let score = ScoreService::new(&state.db).get_score(score_id).await?;

    Ok((StatusCode::OK, Json(score)))
}

/// Replace a score's figures, adjusting the player's career totals by the difference
#[utoipa::path(
    put,
    path = "/api/scores/{id}",
    tag = SCORE_TAG,
    params(("id" = i32, Path, description = "Score ID")),
    request_body = UpdateScoreDto,
    responses(
        (status = 200, description = "Score updated", body = ScoreDto),
        (status = 400, description = "Invalid figures", body = ErrorDto),
        (status = 404, description = "Score not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_score(
    State(state): State<AppState>,
    Path(score_id): Path<i32>,
    Json(update): Json<UpdateScoreDto>,
) -> Result<impl IntoResponse, Error> {
    let score = ScoreService::new(&state.db)
        .update_score(score_id, update)
        .await?;

    Ok((StatusCode::OK, Json(score)))
}

/// Delete a score and take its figures off the player's career totals
#[utoipa::path(
    delete,
    path = "/api/scores/{id}",
    tag = SCORE_TAG,
    params(("id" = i32, Path, description = "Score ID")),
    responses(
        (status = 200, description = "Score deleted", body = MessageDto),
        (status = 404, description = "Score not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_score(
    State(state): State<AppState>,
    Path(score_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ScoreService::new(&state.db).delete_score(score_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Score deleted"))))
}
