//! Live scoring endpoints.
//!
//! Reads are open to every caller; anything that changes the state of a live innings
//! requires the `admin` role.

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
        scoring::{
            DeliveryInput, InningsClosedDto, LiveScoreDto, SetBattersDto, SetBowlerDto,
            StartInningsDto,
        },
    },
    server::{
        controller::util::role::CurrentRole, error::Error, model::app::AppState,
        service::scoring::LiveScoringService,
    },
};

pub static LIVE_TAG: &str = "live";

pub(super) fn live_service(state: &AppState) -> LiveScoringService<'_> {
    LiveScoringService::new(&state.db, &state.live, state.default_max_overs)
}

/// Start the first innings of a match, or the second once the first is closed
#[utoipa::path(
    post,
    path = "/api/matches/{id}/live/innings",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = StartInningsDto,
    responses(
        (status = 201, description = "Innings started", body = LiveScoreDto),
        (status = 400, description = "Invalid batting team, over limit or rosters", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "Match not found", body = ErrorDto),
        (status = 409, description = "Innings in play or match finished", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_innings(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
    Json(start): Json<StartInningsDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let live = live_service(&state).start_innings(match_id, start).await?;

    Ok((StatusCode::CREATED, Json(live)))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/live",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Current live score", body = LiveScoreDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_live_score(
    State(state): State<AppState>,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let live = live_service(&state).get_live_score(match_id).await?;

    Ok((StatusCode::OK, Json(live)))
}

/// Send batters to the empty crease ends
#[utoipa::path(
    put,
    path = "/api/matches/{id}/live/batters",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = SetBattersDto,
    responses(
        (status = 200, description = "Batters set", body = LiveScoreDto),
        (status = 400, description = "Batter not eligible", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 409, description = "Innings complete", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_batters(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
    Json(batters): Json<SetBattersDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let live = live_service(&state).set_batters(match_id, batters).await?;

    Ok((StatusCode::OK, Json(live)))
}

/// Select the bowler of the next over
#[utoipa::path(
    put,
    path = "/api/matches/{id}/live/bowler",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = SetBowlerDto,
    responses(
        (status = 200, description = "Bowler set", body = LiveScoreDto),
        (status = 400, description = "Bowler not eligible", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 409, description = "Innings complete", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_bowler(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
    Json(bowler): Json<SetBowlerDto>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let live = live_service(&state).set_bowler(match_id, bowler).await?;

    Ok((StatusCode::OK, Json(live)))
}

/// Record a delivery
#[utoipa::path(
    post,
    path = "/api/matches/{id}/live/deliveries",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    request_body = DeliveryInput,
    responses(
        (status = 200, description = "Delivery recorded", body = LiveScoreDto),
        (status = 400, description = "Delivery not valid in the current state", body = ErrorDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 409, description = "Innings complete", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_delivery(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
    Json(delivery): Json<DeliveryInput>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let live = live_service(&state)
        .record_delivery(match_id, delivery)
        .await?;

    Ok((StatusCode::OK, Json(live)))
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/live/swap-strike",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Strike swapped", body = LiveScoreDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 409, description = "Innings complete", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn swap_strike(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let live = live_service(&state).swap_strike(match_id).await?;

    Ok((StatusCode::OK, Json(live)))
}

/// Close the innings in play and record every player's figures as scores
#[utoipa::path(
    post,
    path = "/api/matches/{id}/live/innings/end",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Innings closed", body = InningsClosedDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 409, description = "Innings already closed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_innings(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    let closed = live_service(&state).end_innings(match_id).await?;

    Ok((StatusCode::OK, Json(closed)))
}

/// Drop the live session without recording scores
#[utoipa::path(
    delete,
    path = "/api/matches/{id}/live",
    tag = LIVE_TAG,
    params(("id" = i32, Path, description = "Match ID")),
    responses(
        (status = 200, description = "Live session abandoned", body = MessageDto),
        (status = 403, description = "Role not permitted", body = ErrorDto),
        (status = 404, description = "No live session for the match", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn abandon_live(
    State(state): State<AppState>,
    role: CurrentRole,
    Path(match_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    role.require(Role::Admin)?;

    live_service(&state).abandon(match_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Live session abandoned"))))
}
