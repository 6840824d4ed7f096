use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        label::UnknownLabel,
        trainer::{CreateTrainerDto, Specialization, TrainerDto, UpdateTrainerDto},
    },
    server::{
        error::{resource::ResourceError, Error},
        model::app::AppState,
        service::trainer::TrainerService,
    },
};

pub static TRAINER_TAG: &str = "trainer";

#[utoipa::path(
    post,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    request_body = CreateTrainerDto,
    responses(
        (status = 201, description = "Trainer created", body = TrainerDto),
        (status = 400, description = "Invalid trainer details", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trainer(
    State(state): State<AppState>,
    Json(trainer): Json<CreateTrainerDto>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .create_trainer(trainer)
        .await?;

    Ok((StatusCode::CREATED, Json(trainer)))
}

#[utoipa::path(
    get,
    path = "/api/trainers",
    tag = TRAINER_TAG,
    responses(
        (status = 200, description = "All trainers", body = Vec<TrainerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainers(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let trainers = TrainerService::new(&state.db).list_trainers().await?;

    Ok((StatusCode::OK, Json(trainers)))
}

/// List trainers with the given specialization
#[utoipa::path(
    get,
    path = "/api/trainers/specialization/{specialization}",
    tag = TRAINER_TAG,
    params(("specialization" = Specialization, Path, description = "Specialization label")),
    responses(
        (status = 200, description = "Trainers with the specialization", body = Vec<TrainerDto>),
        (status = 400, description = "Unknown specialization", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trainers_by_specialization(
    State(state): State<AppState>,
    Path(specialization): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let specialization: Specialization = specialization
        .parse()
        .map_err(|err: UnknownLabel| ResourceError::validation(err.to_string()))?;

    let trainers = TrainerService::new(&state.db)
        .list_trainers_by_specialization(specialization)
        .await?;

    Ok((StatusCode::OK, Json(trainers)))
}

#[utoipa::path(
    get,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(("id" = i32, Path, description = "Trainer ID")),
    responses(
        (status = 200, description = "The trainer", body = TrainerDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db).get_trainer(trainer_id).await?;

    Ok((StatusCode::OK, Json(trainer)))
}

#[utoipa::path(
    put,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(("id" = i32, Path, description = "Trainer ID")),
    request_body = UpdateTrainerDto,
    responses(
        (status = 200, description = "Trainer updated", body = TrainerDto),
        (status = 400, description = "Invalid trainer details", body = ErrorDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
    Json(update): Json<UpdateTrainerDto>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .update_trainer(trainer_id, update)
        .await?;

    Ok((StatusCode::OK, Json(trainer)))
}

#[utoipa::path(
    delete,
    path = "/api/trainers/{id}",
    tag = TRAINER_TAG,
    params(("id" = i32, Path, description = "Trainer ID")),
    responses(
        (status = 200, description = "Trainer deleted", body = MessageDto),
        (status = 404, description = "Trainer not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trainer(
    State(state): State<AppState>,
    Path(trainer_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    TrainerService::new(&state.db)
        .delete_trainer(trainer_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Trainer deleted"))))
}

/// Assign a trainer to a team; assigning twice has no further effect
#[utoipa::path(
    post,
    path = "/api/trainers/{id}/teams/{team_id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Trainer assigned", body = TrainerDto),
        (status = 404, description = "Trainer or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_trainer_team(
    State(state): State<AppState>,
    Path((trainer_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .assign_team(trainer_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(trainer)))
}

#[utoipa::path(
    delete,
    path = "/api/trainers/{id}/teams/{team_id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID"),
        ("team_id" = i32, Path, description = "Team ID")
    ),
    responses(
        (status = 200, description = "Trainer unassigned", body = TrainerDto),
        (status = 404, description = "Trainer or team not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_trainer_team(
    State(state): State<AppState>,
    Path((trainer_id, team_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .remove_team(trainer_id, team_id)
        .await?;

    Ok((StatusCode::OK, Json(trainer)))
}

/// Assign a trainer to an individual player
#[utoipa::path(
    post,
    path = "/api/trainers/{id}/players/{player_id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Trainer assigned", body = TrainerDto),
        (status = 404, description = "Trainer or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_trainer_player(
    State(state): State<AppState>,
    Path((trainer_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .assign_player(trainer_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(trainer)))
}

#[utoipa::path(
    delete,
    path = "/api/trainers/{id}/players/{player_id}",
    tag = TRAINER_TAG,
    params(
        ("id" = i32, Path, description = "Trainer ID"),
        ("player_id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Trainer unassigned", body = TrainerDto),
        (status = 404, description = "Trainer or player not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_trainer_player(
    State(state): State<AppState>,
    Path((trainer_id, player_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let trainer = TrainerService::new(&state.db)
        .remove_player(trainer_id, player_id)
        .await?;

    Ok((StatusCode::OK, Json(trainer)))
}
