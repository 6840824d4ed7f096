//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here together with their OpenAPI specifications, and
//! Swagger UI is served at `/api/docs` for interactive exploration of the API.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI documentation.
///
/// Handlers sharing a path are registered together so each path carries every method in the
/// generated OpenAPI document. The document itself is served at `/api/docs/openapi.json`.
///
/// # Returns
/// An Axum `Router<AppState>` with all routes registered, ready to be given its state and
/// layered with middleware.
///
/// # Example
/// ```ignore
/// let router = routes().with_state(AppState::new(db, Some(20)));
/// ```
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(title = "Pavilion", description = "Cricket club management API"),
        tags(
            (name = controller::team::TEAM_TAG, description = "Teams and their rosters"),
            (name = controller::player::PLAYER_TAG, description = "Players and career statistics"),
            (name = controller::fixture::MATCH_TAG, description = "Matches and results"),
            (name = controller::score::SCORE_TAG, description = "Per-match player scores"),
            (name = controller::trainer::TRAINER_TAG, description = "Trainers and their assignments"),
            (name = controller::tournament::TOURNAMENT_TAG, description = "Tournaments, gated by role"),
            (name = controller::scoring::LIVE_TAG, description = "Ball-by-ball live scoring"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Teams
        .routes(routes!(
            controller::team::create_team,
            controller::team::list_teams
        ))
        .routes(routes!(
            controller::team::get_team,
            controller::team::update_team,
            controller::team::delete_team
        ))
        .routes(routes!(controller::team::add_team_player))
        .routes(routes!(controller::team::remove_team_player))
        // Players
        .routes(routes!(
            controller::player::create_player,
            controller::player::list_players
        ))
        .routes(routes!(controller::player::list_players_by_team))
        .routes(routes!(
            controller::player::get_player,
            controller::player::update_player,
            controller::player::delete_player
        ))
        .routes(routes!(controller::player::update_player_stats))
        // Matches
        .routes(routes!(
            controller::fixture::create_match,
            controller::fixture::list_matches
        ))
        .routes(routes!(controller::fixture::list_matches_by_team))
        .routes(routes!(
            controller::fixture::get_match,
            controller::fixture::update_match,
            controller::fixture::delete_match
        ))
        .routes(routes!(controller::fixture::update_match_status))
        // Scores
        .routes(routes!(
            controller::score::create_score,
            controller::score::list_scores
        ))
        .routes(routes!(controller::score::list_scores_by_match))
        .routes(routes!(controller::score::list_scores_by_player))
        .routes(routes!(
            controller::score::get_score,
            controller::score::update_score,
            controller::score::delete_score
        ))
        // Trainers
        .routes(routes!(
            controller::trainer::create_trainer,
            controller::trainer::list_trainers
        ))
        .routes(routes!(controller::trainer::list_trainers_by_specialization))
        .routes(routes!(
            controller::trainer::get_trainer,
            controller::trainer::update_trainer,
            controller::trainer::delete_trainer
        ))
        .routes(routes!(
            controller::trainer::assign_trainer_team,
            controller::trainer::remove_trainer_team
        ))
        .routes(routes!(
            controller::trainer::assign_trainer_player,
            controller::trainer::remove_trainer_player
        ))
        // Tournaments
        .routes(routes!(
            controller::tournament::create_tournament,
            controller::tournament::list_tournaments
        ))
        .routes(routes!(
            controller::tournament::get_tournament,
            controller::tournament::update_tournament,
            controller::tournament::delete_tournament
        ))
        .routes(routes!(controller::tournament::add_tournament_match))
        .routes(routes!(controller::tournament::update_tournament_match_result))
        // Live scoring
        .routes(routes!(
            controller::scoring::get_live_score,
            controller::scoring::abandon_live
        ))
        .routes(routes!(controller::scoring::start_innings))
        .routes(routes!(controller::scoring::end_innings))
        .routes(routes!(controller::scoring::set_batters))
        .routes(routes!(controller::scoring::set_bowler))
        .routes(routes!(controller::scoring::record_delivery))
        .routes(routes!(controller::scoring::swap_strike))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
