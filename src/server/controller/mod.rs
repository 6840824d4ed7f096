//! HTTP controller endpoints for the Pavilion web API.
//!
//! One module per resource. Handlers extract path parameters, JSON bodies and the caller's
//! role, delegate to the matching service and map the result to a response. Every handler
//! carries a `utoipa` path annotation so the OpenAPI document stays in step with the routes.

pub mod fixture;
pub mod player;
pub mod score;
pub mod scoring;
pub mod team;
pub mod tournament;
pub mod trainer;
pub mod util;
