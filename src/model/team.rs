use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::double_option, player::PlayerRole};

/// Minimal team reference embedded in other resources
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TeamSummaryDto {
    pub id: i32,
    pub name: String,
}

/// Roster entry of a team
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerSummaryDto {
    pub id: i32,
    pub name: String,
    pub role: PlayerRole,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TeamDto {
    pub id: i32,
    pub name: String,
    pub captain: Option<PlayerSummaryDto>,
    /// Players whose team is this team
    pub players: Vec<PlayerSummaryDto>,
    /// IDs of matches this team takes part in
    pub match_ids: Vec<i32>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTeamDto {
    pub name: String,
    /// Existing player to appoint as captain, moved onto this team's roster
    #[serde(default)]
    pub captain_id: Option<i32>,
}

/// Partial team update; omitted fields are left unchanged and `captain_id: null` clears the captain
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTeamDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub captain_id: Option<Option<i32>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddTeamPlayerDto {
    pub player_id: i32,
}
