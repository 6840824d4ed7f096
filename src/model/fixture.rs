use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{label::label_enum, team::TeamSummaryDto};

label_enum! {
    pub enum MatchStatus ("match status") {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

impl Default for MatchStatus {
    fn default() -> Self {
        MatchStatus::Scheduled
    }
}

/// One side's total in a match result
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InningsScoreDto {
    pub runs: i32,
    pub wickets: i32,
    /// Overs faced in cricket notation, e.g. `19.4`
    pub overs: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchResultDto {
    pub winner: Option<TeamSummaryDto>,
    pub team1_score: InningsScoreDto,
    pub team2_score: InningsScoreDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MatchDto {
    pub id: i32,
    pub team1: TeamSummaryDto,
    pub team2: TeamSummaryDto,
    pub date: NaiveDateTime,
    pub venue: String,
    pub status: MatchStatus,
    pub result: MatchResultDto,
    pub umpires: Vec<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateMatchDto {
    pub team1_id: i32,
    pub team2_id: i32,
    pub date: NaiveDateTime,
    pub venue: String,
    #[serde(default)]
    pub status: Option<MatchStatus>,
    #[serde(default)]
    pub umpires: Vec<String>,
}

/// Partial match update; omitted fields are left unchanged
///
/// Status and result are changed through the status endpoint so team tallies stay consistent.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchDto {
    #[serde(default)]
    pub team1_id: Option<i32>,
    #[serde(default)]
    pub team2_id: Option<i32>,
    #[serde(default)]
    pub date: Option<NaiveDateTime>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub umpires: Option<Vec<String>>,
}

/// Result submitted when completing a match
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct MatchResultInputDto {
    /// Winning team, which must be one of the two match teams; omit for a draw or tie
    #[serde(default)]
    pub winner_id: Option<i32>,
    #[serde(default)]
    pub team1_score: InningsScoreDto,
    #[serde(default)]
    pub team2_score: InningsScoreDto,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateMatchStatusDto {
    pub status: MatchStatus,
    #[serde(default)]
    pub result: Option<MatchResultInputDto>,
}
