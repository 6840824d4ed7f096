use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    fixture::{InningsScoreDto, MatchStatus},
    label::label_enum,
    team::TeamSummaryDto,
};

label_enum! {
    pub enum TournamentStatus ("tournament status") {
        Upcoming => "upcoming",
        Ongoing => "ongoing",
        Completed => "completed",
    }
}

impl Default for TournamentStatus {
    fn default() -> Self {
        TournamentStatus::Upcoming
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TournamentMatchDto {
    pub id: i32,
    pub team1: TeamSummaryDto,
    pub team2: TeamSummaryDto,
    pub date: NaiveDateTime,
    pub venue: String,
    pub status: MatchStatus,
    pub team1_score: InningsScoreDto,
    pub team2_score: InningsScoreDto,
    pub winner: Option<TeamSummaryDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TournamentDto {
    pub id: i32,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: TournamentStatus,
    pub teams: Vec<TeamSummaryDto>,
    pub matches: Vec<TournamentMatchDto>,
    pub created_at: NaiveDateTime,
}

/// Tournament details used for both creation and full replacement on update
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TournamentInputDto {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub status: Option<TournamentStatus>,
    #[serde(default)]
    pub team_ids: Vec<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AddTournamentMatchDto {
    pub team1_id: i32,
    pub team2_id: i32,
    pub date: NaiveDateTime,
    pub venue: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TournamentMatchResultDto {
    pub status: MatchStatus,
    #[serde(default)]
    pub winner_id: Option<i32>,
    #[serde(default)]
    pub team1_score: InningsScoreDto,
    #[serde(default)]
    pub team2_score: InningsScoreDto,
}
