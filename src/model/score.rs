use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    label::label_enum,
    team::{PlayerSummaryDto, TeamSummaryDto},
};

label_enum! {
    pub enum DismissalType ("dismissal type") {
        Bowled => "Bowled",
        Caught => "Caught",
        Lbw => "LBW",
        RunOut => "Run Out",
        Stumped => "Stumped",
        NotOut => "Not Out",
    }
}

impl DismissalType {
    /// Whether the bowler is credited with the wicket.
    pub fn credits_bowler(&self) -> bool {
        !matches!(self, DismissalType::RunOut | DismissalType::NotOut)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BattingFiguresDto {
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    /// Derived: runs per hundred balls
    pub strike_rate: f64,
    pub out: bool,
    pub dismissal_type: Option<DismissalType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BowlingFiguresDto {
    /// Overs bowled in cricket notation
    pub overs: f64,
    pub maidens: i32,
    pub runs: i32,
    pub wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
    /// Derived: runs conceded per over
    pub economy: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FieldingFiguresDto {
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ScoreDto {
    pub id: i32,
    pub match_id: i32,
    pub player: PlayerSummaryDto,
    pub team: TeamSummaryDto,
    pub batting: BattingFiguresDto,
    pub bowling: BowlingFiguresDto,
    pub fielding: FieldingFiguresDto,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BattingInputDto {
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub balls: i32,
    #[serde(default)]
    pub fours: i32,
    #[serde(default)]
    pub sixes: i32,
    #[serde(default)]
    pub out: bool,
    #[serde(default)]
    pub dismissal_type: Option<DismissalType>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BowlingInputDto {
    /// Overs bowled in cricket notation, e.g. `3.4`
    #[serde(default)]
    pub overs: f64,
    #[serde(default)]
    pub maidens: i32,
    #[serde(default)]
    pub runs: i32,
    #[serde(default)]
    pub wickets: i32,
    #[serde(default)]
    pub wides: i32,
    #[serde(default)]
    pub no_balls: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateScoreDto {
    pub match_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    #[serde(default)]
    pub batting: BattingInputDto,
    #[serde(default)]
    pub bowling: BowlingInputDto,
    #[serde(default)]
    pub fielding: FieldingFiguresDto,
}

/// Replacement figures for an existing score; omitted sections keep their current values
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateScoreDto {
    #[serde(default)]
    pub batting: Option<BattingInputDto>,
    #[serde(default)]
    pub bowling: Option<BowlingInputDto>,
    #[serde(default)]
    pub fielding: Option<FieldingFiguresDto>,
}
