use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    fixture::{InningsScoreDto, MatchDto},
    label::label_enum,
    score::DismissalType,
};

label_enum! {
    /// One of the two batting positions at the crease.
    pub enum CreaseEnd ("crease end") {
        Striker => "striker",
        NonStriker => "non_striker",
    }
}

impl CreaseEnd {
    pub fn opposite(&self) -> CreaseEnd {
        match self {
            CreaseEnd::Striker => CreaseEnd::NonStriker,
            CreaseEnd::NonStriker => CreaseEnd::Striker,
        }
    }
}

label_enum! {
    pub enum InningsStatus ("innings status") {
        InProgress => "in_progress",
        AllOut => "all_out",
        OversComplete => "overs_complete",
        TargetReached => "target_reached",
    }
}

impl InningsStatus {
    pub fn is_complete(&self) -> bool {
        *self != InningsStatus::InProgress
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct StartInningsDto {
    /// Team batting first; ignored for the second innings, where the other side bats
    #[serde(default)]
    pub batting_team_id: Option<i32>,
    /// Over limit for the innings, `0` for unlimited; defaults to the server setting
    #[serde(default)]
    pub max_overs: Option<i32>,
}

/// Batters to send to the crease; only empty ends may be filled
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct SetBattersDto {
    #[serde(default)]
    pub striker_id: Option<i32>,
    #[serde(default)]
    pub non_striker_id: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SetBowlerDto {
    pub bowler_id: i32,
}

fn striker() -> CreaseEnd {
    CreaseEnd::Striker
}

/// A single delivery as entered by the scorer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryInput {
    /// Runs off the bat from a legal ball (0-6)
    Runs { runs: i32 },
    /// No-ball plus runs off the bat (0-6)
    NoBall {
        #[serde(default)]
        runs: i32,
    },
    /// Wide plus additional runs taken (0-4)
    Wide {
        #[serde(default)]
        runs: i32,
    },
    /// A dismissal, optionally after completed runs (run outs only)
    Wicket {
        dismissal_type: DismissalType,
        #[serde(default = "striker")]
        batter: CreaseEnd,
        #[serde(default)]
        runs: i32,
        #[serde(default)]
        fielder_id: Option<i32>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BatterLineDto {
    pub player_id: i32,
    pub runs: i32,
    pub balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub strike_rate: f64,
    pub out: bool,
    pub dismissal_type: Option<DismissalType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BowlerLineDto {
    pub player_id: i32,
    /// Overs bowled in cricket notation
    pub overs: f64,
    pub maidens: i32,
    pub runs: i32,
    pub wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
    pub economy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverDto {
    /// 1-based over number
    pub number: i32,
    pub bowler_id: i32,
    pub runs: i32,
    pub wickets: i32,
    pub maiden: bool,
    /// Ball marks such as `1`, `4`, `W`, `wd`, `nb2`
    pub balls: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ExtrasDto {
    /// Runs from wides, including runs taken on a wide
    pub wides: i32,
    /// Penalty runs from no-balls
    pub no_balls: i32,
    pub total: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct LiveScoreDto {
    pub match_id: i32,
    pub innings: u8,
    pub batting_team_id: i32,
    pub bowling_team_id: i32,
    pub status: InningsStatus,
    pub runs: i32,
    pub wickets: i32,
    /// Overs faced in cricket notation
    pub overs: f64,
    pub max_overs: Option<i32>,
    pub target: Option<i32>,
    pub runs_needed: Option<i32>,
    pub run_rate: f64,
    pub required_run_rate: Option<f64>,
    pub extras: ExtrasDto,
    pub striker: Option<BatterLineDto>,
    pub non_striker: Option<BatterLineDto>,
    pub bowler: Option<BowlerLineDto>,
    pub current_over: Vec<String>,
    pub batters: Vec<BatterLineDto>,
    pub bowlers: Vec<BowlerLineDto>,
    pub over_history: Vec<OverDto>,
    /// Total of the completed first innings while the second is in play
    pub first_innings: Option<InningsScoreDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct InningsClosedDto {
    pub innings: u8,
    /// Number of player score records written for the innings
    pub scores_recorded: usize,
    /// Completed match, present once the second innings has been closed
    pub match_result: Option<MatchDto>,
}
