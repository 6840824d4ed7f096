use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{api::double_option, label::label_enum, team::TeamSummaryDto};

label_enum! {
    pub enum PlayerRole ("player role") {
        Batsman => "Batsman",
        Bowler => "Bowler",
        AllRounder => "All-rounder",
        WicketKeeper => "Wicket-keeper",
    }
}

label_enum! {
    pub enum BattingStyle ("batting style") {
        RightHanded => "Right-handed",
        LeftHanded => "Left-handed",
    }
}

label_enum! {
    pub enum BowlingStyle ("bowling style") {
        RightArmFast => "Right-arm fast",
        RightArmMedium => "Right-arm medium",
        RightArmSpin => "Right-arm spin",
        LeftArmFast => "Left-arm fast",
        LeftArmMedium => "Left-arm medium",
        LeftArmSpin => "Left-arm spin",
    }
}

/// Career totals accumulated from recorded scores
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlayerStatsDto {
    pub matches: i32,
    pub runs: i32,
    pub wickets: i32,
    pub catches: i32,
    pub stumpings: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct PlayerDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub role: PlayerRole,
    pub team: Option<TeamSummaryDto>,
    pub batting_style: Option<BattingStyle>,
    pub bowling_style: Option<BowlingStyle>,
    pub stats: PlayerStatsDto,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePlayerDto {
    pub name: String,
    pub age: i32,
    pub role: PlayerRole,
    #[serde(default)]
    pub team_id: Option<i32>,
    #[serde(default)]
    pub batting_style: Option<BattingStyle>,
    #[serde(default)]
    pub bowling_style: Option<BowlingStyle>,
}

/// Partial player update; omitted fields are left unchanged, `null` clears nullable fields
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlayerDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i32>,
    #[serde(default)]
    pub role: Option<PlayerRole>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<i32>)]
    pub team_id: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<BattingStyle>)]
    pub batting_style: Option<Option<BattingStyle>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<BowlingStyle>)]
    pub bowling_style: Option<Option<BowlingStyle>>,
}

/// Career counters to overwrite; omitted counters keep their current value
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePlayerStatsDto {
    #[serde(default)]
    pub matches: Option<i32>,
    #[serde(default)]
    pub runs: Option<i32>,
    #[serde(default)]
    pub wickets: Option<i32>,
    #[serde(default)]
    pub catches: Option<i32>,
    #[serde(default)]
    pub stumpings: Option<i32>,
}
