use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    label::label_enum,
    team::{PlayerSummaryDto, TeamSummaryDto},
};

label_enum! {
    pub enum Specialization ("specialization") {
        Batting => "Batting",
        Bowling => "Bowling",
        Fielding => "Fielding",
        Fitness => "Fitness",
        AllRound => "All-round",
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub email: String,
    pub phone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AchievementDto {
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct TrainerDto {
    pub id: i32,
    pub name: String,
    pub specialization: Specialization,
    /// Years of coaching experience
    pub experience: i32,
    pub teams: Vec<TeamSummaryDto>,
    pub players: Vec<PlayerSummaryDto>,
    pub contact: ContactDto,
    pub achievements: Vec<AchievementDto>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTrainerDto {
    pub name: String,
    pub specialization: Specialization,
    pub experience: i32,
    pub contact: ContactDto,
    #[serde(default)]
    pub achievements: Vec<AchievementDto>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Partial trainer update; `achievements`, when present, replaces the whole list
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateTrainerDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub specialization: Option<Specialization>,
    #[serde(default)]
    pub experience: Option<i32>,
    #[serde(default)]
    pub contact: Option<ContactDto>,
    #[serde(default)]
    pub achievements: Option<Vec<AchievementDto>>,
    #[serde(default)]
    pub is_active: Option<bool>,
}
