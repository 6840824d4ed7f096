use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait, IntoActiveModel};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn club<'a>(&'a mut self) -> ClubFixtures<'a> {
        ClubFixtures { setup: self }
    }
}

pub struct ClubFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ClubFixtures<'a> {
    /// Insert a team with no captain and an empty record.
    pub async fn insert_team(&self, name: &str) -> Result<entity::team::Model, TestError> {
        Ok(entity::prelude::Team::insert(entity::team::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            captain_id: ActiveValue::Set(None),
            wins: ActiveValue::Set(0),
            losses: ActiveValue::Set(0),
            draws: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an all-rounder aged 25 with zeroed career stats.
    pub async fn insert_player(
        &self,
        name: &str,
        team_id: Option<i32>,
    ) -> Result<entity::player::Model, TestError> {
        self.insert_player_with_role(name, "All-rounder", team_id)
            .await
    }

    pub async fn insert_player_with_role(
        &self,
        name: &str,
        role: &str,
        team_id: Option<i32>,
    ) -> Result<entity::player::Model, TestError> {
        Ok(entity::prelude::Player::insert(entity::player::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            age: ActiveValue::Set(25),
            role: ActiveValue::Set(role.to_string()),
            team_id: ActiveValue::Set(team_id),
            batting_style: ActiveValue::Set(Some("Right-handed".to_string())),
            bowling_style: ActiveValue::Set(None),
            matches: ActiveValue::Set(0),
            runs: ActiveValue::Set(0),
            wickets: ActiveValue::Set(0),
            catches: ActiveValue::Set(0),
            stumpings: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert a team along with `count` players on its roster.
    ///
    /// Players are named `"{name} Player {n}"` starting from 1.
    ///
    /// # Arguments
    /// - `name` - Team name
    /// - `count` - Number of roster players to create
    ///
    /// # Returns
    /// - `Ok((team, players))` - The team and its players in insertion order
    /// - `Err(TestError::DbErr)` - Insertion failed
    pub async fn insert_team_with_players(
        &self,
        name: &str,
        count: usize,
    ) -> Result<(entity::team::Model, Vec<entity::player::Model>), TestError> {
        let team = self.insert_team(name).await?;

        let mut players = Vec::with_capacity(count);
        for n in 1..=count {
            players.push(
                self.insert_player(&format!("{} Player {}", name, n), Some(team.id))
                    .await?,
            );
        }

        Ok((team, players))
    }

    /// Set the captain of an existing team without touching the player's team.
    pub async fn set_captain(
        &self,
        team: entity::team::Model,
        player_id: i32,
    ) -> Result<entity::team::Model, TestError> {
        let mut team_am = team.into_active_model();
        team_am.captain_id = ActiveValue::Set(Some(player_id));

        Ok(team_am.update(&self.setup.db).await?)
    }
}
