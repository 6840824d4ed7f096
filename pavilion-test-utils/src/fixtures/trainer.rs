use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn trainer<'a>(&'a mut self) -> TrainerFixtures<'a> {
        TrainerFixtures { setup: self }
    }
}

pub struct TrainerFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> TrainerFixtures<'a> {
    /// Insert an active trainer with five years of experience.
    pub async fn insert_trainer(
        &self,
        name: &str,
        specialization: &str,
    ) -> Result<entity::trainer::Model, TestError> {
        Ok(entity::prelude::Trainer::insert(entity::trainer::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            specialization: ActiveValue::Set(specialization.to_string()),
            experience: ActiveValue::Set(5),
            email: ActiveValue::Set(format!("{}@club.test", name.to_lowercase().replace(' ', "."))),
            phone: ActiveValue::Set("0123456789".to_string()),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_achievement(
        &self,
        trainer_id: i32,
        title: &str,
        year: Option<i32>,
    ) -> Result<entity::trainer_achievement::Model, TestError> {
        Ok(entity::prelude::TrainerAchievement::insert(
            entity::trainer_achievement::ActiveModel {
                trainer_id: ActiveValue::Set(trainer_id),
                title: ActiveValue::Set(title.to_string()),
                year: ActiveValue::Set(year),
                description: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn assign_team(&self, trainer_id: i32, team_id: i32) -> Result<(), TestError> {
        entity::prelude::TrainerTeam::insert(entity::trainer_team::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            team_id: ActiveValue::Set(team_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }

    pub async fn assign_player(&self, trainer_id: i32, player_id: i32) -> Result<(), TestError> {
        entity::prelude::TrainerPlayer::insert(entity::trainer_player::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            player_id: ActiveValue::Set(player_id),
        })
        .exec_without_returning(&self.setup.db)
        .await?;

        Ok(())
    }
}
