use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::model::trainer::{AchievementDto, CreateTrainerDto, Specialization, UpdateTrainerDto};

pub struct TrainerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TrainerRepository<'a, C> {
    /// Creates a new instance of [`TrainerRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a trainer; achievements are stored separately with [`Self::replace_achievements`]
    pub async fn create(&self, trainer: &CreateTrainerDto) -> Result<entity::trainer::Model, DbErr> {
        let trainer = entity::trainer::ActiveModel {
            name: ActiveValue::Set(trainer.name.trim().to_string()),
            specialization: ActiveValue::Set(trainer.specialization.to_string()),
            experience: ActiveValue::Set(trainer.experience),
            email: ActiveValue::Set(trainer.contact.email.clone()),
            phone: ActiveValue::Set(trainer.contact.phone.clone()),
            is_active: ActiveValue::Set(trainer.is_active.unwrap_or(true)),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        trainer.insert(self.db).await
    }

    pub async fn find_by_id(
        &self,
        trainer_id: i32,
    ) -> Result<Option<entity::trainer::Model>, DbErr> {
        entity::prelude::Trainer::find_by_id(trainer_id)
            .one(self.db)
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<entity::trainer::Model>, DbErr> {
        entity::prelude::Trainer::find()
            .order_by_asc(entity::trainer::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_specialization(
        &self,
        specialization: Specialization,
    ) -> Result<Vec<entity::trainer::Model>, DbErr> {
        entity::prelude::Trainer::find()
            .filter(entity::trainer::Column::Specialization.eq(specialization.as_str()))
            .order_by_asc(entity::trainer::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies a partial update to the trainer row; achievements are not touched
    pub async fn update(
        &self,
        trainer: entity::trainer::Model,
        update: &UpdateTrainerDto,
    ) -> Result<entity::trainer::Model, DbErr> {
        let mut trainer_am = trainer.into_active_model();

        if let Some(name) = &update.name {
            trainer_am.name = ActiveValue::Set(name.trim().to_string());
        }
        if let Some(specialization) = update.specialization {
            trainer_am.specialization = ActiveValue::Set(specialization.to_string());
        }
        if let Some(experience) = update.experience {
            trainer_am.experience = ActiveValue::Set(experience);
        }
        if let Some(contact) = &update.contact {
            trainer_am.email = ActiveValue::Set(contact.email.clone());
            trainer_am.phone = ActiveValue::Set(contact.phone.clone());
        }
        if let Some(is_active) = update.is_active {
            trainer_am.is_active = ActiveValue::Set(is_active);
        }

        trainer_am.update(self.db).await
    }

    /// Deletes a trainer along with its achievements and assignments
    ///
    /// Returns OK regardless of the trainer existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, trainer_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainerAchievement::delete_many()
            .filter(entity::trainer_achievement::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;
        entity::prelude::TrainerTeam::delete_many()
            .filter(entity::trainer_team::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;
        entity::prelude::TrainerPlayer::delete_many()
            .filter(entity::trainer_player::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;

        entity::prelude::Trainer::delete_by_id(trainer_id)
            .exec(self.db)
            .await
    }

    /// Gets the achievements of the given trainers in insertion order
    pub async fn find_achievements(
        &self,
        trainer_ids: &[i32],
    ) -> Result<Vec<entity::trainer_achievement::Model>, DbErr> {
        if trainer_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrainerAchievement::find()
            .filter(
                entity::trainer_achievement::Column::TrainerId.is_in(trainer_ids.iter().copied()),
            )
            .order_by_asc(entity::trainer_achievement::Column::Id)
            .all(self.db)
            .await
    }

    /// Replaces every achievement of a trainer
    pub async fn replace_achievements(
        &self,
        trainer_id: i32,
        achievements: &[AchievementDto],
    ) -> Result<(), DbErr> {
        entity::prelude::TrainerAchievement::delete_many()
            .filter(entity::trainer_achievement::Column::TrainerId.eq(trainer_id))
            .exec(self.db)
            .await?;

        for achievement in achievements {
            let achievement = entity::trainer_achievement::ActiveModel {
                trainer_id: ActiveValue::Set(trainer_id),
                title: ActiveValue::Set(achievement.title.clone()),
                year: ActiveValue::Set(achievement.year),
                description: ActiveValue::Set(achievement.description.clone()),
                ..Default::default()
            };
            achievement.insert(self.db).await?;
        }

        Ok(())
    }

    /// Gets (trainer ID, team ID) assignments of the given trainers
    pub async fn find_team_assignments(
        &self,
        trainer_ids: &[i32],
    ) -> Result<Vec<entity::trainer_team::Model>, DbErr> {
        if trainer_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrainerTeam::find()
            .filter(entity::trainer_team::Column::TrainerId.is_in(trainer_ids.iter().copied()))
            .order_by_asc(entity::trainer_team::Column::TeamId)
            .all(self.db)
            .await
    }

    /// Gets (trainer ID, player ID) assignments of the given trainers
    pub async fn find_player_assignments(
        &self,
        trainer_ids: &[i32],
    ) -> Result<Vec<entity::trainer_player::Model>, DbErr> {
        if trainer_ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::TrainerPlayer::find()
            .filter(entity::trainer_player::Column::TrainerId.is_in(trainer_ids.iter().copied()))
            .order_by_asc(entity::trainer_player::Column::PlayerId)
            .all(self.db)
            .await
    }

    /// Assigns a trainer to a team, doing nothing if already assigned
    ///
    /// Returns whether a new assignment was created.
    pub async fn assign_team(&self, trainer_id: i32, team_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::TrainerTeam::find_by_id((trainer_id, team_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::TrainerTeam::insert(entity::trainer_team::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            team_id: ActiveValue::Set(team_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    pub async fn remove_team(&self, trainer_id: i32, team_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainerTeam::delete_by_id((trainer_id, team_id))
            .exec(self.db)
            .await
    }

    /// Assigns a trainer to a player, doing nothing if already assigned
    ///
    /// Returns whether a new assignment was created.
    pub async fn assign_player(&self, trainer_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::TrainerPlayer::find_by_id((trainer_id, player_id))
            .one(self.db)
            .await?;
        if existing.is_some() {
            return Ok(false);
        }

        entity::prelude::TrainerPlayer::insert(entity::trainer_player::ActiveModel {
            trainer_id: ActiveValue::Set(trainer_id),
            player_id: ActiveValue::Set(player_id),
        })
        .exec_without_returning(self.db)
        .await?;

        Ok(true)
    }

    pub async fn remove_player(
        &self,
        trainer_id: i32,
        player_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainerPlayer::delete_by_id((trainer_id, player_id))
            .exec(self.db)
            .await
    }

    /// Removes a player from every trainer's assignments
    pub async fn remove_player_everywhere(&self, player_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::TrainerPlayer::delete_many()
            .filter(entity::trainer_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await
    }
}
