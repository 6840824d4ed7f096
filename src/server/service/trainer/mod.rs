//! Trainer service.

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::trainer::{
        AchievementDto, ContactDto, CreateTrainerDto, Specialization, TrainerDto,
        UpdateTrainerDto,
    },
    server::{
        data::{player::PlayerRepository, team::TeamRepository, trainer::TrainerRepository},
        error::{resource::ResourceError, Error},
        model::db::TrainerModel,
        service::{
            lookup::{
                player_summaries, referenced_player, referenced_team, required_name,
                team_summaries,
            },
            retry::RetryContext,
        },
    },
};

fn validate_experience(experience: i32) -> Result<(), Error> {
    if experience < 0 {
        return Err(ResourceError::validation("Experience cannot be negative").into());
    }

    Ok(())
}

fn validate_contact(contact: &ContactDto) -> Result<(), Error> {
    if contact.email.trim().is_empty() || contact.phone.trim().is_empty() {
        return Err(ResourceError::validation("Contact email and phone are required").into());
    }

    Ok(())
}

fn validate_achievements(achievements: &[AchievementDto]) -> Result<(), Error> {
    if achievements.iter().any(|a| a.title.trim().is_empty()) {
        return Err(ResourceError::validation("Achievement title is required").into());
    }

    Ok(())
}

/// Builds trainer DTOs with achievements and assigned teams and players
async fn trainer_dtos<C: ConnectionTrait>(
    db: &C,
    trainers: Vec<TrainerModel>,
) -> Result<Vec<TrainerDto>, Error> {
    let trainer_repo = TrainerRepository::new(db);
    let trainer_ids: Vec<i32> = trainers.iter().map(|t| t.id).collect();

    let mut achievements: HashMap<i32, Vec<AchievementDto>> = HashMap::new();
    for achievement in trainer_repo.find_achievements(&trainer_ids).await? {
        achievements
            .entry(achievement.trainer_id)
            .or_default()
            .push(AchievementDto {
                title: achievement.title,
                year: achievement.year,
                description: achievement.description,
            });
    }

    let team_assignments = trainer_repo.find_team_assignments(&trainer_ids).await?;
    let player_assignments = trainer_repo.find_player_assignments(&trainer_ids).await?;

    let team_ids: Vec<i32> = team_assignments.iter().map(|a| a.team_id).collect();
    let player_ids: Vec<i32> = player_assignments.iter().map(|a| a.player_id).collect();
    let teams = team_summaries(db, &team_ids).await?;
    let players = player_summaries(db, &player_ids).await?;

    trainers
        .into_iter()
        .map(|trainer| {
            let assigned_teams = team_assignments
                .iter()
                .filter(|a| a.trainer_id == trainer.id)
                .map(|a| referenced_team(&teams, a.team_id))
                .collect::<Result<Vec<_>, _>>()?;
            let assigned_players = player_assignments
                .iter()
                .filter(|a| a.trainer_id == trainer.id)
                .map(|a| referenced_player(&players, a.player_id))
                .collect::<Result<Vec<_>, _>>()?;

            Ok(TrainerDto {
                id: trainer.id,
                specialization: trainer.specialization.parse()?,
                achievements: achievements.remove(&trainer.id).unwrap_or_default(),
                name: trainer.name,
                experience: trainer.experience,
                teams: assigned_teams,
                players: assigned_players,
                contact: ContactDto {
                    email: trainer.email,
                    phone: trainer.phone,
                },
                is_active: trainer.is_active,
                created_at: trainer.created_at,
            })
        })
        .collect()
}

async fn find_trainer<C: ConnectionTrait>(db: &C, trainer_id: i32) -> Result<TrainerModel, Error> {
    Ok(TrainerRepository::new(db)
        .find_by_id(trainer_id)
        .await?
        .ok_or_else(|| ResourceError::not_found("Trainer", trainer_id))?)
}

pub struct TrainerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrainerService<'a> {
    /// Creates a new instance of [`TrainerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a trainer with its achievements; trainers are active unless stated otherwise.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The created trainer
    /// - `Err(Error::ResourceError)` - Blank name, negative experience or incomplete contact (400)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_trainer(&self, trainer: CreateTrainerDto) -> Result<TrainerDto, Error> {
        required_name("Trainer", &trainer.name)?;
        validate_experience(trainer.experience)?;
        validate_contact(&trainer.contact)?;
        validate_achievements(&trainer.achievements)?;

        let txn = self.db.begin().await?;

        let trainer_repo = TrainerRepository::new(&txn);
        let created = trainer_repo.create(&trainer).await?;
        trainer_repo
            .replace_achievements(created.id, &trainer.achievements)
            .await?;

        txn.commit().await?;

        tracing::debug!(trainer_id = created.id, "Created trainer");

        self.get_trainer(created.id).await
    }

    pub async fn list_trainers(&self) -> Result<Vec<TrainerDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry("list trainers", || {
            let db = db.clone();

            Box::pin(async move {
                let trainers = TrainerRepository::new(&db).find_all().await?;

                trainer_dtos(&db, trainers).await
            })
        })
        .await
    }

    pub async fn list_trainers_by_specialization(
        &self,
        specialization: Specialization,
    ) -> Result<Vec<TrainerDto>, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(
            &format!("list trainers specializing in {}", specialization),
            || {
                let db = db.clone();

                Box::pin(async move {
                    let trainers = TrainerRepository::new(&db)
                        .find_by_specialization(specialization)
                        .await?;

                    trainer_dtos(&db, trainers).await
                })
            },
        )
        .await
    }

    pub async fn get_trainer(&self, trainer_id: i32) -> Result<TrainerDto, Error> {
        let ctx = RetryContext::new();
        let db = self.db.clone();

        ctx.execute_with_retry(&format!("get trainer ID {}", trainer_id), || {
            let db = db.clone();

            Box::pin(async move {
                let trainer = find_trainer(&db, trainer_id).await?;

                trainer_dtos(&db, vec![trainer])
                    .await?
                    .pop()
                    .ok_or_else(|| Error::InternalError("Trainer DTO was not built".to_string()))
            })
        })
        .await
    }

    /// Applies a partial update; provided achievements replace the whole list.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The updated trainer
    /// - `Err(Error::ResourceError)` - Invalid fields (400) or unknown trainer (404)
    pub async fn update_trainer(
        &self,
        trainer_id: i32,
        update: UpdateTrainerDto,
    ) -> Result<TrainerDto, Error> {
        if let Some(name) = &update.name {
            required_name("Trainer", name)?;
        }
        if let Some(experience) = update.experience {
            validate_experience(experience)?;
        }
        if let Some(contact) = &update.contact {
            validate_contact(contact)?;
        }
        if let Some(achievements) = &update.achievements {
            validate_achievements(achievements)?;
        }

        let txn = self.db.begin().await?;

        let trainer = find_trainer(&txn, trainer_id).await?;
        let trainer_repo = TrainerRepository::new(&txn);
        trainer_repo.update(trainer, &update).await?;
        if let Some(achievements) = &update.achievements {
            trainer_repo
                .replace_achievements(trainer_id, achievements)
                .await?;
        }

        txn.commit().await?;

        self.get_trainer(trainer_id).await
    }

    /// Deletes a trainer with its achievements and assignments.
    ///
    /// # Returns
    /// - `Ok(())` - Trainer deleted
    /// - `Err(Error::ResourceError)` - Trainer does not exist (404)
    pub async fn delete_trainer(&self, trainer_id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        find_trainer(&txn, trainer_id).await?;
        TrainerRepository::new(&txn).delete(trainer_id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Assigns a trainer to a team; assigning twice has no further effect.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The trainer with its assignments
    /// - `Err(Error::ResourceError)` - Trainer or team does not exist (404)
    pub async fn assign_team(&self, trainer_id: i32, team_id: i32) -> Result<TrainerDto, Error> {
        find_trainer(self.db, trainer_id).await?;
        TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;

        let created = TrainerRepository::new(self.db)
            .assign_team(trainer_id, team_id)
            .await?;
        if created {
            tracing::debug!(trainer_id, team_id, "Assigned trainer to team");
        }

        self.get_trainer(trainer_id).await
    }

    /// Removes a trainer from a team.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The trainer with its assignments
    /// - `Err(Error::ResourceError)` - Trainer or team does not exist (404)
    pub async fn remove_team(&self, trainer_id: i32, team_id: i32) -> Result<TrainerDto, Error> {
        find_trainer(self.db, trainer_id).await?;
        TeamRepository::new(self.db)
            .find_by_id(team_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Team", team_id))?;

        TrainerRepository::new(self.db)
            .remove_team(trainer_id, team_id)
            .await?;

        self.get_trainer(trainer_id).await
    }

    /// Assigns a trainer to a player; assigning twice has no further effect.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The trainer with its assignments
    /// - `Err(Error::ResourceError)` - Trainer or player does not exist (404)
    pub async fn assign_player(
        &self,
        trainer_id: i32,
        player_id: i32,
    ) -> Result<TrainerDto, Error> {
        find_trainer(self.db, trainer_id).await?;
        PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        let created = TrainerRepository::new(self.db)
            .assign_player(trainer_id, player_id)
            .await?;
        if created {
            tracing::debug!(trainer_id, player_id, "Assigned trainer to player");
        }

        self.get_trainer(trainer_id).await
    }

    /// Removes a trainer from a player.
    ///
    /// # Returns
    /// - `Ok(TrainerDto)` - The trainer with its assignments
    /// - `Err(Error::ResourceError)` - Trainer or player does not exist (404)
    pub async fn remove_player(
        &self,
        trainer_id: i32,
        player_id: i32,
    ) -> Result<TrainerDto, Error> {
        find_trainer(self.db, trainer_id).await?;
        PlayerRepository::new(self.db)
            .find_by_id(player_id)
            .await?
            .ok_or_else(|| ResourceError::not_found("Player", player_id))?;

        TrainerRepository::new(self.db)
            .remove_player(trainer_id, player_id)
            .await?;

        self.get_trainer(trainer_id).await
    }
}
