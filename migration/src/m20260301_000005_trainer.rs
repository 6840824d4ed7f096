use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260301_000001_team::Team, m20260301_000002_player::Player};

static FK_TRAINER_ACHIEVEMENT_TRAINER_ID: &str = "fk-trainer_achievement-trainer_id";
static FK_TRAINER_TEAM_TRAINER_ID: &str = "fk-trainer_team-trainer_id";
static FK_TRAINER_TEAM_TEAM_ID: &str = "fk-trainer_team-team_id";
static FK_TRAINER_PLAYER_TRAINER_ID: &str = "fk-trainer_player-trainer_id";
static FK_TRAINER_PLAYER_PLAYER_ID: &str = "fk-trainer_player-player_id";
static IDX_TRAINER_SPECIALIZATION: &str = "idx-trainer-specialization";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(string(Trainer::Name))
                    .col(string(Trainer::Specialization))
                    .col(integer(Trainer::Experience))
                    .col(string(Trainer::Email))
                    .col(string(Trainer::Phone))
                    .col(boolean(Trainer::IsActive).default(true))
                    .col(timestamp(Trainer::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TRAINER_SPECIALIZATION)
                    .table(Trainer::Table)
                    .col(Trainer::Specialization)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainerAchievement::Table)
                    .if_not_exists()
                    .col(pk_auto(TrainerAchievement::Id))
                    .col(integer(TrainerAchievement::TrainerId))
                    .col(string(TrainerAchievement::Title))
                    .col(integer_null(TrainerAchievement::Year))
                    .col(text_null(TrainerAchievement::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINER_ACHIEVEMENT_TRAINER_ID)
                            .from(TrainerAchievement::Table, TrainerAchievement::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainerTeam::Table)
                    .if_not_exists()
                    .col(integer(TrainerTeam::TrainerId))
                    .col(integer(TrainerTeam::TeamId))
                    .primary_key(
                        Index::create()
                            .col(TrainerTeam::TrainerId)
                            .col(TrainerTeam::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINER_TEAM_TRAINER_ID)
                            .from(TrainerTeam::Table, TrainerTeam::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINER_TEAM_TEAM_ID)
                            .from(TrainerTeam::Table, TrainerTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TrainerPlayer::Table)
                    .if_not_exists()
                    .col(integer(TrainerPlayer::TrainerId))
                    .col(integer(TrainerPlayer::PlayerId))
                    .primary_key(
                        Index::create()
                            .col(TrainerPlayer::TrainerId)
                            .col(TrainerPlayer::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINER_PLAYER_TRAINER_ID)
                            .from(TrainerPlayer::Table, TrainerPlayer::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TRAINER_PLAYER_PLAYER_ID)
                            .from(TrainerPlayer::Table, TrainerPlayer::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TrainerPlayer::Table)
                    .table(TrainerTeam::Table)
                    .table(TrainerAchievement::Table)
                    .table(Trainer::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    Table,
    Id,
    Name,
    Specialization,
    Experience,
    Email,
    Phone,
    IsActive,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TrainerAchievement {
    Table,
    Id,
    TrainerId,
    Title,
    Year,
    Description,
}

#[derive(DeriveIden)]
enum TrainerTeam {
    Table,
    TrainerId,
    TeamId,
}

#[derive(DeriveIden)]
enum TrainerPlayer {
    Table,
    TrainerId,
    PlayerId,
}
