use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_team::Team;

static IDX_PLAYER_TEAM_ID: &str = "idx-player-team_id";
static FK_PLAYER_TEAM_ID: &str = "fk-player-team_id";
static FK_TEAM_CAPTAIN_ID: &str = "fk-team-captain_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Id))
                    .col(string(Player::Name))
                    .col(integer(Player::Age))
                    .col(string(Player::Role))
                    .col(integer_null(Player::TeamId))
                    .col(string_null(Player::BattingStyle))
                    .col(string_null(Player::BowlingStyle))
                    .col(integer(Player::Matches).default(0))
                    .col(integer(Player::Runs).default(0))
                    .col(integer(Player::Wickets).default(0))
                    .col(integer(Player::Catches).default(0))
                    .col(integer(Player::Stumpings).default(0))
                    .col(timestamp(Player::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PLAYER_TEAM_ID)
                    .table(Player::Table)
                    .col(Player::TeamId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_PLAYER_TEAM_ID)
                    .from_tbl(Player::Table)
                    .from_col(Player::TeamId)
                    .to_tbl(Team::Table)
                    .to_col(Team::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TEAM_CAPTAIN_ID)
                    .from_tbl(Team::Table)
                    .from_col(Team::CaptainId)
                    .to_tbl(Player::Table)
                    .to_col(Player::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TEAM_CAPTAIN_ID)
                    .table(Team::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Player {
    Table,
    Id,
    Name,
    Age,
    Role,
    TeamId,
    BattingStyle,
    BowlingStyle,
    Matches,
    Runs,
    Wickets,
    Catches,
    Stumpings,
    CreatedAt,
}
