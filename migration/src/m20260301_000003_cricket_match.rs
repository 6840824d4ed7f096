use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_team::Team;

static IDX_CRICKET_MATCH_TEAM1_ID: &str = "idx-cricket_match-team1_id";
static IDX_CRICKET_MATCH_TEAM2_ID: &str = "idx-cricket_match-team2_id";
static FK_CRICKET_MATCH_TEAM1_ID: &str = "fk-cricket_match-team1_id";
static FK_CRICKET_MATCH_TEAM2_ID: &str = "fk-cricket_match-team2_id";
static FK_CRICKET_MATCH_WINNER_ID: &str = "fk-cricket_match-winner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CricketMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(CricketMatch::Id))
                    .col(integer(CricketMatch::Team1Id))
                    .col(integer(CricketMatch::Team2Id))
                    .col(timestamp(CricketMatch::Date))
                    .col(string(CricketMatch::Venue))
                    .col(string(CricketMatch::Status))
                    .col(integer_null(CricketMatch::WinnerId))
                    .col(integer(CricketMatch::Team1Runs).default(0))
                    .col(integer(CricketMatch::Team1Wickets).default(0))
                    .col(integer(CricketMatch::Team1Balls).default(0))
                    .col(integer(CricketMatch::Team2Runs).default(0))
                    .col(integer(CricketMatch::Team2Wickets).default(0))
                    .col(integer(CricketMatch::Team2Balls).default(0))
                    .col(boolean(CricketMatch::Tallied).default(false))
                    .col(json(CricketMatch::Umpires))
                    .col(timestamp(CricketMatch::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CRICKET_MATCH_TEAM1_ID)
                            .from(CricketMatch::Table, CricketMatch::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CRICKET_MATCH_TEAM2_ID)
                            .from(CricketMatch::Table, CricketMatch::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CRICKET_MATCH_WINNER_ID)
                            .from(CricketMatch::Table, CricketMatch::WinnerId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_MATCH_TEAM1_ID)
                    .table(CricketMatch::Table)
                    .col(CricketMatch::Team1Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_CRICKET_MATCH_TEAM2_ID)
                    .table(CricketMatch::Table)
                    .col(CricketMatch::Team2Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CricketMatch::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum CricketMatch {
    Table,
    Id,
    Team1Id,
    Team2Id,
    Date,
    Venue,
    Status,
    WinnerId,
    Team1Runs,
    Team1Wickets,
    Team1Balls,
    Team2Runs,
    Team2Wickets,
    Team2Balls,
    Tallied,
    Umpires,
    CreatedAt,
}
