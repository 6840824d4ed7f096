use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260301_000001_team::Team;

static IDX_TOURNAMENT_START_DATE: &str = "idx-tournament-start_date";
static IDX_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "idx-tournament_match-tournament_id";
static FK_TOURNAMENT_TEAM_TOURNAMENT_ID: &str = "fk-tournament_team-tournament_id";
static FK_TOURNAMENT_TEAM_TEAM_ID: &str = "fk-tournament_team-team_id";
static FK_TOURNAMENT_MATCH_TOURNAMENT_ID: &str = "fk-tournament_match-tournament_id";
static FK_TOURNAMENT_MATCH_TEAM1_ID: &str = "fk-tournament_match-team1_id";
static FK_TOURNAMENT_MATCH_TEAM2_ID: &str = "fk-tournament_match-team2_id";
static FK_TOURNAMENT_MATCH_WINNER_ID: &str = "fk-tournament_match-winner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tournament::Table)
                    .if_not_exists()
                    .col(pk_auto(Tournament::Id))
                    .col(string(Tournament::Name))
                    .col(date(Tournament::StartDate))
                    .col(date(Tournament::EndDate))
                    .col(string(Tournament::Status))
                    .col(timestamp(Tournament::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_START_DATE)
                    .table(Tournament::Table)
                    .col(Tournament::StartDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TournamentTeam::Table)
                    .if_not_exists()
                    .col(integer(TournamentTeam::TournamentId))
                    .col(integer(TournamentTeam::TeamId))
                    .primary_key(
                        Index::create()
                            .col(TournamentTeam::TournamentId)
                            .col(TournamentTeam::TeamId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_TEAM_TOURNAMENT_ID)
                            .from(TournamentTeam::Table, TournamentTeam::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_TEAM_TEAM_ID)
                            .from(TournamentTeam::Table, TournamentTeam::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TournamentMatch::Table)
                    .if_not_exists()
                    .col(pk_auto(TournamentMatch::Id))
                    .col(integer(TournamentMatch::TournamentId))
                    .col(integer(TournamentMatch::Team1Id))
                    .col(integer(TournamentMatch::Team2Id))
                    .col(timestamp(TournamentMatch::Date))
                    .col(string(TournamentMatch::Venue))
                    .col(string(TournamentMatch::Status))
                    .col(integer_null(TournamentMatch::WinnerId))
                    .col(integer(TournamentMatch::Team1Runs).default(0))
                    .col(integer(TournamentMatch::Team1Wickets).default(0))
                    .col(integer(TournamentMatch::Team1Balls).default(0))
                    .col(integer(TournamentMatch::Team2Runs).default(0))
                    .col(integer(TournamentMatch::Team2Wickets).default(0))
                    .col(integer(TournamentMatch::Team2Balls).default(0))
                    .col(timestamp(TournamentMatch::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_TOURNAMENT_ID)
                            .from(TournamentMatch::Table, TournamentMatch::TournamentId)
                            .to(Tournament::Table, Tournament::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_TEAM1_ID)
                            .from(TournamentMatch::Table, TournamentMatch::Team1Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_TEAM2_ID)
                            .from(TournamentMatch::Table, TournamentMatch::Team2Id)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_TOURNAMENT_MATCH_WINNER_ID)
                            .from(TournamentMatch::Table, TournamentMatch::WinnerId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TOURNAMENT_MATCH_TOURNAMENT_ID)
                    .table(TournamentMatch::Table)
                    .col(TournamentMatch::TournamentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(TournamentMatch::Table)
                    .table(TournamentTeam::Table)
                    .table(Tournament::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tournament {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum TournamentTeam {
    Table,
    TournamentId,
    TeamId,
}

#[derive(DeriveIden)]
enum TournamentMatch {
    Table,
    Id,
    TournamentId,
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
    CreatedAt,
}
