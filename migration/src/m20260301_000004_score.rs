use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260301_000001_team::Team, m20260301_000002_player::Player,
    m20260301_000003_cricket_match::CricketMatch,
};

static IDX_SCORE_MATCH_PLAYER: &str = "idx-score-match_id-player_id";
static IDX_SCORE_PLAYER_ID: &str = "idx-score-player_id";
static FK_SCORE_MATCH_ID: &str = "fk-score-match_id";
static FK_SCORE_PLAYER_ID: &str = "fk-score-player_id";
static FK_SCORE_TEAM_ID: &str = "fk-score-team_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Score::Table)
                    .if_not_exists()
                    .col(pk_auto(Score::Id))
                    .col(integer(Score::MatchId))
                    .col(integer(Score::PlayerId))
                    .col(integer(Score::TeamId))
                    .col(integer(Score::BattingRuns).default(0))
                    .col(integer(Score::BattingBalls).default(0))
                    .col(integer(Score::Fours).default(0))
                    .col(integer(Score::Sixes).default(0))
                    .col(boolean(Score::IsOut).default(false))
                    .col(string_null(Score::Dismissal))
                    .col(integer(Score::BowlingBalls).default(0))
                    .col(integer(Score::Maidens).default(0))
                    .col(integer(Score::BowlingRuns).default(0))
                    .col(integer(Score::BowlingWickets).default(0))
                    .col(integer(Score::Wides).default(0))
                    .col(integer(Score::NoBalls).default(0))
                    .col(integer(Score::Catches).default(0))
                    .col(integer(Score::Stumpings).default(0))
                    .col(integer(Score::RunOuts).default(0))
                    .col(timestamp(Score::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SCORE_MATCH_ID)
                            .from(Score::Table, Score::MatchId)
                            .to(CricketMatch::Table, CricketMatch::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SCORE_PLAYER_ID)
                            .from(Score::Table, Score::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SCORE_TEAM_ID)
                            .from(Score::Table, Score::TeamId)
                            .to(Team::Table, Team::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One scorecard line per player per match
        manager
            .create_index(
                Index::create()
                    .name(IDX_SCORE_MATCH_PLAYER)
                    .table(Score::Table)
                    .col(Score::MatchId)
                    .col(Score::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SCORE_PLAYER_ID)
                    .table(Score::Table)
                    .col(Score::PlayerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Score::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Score {
    Table,
    Id,
    MatchId,
    PlayerId,
    TeamId,
    BattingRuns,
    BattingBalls,
    Fours,
    Sixes,
    IsOut,
    Dismissal,
    BowlingBalls,
    Maidens,
    BowlingRuns,
    BowlingWickets,
    Wides,
    NoBalls,
    Catches,
    Stumpings,
    RunOuts,
    CreatedAt,
}
