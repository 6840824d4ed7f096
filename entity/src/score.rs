use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "score")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub team_id: i32,
    pub batting_runs: i32,
    pub batting_balls: i32,
    pub fours: i32,
    pub sixes: i32,
    pub is_out: bool,
    pub dismissal: Option<String>,
    pub bowling_balls: i32,
    pub maidens: i32,
    pub bowling_runs: i32,
    pub bowling_wickets: i32,
    pub wides: i32,
    pub no_balls: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::cricket_match::Entity",
        from = "Column::MatchId",
        to = "super::cricket_match::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CricketMatch,
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::PlayerId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Player,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::TeamId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Team,
}

impl Related<super::cricket_match::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CricketMatch.def()
    }
}

impl Related<super::player::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Player.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
