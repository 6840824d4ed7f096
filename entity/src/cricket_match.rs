use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cricket_match")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub date: DateTime,
    pub venue: String,
    pub status: String,
    pub winner_id: Option<i32>,
    pub team1_runs: i32,
    pub team1_wickets: i32,
    pub team1_balls: i32,
    pub team2_runs: i32,
    pub team2_wickets: i32,
    pub team2_balls: i32,
    /// Whether the result has been counted in the teams' win/loss/draw tallies
    #[sea_orm(default_value = false)]
    pub tallied: bool,
    pub umpires: Json,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team1Id",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Team1,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::Team2Id",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Team2,
    #[sea_orm(
        belongs_to = "super::team::Entity",
        from = "Column::WinnerId",
        to = "super::team::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Winner,
    #[sea_orm(has_many = "super::score::Entity")]
    Score,
}

impl Related<super::score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Score.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
