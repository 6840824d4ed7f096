use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub captain_id: Option<i32>,
    pub wins: i32,
    pub losses: i32,
    pub draws: i32,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::player::Entity",
        from = "Column::CaptainId",
        to = "super::player::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Captain,
}

impl ActiveModelBehavior for ActiveModel {}
