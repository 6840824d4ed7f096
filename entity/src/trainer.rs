use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "trainer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub experience: i32,
    pub email: String,
    pub phone: String,
    pub is_active: bool,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainer_achievement::Entity")]
    TrainerAchievement,
}

impl Related<super::trainer_achievement::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerAchievement.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
