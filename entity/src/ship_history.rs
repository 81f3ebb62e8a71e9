use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ship_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub character_id: i64,
    pub ship_item_id: i64,
    pub ship_type_id: i64,
    pub ship_name: String,
    pub first_seen_at: DateTime,
    pub last_seen_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
