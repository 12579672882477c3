use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "game")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub title: String,
    #[sea_orm(column_name = "console_id")]
    pub console_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::consoles::Entity",
        from = "Column::ConsoleId",
        to = "super::consoles::Column::Id",
        on_delete = "Restrict"
    )]
    Consoles,
}

impl Related<super::consoles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consoles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
