//! SeaORM adapter for console repository - generic over ConnectionTrait.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::consoles;

pub mod dto;

pub use dto::ConsoleCreate;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find()
        .order_by_asc(consoles::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    console_id: i64,
) -> Result<Option<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find_by_id(console_id).one(conn).await
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<consoles::Model>, sea_orm::DbErr> {
    consoles::Entity::find()
        .filter(consoles::Column::Name.eq(name))
        .one(conn)
        .await
}

pub async fn exists<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    console_id: i64,
) -> Result<bool, sea_orm::DbErr> {
    let count = consoles::Entity::find()
        .filter(consoles::Column::Id.eq(console_id))
        .count(conn)
        .await?;
    Ok(count > 0)
}

pub async fn create_console<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ConsoleCreate,
) -> Result<consoles::Model, sea_orm::DbErr> {
    let console_active = consoles::ActiveModel {
        id: NotSet,
        name: Set(dto.name),
    };

    console_active.insert(conn).await
}

/// Delete every console. Games reference consoles, so delete games first.
pub async fn delete_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<u64, sea_orm::DbErr> {
    let result = consoles::Entity::delete_many().exec(conn).await?;
    Ok(result.rows_affected)
}
