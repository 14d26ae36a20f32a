//! SeaORM adapter for the games table - generic over ConnectionTrait.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use crate::entities::games;

// Adapter functions return DbErr; the repos layer maps to DomainError.
// The catalog is seeded by migration and read-only at runtime, so this
// adapter only reads.

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<games::Model>, sea_orm::DbErr> {
    games::Entity::find()
        .order_by_asc(games::Column::Id)
        .all(conn)
        .await
}
