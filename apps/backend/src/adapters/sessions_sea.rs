//! SeaORM adapter for sessions and the session-player roster.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{sessions, sessions_players};

pub async fn insert_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<sessions::Model, sea_orm::DbErr> {
    let session_active = sessions::ActiveModel {
        id: NotSet,
        game_id: Set(game_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    };
    session_active.insert(conn).await
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .order_by_asc(sessions::Column::Id)
        .all(conn)
        .await
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Option<sessions::Model>, sea_orm::DbErr> {
    sessions::Entity::find()
        .filter(sessions::Column::Id.eq(session_id))
        .one(conn)
        .await
}

pub async fn insert_session_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let roster_active = sessions_players::ActiveModel {
        session_id: Set(session_id),
        player_id: Set(player_id),
    };
    sessions_players::Entity::insert(roster_active)
        .exec(conn)
        .await?;
    Ok(())
}

/// Number of roster rows referencing a player, across all sessions.
pub async fn roster_count_for_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    sessions_players::Entity::find()
        .filter(sessions_players::Column::PlayerId.eq(player_id))
        .count(conn)
        .await
}

/// Roster for one session, in player-id order.
pub async fn find_player_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    sessions_players::Entity::find()
        .filter(sessions_players::Column::SessionId.eq(session_id))
        .order_by_asc(sessions_players::Column::PlayerId)
        .select_only()
        .column(sessions_players::Column::PlayerId)
        .into_tuple()
        .all(conn)
        .await
}
