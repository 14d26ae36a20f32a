//! SeaORM adapter for the per-player active-step assignments.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::entities::setup_step_assignments;

pub async fn insert_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: i64,
    setup_rule_id: i64,
) -> Result<(), sea_orm::DbErr> {
    let assignment_active = setup_step_assignments::ActiveModel {
        session_id: Set(session_id),
        player_id: Set(player_id),
        setup_rule_id: Set(setup_rule_id),
    };
    setup_step_assignments::Entity::insert(assignment_active)
        .exec(conn)
        .await?;
    Ok(())
}

pub async fn delete_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let result = setup_step_assignments::Entity::delete_many()
        .filter(setup_step_assignments::Column::SessionId.eq(session_id))
        .filter(setup_step_assignments::Column::PlayerId.eq(player_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<setup_step_assignments::Model>, sea_orm::DbErr> {
    setup_step_assignments::Entity::find()
        .filter(setup_step_assignments::Column::SessionId.eq(session_id))
        .order_by_asc(setup_step_assignments::Column::PlayerId)
        .all(conn)
        .await
}
