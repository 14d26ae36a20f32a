//! SeaORM adapter for setup rules and their dependency edges.

use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait,
};

use crate::entities::{setup_rule_dependencies, setup_rules};

/// Rules for one game, in declaration (id) order.
pub async fn find_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<setup_rules::Model>, sea_orm::DbErr> {
    setup_rules::Entity::find()
        .filter(setup_rules::Column::GameId.eq(game_id))
        .order_by_asc(setup_rules::Column::Id)
        .all(conn)
        .await
}

/// Dependency edges whose child rule belongs to the given game.
pub async fn find_dependencies_by_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<Vec<setup_rule_dependencies::Model>, sea_orm::DbErr> {
    setup_rule_dependencies::Entity::find()
        .join(
            JoinType::InnerJoin,
            setup_rule_dependencies::Relation::Child.def(),
        )
        .filter(setup_rules::Column::GameId.eq(game_id))
        .order_by_asc(setup_rule_dependencies::Column::ChildId)
        .order_by_asc(setup_rule_dependencies::Column::ParentId)
        .all(conn)
        .await
}
