//! SeaORM adapter for persisted setup steps.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};

use crate::entities::setup_steps;

pub async fn insert_step<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    setup_rule_id: i64,
    player_id: Option<i64>,
    done: bool,
) -> Result<setup_steps::Model, sea_orm::DbErr> {
    let step_active = setup_steps::ActiveModel {
        id: NotSet,
        session_id: Set(session_id),
        setup_rule_id: Set(setup_rule_id),
        player_id: Set(player_id),
        done: Set(done),
    };
    step_active.insert(conn).await
}

/// Steps for one session in insertion (id) order, which preserves the
/// instantiation order of the rule set.
pub async fn find_by_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<Vec<setup_steps::Model>, sea_orm::DbErr> {
    setup_steps::Entity::find()
        .filter(setup_steps::Column::SessionId.eq(session_id))
        .order_by_asc(setup_steps::Column::Id)
        .all(conn)
        .await
}

/// Marks a step done, keyed by (session, rule, owner). A null owner matches
/// shared steps only. Returns the number of rows touched.
pub async fn set_done<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    setup_rule_id: i64,
    player_id: Option<i64>,
) -> Result<u64, sea_orm::DbErr> {
    let owner_cond = match player_id {
        Some(id) => Condition::all().add(setup_steps::Column::PlayerId.eq(id)),
        None => Condition::all().add(setup_steps::Column::PlayerId.is_null()),
    };
    let result = setup_steps::Entity::update_many()
        .col_expr(setup_steps::Column::Done, Expr::value(true))
        .filter(setup_steps::Column::SessionId.eq(session_id))
        .filter(setup_steps::Column::SetupRuleId.eq(setup_rule_id))
        .filter(owner_cond)
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}
