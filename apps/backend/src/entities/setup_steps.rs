use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// `player_id` is null for shared (once-per-game) steps.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "setup_steps")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "session_id")]
    pub session_id: i64,
    #[sea_orm(column_name = "setup_rule_id")]
    pub setup_rule_id: i64,
    #[sea_orm(column_name = "player_id")]
    pub player_id: Option<i64>,
    pub done: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sessions::Entity",
        from = "Column::SessionId",
        to = "super::sessions::Column::Id"
    )]
    Session,
    #[sea_orm(
        belongs_to = "super::setup_rules::Entity",
        from = "Column::SetupRuleId",
        to = "super::setup_rules::Column::Id"
    )]
    SetupRule,
}

impl Related<super::sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
