use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// (parent, child): the child rule depends on the parent rule.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "setup_rule_dependencies")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "parent_id")]
    pub parent_id: i64,
    #[sea_orm(primary_key, auto_increment = false, column_name = "child_id")]
    pub child_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::setup_rules::Entity",
        from = "Column::ParentId",
        to = "super::setup_rules::Column::Id"
    )]
    Parent,
    #[sea_orm(
        belongs_to = "super::setup_rules::Entity",
        from = "Column::ChildId",
        to = "super::setup_rules::Column::Id"
    )]
    Child,
}

impl ActiveModelBehavior for ActiveModel {}
