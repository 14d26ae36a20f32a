use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
pub enum Games {
    Table,
    Id,
    Name,
    MinPlayers,
    MaxPlayers,
    CreatedAt,
}

#[derive(Iden)]
pub enum Players {
    Table,
    Id,
    Name,
    CreatedAt,
}

#[derive(Iden)]
pub enum SetupRules {
    Table,
    Id,
    GameId,
    Description,
    EachPlayer,
    Details,
}

#[derive(Iden)]
pub enum SetupRuleDependencies {
    Table,
    ParentId,
    ChildId,
}

#[derive(Iden)]
pub enum Sessions {
    Table,
    Id,
    GameId,
    CreatedAt,
}

#[derive(Iden)]
pub enum SessionsPlayers {
    Table,
    SessionId,
    PlayerId,
}

#[derive(Iden)]
pub enum SetupSteps {
    Table,
    Id,
    SessionId,
    SetupRuleId,
    PlayerId,
    Done,
}

#[derive(Iden)]
pub enum SetupStepAssignments {
    Table,
    SessionId,
    PlayerId,
    SetupRuleId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // games
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Games::Name).string().not_null())
                    .col(ColumnDef::new(Games::MinPlayers).integer().not_null())
                    .col(ColumnDef::new(Games::MaxPlayers).integer().not_null())
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // players
        manager
            .create_table(
                Table::create()
                    .table(Players::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Players::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Players::Name).string().not_null())
                    .col(
                        ColumnDef::new(Players::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // setup_rules
        manager
            .create_table(
                Table::create()
                    .table(SetupRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetupRules::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(SetupRules::GameId).big_integer().not_null())
                    .col(ColumnDef::new(SetupRules::Description).string().not_null())
                    .col(ColumnDef::new(SetupRules::EachPlayer).boolean().not_null())
                    .col(ColumnDef::new(SetupRules::Details).string().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_rules_game_id")
                            .from(SetupRules::Table, SetupRules::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_setup_rules_game_id")
                    .table(SetupRules::Table)
                    .col(SetupRules::GameId)
                    .to_owned(),
            )
            .await?;

        // setup_rule_dependencies: (parent, child) means child depends on parent
        manager
            .create_table(
                Table::create()
                    .table(SetupRuleDependencies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetupRuleDependencies::ParentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetupRuleDependencies::ChildId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SetupRuleDependencies::ParentId)
                            .col(SetupRuleDependencies::ChildId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_rule_dependencies_parent_id")
                            .from(SetupRuleDependencies::Table, SetupRuleDependencies::ParentId)
                            .to(SetupRules::Table, SetupRules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_rule_dependencies_child_id")
                            .from(SetupRuleDependencies::Table, SetupRuleDependencies::ChildId)
                            .to(SetupRules::Table, SetupRules::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // sessions
        manager
            .create_table(
                Table::create()
                    .table(Sessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Sessions::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Sessions::GameId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Sessions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_game_id")
                            .from(Sessions::Table, Sessions::GameId)
                            .to(Games::Table, Games::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // sessions_players
        manager
            .create_table(
                Table::create()
                    .table(SessionsPlayers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SessionsPlayers::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SessionsPlayers::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SessionsPlayers::SessionId)
                            .col(SessionsPlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_players_session_id")
                            .from(SessionsPlayers::Table, SessionsPlayers::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_sessions_players_player_id")
                            .from(SessionsPlayers::Table, SessionsPlayers::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // setup_steps: player_id is null for shared (once) steps
        manager
            .create_table(
                Table::create()
                    .table(SetupSteps::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetupSteps::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(
                        ColumnDef::new(SetupSteps::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetupSteps::SetupRuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SetupSteps::PlayerId).big_integer().null())
                    .col(ColumnDef::new(SetupSteps::Done).boolean().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_steps_session_id")
                            .from(SetupSteps::Table, SetupSteps::SessionId)
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_steps_setup_rule_id")
                            .from(SetupSteps::Table, SetupSteps::SetupRuleId)
                            .to(SetupRules::Table, SetupRules::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_setup_steps_session_id")
                    .table(SetupSteps::Table)
                    .col(SetupSteps::SessionId)
                    .to_owned(),
            )
            .await?;

        // One step per (session, rule, owner) triple
        manager
            .create_index(
                Index::create()
                    .name("ux_setup_steps_session_rule_player")
                    .table(SetupSteps::Table)
                    .col(SetupSteps::SessionId)
                    .col(SetupSteps::SetupRuleId)
                    .col(SetupSteps::PlayerId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // setup_step_assignments: at most one active step per (session, player)
        manager
            .create_table(
                Table::create()
                    .table(SetupStepAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SetupStepAssignments::SessionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetupStepAssignments::PlayerId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SetupStepAssignments::SetupRuleId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(SetupStepAssignments::SessionId)
                            .col(SetupStepAssignments::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_step_assignments_session_id")
                            .from(
                                SetupStepAssignments::Table,
                                SetupStepAssignments::SessionId,
                            )
                            .to(Sessions::Table, Sessions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_step_assignments_player_id")
                            .from(SetupStepAssignments::Table, SetupStepAssignments::PlayerId)
                            .to(Players::Table, Players::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_setup_step_assignments_setup_rule_id")
                            .from(
                                SetupStepAssignments::Table,
                                SetupStepAssignments::SetupRuleId,
                            )
                            .to(SetupRules::Table, SetupRules::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop in reverse dependency order
        manager
            .drop_table(Table::drop().table(SetupStepAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SetupSteps::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SessionsPlayers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sessions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SetupRuleDependencies::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SetupRules::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Players::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await?;
        Ok(())
    }
}
