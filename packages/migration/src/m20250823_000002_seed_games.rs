use sea_orm::Statement;
use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{Expr, Query};

use crate::m20250823_000001_init::{Games, SetupRuleDependencies, SetupRules};

#[derive(DeriveMigrationName)]
pub struct Migration;

// Built-in game catalog, ported from the prototyping collection.
// Explicit ids keep the dependency edges stable across backends.

struct RuleSeed {
    id: i64,
    game_id: i64,
    description: &'static str,
    each_player: bool,
    details: Option<&'static str>,
    depends_on: &'static [i64],
}

const FORBIDDEN_ISLAND: i64 = 1;
const TIC_TAC_TOE: i64 = 2;

const RULE_SEEDS: &[RuleSeed] = &[
    RuleSeed {
        id: 1,
        game_id: FORBIDDEN_ISLAND,
        description: "Create the island",
        each_player: false,
        details: Some("Shuffle the island tiles and lay them out in the island pattern."),
        depends_on: &[],
    },
    RuleSeed {
        id: 2,
        game_id: FORBIDDEN_ISLAND,
        description: "Place the treasure figurines",
        each_player: false,
        details: Some("Set the four treasures around the edges of the island."),
        depends_on: &[1],
    },
    RuleSeed {
        id: 3,
        game_id: FORBIDDEN_ISLAND,
        description: "Divide the cards into decks",
        each_player: false,
        details: Some("Separate Flood, Treasure, and Adventurer cards into three decks."),
        depends_on: &[],
    },
    RuleSeed {
        id: 4,
        game_id: FORBIDDEN_ISLAND,
        description: "The island starts to sink",
        each_player: false,
        details: Some("Shuffle the Flood deck and flood the top six island tiles."),
        depends_on: &[1, 3],
    },
    RuleSeed {
        id: 5,
        game_id: FORBIDDEN_ISLAND,
        description: "Deal an Adventurer card",
        each_player: true,
        details: Some("Each player takes one Adventurer card and the matching pawn."),
        depends_on: &[3],
    },
    RuleSeed {
        id: 6,
        game_id: FORBIDDEN_ISLAND,
        description: "Place your pawn on its matching tile",
        each_player: true,
        details: None,
        depends_on: &[1, 5],
    },
    RuleSeed {
        id: 7,
        game_id: FORBIDDEN_ISLAND,
        description: "Deal 2 Treasure cards",
        each_player: true,
        details: Some("Waters Rise! cards are shuffled back into the Treasure deck."),
        depends_on: &[3],
    },
    RuleSeed {
        id: 8,
        game_id: FORBIDDEN_ISLAND,
        description: "Set the water level",
        each_player: false,
        details: Some("Place the water level marker at the chosen difficulty."),
        depends_on: &[],
    },
    RuleSeed {
        id: 9,
        game_id: TIC_TAC_TOE,
        description: "Draw the grid",
        each_player: false,
        details: None,
        depends_on: &[],
    },
    RuleSeed {
        id: 10,
        game_id: TIC_TAC_TOE,
        description: "Choose X or O",
        each_player: true,
        details: None,
        depends_on: &[9],
    },
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let games = [
            (FORBIDDEN_ISLAND, "Forbidden Island", 2, 4),
            (TIC_TAC_TOE, "Tic-Tac-Toe", 2, 2),
        ];

        for (id, name, min_players, max_players) in games {
            let insert = Query::insert()
                .into_table(Games::Table)
                .columns([
                    Games::Id,
                    Games::Name,
                    Games::MinPlayers,
                    Games::MaxPlayers,
                    Games::CreatedAt,
                ])
                .values_panic([
                    id.into(),
                    name.into(),
                    min_players.into(),
                    max_players.into(),
                    Expr::current_timestamp().into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        for seed in RULE_SEEDS {
            let insert = Query::insert()
                .into_table(SetupRules::Table)
                .columns([
                    SetupRules::Id,
                    SetupRules::GameId,
                    SetupRules::Description,
                    SetupRules::EachPlayer,
                    SetupRules::Details,
                ])
                .values_panic([
                    seed.id.into(),
                    seed.game_id.into(),
                    seed.description.into(),
                    seed.each_player.into(),
                    seed.details.into(),
                ])
                .to_owned();
            manager.exec_stmt(insert).await?;
        }

        // (parent, child): the child rule depends on the parent rule
        for seed in RULE_SEEDS {
            for parent in seed.depends_on {
                let insert = Query::insert()
                    .into_table(SetupRuleDependencies::Table)
                    .columns([
                        SetupRuleDependencies::ParentId,
                        SetupRuleDependencies::ChildId,
                    ])
                    .values_panic([(*parent).into(), seed.id.into()])
                    .to_owned();
                manager.exec_stmt(insert).await?;
            }
        }

        // Explicit-id inserts leave Postgres sequences behind; advance them.
        if manager.get_database_backend() == sea_orm::DatabaseBackend::Postgres {
            for table in ["games", "setup_rules"] {
                manager
                    .get_connection()
                    .execute(Statement::from_string(
                        sea_orm::DatabaseBackend::Postgres,
                        format!(
                            "SELECT setval(pg_get_serial_sequence('{table}', 'id'), (SELECT MAX(id) FROM {table}))"
                        ),
                    ))
                    .await?;
            }
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let rule_ids: Vec<i64> = RULE_SEEDS.iter().map(|seed| seed.id).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(SetupRuleDependencies::Table)
                    .and_where(Expr::col(SetupRuleDependencies::ChildId).is_in(rule_ids.clone()))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(SetupRules::Table)
                    .and_where(Expr::col(SetupRules::Id).is_in(rule_ids))
                    .to_owned(),
            )
            .await?;
        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Games::Table)
                    .and_where(Expr::col(Games::Id).is_in([FORBIDDEN_ISLAND, TIC_TAC_TOE]))
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}
