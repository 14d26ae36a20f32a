//! Built-in rule sets mirroring the seeded catalog. Used by tests.

use crate::domain::rules::{Arity, RuleSet, SetupRule};

pub struct GameFixtures;

impl GameFixtures {
    /// Forbidden Island's setup rules, as seeded by the catalog
    /// migration.
    pub fn forbidden_island() -> RuleSet {
        RuleSet::new(vec![
            rule(1, "Create the island", Arity::Once, &[]),
            rule(2, "Place the treasure figurines", Arity::Once, &[1]),
            rule(3, "Divide the cards into decks", Arity::Once, &[]),
            rule(4, "The island starts to sink", Arity::Once, &[1, 3]),
            rule(5, "Deal an Adventurer card", Arity::EachPlayer, &[3]),
            rule(
                6,
                "Place your pawn on its matching tile",
                Arity::EachPlayer,
                &[1, 5],
            ),
            rule(7, "Deal 2 Treasure cards", Arity::EachPlayer, &[3]),
            rule(8, "Set the water level", Arity::Once, &[]),
        ])
        .expect("fixture rule set is acyclic")
    }

    pub fn tic_tac_toe() -> RuleSet {
        RuleSet::new(vec![
            rule(9, "Draw the grid", Arity::Once, &[]),
            rule(10, "Choose X or O", Arity::EachPlayer, &[9]),
        ])
        .expect("fixture rule set is acyclic")
    }
}

fn rule(id: i64, description: &str, arity: Arity, depends_on: &[i64]) -> SetupRule {
    SetupRule {
        id,
        description: description.to_string(),
        details: None,
        arity,
        depends_on: depends_on.to_vec(),
    }
}
