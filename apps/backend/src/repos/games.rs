//! Game catalog repo: entity rows in, domain models out.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::{games_sea, rules_sea};
use crate::domain::rules::{Arity, RuleSet, SetupRule};
use crate::errors::domain::DomainError;

/// A catalog game together with its validated rule graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub min_players: i32,
    pub max_players: i32,
    #[serde(skip)]
    pub rules: RuleSet,
}

/// Loads the whole catalog, each game with its rule graph. A game whose
/// persisted graph fails validation (cycle, dangling dependency) aborts
/// the load; a catalog that cannot expand into steps is unusable.
pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Game>, DomainError> {
    let models = games_sea::find_all(conn).await?;
    let mut games = Vec::with_capacity(models.len());
    for model in models {
        let rules = load_rules(conn, model.id).await?;
        games.push(Game {
            id: model.id,
            name: model.name,
            min_players: model.min_players,
            max_players: model.max_players,
            rules,
        });
    }
    Ok(games)
}

async fn load_rules<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game_id: i64,
) -> Result<RuleSet, DomainError> {
    let rule_models = rules_sea::find_by_game(conn, game_id).await?;
    let edges = rules_sea::find_dependencies_by_game(conn, game_id).await?;

    let rules = rule_models
        .into_iter()
        .map(|model| {
            let depends_on = edges
                .iter()
                .filter(|edge| edge.child_id == model.id)
                .map(|edge| edge.parent_id)
                .collect();
            SetupRule {
                id: model.id,
                description: model.description,
                details: model.details,
                arity: if model.each_player {
                    Arity::EachPlayer
                } else {
                    Arity::Once
                },
                depends_on,
            }
        })
        .collect();

    RuleSet::new(rules)
}
