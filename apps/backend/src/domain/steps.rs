//! Setup step instantiation: expanding a rule graph into concrete,
//! trackable step instances for one session's roster.

use serde::Serialize;

use crate::domain::rules::{Arity, RuleId, RuleSet};
use crate::domain::PlayerId;

/// One concrete, trackable instance of a rule for a specific session.
///
/// The owner is a structural fact fixed at creation: `Once` steps are
/// unowned (any player may claim them), `EachPlayer` steps belong to
/// exactly one player. Only the `done` flag mutates afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetupStep {
    pub rule_id: RuleId,
    pub owner: Option<PlayerId>,
    pub done: bool,
}

impl SetupStep {
    /// True iff the step is unowned (shared) or owned by this player.
    pub fn can_be_owned_by(&self, player: PlayerId) -> bool {
        match self.owner {
            None => true,
            Some(owner) => owner == player,
        }
    }
}

/// Expands a rule graph into the full step list for a roster.
///
/// Rules in declaration order; for `EachPlayer` rules, players in
/// roster order. An empty roster yields zero steps for `EachPlayer`
/// rules, which is a valid but inert state.
pub fn instantiate_steps(rules: &RuleSet, roster: &[PlayerId]) -> Vec<SetupStep> {
    let mut steps = Vec::new();
    for rule in rules.rules() {
        match rule.arity {
            Arity::Once => steps.push(SetupStep {
                rule_id: rule.id,
                owner: None,
                done: false,
            }),
            Arity::EachPlayer => {
                for player in roster {
                    steps.push(SetupStep {
                        rule_id: rule.id,
                        owner: Some(*player),
                        done: false,
                    });
                }
            }
        }
    }
    steps
}
