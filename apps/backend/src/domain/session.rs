//! Session aggregate: one game being set up by a specific roster.
//!
//! The session exclusively owns its step instances and assignment map;
//! the game's rules and the players are referenced by id, their
//! canonical lifetime lives elsewhere.

use std::collections::HashMap;

use crate::domain::assignment::next_step_for;
use crate::domain::rules::{RuleId, RuleSet};
use crate::domain::steps::{instantiate_steps, SetupStep};
use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// How a player's active step changed across a finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignmentDelta {
    pub previous: Option<RuleId>,
    pub next: Option<RuleId>,
}

/// Result of the atomic finish+reassign protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleteStepOutcome {
    pub finished_rule: RuleId,
    pub finished_owner: Option<PlayerId>,
    /// True when the step had already been finished (idempotent no-op).
    pub already_done: bool,
    /// `None` when the player's assignment did not change.
    pub delta: Option<AssignmentDelta>,
}

/// One instance of a game being set up by a roster of players.
#[derive(Debug, Clone, PartialEq)]
pub struct SetupSession {
    /// Assigned by the persistence layer on first save.
    pub id: Option<i64>,
    pub game_id: i64,
    players: Vec<PlayerId>,
    steps: Vec<SetupStep>,
    /// Player -> index into `steps` of their active step. At most one
    /// entry per player; absent when nothing is actionable for them.
    assignments: HashMap<PlayerId, usize>,
    rules: RuleSet,
}

impl SetupSession {
    /// Instantiates a fresh session: expands the rule graph over the
    /// roster. Assignments start empty; call `step_all_players` to seed
    /// them.
    pub fn new(game_id: i64, rules: RuleSet, players: Vec<PlayerId>) -> Self {
        let steps = instantiate_steps(&rules, &players);
        Self {
            id: None,
            game_id,
            players,
            steps,
            assignments: HashMap::new(),
            rules,
        }
    }

    /// Rebuilds a session from persisted rows.
    ///
    /// Steps come back in insertion order; each assignment row is
    /// re-attached to the step it referenced. An assignment row naming
    /// a player outside the roster, or a rule with no step ownable by
    /// that player, means the stored state no longer resolves and is
    /// surfaced as an error rather than silently dropped.
    pub fn from_rows(
        id: i64,
        game_id: i64,
        rules: RuleSet,
        players: Vec<PlayerId>,
        steps: Vec<SetupStep>,
        assignment_rows: &[(PlayerId, RuleId)],
    ) -> Result<Self, DomainError> {
        let mut session = Self {
            id: Some(id),
            game_id,
            players,
            steps,
            assignments: HashMap::new(),
            rules,
        };

        for (player, rule_id) in assignment_rows {
            if !session.players.contains(player) {
                return Err(DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!(
                        "assignment for rule {rule_id} references player {player}, \
                         who is not in session {id}"
                    ),
                ));
            }
            let idx = session
                .steps
                .iter()
                .position(|step| step.rule_id == *rule_id && step.can_be_owned_by(*player))
                .ok_or_else(|| {
                    DomainError::infra(
                        InfraErrorKind::DataCorruption,
                        format!(
                            "assignment for player {player} references rule {rule_id}, \
                             but session {id} has no such step ownable by them"
                        ),
                    )
                })?;
            session.assignments.insert(*player, idx);
        }

        Ok(session)
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn steps(&self) -> &[SetupStep] {
        &self.steps
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// The rule of each player's active step.
    pub fn assignments(&self) -> HashMap<PlayerId, RuleId> {
        self.assignments
            .iter()
            .map(|(player, idx)| (*player, self.steps[*idx].rule_id))
            .collect()
    }

    pub fn assigned_rule(&self, player: PlayerId) -> Option<RuleId> {
        self.assignments
            .get(&player)
            .map(|idx| self.steps[*idx].rule_id)
    }

    /// Computes the player's current actionable step, records it in the
    /// assignment map (overwriting any prior entry, removing it when
    /// nothing is actionable), and returns it.
    pub fn step_for_player(&mut self, player: PlayerId) -> Option<&SetupStep> {
        match next_step_for(&self.rules, &self.steps, player) {
            Some(idx) => {
                self.assignments.insert(player, idx);
                Some(&self.steps[idx])
            }
            None => {
                self.assignments.remove(&player);
                None
            }
        }
    }

    /// Seeds every roster player's initial assignment.
    pub fn step_all_players(&mut self) {
        let players = self.players.clone();
        for player in players {
            self.step_for_player(player);
        }
    }

    /// The atomic finish+reassign protocol.
    ///
    /// Locates the step matching `description` that `player` may own,
    /// marks it done (a no-op when already done), recomputes the
    /// player's assignment, and reports the assignment delta so the
    /// caller can persist the step update and the assignment row
    /// change together. Fails with NotFound, leaving no state changed,
    /// when no matching ownable step exists.
    pub fn complete_step(
        &mut self,
        player: PlayerId,
        description: &str,
    ) -> Result<CompleteStepOutcome, DomainError> {
        let matches = |step: &SetupStep| {
            self.rules
                .get(step.rule_id)
                .is_some_and(|rule| rule.description == description)
                && step.can_be_owned_by(player)
        };

        // Prefer a not-yet-done match; fall back to a done one so that
        // re-finishing stays an idempotent no-op instead of an error.
        let idx = self
            .steps
            .iter()
            .position(|step| matches(step) && !step.done)
            .or_else(|| self.steps.iter().position(matches))
            .ok_or_else(|| {
                DomainError::not_found(
                    NotFoundKind::Step,
                    format!("no step '{description}' ownable by player {player}"),
                )
            })?;

        let already_done = self.steps[idx].done;
        self.steps[idx].done = true;
        let finished_rule = self.steps[idx].rule_id;
        let finished_owner = self.steps[idx].owner;

        let previous = self.assigned_rule(player);
        let next = self.step_for_player(player).map(|step| step.rule_id);
        let delta = if previous != next {
            Some(AssignmentDelta { previous, next })
        } else {
            None
        };

        Ok(CompleteStepOutcome {
            finished_rule,
            finished_owner,
            already_done,
            delta,
        })
    }
}
