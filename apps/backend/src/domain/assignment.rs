//! Assignment engine: which step each player should work on right now.
//!
//! Assignability is computed from the done flags of dependency steps,
//! never stored. Each (player, step) pair progresses Blocked ->
//! Assignable -> Assigned -> Done; `finish` on a dependency step is the
//! only mutation that can unblock others.

use crate::domain::rules::{RuleId, RuleSet};
use crate::domain::steps::SetupStep;
use crate::domain::PlayerId;

/// True iff every step instance of `rule_id` is done.
///
/// A rule with no instances (an `EachPlayer` rule over an empty roster)
/// is vacuously satisfied.
pub fn rule_satisfied(steps: &[SetupStep], rule_id: RuleId) -> bool {
    steps
        .iter()
        .filter(|step| step.rule_id == rule_id)
        .all(|step| step.done)
}

/// True iff all of the step's rule dependencies are satisfied.
/// Steps of a root rule are assignable from session start.
pub fn is_assignable(rules: &RuleSet, steps: &[SetupStep], idx: usize) -> bool {
    rules
        .dependencies(steps[idx].rule_id)
        .iter()
        .all(|dep| rule_satisfied(steps, *dep))
}

/// The index of the step `player` should work on right now: the first
/// step in list order that the player can own, is not done, and is
/// assignable. `None` when the player has finished everything
/// available to them.
///
/// First-match-in-list-order is the sole tie-break, so repeated calls
/// without an intervening finish return the same step.
pub fn next_step_for(rules: &RuleSet, steps: &[SetupStep], player: PlayerId) -> Option<usize> {
    (0..steps.len()).find(|&idx| {
        let step = &steps[idx];
        step.can_be_owned_by(player) && !step.done && is_assignable(rules, steps, idx)
    })
}
