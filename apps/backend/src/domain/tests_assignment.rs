use crate::domain::assignment::{is_assignable, next_step_for, rule_satisfied};
use crate::domain::rules::{Arity, RuleSet, SetupRule};
use crate::domain::steps::instantiate_steps;

fn rule(id: i64, arity: Arity, depends_on: &[i64]) -> SetupRule {
    SetupRule {
        id,
        description: format!("rule {id}"),
        details: None,
        arity,
        depends_on: depends_on.to_vec(),
    }
}

/// R1 once, R2 each-player depending on R1, R3 once depending on both.
fn chain() -> RuleSet {
    RuleSet::new(vec![
        rule(1, Arity::Once, &[]),
        rule(2, Arity::EachPlayer, &[1]),
        rule(3, Arity::Once, &[1, 2]),
    ])
    .unwrap()
}

const ALICE: i64 = 10;
const BOB: i64 = 20;

#[test]
fn dependent_step_is_blocked_while_dependency_is_undone() {
    let rules = chain();
    let steps = instantiate_steps(&rules, &[ALICE, BOB]);
    // steps: [R1 shared, R2/alice, R2/bob, R3 shared]
    assert!(is_assignable(&rules, &steps, 0));
    assert!(!is_assignable(&rules, &steps, 1));
    assert!(!is_assignable(&rules, &steps, 2));
    assert!(!is_assignable(&rules, &steps, 3));
}

#[test]
fn rule_needs_every_instance_done_to_be_satisfied() {
    let rules = chain();
    let mut steps = instantiate_steps(&rules, &[ALICE, BOB]);
    steps[0].done = true;
    steps[1].done = true; // alice's R2, bob's still open
    assert!(!rule_satisfied(&steps, 2));
    assert!(!is_assignable(&rules, &steps, 3));

    steps[2].done = true;
    assert!(rule_satisfied(&steps, 2));
    assert!(is_assignable(&rules, &steps, 3));
}

#[test]
fn rule_with_no_instances_is_vacuously_satisfied() {
    let rules = chain();
    // Empty roster: R2 expands to zero steps, so R3 only waits on R1.
    let mut steps = instantiate_steps(&rules, &[]);
    assert!(rule_satisfied(&steps, 2));
    assert!(!is_assignable(&rules, &steps, 1));

    steps[0].done = true;
    assert!(is_assignable(&rules, &steps, 1));
}

#[test]
fn next_step_picks_first_ownable_undone_assignable_in_list_order() {
    let rules = chain();
    let mut steps = instantiate_steps(&rules, &[ALICE, BOB]);
    assert_eq!(next_step_for(&rules, &steps, ALICE), Some(0));
    assert_eq!(next_step_for(&rules, &steps, BOB), Some(0));

    steps[0].done = true;
    assert_eq!(next_step_for(&rules, &steps, ALICE), Some(1));
    assert_eq!(next_step_for(&rules, &steps, BOB), Some(2));
}

#[test]
fn next_step_never_returns_done_or_foreign_owned_steps() {
    let rules = chain();
    let mut steps = instantiate_steps(&rules, &[ALICE, BOB]);
    steps[0].done = true;
    steps[1].done = true;

    // Alice's remaining options: bob's R2 (foreign), R3 (blocked).
    assert_eq!(next_step_for(&rules, &steps, ALICE), None);
}

#[test]
fn next_step_is_stable_without_an_intervening_finish() {
    let rules = chain();
    let steps = instantiate_steps(&rules, &[ALICE, BOB]);
    let first = next_step_for(&rules, &steps, ALICE);
    assert_eq!(next_step_for(&rules, &steps, ALICE), first);
    assert_eq!(next_step_for(&rules, &steps, ALICE), first);
}

#[test]
fn everything_done_yields_none() {
    let rules = chain();
    let mut steps = instantiate_steps(&rules, &[ALICE, BOB]);
    for step in &mut steps {
        step.done = true;
    }
    assert_eq!(next_step_for(&rules, &steps, ALICE), None);
    assert_eq!(next_step_for(&rules, &steps, BOB), None);
}
