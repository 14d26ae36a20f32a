use crate::domain::fixtures::GameFixtures;
use crate::domain::rules::{Arity, RuleSet, SetupRule};
use crate::domain::steps::{instantiate_steps, SetupStep};

fn two_rule_set() -> RuleSet {
    RuleSet::new(vec![
        SetupRule {
            id: 1,
            description: "shared".to_string(),
            details: None,
            arity: Arity::Once,
            depends_on: vec![],
        },
        SetupRule {
            id: 2,
            description: "per player".to_string(),
            details: None,
            arity: Arity::EachPlayer,
            depends_on: vec![1],
        },
    ])
    .unwrap()
}

#[test]
fn once_rule_yields_one_unowned_step() {
    let steps = instantiate_steps(&two_rule_set(), &[10, 20]);
    assert_eq!(steps[0].rule_id, 1);
    assert_eq!(steps[0].owner, None);
    assert!(!steps[0].done);
}

#[test]
fn each_player_rule_yields_one_step_per_player_in_roster_order() {
    let steps = instantiate_steps(&two_rule_set(), &[10, 20]);
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].rule_id, 2);
    assert_eq!(steps[1].owner, Some(10));
    assert_eq!(steps[2].rule_id, 2);
    assert_eq!(steps[2].owner, Some(20));
}

#[test]
fn empty_roster_yields_no_each_player_steps() {
    let steps = instantiate_steps(&two_rule_set(), &[]);
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].rule_id, 1);
}

#[test]
fn step_count_is_once_rules_plus_each_player_rules_times_roster() {
    let rules = GameFixtures::forbidden_island();
    // 5 Once rules + 3 EachPlayer rules x 4 players
    let steps = instantiate_steps(&rules, &[1, 2, 3, 4]);
    assert_eq!(steps.len(), 5 + 3 * 4);
}

#[test]
fn unowned_step_is_ownable_by_anyone() {
    let step = SetupStep {
        rule_id: 1,
        owner: None,
        done: false,
    };
    assert!(step.can_be_owned_by(10));
    assert!(step.can_be_owned_by(20));
}

#[test]
fn owned_step_is_ownable_only_by_its_owner() {
    let step = SetupStep {
        rule_id: 2,
        owner: Some(10),
        done: false,
    };
    assert!(step.can_be_owned_by(10));
    assert!(!step.can_be_owned_by(20));
}
