use crate::domain::fixtures::GameFixtures;
use crate::domain::rules::{Arity, RuleSet, SetupRule};
use crate::errors::domain::{DomainError, ValidationKind};

fn rule(id: i64, arity: Arity, depends_on: &[i64]) -> SetupRule {
    SetupRule {
        id,
        description: format!("rule {id}"),
        details: None,
        arity,
        depends_on: depends_on.to_vec(),
    }
}

#[test]
fn valid_rule_set_loads_in_declaration_order() {
    let set = RuleSet::new(vec![
        rule(1, Arity::Once, &[]),
        rule(2, Arity::EachPlayer, &[1]),
        rule(3, Arity::Once, &[1, 2]),
    ])
    .unwrap();

    assert_eq!(set.len(), 3);
    let ids: Vec<i64> = set.rules().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(set.dependencies(3), &[1, 2]);
    assert_eq!(set.dependencies(1), &[] as &[i64]);
}

#[test]
fn empty_rule_set_is_valid() {
    let set = RuleSet::new(Vec::new()).unwrap();
    assert!(set.is_empty());
    assert!(RuleSet::empty().is_empty());
}

#[test]
fn duplicate_rule_id_is_rejected() {
    let err = RuleSet::new(vec![rule(1, Arity::Once, &[]), rule(1, Arity::Once, &[])])
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::DuplicateRule, _)
    ));
}

#[test]
fn dependency_on_unknown_rule_is_rejected() {
    let err = RuleSet::new(vec![rule(1, Arity::Once, &[99])]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::UnknownDependency, _)
    ));
}

#[test]
fn dependency_cycle_is_rejected() {
    let err = RuleSet::new(vec![
        rule(1, Arity::Once, &[3]),
        rule(2, Arity::Once, &[1]),
        rule(3, Arity::Once, &[2]),
    ])
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::RuleCycle, _)
    ));
}

#[test]
fn self_dependency_is_rejected() {
    let err = RuleSet::new(vec![rule(1, Arity::Once, &[1])]).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::RuleCycle, _)
    ));
}

#[test]
fn diamond_dependency_graph_is_accepted() {
    // 1 <- 2, 1 <- 3, {2,3} <- 4: shared ancestors are not a cycle.
    let set = RuleSet::new(vec![
        rule(1, Arity::Once, &[]),
        rule(2, Arity::Once, &[1]),
        rule(3, Arity::Once, &[1]),
        rule(4, Arity::Once, &[2, 3]),
    ]);
    assert!(set.is_ok());
}

#[test]
fn seeded_fixtures_validate() {
    assert_eq!(GameFixtures::forbidden_island().len(), 8);
    assert_eq!(GameFixtures::tic_tac_toe().len(), 2);
}
