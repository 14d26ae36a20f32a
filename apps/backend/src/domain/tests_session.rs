use std::collections::HashMap;

use crate::domain::rules::{Arity, RuleSet, SetupRule};
use crate::domain::session::SetupSession;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

const ALICE: i64 = 10;
const BOB: i64 = 20;

fn rule(id: i64, description: &str, arity: Arity, depends_on: &[i64]) -> SetupRule {
    SetupRule {
        id,
        description: description.to_string(),
        details: None,
        arity,
        depends_on: depends_on.to_vec(),
    }
}

/// R1 "setup board" once, R2 "take cards" each-player depending on R1.
fn small_game() -> RuleSet {
    RuleSet::new(vec![
        rule(1, "setup board", Arity::Once, &[]),
        rule(2, "take cards", Arity::EachPlayer, &[1]),
    ])
    .unwrap()
}

fn fresh_session() -> SetupSession {
    let mut session = SetupSession::new(7, small_game(), vec![ALICE, BOB]);
    session.step_all_players();
    session
}

#[test]
fn new_session_seeds_every_player_on_the_first_open_step() {
    let session = fresh_session();
    assert_eq!(session.steps().len(), 3);
    // Both players start on the shared root step.
    assert_eq!(session.assigned_rule(ALICE), Some(1));
    assert_eq!(session.assigned_rule(BOB), Some(1));
}

#[test]
fn completing_a_shared_step_advances_the_actor() {
    let mut session = fresh_session();
    let outcome = session.complete_step(ALICE, "setup board").unwrap();

    assert_eq!(outcome.finished_rule, 1);
    assert_eq!(outcome.finished_owner, None);
    assert!(!outcome.already_done);
    let delta = outcome.delta.unwrap();
    assert_eq!(delta.previous, Some(1));
    assert_eq!(delta.next, Some(2));

    // Only the actor is reassigned; bob keeps his stale entry until his
    // own next interaction.
    assert_eq!(session.assigned_rule(ALICE), Some(2));
    assert_eq!(session.assigned_rule(BOB), Some(1));
}

#[test]
fn refinishing_a_done_step_is_an_idempotent_no_op() {
    let mut session = fresh_session();
    session.complete_step(ALICE, "setup board").unwrap();
    let before = session.clone();

    let outcome = session.complete_step(ALICE, "setup board").unwrap();
    assert!(outcome.already_done);
    assert_eq!(outcome.delta, None);
    assert_eq!(session, before);
}

#[test]
fn a_player_cannot_finish_another_players_step() {
    // Roster is bob only, so the per-player step has exactly one owner.
    let mut session = SetupSession::new(7, small_game(), vec![BOB]);
    session.step_all_players();
    session.complete_step(BOB, "setup board").unwrap();

    let err = session.complete_step(ALICE, "take cards").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Step, _)));

    // Bob's own instance is still open.
    assert!(session.complete_step(BOB, "take cards").is_ok());
}

#[test]
fn unknown_description_is_not_found() {
    let mut session = fresh_session();
    let err = session.complete_step(ALICE, "no such step").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Step, _)));
}

#[test]
fn finishing_the_last_available_step_clears_the_assignment() {
    let mut session = fresh_session();
    session.complete_step(ALICE, "setup board").unwrap();

    let outcome = session.complete_step(ALICE, "take cards").unwrap();
    let delta = outcome.delta.unwrap();
    assert_eq!(delta.previous, Some(2));
    assert_eq!(delta.next, None);
    assert_eq!(session.assigned_rule(ALICE), None);
}

#[test]
fn finishing_a_dependency_unblocks_waiting_players() {
    let mut session = fresh_session();
    session.complete_step(ALICE, "setup board").unwrap();

    // Bob's assignment was computed before the unblock; recomputing
    // moves him onto his own now-assignable step.
    let step = session.step_for_player(BOB).unwrap();
    assert_eq!(step.rule_id, 2);
    assert_eq!(step.owner, Some(BOB));
}

#[test]
fn roundtrip_through_rows_reproduces_the_session() {
    let mut session = fresh_session();
    session.complete_step(ALICE, "setup board").unwrap();
    session.step_for_player(BOB);

    let assignment_rows: Vec<(i64, i64)> = {
        let map: HashMap<i64, i64> = session.assignments();
        let mut rows: Vec<(i64, i64)> = map.into_iter().collect();
        rows.sort_unstable();
        rows
    };

    let rebuilt = SetupSession::from_rows(
        42,
        session.game_id,
        small_game(),
        session.players().to_vec(),
        session.steps().to_vec(),
        &assignment_rows,
    )
    .unwrap();

    assert_eq!(rebuilt.steps(), session.steps());
    assert_eq!(rebuilt.assignments(), session.assignments());
}

#[test]
fn from_rows_rejects_assignment_for_player_outside_roster() {
    let session = fresh_session();
    let err = SetupSession::from_rows(
        42,
        session.game_id,
        small_game(),
        vec![ALICE],
        session.steps().to_vec(),
        &[(BOB, 1)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}

#[test]
fn from_rows_rejects_assignment_with_no_matching_step() {
    let session = fresh_session();
    // No rule 99 exists, so no step can back this assignment row.
    let err = SetupSession::from_rows(
        42,
        session.game_id,
        small_game(),
        vec![ALICE, BOB],
        session.steps().to_vec(),
        &[(ALICE, 99)],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Infra(InfraErrorKind::DataCorruption, _)
    ));
}
