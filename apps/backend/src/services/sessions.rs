//! Session lifecycle service.
//!
//! Writes follow clone-mutate-persist-swap: the locked session is cloned,
//! the clone is mutated and persisted, and only after the transaction
//! commits does the clone replace the cached aggregate. A failed write
//! therefore leaves the cache exactly as it was.

use tracing::info;

use crate::db::txn::with_txn;
use crate::domain::session::{CompleteStepOutcome, SetupSession};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::repos::sessions;
use crate::state::app_state::AppState;

/// Rebuilds every persisted session into the registry. Run at boot,
/// after the game catalog is loaded.
pub async fn load_all_sessions(state: &AppState) -> Result<(), AppError> {
    let ids = sessions::session_ids(&state.db).await?;
    let count = ids.len();
    for session_id in ids {
        let game_id = sessions::session_game_id(&state.db, session_id).await?;
        let rules = state
            .game(game_id)
            .map(|game| game.rules)
            .ok_or_else(|| {
                DomainError::infra(
                    InfraErrorKind::DataCorruption,
                    format!("session {session_id} references unknown game {game_id}"),
                )
            })?;
        let session = sessions::load_session(&state.db, session_id, game_id, rules).await?;
        state.sessions.insert(session_id, session);
    }
    info!(count, "sessions loaded");
    Ok(())
}

/// Creates a session for a catalog game and roster: instantiates the
/// steps, seeds every player's initial assignment, persists the whole
/// aggregate in one transaction, then registers it.
pub async fn create_session(
    state: &AppState,
    game_id: i64,
    player_ids: Vec<i64>,
) -> Result<SetupSession, AppError> {
    let game = state.game(game_id).ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Game, format!("no game with id {game_id}"))
    })?;
    // Roster members must exist in the directory before we expand steps.
    crate::repos::players::require_players(&state.db, &player_ids).await?;

    let mut session = SetupSession::new(game_id, game.rules, player_ids);
    session.step_all_players();

    let session_snapshot = session.clone();
    let session_id = with_txn(&state.db, |txn| {
        Box::pin(async move { Ok(sessions::insert_session(txn, &session_snapshot).await?) })
    })
    .await?;

    session.id = Some(session_id);
    state.sessions.insert(session_id, session.clone());
    info!(session_id, game_id, "session created");
    Ok(session)
}

/// Snapshot of one live session.
pub async fn get_session(state: &AppState, session_id: i64) -> Result<SetupSession, AppError> {
    let handle = state.sessions.get(session_id).ok_or_else(|| {
        AppError::not_found(
            ErrorCode::SessionNotFound,
            format!("no session with id {session_id}"),
        )
    })?;
    let guard = handle.lock().await;
    Ok(guard.clone())
}

/// Snapshots of every live session, in id order.
pub async fn list_sessions(state: &AppState) -> Vec<SetupSession> {
    let mut snapshots = Vec::new();
    for session_id in state.sessions.ids() {
        if let Some(handle) = state.sessions.get(session_id) {
            snapshots.push(handle.lock().await.clone());
        }
    }
    snapshots
}

/// Finishes a step for a player and reassigns them, holding the
/// session's lock across the whole read-modify-persist cycle so
/// concurrent finishes for one session serialize.
pub async fn complete_step(
    state: &AppState,
    session_id: i64,
    player_id: i64,
    step_description: &str,
) -> Result<(CompleteStepOutcome, SetupSession), AppError> {
    let handle = state.sessions.get(session_id).ok_or_else(|| {
        AppError::not_found(
            ErrorCode::SessionNotFound,
            format!("no session with id {session_id}"),
        )
    })?;
    let mut guard = handle.lock().await;

    if !guard.players().contains(&player_id) {
        return Err(AppError::not_found(
            ErrorCode::PlayerNotFound,
            format!("player {player_id} is not in session {session_id}"),
        ));
    }

    let mut working = guard.clone();
    let outcome = working.complete_step(player_id, step_description)?;

    // Persist the step flag and the assignment move together.
    if !outcome.already_done || outcome.delta.is_some() {
        let finished_rule = outcome.finished_rule;
        let finished_owner = outcome.finished_owner;
        let persisted_delta = outcome.delta;
        with_txn(&state.db, |txn| {
            Box::pin(async move {
                sessions::mark_step_done(txn, session_id, finished_rule, finished_owner).await?;
                if let Some(delta) = persisted_delta {
                    sessions::replace_assignment(txn, session_id, player_id, delta.next).await?;
                }
                Ok(())
            })
        })
        .await?;
    }

    *guard = working;
    info!(
        session_id,
        player_id,
        rule_id = outcome.finished_rule,
        already_done = outcome.already_done,
        "step finished"
    );
    Ok((outcome, guard.clone()))
}
