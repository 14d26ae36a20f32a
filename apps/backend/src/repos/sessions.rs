//! Session repo: persists and reconstructs `SetupSession` aggregates.
//!
//! The step rows for a session are written in instantiation order and
//! read back ordered by id, so the in-memory step list and the persisted
//! one always line up positionally.

use sea_orm::ConnectionTrait;

use crate::adapters::{assignments_sea, sessions_sea, steps_sea};
use crate::domain::rules::{RuleId, RuleSet};
use crate::domain::session::SetupSession;
use crate::domain::steps::SetupStep;
use crate::domain::PlayerId;
use crate::errors::domain::{DomainError, InfraErrorKind, NotFoundKind};

/// Persists a freshly instantiated session: the session row, the roster,
/// every step instance, and the seeded assignment rows. Returns the
/// assigned session id. Call inside a transaction so a partial write
/// never becomes visible.
pub async fn insert_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session: &SetupSession,
) -> Result<i64, DomainError> {
    let model = sessions_sea::insert_session(conn, session.game_id).await?;

    for player in session.players() {
        sessions_sea::insert_session_player(conn, model.id, *player).await?;
    }
    for step in session.steps() {
        steps_sea::insert_step(conn, model.id, step.rule_id, step.owner, step.done).await?;
    }
    for (player, rule_id) in session.assignments() {
        assignments_sea::insert_assignment(conn, model.id, player, rule_id).await?;
    }

    Ok(model.id)
}

pub async fn session_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<i64>, DomainError> {
    let models = sessions_sea::find_all(conn).await?;
    Ok(models.into_iter().map(|model| model.id).collect())
}

/// Game id of a persisted session, or NotFound.
pub async fn session_game_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
) -> Result<i64, DomainError> {
    let model = sessions_sea::find_by_id(conn, session_id)
        .await?
        .ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Session,
                format!("no session with id {session_id}"),
            )
        })?;
    Ok(model.game_id)
}

/// Whether any session roster still references this player.
pub async fn player_is_rostered<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: PlayerId,
) -> Result<bool, DomainError> {
    Ok(sessions_sea::roster_count_for_player(conn, player_id).await? > 0)
}

/// Reconstructs one session from its persisted rows. The caller supplies
/// the rule graph (sessions only reference it); roster, steps and
/// assignments come from the database.
pub async fn load_session<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    game_id: i64,
    rules: RuleSet,
) -> Result<SetupSession, DomainError> {
    let players: Vec<PlayerId> = sessions_sea::find_player_ids(conn, session_id).await?;

    let steps: Vec<SetupStep> = steps_sea::find_by_session(conn, session_id)
        .await?
        .into_iter()
        .map(|row| SetupStep {
            rule_id: row.setup_rule_id,
            owner: row.player_id,
            done: row.done,
        })
        .collect();

    let assignment_rows: Vec<(PlayerId, RuleId)> =
        assignments_sea::find_by_session(conn, session_id)
            .await?
            .into_iter()
            .map(|row| (row.player_id, row.setup_rule_id))
            .collect();

    SetupSession::from_rows(session_id, game_id, rules, players, steps, &assignment_rows)
}

/// Marks one step row done, keyed the same way the step list is: session,
/// rule, owner (null owner matches the shared instance). The in-memory
/// session said this step exists, so zero affected rows means the stored
/// state drifted from the cache.
pub async fn mark_step_done<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    rule_id: RuleId,
    owner: Option<PlayerId>,
) -> Result<(), DomainError> {
    let touched = steps_sea::set_done(conn, session_id, rule_id, owner).await?;
    if touched == 0 {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!(
                "session {session_id} has no persisted step for rule {rule_id} \
                 owned by {owner:?}"
            ),
        ));
    }
    Ok(())
}

/// Replaces a player's assignment row: the old row (if any) goes away,
/// the new one (if any) is inserted.
pub async fn replace_assignment<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    session_id: i64,
    player_id: PlayerId,
    next_rule: Option<RuleId>,
) -> Result<(), DomainError> {
    assignments_sea::delete_assignment(conn, session_id, player_id).await?;
    if let Some(rule_id) = next_rule {
        assignments_sea::insert_assignment(conn, session_id, player_id, rule_id).await?;
    }
    Ok(())
}
