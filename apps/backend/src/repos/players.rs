//! Player directory repo.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::adapters::players_sea;
use crate::entities::players;
use crate::errors::domain::{DomainError, NotFoundKind};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
}

impl From<players::Model> for Player {
    fn from(model: players::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

pub async fn find_all<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<Player>, DomainError> {
    let models = players_sea::find_all(conn).await?;
    Ok(models.into_iter().map(Player::from).collect())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Option<Player>, DomainError> {
    let model = players_sea::find_by_id(conn, player_id).await?;
    Ok(model.map(Player::from))
}

pub async fn require_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<Player, DomainError> {
    find_by_id(conn, player_id).await?.ok_or_else(|| {
        DomainError::not_found(NotFoundKind::Player, format!("no player with id {player_id}"))
    })
}

/// Resolves the subset of ids that still exist, in the requested order.
/// Missing ids are simply absent from the result; callers decide what a
/// gap means.
pub async fn find_by_ids<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let models = players_sea::find_by_ids(conn, player_ids.to_vec()).await?;
    Ok(player_ids
        .iter()
        .filter_map(|id| {
            models
                .iter()
                .find(|model| model.id == *id)
                .map(|model| Player::from(model.clone()))
        })
        .collect())
}

/// Resolves every id or fails with the first missing one. Order of the
/// result follows the requested order, not the database order.
pub async fn require_players<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_ids: &[i64],
) -> Result<Vec<Player>, DomainError> {
    let models = players_sea::find_by_ids(conn, player_ids.to_vec()).await?;
    player_ids
        .iter()
        .map(|id| {
            models
                .iter()
                .find(|model| model.id == *id)
                .map(|model| Player::from(model.clone()))
                .ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Player,
                        format!("no player with id {id}"),
                    )
                })
        })
        .collect()
}

pub async fn create_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Player, DomainError> {
    let model = players_sea::create_player(conn, name).await?;
    Ok(Player::from(model))
}

pub async fn delete_player<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    player_id: i64,
) -> Result<(), DomainError> {
    let deleted = players_sea::delete_player(conn, player_id).await?;
    if deleted == 0 {
        return Err(DomainError::not_found(
            NotFoundKind::Player,
            format!("no player with id {player_id}"),
        ));
    }
    Ok(())
}
