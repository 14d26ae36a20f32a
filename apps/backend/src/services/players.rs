//! Player directory service.

use tracing::info;

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::players::{self, Player};
use crate::repos::sessions;
use crate::state::app_state::AppState;

pub async fn list_players(state: &AppState) -> Result<Vec<Player>, AppError> {
    Ok(players::find_all(&state.db).await?)
}

pub async fn get_player(state: &AppState, player_id: i64) -> Result<Player, AppError> {
    Ok(players::require_player(&state.db, player_id).await?)
}

pub async fn create_player(state: &AppState, name: &str) -> Result<Player, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid(
            ErrorCode::ValidationError,
            "player name must not be empty".to_string(),
        ));
    }
    let player = players::create_player(&state.db, name).await?;
    info!(player_id = player.id, "player created");
    Ok(player)
}

/// Deleting a rostered player would strand session rows, so that case is
/// rejected as a conflict before touching the directory.
pub async fn delete_player(state: &AppState, player_id: i64) -> Result<(), AppError> {
    if sessions::player_is_rostered(&state.db, player_id).await? {
        return Err(AppError::conflict(
            ErrorCode::PlayerInUse,
            format!("player {player_id} belongs to at least one session roster"),
        ));
    }
    players::delete_player(&state.db, player_id).await?;
    info!(player_id, "player deleted");
    Ok(())
}
