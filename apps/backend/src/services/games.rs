//! Game catalog service. The catalog is read-only at runtime: loaded
//! once at boot into the in-memory index, served from there afterwards.

use tracing::info;

use crate::error::AppError;
use crate::repos::games::{self, Game};
use crate::state::app_state::AppState;

/// Loads every game and its rule graph into the catalog index. Run at
/// boot; a catalog that fails validation refuses to start the server.
pub async fn load_catalog(state: &AppState) -> Result<(), AppError> {
    let games = games::find_all(&state.db).await?;
    info!(count = games.len(), "game catalog loaded");
    state.replace_games(games);
    Ok(())
}

pub fn list_games(state: &AppState) -> Vec<Game> {
    state.games_sorted()
}

pub fn get_game(state: &AppState, game_id: i64) -> Result<Game, AppError> {
    state.game(game_id).ok_or_else(|| {
        AppError::not_found(
            crate::errors::ErrorCode::GameNotFound,
            format!("no game with id {game_id}"),
        )
    })
}
