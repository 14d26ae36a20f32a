use std::collections::HashMap;

use parking_lot::RwLock;
use sea_orm::DatabaseConnection;

use crate::repos::games::Game;
use crate::state::session_registry::SessionRegistry;

/// Shared application state: the connection pool plus the in-memory caches
/// the request handlers read from.
pub struct AppState {
    pub db: DatabaseConnection,
    /// Game catalog keyed by id, loaded at boot.
    pub games: RwLock<HashMap<i64, Game>>,
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            games: RwLock::new(HashMap::new()),
            sessions: SessionRegistry::new(),
        }
    }

    pub fn game(&self, game_id: i64) -> Option<Game> {
        self.games.read().get(&game_id).cloned()
    }

    /// Games in catalog (id) order.
    pub fn games_sorted(&self) -> Vec<Game> {
        let mut games: Vec<Game> = self.games.read().values().cloned().collect();
        games.sort_by_key(|game| game.id);
        games
    }

    pub fn replace_games(&self, games: Vec<Game>) {
        let mut map = self.games.write();
        map.clear();
        for game in games {
            map.insert(game.id, game);
        }
    }
}
