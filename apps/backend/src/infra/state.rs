//! AppState construction.

use sea_orm::DatabaseConnection;

use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for assembling `AppState` from a profile or an existing
/// connection (used by tests to inject an in-memory database).
pub struct StateBuilder {
    profile: DbProfile,
    conn: Option<DatabaseConnection>,
}

pub fn state_builder() -> StateBuilder {
    StateBuilder {
        profile: DbProfile::Prod,
        conn: None,
    }
}

impl StateBuilder {
    pub fn with_profile(mut self, profile: DbProfile) -> Self {
        self.profile = profile;
        self
    }

    pub fn with_connection(mut self, conn: DatabaseConnection) -> Self {
        self.conn = Some(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let db = match self.conn {
            Some(conn) => conn,
            None => connect_db(self.profile).await?,
        };
        Ok(AppState::new(db))
    }
}
