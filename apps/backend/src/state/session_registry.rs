//! In-memory registry of live setup sessions.
//!
//! Each session sits behind its own async mutex so step completions for the
//! same session serialize, while different sessions proceed in parallel. The
//! database stays the system of record; the registry is a warm cache loaded
//! at boot and kept in step with every successful write.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

use crate::domain::session::SetupSession;

#[derive(Default)]
pub struct SessionRegistry {
    sessions: DashMap<i64, Arc<Mutex<SetupSession>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn insert(&self, session_id: i64, session: SetupSession) {
        self.sessions
            .insert(session_id, Arc::new(Mutex::new(session)));
    }

    /// Handle to one session's lock, if the session is known.
    pub fn get(&self, session_id: i64) -> Option<Arc<Mutex<SetupSession>>> {
        self.sessions
            .get(&session_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Session ids currently registered, in ascending order.
    pub fn ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.sessions.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }
}
