//! Services: orchestration between the in-memory state, the domain
//! aggregates, and the repos.

pub mod games;
pub mod players;
pub mod sessions;
