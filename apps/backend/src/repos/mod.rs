//! Repos: domain models in and out, `DomainError` at the boundary.

pub mod games;
pub mod players;
pub mod sessions;
