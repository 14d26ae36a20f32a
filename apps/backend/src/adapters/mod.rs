//! Thin SeaORM adapters. Each function is generic over `ConnectionTrait` so
//! it runs against either the pooled connection or an open transaction, and
//! returns `DbErr`; the repos layer owns the mapping into `DomainError`.

pub mod assignments_sea;
pub mod games_sea;
pub mod players_sea;
pub mod rules_sea;
pub mod sessions_sea;
pub mod steps_sea;
