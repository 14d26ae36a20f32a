//! SeaORM entities mirroring the persisted schema.

pub mod games;
pub mod players;
pub mod sessions;
pub mod sessions_players;
pub mod setup_rule_dependencies;
pub mod setup_rules;
pub mod setup_step_assignments;
pub mod setup_steps;
