//! Domain layer: pure setup-tracking logic, no HTTP or database.

pub mod assignment;
pub mod fixtures;
pub mod rules;
pub mod session;
pub mod steps;

#[cfg(test)]
mod tests_assignment;
#[cfg(test)]
mod tests_rules;
#[cfg(test)]
mod tests_session;
#[cfg(test)]
mod tests_steps;

/// Players are referenced by id; their lifetime is managed by the
/// player directory, not by sessions.
pub type PlayerId = i64;

// Re-exports for ergonomics
pub use rules::{Arity, RuleId, RuleSet, SetupRule};
pub use session::{AssignmentDelta, CompleteStepOutcome, SetupSession};
pub use steps::SetupStep;
