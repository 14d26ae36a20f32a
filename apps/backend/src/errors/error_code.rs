//! Error codes for the meeple-mover API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    InvalidRuleSet,
    ValidationError,
    BadRequest,

    // State Conflicts
    PlayerInUse,

    // Resource Not Found
    GameNotFound,
    PlayerNotFound,
    SessionNotFound,
    StepNotFound,
    NotFound,

    // System Errors
    DbError,
    DataCorruption,
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// The canonical SCREAMING_SNAKE_CASE string for this error code,
    /// exactly as it appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRuleSet => "INVALID_RULE_SET",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::PlayerInUse => "PLAYER_IN_USE",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::PlayerNotFound => "PLAYER_NOT_FOUND",
            Self::SessionNotFound => "SESSION_NOT_FOUND",
            Self::StepNotFound => "STEP_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
