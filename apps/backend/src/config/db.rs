use std::env;

use crate::error::AppError;

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Resolves the database URL from the environment based on profile.
pub fn db_url(profile: DbProfile) -> Result<String, AppError> {
    match profile {
        DbProfile::Prod => must_var("DATABASE_URL"),
        DbProfile::Test => {
            let url = must_var("TEST_DATABASE_URL")?;
            // Enforce safety: test database must be in-memory sqlite or
            // have a name ending with "_test"
            if !url.starts_with("sqlite") && !url.trim_end_matches('/').ends_with("_test") {
                return Err(AppError::config(format!(
                    "Test profile requires a database name ending with '_test', but got: '{url}'"
                )));
            }
            Ok(url)
        }
    }
}

/// HTTP bind address from HOST/PORT (defaults to 127.0.0.1:8080).
pub fn bind_addr() -> (String, u16) {
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    (host, port)
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}
