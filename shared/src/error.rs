use thiserror::Error;

/// Errors raised while building or addressing calendar months.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// The cursor points at a year chrono cannot represent.
    #[error("{year}-{month:02} is outside the supported calendar range")]
    OutOfRange { year: i32, month: u32 },
}

/// Errors raised while loading the site configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}
