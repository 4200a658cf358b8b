use thiserror::Error;

#[derive(Error, Debug)]
pub enum TierError {
    #[error("Unknown subscription tier: {0}")]
    UnknownTier(String),

    #[error("Unknown pricing locale: {0}")]
    UnknownLocale(String),

    #[error("Invalid tier table: {0}")]
    InvalidTable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TierError {
    pub fn unknown_tier(key: impl Into<String>) -> Self {
        Self::UnknownTier(key.into())
    }

    /// True for lookup failures, as opposed to config or IO problems.
    pub fn is_lookup(&self) -> bool {
        matches!(self, Self::UnknownTier(_) | Self::UnknownLocale(_))
    }
}

pub type Result<T> = std::result::Result<T, TierError>;
