use thiserror::Error;

/// Typed error hierarchy for frontdesk.
///
/// Use at module boundaries (config loading, REPL input parsing).
/// Internal/leaf functions can continue using `anyhow::Result` — the
/// `Internal` variant allows seamless conversion via the `?` operator.
#[derive(Debug, Error)]
pub enum FrontdeskError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Input(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl FrontdeskError {
    /// Whether this error is the user's to fix (bad input, bad config)
    /// rather than an internal fault.
    pub fn is_user_error(&self) -> bool {
        match self {
            Self::Config(_) | Self::Input(_) => true,
            Self::Internal(_) => false,
        }
    }
}
