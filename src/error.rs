use thiserror::Error;

/// GameError covers every way the core can refuse a caller. All variants are
/// synchronous and non-retryable: they signal caller misuse, not transient
/// conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The guess (or secret) is malformed: empty, or the wrong length.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A guess was submitted with no live session, or after the session
    /// reached a terminal state.
    #[error("no active game")]
    NoActiveGame,

    /// The requested language is not supported and the caller opted out of
    /// the default-language fallback.
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}
