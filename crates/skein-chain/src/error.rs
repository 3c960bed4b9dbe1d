use thiserror::Error;

/// Errors rejected at codec construction time.
///
/// These are fatal: a service that cannot build its codec cannot decode any
/// previously issued chain, so callers should abort initialization.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("alphabet must contain at least {min} distinct characters, got {got}")]
    AlphabetTooSmall { got: usize, min: usize },
    #[error("alphabet contains duplicate character {0:?}")]
    DuplicateCharacter(char),
}

/// Per-call decode failures. Always recoverable by the caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("chain is {got} characters long, minimum is {min}")]
    TooShort { got: usize, min: usize },
    #[error("character {0:?} is not part of the alphabet")]
    InvalidCharacter(char),
    #[error("chain does not correspond to any encoded value")]
    MalformedChain,
}
