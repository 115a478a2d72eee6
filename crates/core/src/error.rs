//! Error types crossing the core boundary.

use thiserror::Error;

/// A recoverable, user-facing validation failure.
///
/// Raised when an action's preconditions do not hold. The attempted action has no effect
/// and no game turn elapses; callers show the message and re-prompt.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Impossible(pub String);

impl Impossible {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    pub fn message(&self) -> &str {
        &self.0
    }
}

pub type ActionResult<T = ()> = Result<T, Impossible>;

/// Setup failures that end a session rather than a single action.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("no floor with a player start and a staircase after {attempts} attempts")]
    GenerationFailed { attempts: u32 },
}
