use std::fmt;

use thiserror::Error;

use crate::test_stub::TEST_PARAM_VALUE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentCount {
    None,
    TooMany(usize),
}

impl fmt::Display for ArgumentCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentCount::None => write!(f, "No argument provided, exiting"),
            ArgumentCount::TooMany(_) => write!(
                f,
                "Too many arguments provided only 1 argument is supported, exiting"
            ),
        }
    }
}

/// Failure category of a GetParameter call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalErrorKind {
    NotFound,
    AccessDenied,
    Throttled,
    Transport,
    Other,
}

impl fmt::Display for RetrievalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RetrievalErrorKind::NotFound => "not_found",
            RetrievalErrorKind::AccessDenied => "access_denied",
            RetrievalErrorKind::Throttled => "throttled",
            RetrievalErrorKind::Transport => "transport",
            RetrievalErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ParamError {
    #[error("{0}")]
    InvalidArgumentCount(ArgumentCount),

    #[error("Failed to construct parameter store session: {0}")]
    SessionConstructionFailure(String),

    #[error("{message}")]
    RetrievalFailure {
        kind: RetrievalErrorKind,
        message: String,
    },

    #[error("Parameter '{0}' has no value")]
    MissingValue(String),

    #[error("Wrong value for test-mode, should be: {}", TEST_PARAM_VALUE)]
    UnexpectedTestValue,
}

impl ParamError {
    /// Whether the diagnostic for this error is prefixed with the parameter name.
    pub fn names_parameter(&self) -> bool {
        !matches!(self, ParamError::InvalidArgumentCount(_))
    }

    pub fn retrieval_kind(&self) -> Option<RetrievalErrorKind> {
        match self {
            ParamError::RetrievalFailure { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
