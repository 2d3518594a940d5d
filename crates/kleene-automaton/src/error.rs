use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identifier of a validation failure, as it appears in reports.
///
/// The derived `Ord` is the *code* order (`E1` < `E2` < ...), which is not the
/// order in which checks run. Use [`ErrorCode::precedence`] for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
}

impl ErrorCode {
    /// Position of this code in the check order; lower runs first.
    pub fn precedence(self) -> u8 {
        match self {
            ErrorCode::E5 => 0,
            ErrorCode::E1 => 1,
            ErrorCode::E3 => 2,
            ErrorCode::E4 => 3,
            ErrorCode::E2 => 4,
            ErrorCode::E6 => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1 => "E1",
            ErrorCode::E2 => "E2",
            ErrorCode::E3 => "E3",
            ErrorCode::E4 => "E4",
            ErrorCode::E5 => "E5",
            ErrorCode::E6 => "E6",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first well-formedness violation found in an automaton description.
///
/// `Display` renders `<code>: <description>`; [`ValidationError::report`] adds the
/// `Error:` header line used in program output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A name used as initial, final, source or target state is not declared.
    #[error("E1: A state '{0}' is not in set of states")]
    UndefinedState(String),
    /// The undirected transition graph has more than one component.
    #[error("E2: Some states are disjoint")]
    DisjointStates,
    /// A transition label is missing from the alphabet.
    #[error("E3: A transition '{0}' is not represented in the alphabet")]
    BadSymbol(String),
    #[error("E4: Initial state is not defined")]
    NoInitialState,
    /// The five-line shape is broken. The reason is diagnostic only and is not
    /// part of the rendered message.
    #[error("E5: Input file is malformed")]
    MalformedInput { reason: String },
    /// Two transitions leave the same state on the same symbol.
    #[error("E6: FSA is nondeterministic")]
    Nondeterministic,
}

impl ValidationError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        ValidationError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::UndefinedState(_) => ErrorCode::E1,
            ValidationError::DisjointStates => ErrorCode::E2,
            ValidationError::BadSymbol(_) => ErrorCode::E3,
            ValidationError::NoInitialState => ErrorCode::E4,
            ValidationError::MalformedInput { .. } => ErrorCode::E5,
            ValidationError::Nondeterministic => ErrorCode::E6,
        }
    }

    /// Full error report: `Error:\n<code>: <description>`.
    pub fn report(&self) -> String {
        format!("Error:\n{}", self)
    }
}
