//! Evaluation errors.
//!
//! [`EvalError`] is what a single step, builtin, or the arc resolver
//! returns. The interpreter wraps it in a [`TraverseError`] that remembers
//! which record failed.

use trav_bearing::BearingError;
use trav_diagnostic::{Diagnostic, ErrorCode, Location, ToDiagnostic};

/// Result type for evaluation steps and builtins.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error(transparent)]
    Bearing(#[from] BearingError),
    #[error("unknown direction '{0}': expected TRUE or FALSE")]
    UnknownDirection(String),
    #[error("missing point context: {0}")]
    MissingContext(&'static str),
    #[error("unresolved symbol '${0}'")]
    UnresolvedSymbol(String),
    #[error("unknown function '{0}'")]
    UnknownFunction(String),
    #[error("'{name}' expects {expected} argument(s), found {found}")]
    ArityMismatch {
        name: String,
        expected: usize,
        found: usize,
    },
    #[error("expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },
    #[error("nothing to bind to '{0}': no earlier record produced a value")]
    NothingToBind(String),
    #[error("invalid curve radius {0}: must be a positive number of feet")]
    InvalidRadius(f64),
    #[error("bearing is undefined: the two points coincide")]
    DegenerateTangent,
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Bearing(err) => err.code(),
            EvalError::UnknownDirection(_) => ErrorCode::E2001,
            EvalError::MissingContext(_) => ErrorCode::E2002,
            EvalError::UnresolvedSymbol(_) => ErrorCode::E2003,
            EvalError::UnknownFunction(_) => ErrorCode::E2004,
            EvalError::ArityMismatch { .. } => ErrorCode::E2005,
            EvalError::TypeMismatch { .. } => ErrorCode::E2006,
            EvalError::NothingToBind(_) => ErrorCode::E2007,
            EvalError::InvalidRadius(_) => ErrorCode::E2008,
            EvalError::DegenerateTangent => ErrorCode::E2009,
        }
    }

    pub(crate) fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        EvalError::TypeMismatch {
            expected,
            found: found.into(),
        }
    }
}

impl ToDiagnostic for EvalError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// A step failed. Points produced before the failing record are still
/// available from the interpreter.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("record {index} ({label}): {source}")]
pub struct TraverseError {
    /// 0-based position in the record list.
    pub index: usize,
    /// Source line, or 0 for records built in code.
    pub line: u32,
    /// Kind tag plus memo.
    pub label: String,
    #[source]
    pub source: EvalError,
}

impl TraverseError {
    pub fn code(&self) -> ErrorCode {
        self.source.code()
    }
}

impl ToDiagnostic for TraverseError {
    fn to_diagnostic(&self) -> Diagnostic {
        let location = Location {
            file: None,
            line: self.line,
            label: Some(self.label.clone()),
        };
        let diag = self.source.to_diagnostic().with_location(location);
        if self.line == 0 {
            diag.with_note(format!("raised by record #{}", self.index + 1))
        } else {
            diag
        }
    }
}
