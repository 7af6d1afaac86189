//! Traverse records: the call model and the reader that produces it.
//!
//! A record file is a delimited text table. `H` lines declare which field
//! each column holds for a record kind; every other line is one call.
//! See [`read_records`] for the layout.

mod reader;
mod record;

use trav_diagnostic::{Diagnostic, ErrorCode, Location, ToDiagnostic};

pub use reader::{read_file, read_records};
pub use record::{
    ArcCall, Call, FunctionCall, LineCall, Operand, PointCall, Record, RecordKind, VariableCall,
    DERIVED_DELTA,
};

/// Failure while turning text into records.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("unknown record type '{tag}'")]
    UnknownRecordType { line: u32, tag: String },
    #[error("{kind} record is missing required field '{field}'")]
    MissingField {
        line: u32,
        kind: RecordKind,
        field: &'static str,
    },
    #[error("field '{field}' is not a number: '{text}'")]
    InvalidNumber {
        line: u32,
        field: &'static str,
        text: String,
    },
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReadError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ReadError::UnknownRecordType { .. } => ErrorCode::E1001,
            ReadError::MissingField { .. } => ErrorCode::E1002,
            ReadError::InvalidNumber { .. } => ErrorCode::E1003,
            ReadError::Io { .. } => ErrorCode::E1004,
        }
    }

    /// Source line of the offending record, if the error came from one.
    pub fn line(&self) -> Option<u32> {
        match self {
            ReadError::UnknownRecordType { line, .. }
            | ReadError::MissingField { line, .. }
            | ReadError::InvalidNumber { line, .. } => Some(*line),
            ReadError::Io { .. } => None,
        }
    }
}

impl ToDiagnostic for ReadError {
    fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self.line() {
            Some(line) => diag.with_location(Location {
                file: None,
                line,
                label: None,
            }),
            None => diag,
        }
    }
}
