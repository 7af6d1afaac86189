use std::fmt;
use std::str::FromStr;

/// Error codes for all traverse diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Angle and bearing format errors
/// - E1xxx: Record reader errors
/// - E2xxx: Evaluation errors
/// - E3xxx: Function registration errors
/// - E4xxx: Geometry output errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Format Errors (E0xxx)
    /// Malformed angle
    E0001,
    /// Malformed bearing
    E0002,

    // Reader Errors (E1xxx)
    /// Unknown record type
    E1001,
    /// Missing record field
    E1002,
    /// Invalid number in record field
    E1003,
    /// Input could not be read
    E1004,

    // Evaluation Errors (E2xxx)
    /// Unknown direction
    E2001,
    /// Missing point context
    E2002,
    /// Unresolved symbol
    E2003,
    /// Unknown function
    E2004,
    /// Argument count mismatch
    E2005,
    /// Value type mismatch
    E2006,
    /// Nothing to bind
    E2007,
    /// Invalid curve radius
    E2008,
    /// Degenerate tangent
    E2009,

    // Registration Errors (E3xxx)
    /// Invalid function name
    E3001,
    /// Duplicate function
    E3002,

    // Output Errors (E4xxx)
    /// Degenerate polygon
    E4001,
}

impl ErrorCode {
    /// Every code, in numeric order.
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E2001,
        ErrorCode::E2002,
        ErrorCode::E2003,
        ErrorCode::E2004,
        ErrorCode::E2005,
        ErrorCode::E2006,
        ErrorCode::E2007,
        ErrorCode::E2008,
        ErrorCode::E2009,
        ErrorCode::E3001,
        ErrorCode::E3002,
        ErrorCode::E4001,
    ];

    /// Get the numeric code as a string (e.g., "E2001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Format
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            // Reader
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            // Evaluation
            ErrorCode::E2001 => "E2001",
            ErrorCode::E2002 => "E2002",
            ErrorCode::E2003 => "E2003",
            ErrorCode::E2004 => "E2004",
            ErrorCode::E2005 => "E2005",
            ErrorCode::E2006 => "E2006",
            ErrorCode::E2007 => "E2007",
            ErrorCode::E2008 => "E2008",
            ErrorCode::E2009 => "E2009",
            // Registration
            ErrorCode::E3001 => "E3001",
            ErrorCode::E3002 => "E3002",
            // Output
            ErrorCode::E4001 => "E4001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string does not name a known error code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownErrorCode(pub String);

impl fmt::Display for UnknownErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown error code '{}'", self.0)
    }
}

impl std::error::Error for UnknownErrorCode {}

impl FromStr for ErrorCode {
    type Err = UnknownErrorCode;

    /// Parses `E2001` or `e2001`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ErrorCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownErrorCode(trimmed.to_string()))
    }
}
