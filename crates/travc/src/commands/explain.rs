//! The `explain` command: display documentation for error codes.

use trav_diagnostic::{ErrorCode, ErrorDocs};

/// Documentation for `code_str`, or the message to print when there is none.
pub fn explain_error(code_str: &str) -> Result<&'static str, String> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        return Err(format!(
            "Unknown error code: {code_str}\n\n\
             Codes have the format EXXXX where X is a digit.\n\
             Examples: E0002, E1001, E2001"
        ));
    };

    ErrorDocs::get(code).ok_or_else(|| format!("No documentation available for {code}"))
}
