use std::fmt;

use crate::ErrorCode;

/// Where in the record file a diagnostic points.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    /// Path of the record file, when known.
    pub file: Option<String>,
    /// 1-based line number.
    pub line: u32,
    /// Record label (kind tag + memo, e.g. `C3`), when the line held a record.
    pub label: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{file}:{}", self.line)?,
            None => write!(f, "line {}", self.line)?,
        }
        if let Some(label) = &self.label {
            write!(f, " ({label})")?;
        }
        Ok(())
    }
}

/// An error with everything needed to report it to the user.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    /// Error code for searchability.
    pub code: ErrorCode,
    /// Main error message.
    pub message: String,
    /// Record location, if the error is tied to one.
    pub location: Option<Location>,
    /// Additional notes providing context.
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(code: ErrorCode) -> Self {
        Diagnostic {
            code,
            message: String::new(),
            location: None,
            notes: Vec::new(),
        }
    }

    /// Set the main message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Point the diagnostic at a record line.
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    /// Fill in the file path of the location. No-op without a location.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        if let Some(location) = &mut self.location {
            location.file = Some(file.into());
        }
        self
    }

    /// Add a note providing additional context.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)?;
        if let Some(location) = &self.location {
            write!(f, "\n  --> {location}")?;
        }
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}

/// Conversion from a crate's error type into a reportable diagnostic.
///
/// Each error enum in the workspace implements this so the CLI can render
/// any failure the same way.
pub trait ToDiagnostic {
    fn to_diagnostic(&self) -> Diagnostic;
}
