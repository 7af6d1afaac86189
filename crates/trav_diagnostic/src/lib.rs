//! Diagnostics for traverse evaluation.
//!
//! - Error codes for searchability (`E2001`)
//! - Clear messages (what went wrong)
//! - Record location (which line and call)
//! - Embedded explanations for `travc explain`
//!
//! Every workspace error type implements [`ToDiagnostic`], so the CLI renders
//! reader, evaluation, and output failures through one [`TerminalEmitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Location, ToDiagnostic};
pub use emitter::{ColorMode, TerminalEmitter};
pub use error_code::{ErrorCode, UnknownErrorCode};
pub use errors::ErrorDocs;
