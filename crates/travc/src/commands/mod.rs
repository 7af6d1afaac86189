//! Command handlers for the `travc` CLI.
//!
//! Each handler returns the text to print on success or the diagnostic to
//! report on failure; `main` owns the output streams and the exit status.

mod explain;
mod points;
mod run;

pub use explain::explain_error;
pub use points::list_points;
pub use run::run_traverse;

use trav_diagnostic::{Diagnostic, ToDiagnostic};
use trav_eval::Interpreter;
use trav_records::{read_file, Record};

use crate::config::RunConfig;

/// Records read from a file and the interpreter that ran them.
pub(crate) struct Evaluated {
    pub records: Vec<Record>,
    pub interpreter: Interpreter,
}

/// Read `path` and evaluate every record.
pub(crate) fn evaluate(path: &str, config: &RunConfig) -> Result<Evaluated, Diagnostic> {
    tracing::debug!(path, "reading records");
    let records = read_file(path).map_err(|err| err.to_diagnostic().with_file(path))?;

    let mut builder = Interpreter::builder();
    if let Some(origin) = config.origin {
        builder = builder.origin(origin);
    }
    let mut interpreter = builder.build();
    interpreter
        .run(&records)
        .map_err(|err| err.to_diagnostic().with_file(path))?;

    Ok(Evaluated {
        records,
        interpreter,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
