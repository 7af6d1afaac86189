//! Traverse evaluation.
//!
//! Turns a list of [`Record`]s into the sequence of points they describe.
//! The pieces, bottom-up:
//!
//! - [`Value`]: what a record evaluates to
//! - [`SymbolTable`]: `V` bindings, resolved by `$name` operands
//! - [`FunctionRegistry`]: builtins callable from `F` records
//! - [`arc`]: circular curve construction
//! - [`Interpreter`]: the state machine that runs records in order
//!
//! Each evaluation owns its [`TraverseState`]; the only thing shared between
//! evaluations is a [`SharedRegistry`] of functions.

pub mod arc;
mod direction;
mod errors;
mod interpreter;
mod registry;
mod shared;
mod state;
mod symbols;
mod value;

pub use direction::Direction;
pub use errors::{EvalError, EvalResult, TraverseError};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use registry::{BuiltinFn, FunctionDef, FunctionRegistry, RegistryError};
pub use shared::SharedRegistry;
pub use state::TraverseState;
pub use symbols::SymbolTable;
pub use value::Value;

use trav_geodesy::GeoPoint;
use trav_records::Record;

/// Evaluate `records` with a fresh interpreter and the builtin functions.
pub fn evaluate_traverse(records: &[Record]) -> Result<Vec<GeoPoint>, TraverseError> {
    let mut interpreter = Interpreter::new();
    interpreter.run(records).map(<[GeoPoint]>::to_vec)
}
