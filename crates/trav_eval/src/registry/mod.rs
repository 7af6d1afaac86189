//! Function registry for `F` records.
//!
//! Maps a name to a builtin with a fixed parameter list. Names are checked
//! when a function is registered; argument counts are checked before every
//! call. A finished registry is shared read-only through
//! [`SharedRegistry`](crate::SharedRegistry).

mod builtins;

use std::fmt;

use rustc_hash::FxHashMap;
use trav_diagnostic::{Diagnostic, ErrorCode, ToDiagnostic};
use trav_records::Operand;

use crate::errors::{EvalError, EvalResult};
use crate::{TraverseState, Value};

/// Signature every registered function has.
pub type BuiltinFn = fn(&mut TraverseState, &[Value]) -> EvalResult<Value>;

/// Registration failed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid function name '{0}'")]
    InvalidName(String),
    #[error("function '{0}' is already registered")]
    Duplicate(String),
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::InvalidName(_) => ErrorCode::E3001,
            RegistryError::Duplicate(_) => ErrorCode::E3002,
        }
    }
}

impl ToDiagnostic for RegistryError {
    fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code()).with_message(self.to_string())
    }
}

/// A registered function.
#[derive(Clone, Copy)]
pub struct FunctionDef {
    /// Parameter names, for help output. The length is the arity.
    pub params: &'static [&'static str],
    pub func: BuiltinFn,
}

impl FunctionDef {
    #[inline]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDef")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<String, FunctionDef>,
}

impl FunctionRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        FunctionRegistry::default()
    }

    /// A registry holding every builtin.
    pub fn with_builtins() -> Self {
        let functions = builtins::BUILTINS
            .iter()
            .map(|b| {
                let def = FunctionDef {
                    params: b.params,
                    func: b.func,
                };
                (b.name.to_string(), def)
            })
            .collect();
        FunctionRegistry { functions }
    }

    /// Add a function. The name must be non-empty, must not start with the
    /// symbol marker, and must not already be taken.
    pub fn register(
        &mut self,
        name: &str,
        params: &'static [&'static str],
        func: BuiltinFn,
    ) -> Result<(), RegistryError> {
        validate_name(name)?;
        if self.functions.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }
        self.functions
            .insert(name.to_string(), FunctionDef { params, func });
        Ok(())
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// `name(param, ...)` for every function, sorted by name.
    pub fn signatures(&self) -> Vec<String> {
        self.names()
            .into_iter()
            .filter_map(|name| {
                self.lookup(name)
                    .map(|def| format!("{name}({})", def.params.join(", ")))
            })
            .collect()
    }

    /// Look up `name`, check the argument count, and invoke it.
    pub fn call(&self, name: &str, state: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
        let def = self
            .lookup(name)
            .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
        if args.len() != def.arity() {
            return Err(EvalError::ArityMismatch {
                name: name.to_string(),
                expected: def.arity(),
                found: args.len(),
            });
        }
        tracing::trace!(name, ?args, "call builtin");
        (def.func)(state, args)
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed != name || name.starts_with(Operand::MARKER) {
        return Err(RegistryError::InvalidName(name.to_string()));
    }
    Ok(())
}
