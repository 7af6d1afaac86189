//! `InterpreterBuilder` for creating Interpreter instances.

use trav_geodesy::GeoPoint;

use super::Interpreter;
use crate::{FunctionRegistry, SharedRegistry, SymbolTable, TraverseState};

/// Builder for creating Interpreter instances with various configurations.
///
/// Interpreters that should share one function table get the same
/// [`SharedRegistry`] handle; without one, each build gets its own copy of
/// the builtins.
#[derive(Default)]
pub struct InterpreterBuilder {
    registry: Option<SharedRegistry<FunctionRegistry>>,
    origin: Option<GeoPoint>,
    symbols: Option<SymbolTable>,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder::default()
    }

    /// Set the function registry.
    #[must_use]
    pub fn registry(mut self, registry: SharedRegistry<FunctionRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Start from a known point. The origin becomes the current point but is
    /// not part of the result sequence.
    #[must_use]
    pub fn origin(mut self, origin: GeoPoint) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Pre-bind symbols before the first record.
    #[must_use]
    pub fn symbols(mut self, symbols: SymbolTable) -> Self {
        self.symbols = Some(symbols);
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter {
        let registry = self
            .registry
            .unwrap_or_else(|| SharedRegistry::new(FunctionRegistry::with_builtins()));

        let mut state = match self.origin {
            Some(origin) => TraverseState::with_origin(origin),
            None => TraverseState::new(),
        };
        if let Some(symbols) = self.symbols {
            *state.symbols_mut() = symbols;
        }

        Interpreter { registry, state }
    }
}
