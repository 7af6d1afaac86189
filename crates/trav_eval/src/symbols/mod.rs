//! Symbol table for `V` bindings and `$name` references.
//!
//! A single flat scope: bindings live for one evaluation and are cleared
//! only by [`SymbolTable::clear`]. Values are stored by copy, so rebinding a
//! name never changes results computed from its earlier value.

use rustc_hash::FxHashMap;
use trav_records::Operand;

use crate::errors::{EvalError, EvalResult};
use crate::Value;

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    bindings: FxHashMap<String, Value>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable::default()
    }

    /// Bind `name`, replacing any earlier binding. Returns the old value.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.bindings.insert(name.into(), value)
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Literal operands become text; symbol operands must be bound.
    pub fn resolve(&self, operand: &Operand) -> EvalResult<Value> {
        match operand {
            Operand::Literal(text) => Ok(Value::text(text.as_str())),
            Operand::Symbol(name) => self
                .lookup(name)
                .cloned()
                .ok_or_else(|| EvalError::UnresolvedSymbol(name.clone())),
        }
    }

    pub fn resolve_all(&self, operands: &[Operand]) -> EvalResult<Vec<Value>> {
        operands.iter().map(|op| self.resolve(op)).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Bound names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
