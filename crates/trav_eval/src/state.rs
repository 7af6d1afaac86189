//! Per-evaluation traverse state.

use trav_geodesy::GeoPoint;

use crate::{SymbolTable, Value};

/// Everything one evaluation accumulates.
///
/// Created fresh for every evaluation and threaded through each step and
/// builtin; nothing here outlives the interpreter that owns it.
#[derive(Clone, Debug, Default)]
pub struct TraverseState {
    symbols: SymbolTable,
    points: Vec<GeoPoint>,
    /// Index of the record that produced each entry of `points`.
    sources: Vec<usize>,
    /// Records evaluated across every run since the interpreter was built.
    evaluated: usize,
    previous: Option<GeoPoint>,
    current: Option<GeoPoint>,
    last_result: Option<Value>,
}

impl TraverseState {
    pub fn new() -> Self {
        TraverseState::default()
    }

    /// Start from a known point without recording it as a result.
    pub fn with_origin(origin: GeoPoint) -> Self {
        TraverseState {
            current: Some(origin),
            ..TraverseState::default()
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolTable {
        &mut self.symbols
    }

    /// Points produced so far, in order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn previous(&self) -> Option<GeoPoint> {
        self.previous
    }

    pub fn current(&self) -> Option<GeoPoint> {
        self.current
    }

    pub fn last_result(&self) -> Option<&Value> {
        self.last_result.as_ref()
    }

    /// Index the next record evaluated by `Interpreter::run` will get.
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    pub(crate) fn advance(&mut self) {
        self.evaluated += 1;
    }

    /// The point produced by record `index`, if it produced one that has not
    /// been cleared.
    pub fn point_from_record(&self, index: usize) -> Option<GeoPoint> {
        self.sources
            .iter()
            .rposition(|&source| source == index)
            .map(|i| self.points[i])
    }

    /// Points paired with the index of the record that produced them.
    pub fn sourced_points(&self) -> impl Iterator<Item = (usize, GeoPoint)> + '_ {
        self.sources.iter().copied().zip(self.points.iter().copied())
    }

    /// Record the result of record `index`. A point is appended and becomes
    /// the current point.
    pub(crate) fn commit(&mut self, index: usize, value: Value) {
        if let Value::Point(point) = value {
            self.points.push(point);
            self.sources.push(index);
            self.previous = self.current;
            self.current = Some(point);
        }
        self.last_result = Some(value);
    }

    /// Empty the result sequence. Previous and current points are kept, so
    /// the traverse continues from where it stands.
    pub fn clear_points(&mut self) {
        self.points.clear();
        self.sources.clear();
    }

    /// Forget symbols, points, context, and last result. The record count
    /// keeps going so indices stay unique within a run.
    pub fn reset(&mut self) {
        *self = TraverseState {
            evaluated: self.evaluated,
            ..TraverseState::default()
        };
    }
}
