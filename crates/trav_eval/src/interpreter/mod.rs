//! Sequential traverse interpreter.
//!
//! One transition per record, in input order:
//!
//! - `P` yields its literal coordinates.
//! - `L` projects from the current point along the bearing (or its
//!   opposite when the direction is `FALSE`).
//! - `C` resolves a curve from the previous and current points.
//! - `F` resolves its arguments and calls the registry.
//! - `V` binds the last result to a name.
//!
//! After each step a point result is appended to the result sequence and
//! becomes the current point; every result except a binding's becomes the
//! last result. The first failure stops the run and is reported with the
//! record it came from. Points produced before it stay available.

mod builder;

pub use builder::InterpreterBuilder;

use trav_geodesy::{feet_to_meters, GeoPoint};
use trav_records::{ArcCall, Call, LineCall, Operand, Record};

use crate::arc::{resolve_arc, Curve};
use crate::errors::{EvalError, EvalResult, TraverseError};
use crate::{Direction, FunctionRegistry, SharedRegistry, TraverseState, Value};

pub struct Interpreter {
    registry: SharedRegistry<FunctionRegistry>,
    state: TraverseState,
}

impl Interpreter {
    /// An interpreter with the builtin functions and no origin.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn registry(&self) -> &SharedRegistry<FunctionRegistry> {
        &self.registry
    }

    pub fn state(&self) -> &TraverseState {
        &self.state
    }

    /// The result sequence so far.
    pub fn points(&self) -> &[GeoPoint] {
        self.state.points()
    }

    /// Discard all state, including any origin, and restart record
    /// indices at zero.
    pub fn reset(&mut self) {
        self.state = TraverseState::default();
    }

    /// Evaluate `records` in order, continuing from the current state.
    ///
    /// Record indices keep counting across runs until [`reset`](Self::reset),
    /// so a second run never reuses the indices of the first.
    pub fn run(&mut self, records: &[Record]) -> Result<&[GeoPoint], TraverseError> {
        tracing::debug!(
            records = records.len(),
            first_index = self.state.evaluated(),
            "evaluate traverse"
        );
        for record in records {
            let index = self.state.evaluated();
            self.step(index, record)?;
            self.state.advance();
        }
        Ok(self.state.points())
    }

    /// Evaluate one record and commit its result.
    #[tracing::instrument(level = "debug", skip_all, fields(index = index, label = %record.label()))]
    pub fn step(&mut self, index: usize, record: &Record) -> Result<Value, TraverseError> {
        let value = self.eval_call(&record.call).map_err(|source| TraverseError {
            index,
            line: record.line,
            label: record.label(),
            source,
        })?;

        match (&record.call, &value) {
            // A binding repeats the last result; it does not produce one.
            (Call::Variable(_), _) => return Ok(value),
            (_, Value::Point(point)) => tracing::debug!(%point, "point"),
            _ => {}
        }
        self.state.commit(index, value.clone());
        Ok(value)
    }

    fn eval_call(&mut self, call: &Call) -> EvalResult<Value> {
        match call {
            Call::Point(p) => Ok(Value::Point(GeoPoint::new(p.latitude, p.longitude))),
            Call::Line(line) => self.eval_line(line),
            Call::Arc(arc) => self.eval_arc(arc),
            Call::Function(func) => {
                let args = self.state.symbols().resolve_all(&func.args)?;
                self.registry.call(&func.name, &mut self.state, &args)
            }
            Call::Variable(var) => {
                let value = self
                    .state
                    .last_result()
                    .filter(|value| !value.is_void())
                    .cloned()
                    .ok_or_else(|| EvalError::NothingToBind(var.name.clone()))?;
                tracing::trace!(name = %var.name, %value, "bind");
                self.state.symbols_mut().define(var.name.as_str(), value.clone());
                Ok(value)
            }
        }
    }

    fn resolve(&self, operand: &Operand) -> EvalResult<Value> {
        self.state.symbols().resolve(operand)
    }

    fn eval_line(&self, line: &LineCall) -> EvalResult<Value> {
        let direction = Direction::from_value(&self.resolve(&line.direction)?)?;
        let bearing = self.resolve(&line.bearing)?.to_azimuth()?;
        let feet = self.resolve(&line.distance)?.to_number()?;

        let start = self
            .state
            .current()
            .ok_or(EvalError::MissingContext("a line needs a current point"))?;
        let end = start.destination_point(feet_to_meters(feet), direction.line_azimuth(bearing));
        Ok(Value::Point(end))
    }

    fn eval_arc(&self, arc: &ArcCall) -> EvalResult<Value> {
        let direction = Direction::from_value(&self.resolve(&arc.direction)?)?;
        let length = self.resolve(&arc.distance)?.to_number()?;
        let radius = self.resolve(&arc.radius)?.to_number()?;

        let mut curve = Curve::new(length, radius, direction);
        if let Some(delta) = &arc.delta {
            curve = curve.with_delta(self.resolve(delta)?.to_angle()?);
        }
        if let Some(turn) = &arc.turn_for_center {
            curve = curve.with_turn_for_center(self.resolve(turn)?.to_number()?);
        }

        let (Some(previous), Some(start)) = (self.state.previous(), self.state.current()) else {
            return Err(EvalError::MissingContext(
                "a curve needs a previous and a current point",
            ));
        };
        resolve_arc(previous, start, &curve).map(|resolved| Value::Point(resolved.end))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
