//! The closed record model.
//!
//! One [`Call`] variant per record kind. The interpreter matches on `Call`
//! exhaustively, so adding a kind is a compile error until every consumer
//! handles it.

use std::fmt;

/// A string-valued field: written out, or a reference to an earlier binding.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    Literal(String),
    /// `$name` in the input. Holds the name without the marker.
    Symbol(String),
}

impl Operand {
    /// Prefix that marks a symbol reference.
    pub const MARKER: char = '$';

    /// Classify a raw cell.
    pub fn parse(text: &str) -> Operand {
        match text.strip_prefix(Self::MARKER) {
            Some(name) => Operand::Symbol(name.to_string()),
            None => Operand::Literal(text.to_string()),
        }
    }

    pub fn literal(text: impl Into<String>) -> Operand {
        Operand::Literal(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Operand {
        Operand::Symbol(name.into())
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Literal(text) => write!(f, "{text}"),
            Operand::Symbol(name) => write!(f, "{}{name}", Self::MARKER),
        }
    }
}

/// Record kind, identified in input by a one-letter tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Point,
    Line,
    Arc,
    Function,
    Variable,
}

impl RecordKind {
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Point,
        RecordKind::Line,
        RecordKind::Arc,
        RecordKind::Function,
        RecordKind::Variable,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            RecordKind::Point => "P",
            RecordKind::Line => "L",
            RecordKind::Arc => "C",
            RecordKind::Function => "F",
            RecordKind::Variable => "V",
        }
    }

    pub fn from_tag(tag: &str) -> Option<RecordKind> {
        RecordKind::ALL.into_iter().find(|kind| kind.tag() == tag)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RecordKind::Point => "point",
            RecordKind::Line => "line",
            RecordKind::Arc => "curve",
            RecordKind::Function => "function",
            RecordKind::Variable => "variable",
        };
        write!(f, "{name}")
    }
}

/// An absolute point.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCall {
    pub latitude: f64,
    pub longitude: f64,
}

/// A straight leg: `distance` feet along `bearing`, or against it when
/// `direction` is `FALSE`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineCall {
    pub bearing: Operand,
    pub distance: Operand,
    pub direction: Operand,
}

/// A circular curve leaving the current point tangent to the incoming leg.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArcCall {
    /// Arc length in feet.
    pub distance: Operand,
    /// `TRUE` turns clockwise, `FALSE` counter-clockwise.
    pub direction: Operand,
    /// Radius in feet.
    pub radius: Operand,
    /// Central angle; derived from length and radius when absent.
    pub delta: Option<Operand>,
    /// Signed offset from the incoming tangent to the center; derived from
    /// `direction` when absent.
    pub turn_for_center: Option<Operand>,
}

/// A call into the function registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub args: Vec<Operand>,
}

/// Binds the previous record's result to `name`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariableCall {
    pub name: String,
}

/// One survey call.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Point(PointCall),
    Line(LineCall),
    Arc(ArcCall),
    Function(FunctionCall),
    Variable(VariableCall),
}

impl Call {
    pub fn kind(&self) -> RecordKind {
        match self {
            Call::Point(_) => RecordKind::Point,
            Call::Line(_) => RecordKind::Line,
            Call::Arc(_) => RecordKind::Arc,
            Call::Function(_) => RecordKind::Function,
            Call::Variable(_) => RecordKind::Variable,
        }
    }

    pub fn point(latitude: f64, longitude: f64) -> Call {
        Call::Point(PointCall {
            latitude,
            longitude,
        })
    }

    /// A line from raw cells; `$` cells become symbol references.
    pub fn line(bearing: &str, distance: &str, direction: &str) -> Call {
        Call::Line(LineCall {
            bearing: Operand::parse(bearing),
            distance: Operand::parse(distance),
            direction: Operand::parse(direction),
        })
    }

    /// A curve from raw cells. Empty or `?` delta and empty turn are absent.
    pub fn arc(distance: &str, direction: &str, radius: &str, delta: &str, turn: &str) -> Call {
        Call::Arc(ArcCall {
            distance: Operand::parse(distance),
            direction: Operand::parse(direction),
            radius: Operand::parse(radius),
            delta: optional_delta(delta),
            turn_for_center: Some(turn).filter(|t| !t.is_empty()).map(Operand::parse),
        })
    }

    pub fn function(name: &str, args: &[&str]) -> Call {
        Call::Function(FunctionCall {
            name: name.to_string(),
            args: args.iter().map(|arg| Operand::parse(arg)).collect(),
        })
    }

    pub fn variable(name: &str) -> Call {
        Call::Variable(VariableCall {
            name: name.to_string(),
        })
    }
}

/// Marker for "derive the delta from arc length".
pub const DERIVED_DELTA: &str = "?";

pub(crate) fn optional_delta(text: &str) -> Option<Operand> {
    if text.is_empty() || text == DERIVED_DELTA {
        None
    } else {
        Some(Operand::parse(text))
    }
}

/// A call plus its human label and source position.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// Free-text memo; not interpreted.
    pub memo: String,
    /// 1-based source line, or 0 for records built in code.
    pub line: u32,
    pub call: Call,
}

impl Record {
    pub fn new(call: Call) -> Record {
        Record {
            memo: String::new(),
            line: 0,
            call,
        }
    }

    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Record {
        self.memo = memo.into();
        self
    }

    #[must_use]
    pub fn at_line(mut self, line: u32) -> Record {
        self.line = line;
        self
    }

    pub fn kind(&self) -> RecordKind {
        self.call.kind()
    }

    /// Kind tag followed by memo, e.g. `C3` or `L36`.
    pub fn label(&self) -> String {
        format!("{}{}", self.kind().tag(), self.memo)
    }
}

impl From<Call> for Record {
    fn from(call: Call) -> Record {
        Record::new(call)
    }
}
