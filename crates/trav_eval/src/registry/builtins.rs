//! Builtin functions available to every traverse.

use trav_geodesy::{feet_to_meters, normalize360};

use crate::errors::{EvalError, EvalResult};
use crate::{TraverseState, Value};

use super::BuiltinFn;

pub(super) struct Builtin {
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub func: BuiltinFn,
}

pub(super) const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "bearingToDegrees",
        params: &["bearing"],
        func: bearing_to_degrees,
    },
    Builtin {
        name: "oppositeBearing",
        params: &["bearing"],
        func: opposite_bearing,
    },
    Builtin {
        name: "adjustDegrees",
        params: &["bearing", "delta"],
        func: adjust_degrees,
    },
    Builtin {
        name: "finalBearing",
        params: &["from", "to"],
        func: final_bearing,
    },
    Builtin {
        name: "destinationPoint",
        params: &["point", "bearing", "feet"],
        func: destination_point,
    },
    Builtin {
        name: "clearDestinationPoints",
        params: &[],
        func: clear_destination_points,
    },
    Builtin {
        name: "resetTraverse",
        params: &[],
        func: reset_traverse,
    },
];

/// Borrow `args` as exactly `N` values.
fn expect_args<'a, const N: usize>(name: &str, args: &'a [Value]) -> EvalResult<&'a [Value; N]> {
    args.try_into().map_err(|_| EvalError::ArityMismatch {
        name: name.to_string(),
        expected: N,
        found: args.len(),
    })
}

fn bearing_to_degrees(_: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
    let [bearing] = expect_args::<1>("bearingToDegrees", args)?;
    Ok(Value::Number(bearing.to_azimuth()?))
}

fn opposite_bearing(_: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
    let [bearing] = expect_args::<1>("oppositeBearing", args)?;
    Ok(Value::Number(normalize360(bearing.to_azimuth()? + 180.0)))
}

fn adjust_degrees(_: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
    let [bearing, delta] = expect_args::<2>("adjustDegrees", args)?;
    Ok(Value::Number(normalize360(
        bearing.to_azimuth()? + delta.to_angle()?,
    )))
}

fn final_bearing(_: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
    let [from, to] = expect_args::<2>("finalBearing", args)?;
    from.to_point()?
        .final_bearing_to(to.to_point()?)
        .map(Value::Number)
        .ok_or(EvalError::DegenerateTangent)
}

fn destination_point(_: &mut TraverseState, args: &[Value]) -> EvalResult<Value> {
    let [point, bearing, feet] = expect_args::<3>("destinationPoint", args)?;
    let start = point.to_point()?;
    let azimuth = bearing.to_azimuth()?;
    let distance = feet_to_meters(feet.to_number()?);
    Ok(Value::Point(start.destination_point(distance, azimuth)))
}

fn clear_destination_points(state: &mut TraverseState, _: &[Value]) -> EvalResult<Value> {
    state.clear_points();
    Ok(Value::Void)
}

fn reset_traverse(state: &mut TraverseState, _: &[Value]) -> EvalResult<Value> {
    state.reset();
    Ok(Value::Void)
}
