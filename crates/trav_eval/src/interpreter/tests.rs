use std::f64::consts::FRAC_PI_2;

use pretty_assertions::assert_eq;
use trav_diagnostic::ErrorCode;
use trav_records::{Call, Record};

use super::*;
use crate::SymbolTable;

fn records(calls: Vec<Call>) -> Vec<Record> {
    calls
        .into_iter()
        .enumerate()
        .map(|(i, call)| Record::new(call).with_memo((i + 1).to_string()))
        .collect()
}

fn gap(a: f64, b: f64) -> f64 {
    let d = (a - b).abs();
    d.min(360.0 - d)
}

fn start() -> Call {
    Call::point(37.4, -121.8)
}

// === Points and lines ===

#[test]
fn east_line_from_a_point() {
    let mut interp = Interpreter::new();
    let points = interp
        .run(&records(vec![start(), Call::line("N90°0'0\"E", "100", "TRUE")]))
        .unwrap()
        .to_vec();

    assert_eq!(points.len(), 2);
    let (first, second) = (points[0], points[1]);
    assert_eq!(first, GeoPoint::new(37.4, -121.8));
    assert!(second.lon() > first.lon());
    assert!((second.lat() - first.lat()).abs() < 1e-6);
    assert!((first.distance_to(second) - feet_to_meters(100.0)).abs() < 1e-6);

    let expected = first.destination_point(feet_to_meters(100.0), 90.0);
    assert!((second.lat() - expected.lat()).abs() < 1e-6);
    assert!((second.lon() - expected.lon()).abs() < 1e-6);
}

#[test]
fn false_direction_walks_backwards() {
    let mut interp = Interpreter::new();
    let points = interp
        .run(&records(vec![start(), Call::line("N90°0'0\"E", "100", "FALSE")]))
        .unwrap();
    assert!(points[1].lon() < points[0].lon());
}

#[test]
fn numeric_bearing_is_an_azimuth() {
    let mut interp = Interpreter::new();
    let points = interp
        .run(&records(vec![start(), Call::line("180", "50", "TRUE")]))
        .unwrap();
    assert!(gap(points[0].initial_bearing_to(points[1]).unwrap(), 180.0) < 1e-6);
}

#[test]
fn context_shifts_with_each_point() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            start(),
            Call::line("N0°0'0\"E", "100", "TRUE"),
            Call::line("N90°0'0\"E", "100", "TRUE"),
        ]))
        .unwrap();

    let points = interp.points().to_vec();
    assert_eq!(interp.state().previous(), Some(points[1]));
    assert_eq!(interp.state().current(), Some(points[2]));
    assert_eq!(interp.state().last_result(), Some(&Value::Point(points[2])));
}

#[test]
fn unknown_direction_stops_the_run() {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&records(vec![
            start(),
            Call::line("N90°0'0\"E", "100", "SIDEWAYS"),
            Call::line("N90°0'0\"E", "100", "TRUE"),
        ]))
        .unwrap_err();

    assert_eq!(err.source, EvalError::UnknownDirection("SIDEWAYS".to_string()));
    assert_eq!(err.index, 1);
    assert_eq!(err.label, "L2");
    assert_eq!(err.code(), ErrorCode::E2001);
    assert_eq!(interp.points().len(), 1);
}

#[test]
fn malformed_bearing_is_a_format_error() {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&records(vec![start(), Call::line("N45°30'E", "10", "TRUE")]))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E0002);
}

#[test]
fn line_needs_a_current_point() {
    let err = Interpreter::new()
        .run(&records(vec![Call::line("180", "10", "TRUE")]))
        .unwrap_err();
    assert!(matches!(err.source, EvalError::MissingContext(_)));
}

// === Curves ===

fn quarter_curve(direction: &str) -> Call {
    Call::arc(&(100.0 * FRAC_PI_2).to_string(), direction, "100", "", "")
}

fn northbound_then(curve: Call) -> Vec<Record> {
    records(vec![
        Call::point(0.0, 0.0),
        Call::line("N0°0'0\"E", "1000", "TRUE"),
        curve,
    ])
}

#[test]
fn arc_first_is_missing_context() {
    let err = Interpreter::new()
        .run(&records(vec![quarter_curve("TRUE")]))
        .unwrap_err();
    assert!(matches!(err.source, EvalError::MissingContext(_)));
    assert_eq!(err.code(), ErrorCode::E2002);
}

#[test]
fn arc_after_one_point_is_missing_context() {
    let err = Interpreter::new()
        .run(&records(vec![start(), quarter_curve("TRUE")]))
        .unwrap_err();
    assert!(matches!(err.source, EvalError::MissingContext(_)));
}

#[test]
fn quarter_curve_right_and_left() {
    for (direction, expected) in [("TRUE", 45.0), ("FALSE", 315.0)] {
        let mut interp = Interpreter::new();
        let points = interp.run(&northbound_then(quarter_curve(direction))).unwrap();
        assert_eq!(points.len(), 3);

        let chord = points[1].distance_to(points[2]);
        assert!((chord - feet_to_meters(100.0) * std::f64::consts::SQRT_2).abs() < 1e-3);
        let bearing = points[1].initial_bearing_to(points[2]).unwrap();
        assert!(gap(bearing, expected) < 1e-3, "{direction}: {bearing}");
    }
}

#[test]
fn explicit_delta_gives_the_same_end() {
    let length = (100.0 * FRAC_PI_2).to_string();
    let derived = Interpreter::new()
        .run(&northbound_then(Call::arc(&length, "TRUE", "100", "?", "")))
        .unwrap()
        .to_vec();
    let explicit = Interpreter::new()
        .run(&northbound_then(Call::arc(&length, "TRUE", "100", "90°0'0\"", "")))
        .unwrap()
        .to_vec();
    assert!(derived[2].distance_to(explicit[2]) < 1e-6);
}

#[test]
fn explicit_turn_for_center_is_used_as_given() {
    let length = (100.0 * FRAC_PI_2).to_string();
    let points = Interpreter::new()
        .run(&northbound_then(Call::arc(&length, "FALSE", "100", "", "-90")))
        .unwrap()
        .to_vec();
    let bearing = points[1].initial_bearing_to(points[2]).unwrap();
    assert!(gap(bearing, 315.0) < 1e-3);
}

#[test]
fn curve_with_bad_radius() {
    let err = Interpreter::new()
        .run(&northbound_then(Call::arc("10", "TRUE", "0", "", "")))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2008);
}

#[test]
fn curve_with_unknown_direction() {
    let err = Interpreter::new()
        .run(&northbound_then(Call::arc("10", "LEFT", "50", "", "")))
        .unwrap_err();
    assert_eq!(err.source, EvalError::UnknownDirection("LEFT".to_string()));
}

#[test]
fn curve_after_repeated_point_is_degenerate() {
    let err = Interpreter::new()
        .run(&records(vec![start(), start(), quarter_curve("TRUE")]))
        .unwrap_err();
    assert_eq!(err.source, EvalError::DegenerateTangent);
}

// === Symbols and functions ===

#[test]
fn bound_value_feeds_later_calls() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            start(),
            Call::function("adjustDegrees", &["N0°0'0\"E", "90"]),
            Call::variable("east"),
            Call::line("$east", "100", "TRUE"),
        ]))
        .unwrap();

    assert_eq!(interp.state().symbols().lookup("east"), Some(&Value::Number(90.0)));
    let points = interp.points();
    assert_eq!(points.len(), 2);
    assert!(gap(points[0].initial_bearing_to(points[1]).unwrap(), 90.0) < 1e-6);
}

#[test]
fn symbol_resolves_to_exactly_the_bound_value() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            Call::function("bearingToDegrees", &["S45°0'0\"W"]),
            Call::variable("sw"),
            Call::function("adjustDegrees", &["$sw", "0"]),
        ]))
        .unwrap();
    assert_eq!(interp.state().last_result(), Some(&Value::Number(225.0)));
}

#[test]
fn rebinding_does_not_move_earlier_points() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            start(),
            Call::function("bearingToDegrees", &["90"]),
            Call::variable("b"),
            Call::line("$b", "100", "TRUE"),
        ]))
        .unwrap();
    let before = interp.points().to_vec();

    interp
        .run(&records(vec![
            Call::function("bearingToDegrees", &["180"]),
            Call::variable("b"),
        ]))
        .unwrap();
    assert_eq!(interp.points(), before.as_slice());
    assert_eq!(interp.state().symbols().lookup("b"), Some(&Value::Number(180.0)));
}

#[test]
fn binding_a_point_does_not_append_it() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![start(), Call::variable("corner")]))
        .unwrap();
    assert_eq!(interp.points().len(), 1);
    assert_eq!(
        interp.state().symbols().lookup("corner"),
        Some(&Value::Point(GeoPoint::new(37.4, -121.8)))
    );
}

#[test]
fn point_symbols_reach_point_builtins() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            start(),
            Call::variable("pob"),
            Call::function("destinationPoint", &["$pob", "N0°0'0\"E", "100"]),
        ]))
        .unwrap();
    let points = interp.points();
    assert_eq!(points.len(), 2);
    assert!((points[0].distance_to(points[1]) - feet_to_meters(100.0)).abs() < 1e-6);
}

#[test]
fn binding_before_any_result_fails() {
    let err = Interpreter::new()
        .run(&records(vec![Call::variable("x")]))
        .unwrap_err();
    assert_eq!(err.source, EvalError::NothingToBind("x".to_string()));
    assert_eq!(err.code(), ErrorCode::E2007);
}

#[test]
fn binding_void_fails() {
    let err = Interpreter::new()
        .run(&records(vec![
            Call::function("clearDestinationPoints", &[]),
            Call::variable("nothing"),
        ]))
        .unwrap_err();
    assert!(matches!(err.source, EvalError::NothingToBind(_)));
}

#[test]
fn unresolved_symbol_fails_loudly() {
    let err = Interpreter::new()
        .run(&records(vec![start(), Call::line("$missing", "10", "TRUE")]))
        .unwrap_err();
    assert_eq!(err.source, EvalError::UnresolvedSymbol("missing".to_string()));
    assert_eq!(err.code(), ErrorCode::E2003);
}

#[test]
fn unknown_function_fails() {
    let err = Interpreter::new()
        .run(&records(vec![Call::function("teleport", &[])]))
        .unwrap_err();
    assert_eq!(err.source, EvalError::UnknownFunction("teleport".to_string()));
}

#[test]
fn function_arity_is_enforced() {
    let err = Interpreter::new()
        .run(&records(vec![Call::function("oppositeBearing", &["1", "2"])]))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2005);
}

#[test]
fn clear_destination_points_keeps_position() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![
            start(),
            Call::line("N0°0'0\"E", "100", "TRUE"),
            Call::function("clearDestinationPoints", &[]),
            Call::line("N90°0'0\"E", "100", "TRUE"),
        ]))
        .unwrap();
    assert_eq!(interp.points().len(), 1);
    assert_eq!(interp.state().point_from_record(3), interp.points().first().copied());
    assert_eq!(interp.state().point_from_record(1), None);
}

#[test]
fn reset_traverse_starts_over() {
    let mut interp = Interpreter::new();
    let err = interp
        .run(&records(vec![
            start(),
            Call::function("resetTraverse", &[]),
            Call::line("N0°0'0\"E", "100", "TRUE"),
        ]))
        .unwrap_err();
    assert!(matches!(err.source, EvalError::MissingContext(_)));
    assert_eq!(err.index, 2);
    assert!(interp.points().is_empty());
}

// === State and determinism ===

#[test]
fn evaluation_is_deterministic() {
    let input = northbound_then(quarter_curve("TRUE"));
    let first = Interpreter::new().run(&input).unwrap().to_vec();
    let second = Interpreter::new().run(&input).unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn reset_clears_state() {
    let mut interp = Interpreter::new();
    interp.run(&records(vec![start()])).unwrap();
    interp.reset();
    assert!(interp.points().is_empty());
    assert_eq!(interp.state().current(), None);
    assert_eq!(interp.state().evaluated(), 0);
}

#[test]
fn record_indices_continue_across_runs() {
    let mut interp = Interpreter::new();
    interp
        .run(&records(vec![start(), Call::line("N0°0'0\"E", "100", "TRUE")]))
        .unwrap();
    interp
        .run(&records(vec![Call::line("N90°0'0\"E", "100", "TRUE")]))
        .unwrap();

    let sources: Vec<usize> = interp.state().sourced_points().map(|(index, _)| index).collect();
    assert_eq!(sources, vec![0, 1, 2]);
    assert_eq!(interp.state().point_from_record(2), interp.points().last().copied());
    assert_eq!(interp.state().evaluated(), 3);

    let err = interp
        .run(&records(vec![Call::line("N0°0'0\"E", "100", "SIDEWAYS")]))
        .unwrap_err();
    assert_eq!(err.index, 3);
}

#[test]
fn origin_seeds_the_current_point() {
    let origin = GeoPoint::new(37.4, -121.8);
    let mut interp = Interpreter::builder().origin(origin).build();
    let points = interp
        .run(&records(vec![Call::line("N90°0'0\"E", "100", "TRUE")]))
        .unwrap();

    assert_eq!(points.len(), 1);
    assert!((origin.distance_to(points[0]) - feet_to_meters(100.0)).abs() < 1e-6);
}

#[test]
fn origin_gives_curves_half_their_context() {
    let origin = GeoPoint::new(0.0, 0.0);
    let mut interp = Interpreter::builder().origin(origin).build();
    let points = interp
        .run(&records(vec![
            Call::line("N0°0'0\"E", "1000", "TRUE"),
            quarter_curve("TRUE"),
        ]))
        .unwrap();
    assert_eq!(points.len(), 2);
}

#[test]
fn preset_symbols_are_visible() {
    let mut symbols = SymbolTable::new();
    symbols.define("len", Value::Number(100.0));
    let mut interp = Interpreter::builder().symbols(symbols).build();
    let points = interp
        .run(&records(vec![start(), Call::line("N0°0'0\"E", "$len", "TRUE")]))
        .unwrap();
    assert!((points[0].distance_to(points[1]) - feet_to_meters(100.0)).abs() < 1e-6);
}

#[test]
fn custom_function_through_shared_registry() {
    fn home(_: &mut TraverseState, _: &[Value]) -> EvalResult<Value> {
        Ok(Value::Point(GeoPoint::new(1.0, 1.0)))
    }
    let mut registry = FunctionRegistry::with_builtins();
    registry.register("home", &[], home).unwrap();
    let shared = SharedRegistry::new(registry);

    let mut interp = Interpreter::builder().registry(shared.clone()).build();
    assert!(interp.registry().ptr_eq(&shared));
    let points = interp
        .run(&records(vec![Call::function("home", &[])]))
        .unwrap();
    assert_eq!(points, &[GeoPoint::new(1.0, 1.0)]);
}

#[test]
fn interpreters_share_a_registry_across_threads() {
    let shared = SharedRegistry::new(FunctionRegistry::with_builtins());
    let input = northbound_then(quarter_curve("FALSE"));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let registry = shared.clone();
            let input = input.clone();
            std::thread::spawn(move || {
                let mut interp = Interpreter::builder().registry(registry).build();
                interp.run(&input).map(<[GeoPoint]>::to_vec)
            })
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap().unwrap())
        .collect();
    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].len(), 3);
}
