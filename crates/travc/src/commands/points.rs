//! The `points` command: one line per produced point, plus the closure gap.

use std::fmt::Write;

use trav_diagnostic::Diagnostic;
use trav_geodesy::METERS_PER_FOOT;

use super::evaluate;
use crate::config::RunConfig;

pub fn list_points(path: &str, config: &RunConfig) -> Result<String, Diagnostic> {
    let evaluated = evaluate(path, config)?;
    let state = evaluated.interpreter.state();

    let mut out = String::new();
    for (index, point) in state.sourced_points() {
        let label = evaluated
            .records
            .get(index)
            .map(trav_records::Record::label)
            .unwrap_or_default();
        let _ = writeln!(out, "{label}\t{:.9}\t{:.9}", point.lat(), point.lon());
    }

    // Informational only: a closed traverse should end where it started.
    if let [first, .., last] = state.points() {
        let gap_ft = last.distance_to(*first) / METERS_PER_FOOT;
        let _ = writeln!(out, "closure gap: {gap_ft:.3} ft");
    }

    Ok(out.trim_end().to_string())
}
