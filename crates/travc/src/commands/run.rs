//! The `run` command: evaluate a record file and print one WKT feature row.

use std::path::Path;

use trav_diagnostic::{Diagnostic, ToDiagnostic};
use trav_wkt::{Feature, Geometry};

use super::evaluate;
use crate::config::RunConfig;

pub fn run_traverse(path: &str, config: &RunConfig) -> Result<String, Diagnostic> {
    let evaluated = evaluate(path, config)?;
    let points = evaluated.interpreter.points();

    let geometry = if config.polygon {
        Geometry::polygon(points).map_err(|err| err.to_diagnostic())?
    } else if let [only] = points {
        // A line string needs two vertices.
        Geometry::point(*only)
    } else {
        Geometry::line_string(points)
    };

    let name = config.name.clone().unwrap_or_else(|| file_stem(path));
    let feature = Feature::new(geometry, name, config.description.as_str());
    Ok(feature.to_string())
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
