//! Command-line options for `run` and `points`.

use trav_geodesy::GeoPoint;

/// Bad command-line arguments. Reported as plain `error:` lines, not as
/// coded diagnostics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing record file path")]
    MissingFile,
    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("invalid origin '{0}': expected LAT,LON in decimal degrees")]
    InvalidOrigin(String),
}

/// Options shared by the evaluating commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunConfig {
    /// Feature name. Defaults to the record file's stem.
    pub name: Option<String>,
    /// Feature description.
    pub description: String,
    /// Emit a closed polygon instead of a line string.
    pub polygon: bool,
    /// Known starting point installed before the first record.
    pub origin: Option<GeoPoint>,
}

/// A record file plus the options that apply to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Invocation {
    pub path: String,
    pub config: RunConfig,
}

/// Parse the arguments after the command name.
pub fn parse_args(args: &[String]) -> Result<Invocation, ConfigError> {
    let mut path: Option<String> = None;
    let mut config = RunConfig::default();

    for arg in args {
        if let Some(name) = arg.strip_prefix("--name=") {
            config.name = Some(name.to_string());
        } else if let Some(desc) = arg.strip_prefix("--desc=") {
            config.description = desc.to_string();
        } else if arg == "--polygon" {
            config.polygon = true;
        } else if let Some(origin) = arg.strip_prefix("--origin=") {
            config.origin = Some(parse_origin(origin)?);
        } else if arg.starts_with('-') && arg.len() > 1 {
            return Err(ConfigError::UnknownOption(arg.clone()));
        } else if path.is_none() {
            path = Some(arg.clone());
        } else {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        }
    }

    let path = path.ok_or(ConfigError::MissingFile)?;
    Ok(Invocation { path, config })
}

/// `LAT,LON` with latitude in `[-90, 90]` and longitude in `[-180, 180]`.
pub fn parse_origin(text: &str) -> Result<GeoPoint, ConfigError> {
    let invalid = || ConfigError::InvalidOrigin(text.to_string());

    let (lat, lon) = text.split_once(',').ok_or_else(invalid)?;
    let lat: f64 = lat.trim().parse().map_err(|_| invalid())?;
    let lon: f64 = lon.trim().parse().map_err(|_| invalid())?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }
    Ok(GeoPoint::new(lat, lon))
}
