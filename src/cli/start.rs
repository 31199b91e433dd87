use crate::cli::{actions::Action, commands, dispatch, telemetry};
use anyhow::Result;

/// Map the `-v` occurrence count to a tracing level, `None` keeps the
/// default filter
const fn verbosity_level(count: u8) -> Option<tracing::Level> {
    match count {
        0 => None,
        1 => Some(tracing::Level::WARN),
        2 => Some(tracing::Level::INFO),
        3 => Some(tracing::Level::DEBUG),
        _ => Some(tracing::Level::TRACE),
    }
}

/// Parse the command line, initialize telemetry and resolve the [`Action`]
/// for the binary to run
///
/// # Errors
///
/// Returns an error if telemetry initialization or argument dispatch fails
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let verbosity = verbosity_level(
        matches
            .get_one::<u8>(commands::logging::ARG_VERBOSITY)
            .map_or(0, |&count| count),
    );

    telemetry::init(verbosity)?;

    dispatch::handler(&matches)
}
