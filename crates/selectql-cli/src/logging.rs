const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// The level selected by `--verbose`, or else by the `LOG_LEVEL` environment
/// variable. An unrecognized `LOG_LEVEL` falls back to the default and yields
/// a warning to log once the subscriber is installed.
pub(crate) fn log_level(
    verbose: bool,
    env_value: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }

    match env_value.map(str::trim) {
        None | Some("") => (DEFAULT_LOG_LEVEL, None),
        Some(value) if value.eq_ignore_ascii_case("verbose") => (tracing::Level::DEBUG, None),
        Some(value) => match value.parse::<tracing::Level>() {
            Ok(level) => (level, None),
            Err(_) => (
                DEFAULT_LOG_LEVEL,
                Some(format!("Invalid `LOG_LEVEL` environment variable value: `{value}`")),
            ),
        },
    }
}

pub(crate) fn setup_logger(verbose: bool) {
    let env_value = std::env::var("LOG_LEVEL").ok();
    let (level, warning) = log_level(verbose, env_value.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
