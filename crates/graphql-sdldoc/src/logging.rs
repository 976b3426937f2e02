use crate::Cli;

/// Level used when neither `-v`/`-q` nor `LOG_LEVEL` say otherwise. Summaries
/// go to stdout, so only problems are logged by default.
const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

/// The max log level for a run, plus a warning for an unusable `LOG_LEVEL`.
///
/// `--quiet` and `-v` (repeatable) take precedence over `LOG_LEVEL`.
pub(crate) fn resolve_log_level(
    verbosity: u8,
    quiet: bool,
    env_log_level: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if quiet {
        return (tracing::Level::ERROR, None);
    }
    match verbosity {
        0 => (),
        1 => return (tracing::Level::DEBUG, None),
        _ => return (tracing::Level::TRACE, None),
    }

    let Some(env_log_level) = env_log_level.map(str::trim) else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let level = match env_log_level.to_ascii_lowercase().as_str() {
        "error" => tracing::Level::ERROR,
        "warn" => tracing::Level::WARN,
        "info" => tracing::Level::INFO,
        "debug" | "verbose" => tracing::Level::DEBUG,
        "trace" => tracing::Level::TRACE,
        _ => return (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `LOG_LEVEL` environment variable value: \
                `{env_log_level}`"
            )),
        ),
    };
    (level, None)
}

/// Installs the stderr subscriber that `log` records are forwarded to.
pub(crate) fn setup_logger(cli: &Cli) {
    let env_log_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) =
        resolve_log_level(cli.verbose, cli.quiet, env_log_level.as_deref());

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
