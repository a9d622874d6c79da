//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Pick the log filter.
///
/// `quiet` wins over `verbose`, which wins over the `RUST_LOG` value in
/// `env`, which wins over the configured level. Anything unparsable falls
/// through to the next step, ending at `warn`.
pub fn build_filter(quiet: bool, verbose: bool, env: Option<&str>, configured: &str) -> EnvFilter {
    if quiet {
        return EnvFilter::new("off");
    }
    if verbose {
        return EnvFilter::new("debug");
    }

    env.filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(configured).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

/// Install the global subscriber. Output goes to stderr so it never mixes
/// with the menu on stdout.
pub fn init_tracing(quiet: bool, verbose: bool, configured: &str) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(quiet, verbose, env.as_deref(), configured);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
