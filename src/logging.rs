use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "SEMINAR_RUBRIC_LOG";

/// Maps `-q` / `-v` / `-vv` to a filter directive for this crate.
pub fn level_for(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "seminar_rubric=error",
        (false, 0) => "seminar_rubric=warn",
        (false, 1) => "seminar_rubric=info",
        (false, _) => "seminar_rubric=debug",
    }
}

/// Installs the stderr subscriber. `SEMINAR_RUBRIC_LOG` (or `RUST_LOG`)
/// overrides the flag-derived level.
pub fn init_tracing(verbose: u8, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;
    Ok(())
}
