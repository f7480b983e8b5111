//! Logging setup for the command-line tool
//!
//! The library only emits `tracing` events; the binary decides where they go.
//! Logs are written to stderr so stdout carries nothing but the report.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for the given verbosity flags.
///
/// `verbose` wins over `quiet`; with neither flag `RUST_LOG` is honoured.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("dts_walker=debug")
    } else if quiet {
        EnvFilter::new("dts_walker=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dts_walker=info"))
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .compact();

    // A subscriber may already be installed when embedded in a test harness
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .try_init();
}

/// Whether colored output should be used, honouring `NO_COLOR`
pub fn should_use_colors(use_colors: bool) -> bool {
    use_colors && std::env::var_os("NO_COLOR").is_none()
}
