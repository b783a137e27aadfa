//! Shared components for CLI commands
//!
//! Logging setup used by the load command (and any future commands).

use crate::Result;
use crate::cli::args::LoadArgs;
use tracing::debug;

/// Set up structured logging for the load command
///
/// Honors `RUST_LOG` when set; otherwise derives the filter from the
/// verbosity flags. Output goes to stderr so it never interleaves with the
/// summary printed on stdout.
pub fn setup_logging(args: &LoadArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_processor={log_level}")));

    if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with uptime timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}
