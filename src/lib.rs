//! Single-file copy with interactive overwrite confirmation.
//!
//! The library half of the `icp` binary: [`copy`] holds the copy engine and
//! [`prompt`] the overwrite confirmation protocol. Both are generic over the
//! streams they talk to so the binary can hand them stdio while tests drive
//! them with in-memory buffers.

pub mod copy;
pub mod prompt;

use tracing_subscriber::EnvFilter;

/// Initialize logging to stderr.
///
/// Verbosity mapping: 0=ERROR, 1=INFO, 2=DEBUG, 3+=TRACE; `quiet` disables
/// output entirely. An explicit `RUST_LOG` overrides the computed default.
pub fn init_logging(quiet: bool, verbose: u8) {
    let default_level = if quiet {
        "off"
    } else {
        match verbose {
            0 => "error",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
