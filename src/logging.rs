//! Logger setup shared by the binaries

use log::LevelFilter;

/// Initialise `env_logger`: warnings by default, debug with `--verbose`.
/// `RUST_LOG` still overrides both.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
