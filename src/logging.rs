//! Logger set-up for binaries and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default level filter for the given verbosity.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects debug output
/// (per-step positions and resolver passes) over info.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    let mut builder = Builder::from_env(env);

    // `try_init` only fails if a logger was already set. Keep the existing
    // one so tests can call `init` multiple times without panicking.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_level() {
        assert_eq!(default_level(true), LevelFilter::Debug);
        assert_eq!(default_level(false), LevelFilter::Info);
    }

    #[test]
    fn init_is_idempotent() {
        init(false);
        init(true);
    }
}
