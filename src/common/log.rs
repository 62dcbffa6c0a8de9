//! Logging utilities
//!
//! Thin wrapper around `env_logger` initialization.

/// Initialize the logging system
///
/// `level` is used as the default filter; the `RUST_LOG` environment
/// variable overrides it when set.
pub fn init_logger(level: &str) {
    let env = env_logger::Env::default()
        .filter_or("RUST_LOG", level);

    env_logger::init_from_env(env);
}
