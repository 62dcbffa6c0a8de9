//! Configuration module
//!
//! This module loads the proxy configuration from INI text, validates each
//! section, and exposes the resulting [`Config`] aggregate together with
//! its diagnostic printer.
//!
//! Loading is strict: the first violated rule in any section aborts the
//! whole load and nothing partially populated escapes to the caller.

// Submodules
mod defaults;
mod error;
mod keystore;
mod loader;
mod reader;
mod types;
pub mod printer;

// Re-export types and constants
pub use self::defaults::CHANNEL_NAME_MAX;
pub use self::error::{ConfigError, Result};
pub use self::types::Config;
