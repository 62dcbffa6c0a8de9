//! RDP Proxy Configuration: loader and validator for the proxy server runtime
//!
//! This library loads the proxy server configuration from an INI source
//! (file or in-memory buffer), validates every section before any listener
//! or session logic runs, and produces a single immutable [`Config`] value
//! that later stages clone or print as needed.
//!
//! A malformed, contradictory, or incomplete configuration is rejected as a
//! whole: no partially populated `Config` ever reaches the caller, and the
//! failing section/key is logged with enough context for an operator to fix
//! the file.
//!
//! # Example
//!
//! ```no_run
//! use rdproxy_config::{Config, Result};
//! use rdproxy_config::config::printer;
//!
//! fn main() -> Result<()> {
//!     let config = Config::from_file("config.ini")?;
//!     printer::log_config(&config);
//!
//!     // Session handlers take their own independent copy.
//!     let session_view = config.clone();
//!     assert_eq!(session_view, config);
//!     Ok(())
//! }
//! ```

// Public modules
pub mod common;
pub mod config;

// Re-export commonly used structures and functions for convenience
pub use common::{init_logger, ProxyError, Result};
pub use config::{Config, ConfigError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
