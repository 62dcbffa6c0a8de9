//! Configuration check tool
//!
//! Loads and validates a proxy configuration file, prints the diagnostic
//! report, and exits non-zero when the configuration is rejected. A load
//! failure is fatal by design: the proxy must never start with a bad
//! configuration, so neither does this tool.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use rdproxy_config::config::printer;
use rdproxy_config::{init_logger, Config, APP_NAME, VERSION};

/// Validate an RDP proxy configuration file
#[derive(Parser, Debug)]
#[clap(version = VERSION, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[clap(default_value = "config.ini")]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[clap(long, default_value = "info")]
    log_level: String,

    /// Validate only, do not print the configuration report
    #[clap(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    init_logger(&args.log_level);

    info!("{} v{}: checking {}", APP_NAME, VERSION, args.config.display());

    let config = match Config::from_file(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("configuration rejected: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if !args.quiet {
        printer::log_config(&config);
    }

    info!("configuration OK");
    ExitCode::SUCCESS
}
