//! # Deduce
//!
//! Forward-chaining queries over a theorem file.
//!
//! ## Usage
//!
//! ```bash
//! # Size of a theorem file
//! deduce -t theorems.json check
//!
//! # Everything that follows from P and not S
//! deduce -t theorems.json deduce '{"P": true, "S": false}'
//!
//! # Is R => Q entailed?
//! deduce -t theorems.json prove '{"atom":{"property":"R","value":true}}' \
//!                               '{"atom":{"property":"Q","value":true}}'
//!
//! # Is the converse of theorem T3 entailed?
//! deduce -t theorems.json --json-mode converse T3
//! ```

use clap::Parser;
use deduce::cli::{self, Cli};
use deduce::config::{Config, LogFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

fn main() {
    let cli = Cli::parse();

    // Logging depends on the config, so the config is read first.
    let config = match Config::discover(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(&cli, &config);

    if let Err(e) = cli::execute(cli, &config) {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Install the `tracing` subscriber on stderr.
///
/// `DEDUCE_LOG_FORMAT=json` (or `[logging] format = "json"`) enables
/// machine-parseable output. `RUST_LOG` wins over `--verbose`/`--quiet`,
/// which win over the config filter.
fn init_tracing(cli: &Cli, config: &Config) {
    let log_format = LogFormat::from_env().unwrap_or(config.logging.format);

    let default_filter = if cli.verbose {
        "deduce=debug"
    } else if cli.quiet {
        "deduce=error"
    } else {
        config.log_filter()
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match log_format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Text => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
}
