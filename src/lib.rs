//! tld-sweep - find out which TLDs a name is registered under
//!
//! One DNS NS lookup is issued per TLD. A name whose lookup reports that the
//! host does not exist is listed as available; a name whose lookup succeeds is
//! listed as registered. NS absence is a heuristic, not a registry answer.

pub mod domain;
pub mod error;
pub mod report;
pub mod tld;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TldSweepError};
pub use types::{CheckConfig, LookupOutcome, Report, TldCheck, IANA_TLD_LIST_URL};

// Re-export main functionality
pub use domain::AvailabilityChecker;
pub use report::Reporter;
pub use tld::TldSource;

use tracing_subscriber::EnvFilter;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialize the library: load `.env` and install the log subscriber.
///
/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`), so they never
/// mix with the report on stdout.
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| TldSweepError::config(format!("Could not install logger: {}", e)))?;

    Ok(())
}
