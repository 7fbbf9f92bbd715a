//! Domain Hack - short domain names from word suffixes
//!
//! Splits words on every TLD they end with (`recom` → `re.com`, `rec.om`) and
//! optionally drops the names that already resolve in DNS.

pub mod config;
pub mod dictionary;
pub mod domain;
pub mod error;
pub mod hack;
pub mod output;
pub mod tld;
pub mod types;

// Re-export commonly used types
pub use config::{Overrides, Settings};
pub use error::{DomainHackError, Result};
pub use types::{AvailabilityStatus, CheckConfig, DomainReport, MetricsSnapshot, OutputFormat};

// Re-export main functionality
pub use domain::{AvailabilityChecker, DnsResolver, Resolver};
pub use hack::generate_domains;
pub use tld::TldTable;

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
