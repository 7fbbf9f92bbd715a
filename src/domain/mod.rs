//! Domain availability checking module

pub mod checker;
pub mod resolver;

// Re-export main functionality
pub use checker::{partition_batches, AvailabilityChecker};
pub use resolver::DnsResolver;

use async_trait::async_trait;

/// Answers whether a name currently resolves.
///
/// Failures of any kind (NXDOMAIN, timeouts, malformed names) are reported
/// as `false`; implementations never surface them as errors.
#[async_trait]
pub trait Resolver: Send + Sync {
    async fn resolves(&self, name: &str) -> bool;
}
