//! DNS-backed [`Resolver`]

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;

use super::Resolver;

/// Resolver that treats a successful A-record lookup as "taken"
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Build from the system resolver configuration.
    ///
    /// Each lookup is attempted once and gives up after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let (config, options) = read_system_conf().unwrap_or_else(|e| {
            tracing::warn!("Failed to read system DNS configuration: {}. Using default.", e);
            (ResolverConfig::default(), ResolverOpts::default())
        });
        Self::with_config(config, lookup_options(options, timeout))
    }

    /// Build from an explicit configuration
    pub fn with_config(config: ResolverConfig, options: ResolverOpts) -> Self {
        Self {
            inner: TokioAsyncResolver::tokio(config, options),
        }
    }
}

fn lookup_options(mut options: ResolverOpts, timeout: Duration) -> ResolverOpts {
    options.timeout = timeout;
    options.attempts = 1;
    options
}

/// Make `name` fully qualified so search domains are never appended
fn fully_qualified(name: &str) -> String {
    name.trim_end_matches('.').to_owned() + "."
}

#[async_trait]
impl Resolver for DnsResolver {
    async fn resolves(&self, name: &str) -> bool {
        match self.inner.ipv4_lookup(fully_qualified(name)).await {
            Ok(_) => true,
            Err(e) => {
                tracing::trace!(domain = %name, error = %e, "Lookup failed");
                false
            }
        }
    }
}
