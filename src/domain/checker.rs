//! Batched DNS availability checker

use std::sync::Arc;
use std::time::Instant;

use futures::future::join_all;
use indicatif::ProgressBar;

use super::{DnsResolver, Resolver};
use crate::error::Result;
use crate::types::{AvailabilityStatus, CheckConfig, CheckMetrics, MetricsSnapshot};

/// Split `domains` into consecutive batches of at most `batch_size` entries.
///
/// An empty list produces no batches. A `batch_size` of zero is treated as one.
pub fn partition_batches(domains: &[String], batch_size: usize) -> Vec<Vec<String>> {
    domains
        .chunks(batch_size.max(1))
        .map(<[String]>::to_vec)
        .collect()
}

/// Filters candidate domains down to the ones that do not resolve
pub struct AvailabilityChecker {
    config: CheckConfig,
    resolver: Arc<dyn Resolver>,
    metrics: Arc<CheckMetrics>,
    progress: Option<ProgressBar>,
}

impl AvailabilityChecker {
    /// Create a checker backed by the system DNS configuration
    pub fn new() -> Self {
        Self::with_config(CheckConfig::default())
    }

    /// Create a checker backed by the system DNS configuration
    pub fn with_config(config: CheckConfig) -> Self {
        let resolver = Arc::new(DnsResolver::new(config.lookup_timeout));
        Self::with_resolver(config, resolver)
    }

    /// Create a checker around any [`Resolver`]
    pub fn with_resolver(config: CheckConfig, resolver: Arc<dyn Resolver>) -> Self {
        Self {
            config,
            resolver,
            metrics: Arc::new(CheckMetrics::new()),
            progress: None,
        }
    }

    /// Advance `bar` once per checked domain
    pub fn with_progress(mut self, bar: ProgressBar) -> Self {
        self.progress = Some(bar);
        self
    }

    /// Keep only the domains that fail to resolve.
    ///
    /// Every batch runs on its own task and is scanned sequentially. The call
    /// returns once all tasks have finished; each task's findings are appended
    /// in batch order.
    pub async fn filter_available(&self, domains: &[String]) -> Result<Vec<String>> {
        let start = Instant::now();
        let batches = partition_batches(domains, self.config.batch_size);
        self.metrics.add_batches(batches.len() as u64);

        if batches.len() > 1 {
            tracing::info!(
                domains = domains.len(),
                batches = batches.len(),
                "Splitting DNS check into multiple workers"
            );
        }

        let handles = batches.into_iter().map(|batch| {
            let resolver = Arc::clone(&self.resolver);
            let metrics = Arc::clone(&self.metrics);
            let progress = self.progress.clone();
            tokio::spawn(check_batch(resolver, metrics, progress, batch))
        });

        let mut available = Vec::new();
        for found in join_all(handles).await {
            available.extend(found?);
        }

        let duration = start.elapsed();
        tracing::info!(
            domains_requested = %domains.len(),
            domains_available = %available.len(),
            duration_ms = %duration.as_millis(),
            "DNS check completed"
        );

        Ok(available)
    }

    /// Get current metrics snapshot
    pub fn get_metrics_snapshot(&self) -> MetricsSnapshot {
        self.metrics.get_stats()
    }
}

impl Default for AvailabilityChecker {
    fn default() -> Self {
        Self::new()
    }
}

async fn check_batch(
    resolver: Arc<dyn Resolver>,
    metrics: Arc<CheckMetrics>,
    progress: Option<ProgressBar>,
    batch: Vec<String>,
) -> Vec<String> {
    let mut available = Vec::new();

    for domain in batch {
        let status = check_one(resolver.as_ref(), &metrics, &domain).await;
        if let Some(bar) = &progress {
            bar.inc(1);
        }
        if status == AvailabilityStatus::Available {
            available.push(domain);
        }
    }

    available
}

async fn check_one(resolver: &dyn Resolver, metrics: &CheckMetrics, domain: &str) -> AvailabilityStatus {
    let status = AvailabilityStatus::from_resolves(resolver.resolves(domain).await);
    metrics.record_lookup(status);
    tracing::debug!(domain = %domain, status = %status, "Domain checked");
    status
}
