//! Core types and structures for domain-hack

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Domain availability status as seen through DNS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityStatus {
    /// Resolution failed for any reason
    Available,
    /// Resolution succeeded
    Taken,
}

impl AvailabilityStatus {
    pub fn from_resolves(resolves: bool) -> Self {
        if resolves {
            AvailabilityStatus::Taken
        } else {
            AvailabilityStatus::Available
        }
    }
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
        }
    }
}

/// Output format for the generated list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Final result of a run, used for JSON output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainReport {
    pub domains: Vec<String>,
    pub count: usize,
    pub dns_checked: bool,
}

impl DomainReport {
    pub fn new(domains: Vec<String>, dns_checked: bool) -> Self {
        Self {
            count: domains.len(),
            domains,
            dns_checked,
        }
    }
}

/// Configuration for availability checking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Maximum number of domains handled by one worker
    pub batch_size: usize,
    /// Per-lookup timeout handed to the resolver
    pub lookup_timeout: Duration,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            batch_size: 10,
            lookup_timeout: Duration::from_secs(5),
        }
    }
}

/// Counters collected while filtering domains
#[derive(Debug, Default)]
pub struct CheckMetrics {
    batches_spawned: AtomicU64,
    domains_checked: AtomicU64,
    domains_available: AtomicU64,
}

impl CheckMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_batches(&self, count: u64) {
        self.batches_spawned.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_lookup(&self, status: AvailabilityStatus) {
        self.domains_checked.fetch_add(1, Ordering::Relaxed);
        if status == AvailabilityStatus::Available {
            self.domains_available.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn get_stats(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            batches_spawned: self.batches_spawned.load(Ordering::Relaxed),
            domains_checked: self.domains_checked.load(Ordering::Relaxed),
            domains_available: self.domains_available.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of [`CheckMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub batches_spawned: u64,
    pub domains_checked: u64,
    pub domains_available: u64,
}

impl MetricsSnapshot {
    pub fn domains_taken(&self) -> u64 {
        self.domains_checked.saturating_sub(self.domains_available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_resolves() {
        assert_eq!(AvailabilityStatus::from_resolves(true), AvailabilityStatus::Taken);
        assert_eq!(AvailabilityStatus::from_resolves(false), AvailabilityStatus::Available);
        assert_eq!(AvailabilityStatus::Available.to_string(), "available");
    }

    #[test]
    fn test_metrics_counting() {
        let metrics = CheckMetrics::new();
        metrics.add_batches(2);
        metrics.record_lookup(AvailabilityStatus::Available);
        metrics.record_lookup(AvailabilityStatus::Taken);
        metrics.record_lookup(AvailabilityStatus::Available);

        let stats = metrics.get_stats();
        assert_eq!(stats.batches_spawned, 2);
        assert_eq!(stats.domains_checked, 3);
        assert_eq!(stats.domains_available, 2);
        assert_eq!(stats.domains_taken(), 1);
    }

    #[test]
    fn test_domains_taken_never_underflows() {
        let stats = MetricsSnapshot {
            batches_spawned: 1,
            domains_checked: 4,
            domains_available: 5,
        };
        assert_eq!(stats.domains_taken(), 0);
    }

    #[test]
    fn test_report_counts_domains() {
        let report = DomainReport::new(vec!["re.com".to_string()], true);
        assert_eq!(report.count, 1);
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"domains":["re.com"],"count":1,"dns_checked":true}"#);
    }
}
