//! Integration tests for domain-hack

use async_trait::async_trait;
use domain_hack::{
    domain::{partition_batches, AvailabilityChecker, Resolver},
    hack::generate_domains,
    output::write_to_file,
    types::{CheckConfig, DomainReport, OutputFormat},
    TldTable,
};
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Resolver that answers from a fixed set and records every lookup
struct FakeResolver {
    taken: HashSet<String>,
    delay: Duration,
    lookups: Mutex<Vec<String>>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeResolver {
    fn new(taken: &[&str]) -> Self {
        Self {
            taken: taken.iter().map(|s| s.to_string()).collect(),
            delay: Duration::ZERO,
            lookups: Mutex::new(Vec::new()),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Resolver for FakeResolver {
    async fn resolves(&self, name: &str) -> bool {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.lookups.lock().unwrap().push(name.to_string());

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        self.taken.contains(name)
    }
}

fn candidates(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word{}.com", i)).collect()
}

#[test]
fn test_recom_example() {
    let tlds = TldTable::from_tlds(["com", "om"]);
    assert_eq!(generate_domains(&["recom"], &tlds, false), vec!["re.com", "rec.om"]);
}

#[test]
fn test_iana_file_to_candidates() {
    let tlds = TldTable::parse(
        "# Version 2024010100, Last Updated Mon Jan  1 07:07:01 2024 UTC\n\
         COM\nLY\nME\nXN--11B4C3D\nY\n",
    );
    let words = vec!["Bitly".to_string(), "awesome".to_string(), "me".to_string()];
    let domains = generate_domains(&words, &tlds, false);
    assert_eq!(domains, vec!["bit.ly", "bitl.y", "aweso.me"]);
}

#[test]
fn test_suffix_completeness() {
    let tlds = TldTable::from_tlds(["com", "om", "m", "net", "recom"]);
    let word = "intercom";
    let domains = generate_domains(&[word], &tlds, false);

    let expected: Vec<String> = tlds
        .iter()
        .filter(|tld| word.ends_with(tld) && word.len() > tld.len())
        .map(|tld| format!("{}.{}", &word[..word.len() - tld.len()], tld))
        .collect();

    assert_eq!(domains, expected);
    assert_eq!(domains, vec!["inter.com", "interc.om", "interco.m"]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_available_set_matches_failed_lookups() {
    let domains = candidates(37);
    let taken = ["word0.com", "word11.com", "word25.com", "word36.com"];
    let resolver = Arc::new(FakeResolver::new(&taken));
    let checker = AvailabilityChecker::with_resolver(CheckConfig::default(), resolver.clone());

    let available = checker.filter_available(&domains).await.unwrap();

    let expected: HashSet<String> = domains
        .iter()
        .filter(|d| !taken.contains(&d.as_str()))
        .cloned()
        .collect();
    let got: HashSet<String> = available.iter().cloned().collect();
    assert_eq!(got, expected);
    assert_eq!(available.len(), expected.len());

    let metrics = checker.get_metrics_snapshot();
    assert_eq!(metrics.batches_spawned, 4);
    assert_eq!(metrics.domains_checked, 37);
    assert_eq!(metrics.domains_available, 33);
    assert_eq!(resolver.lookups().len(), 37);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_batches_run_concurrently_but_scan_sequentially() {
    let domains = candidates(30);
    let resolver = Arc::new(FakeResolver::new(&[]).with_delay(Duration::from_millis(20)));
    let checker = AvailabilityChecker::with_resolver(CheckConfig::default(), resolver.clone());

    let available = checker.filter_available(&domains).await.unwrap();
    assert_eq!(available.len(), 30);

    // Three batches, one lookup in flight per batch
    let max_in_flight = resolver.max_in_flight.load(Ordering::SeqCst);
    assert!(max_in_flight > 1, "batches did not overlap");
    assert!(max_in_flight <= 3, "a batch ran lookups in parallel");

    // Within each batch the lookups follow input order
    let lookups = resolver.lookups();
    for batch in partition_batches(&domains, 10) {
        let positions: Vec<usize> = batch
            .iter()
            .map(|d| lookups.iter().position(|l| l == d).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test]
async fn test_custom_batch_size() {
    let config = CheckConfig {
        batch_size: 3,
        ..Default::default()
    };
    let checker = AvailabilityChecker::with_resolver(config, Arc::new(FakeResolver::new(&[])));

    checker.filter_available(&candidates(7)).await.unwrap();
    assert_eq!(checker.get_metrics_snapshot().batches_spawned, 3);
}

#[tokio::test]
async fn test_small_list_is_one_batch() {
    let domains = candidates(10);
    let checker = AvailabilityChecker::with_resolver(
        CheckConfig::default(),
        Arc::new(FakeResolver::new(&["word9.com"])),
    );

    let available = checker.filter_available(&domains).await.unwrap();
    assert_eq!(available, domains[..9].to_vec());
    assert_eq!(checker.get_metrics_snapshot().batches_spawned, 1);
}

#[tokio::test]
async fn test_generate_check_and_write() {
    let dir = tempfile::tempdir().unwrap();
    let tld_path = dir.path().join("tlds.txt");
    let out_path = dir.path().join("domains.txt");
    std::fs::write(&tld_path, "# header\nCOM\nOM\nXN--ABC\n").unwrap();

    let tlds = TldTable::load(&tld_path).await.unwrap();
    let domains = generate_domains(&["recom", "com"], &tlds, false);
    assert_eq!(domains, vec!["re.com", "rec.om", "c.om"]);

    let checker = AvailabilityChecker::with_resolver(
        CheckConfig::default(),
        Arc::new(FakeResolver::new(&["c.om"])),
    );
    let available = checker.filter_available(&domains).await.unwrap();

    let report = DomainReport::new(available, true);
    write_to_file(&out_path, &report, OutputFormat::Text).await.unwrap();
    assert_eq!(std::fs::read_to_string(&out_path).unwrap(), "re.com\nrec.om\n");
}
