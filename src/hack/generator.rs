//! Suffix-matching domain hack generator

use std::collections::HashSet;

use crate::tld::TldTable;

/// Split `word` into `prefix.tld` when `tld` is a proper suffix of it.
///
/// Expects both arguments lower-cased. Returns `None` when the word does not
/// end with the TLD or when nothing would be left in front of the dot.
pub fn split_word(word: &str, tld: &str) -> Option<String> {
    let prefix = word.strip_suffix(tld)?;
    if prefix.is_empty() {
        return None;
    }
    Some(format!("{}.{}", prefix, tld))
}

/// Generate every domain hack for `words` against `tlds`.
///
/// Each word is lower-cased and tested against the TLDs in table order; every
/// matching TLD yields its own candidate. Output is grouped by word in input
/// order and is not de-duplicated.
pub fn generate_domains<S: AsRef<str>>(words: &[S], tlds: &TldTable, progress: bool) -> Vec<String> {
    let amount = words.len();
    let mut domains = Vec::new();

    for (index, word) in words.iter().enumerate() {
        let word = word.as_ref().to_lowercase();

        if progress {
            let percentage = (index + 1) as f64 / amount as f64 * 100.0;
            tracing::info!("({:.2}%) Finding domains for '{}'...", percentage, word);
        }

        domains.extend(tlds.iter().filter_map(|tld| split_word(&word, tld)));
    }

    tracing::debug!(words = amount, domains = domains.len(), "Domain generation completed");
    domains
}

/// Drop repeated domains, keeping the first occurrence of each
pub fn dedup_preserving_order(domains: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(domains.len());
    domains
        .into_iter()
        .filter(|domain| seen.insert(domain.clone()))
        .collect()
}
