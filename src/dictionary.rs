//! Dictionary word source

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;

use crate::error::{DomainHackError, Result};

/// System word list used when no dictionary file is given
pub const DEFAULT_DICTIONARY: &str = "/usr/share/dict/words";

/// Select dictionary words of at most `max_len` characters.
///
/// Words are lower-cased; anything that cannot appear in a DNS label
/// (apostrophes, accents, spaces) is dropped along with repeats.
pub fn filter_words(contents: &str, max_len: usize) -> Result<Vec<String>> {
    let label_chars = Regex::new(r"^[a-z0-9-]+$")
        .map_err(|e| DomainHackError::internal(e.to_string()))?;

    let mut seen = HashSet::new();
    Ok(contents
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| !word.is_empty() && word.chars().count() <= max_len)
        .filter(|word| label_chars.is_match(word))
        .filter(|word| seen.insert(word.clone()))
        .collect())
}

/// Read a newline-separated word list and keep words of at most `max_len` characters
pub async fn load_dictionary(path: impl AsRef<Path>, max_len: usize) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        DomainHackError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let words = filter_words(&contents, max_len)?;
    tracing::debug!(path = %path.display(), words = words.len(), max_len, "Loaded dictionary");
    Ok(words)
}
