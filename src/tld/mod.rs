//! TLD table loading
//!
//! The table is read from the IANA `tlds-alpha-by-domain.txt` format: one TLD
//! per line, `#` comment lines, upper-case entries. Punycode (`xn--`) entries
//! are dropped since they can never be a suffix of a plain word.

#[cfg(feature = "download")]
pub mod download;

#[cfg(feature = "download")]
pub use download::download_tlds;

use std::path::Path;

use crate::error::{DomainHackError, Result};

/// Default location of the TLD list, relative to the working directory
pub const DEFAULT_TLD_FILE: &str = "tlds.txt";

/// Upstream source of the TLD list
pub const IANA_TLD_URL: &str = "https://data.iana.org/TLD/tlds-alpha-by-domain.txt";

/// Request timeout for the TLD list download
pub const DOWNLOAD_TIMEOUT_SECS: u64 = 500;

const PUNYCODE_PREFIX: &str = "XN--";

/// Ordered list of lower-cased TLDs.
///
/// Order follows the source file and decides the order in which suffix
/// matches are emitted for a word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TldTable {
    tlds: Vec<String>,
}

impl TldTable {
    /// Build a table from already-clean entries
    pub fn from_tlds<I, S>(tlds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tlds: tlds.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the contents of a TLD list file
    pub fn parse(contents: &str) -> Self {
        let tlds = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('#'))
            .filter(|line| !line.to_uppercase().starts_with(PUNYCODE_PREFIX))
            .map(str::to_lowercase)
            .collect();

        Self { tlds }
    }

    /// Read and parse a TLD list file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            let display = path.to_string_lossy().to_string();
            if e.kind() == std::io::ErrorKind::NotFound {
                DomainHackError::missing_tld_file(display)
            } else {
                DomainHackError::io(e.to_string(), Some(display))
            }
        })?;

        let table = Self::parse(&contents);
        tracing::debug!(path = %path.display(), tlds = table.len(), "Loaded TLD table");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.tlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tlds.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tlds
    }

    pub fn contains(&self, tld: &str) -> bool {
        self.tlds.iter().any(|t| t == tld)
    }
}
