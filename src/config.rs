//! Run configuration
//!
//! Values come from command line flags first, then `DOMAIN_HACK_*`
//! environment variables (a `.env` file is honored, see [`crate::init`]),
//! then built-in defaults.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::dictionary::DEFAULT_DICTIONARY;
use crate::error::Result;
use crate::tld::DEFAULT_TLD_FILE;
use crate::types::{CheckConfig, OutputFormat};

pub const ENV_TLD_FILE: &str = "DOMAIN_HACK_TLD_FILE";
pub const ENV_DICTIONARY: &str = "DOMAIN_HACK_DICTIONARY";
pub const ENV_DNS_TIMEOUT: &str = "DOMAIN_HACK_DNS_TIMEOUT";

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub tld_file: Option<PathBuf>,
    pub dictionary_file: Option<PathBuf>,
    pub dns_timeout_secs: Option<u64>,
    pub json: bool,
}

/// Effective settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub tld_file: PathBuf,
    pub dictionary_file: PathBuf,
    pub check: CheckConfig,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tld_file: PathBuf::from(DEFAULT_TLD_FILE),
            dictionary_file: PathBuf::from(DEFAULT_DICTIONARY),
            check: CheckConfig::default(),
            format: OutputFormat::Text,
        }
    }
}

impl Settings {
    /// Resolve settings against the process environment
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::resolve(overrides, |key| env::var(key).ok())
    }

    /// Resolve settings against an arbitrary variable lookup
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let tld_file = overrides
            .tld_file
            .or_else(|| lookup(ENV_TLD_FILE).map(PathBuf::from))
            .unwrap_or(defaults.tld_file);

        let dictionary_file = overrides
            .dictionary_file
            .or_else(|| lookup(ENV_DICTIONARY).map(PathBuf::from))
            .unwrap_or(defaults.dictionary_file);

        let timeout_secs = match overrides.dns_timeout_secs {
            Some(secs) => Some(secs),
            None => lookup(ENV_DNS_TIMEOUT)
                .map(|raw| parse_timeout(&raw))
                .transpose()?,
        };

        let mut check = defaults.check;
        if let Some(secs) = timeout_secs {
            if secs == 0 {
                return Err(crate::config_error!("DNS timeout must be at least one second"));
            }
            check.lookup_timeout = Duration::from_secs(secs);
        }

        let format = if overrides.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        Ok(Self {
            tld_file,
            dictionary_file,
            check,
            format,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| crate::config_error!("{} must be a number of seconds, got '{}': {}", ENV_DNS_TIMEOUT, raw, e))
}
