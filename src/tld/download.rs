//! IANA TLD list download

use std::path::Path;
use std::time::Duration;

use reqwest::Client;

use super::TldTable;
use crate::error::{DomainHackError, Result};

/// Fetch the TLD list from `url` and store it verbatim at `path`.
///
/// Returns the number of usable TLDs in the downloaded list. Nothing is
/// written unless the server answers with a success status.
pub async fn download_tlds(url: &str, path: impl AsRef<Path>, timeout: Duration) -> Result<usize> {
    let path = path.as_ref();
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(concat!("domain-hack/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| DomainHackError::internal(format!("Failed to create HTTP client: {}", e)))?;

    tracing::debug!(url = %url, "Requesting TLD list");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| request_error(e, timeout))?;

    let status = response.status();
    if !status.is_success() {
        return Err(DomainHackError::network(
            format!("TLD list request failed with status {}", status),
            Some(status.as_u16()),
            Some(url.to_string()),
        ));
    }

    let body = response.text().await.map_err(|e| request_error(e, timeout))?;
    tokio::fs::write(path, &body).await.map_err(|e| {
        DomainHackError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    let count = TldTable::parse(&body).len();
    tracing::info!(path = %path.display(), tlds = count, "TLD list saved");
    Ok(count)
}

fn request_error(err: reqwest::Error, timeout: Duration) -> DomainHackError {
    if err.is_timeout() {
        DomainHackError::timeout("TLD download", timeout.as_secs())
    } else {
        err.into()
    }
}
