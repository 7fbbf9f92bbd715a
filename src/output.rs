//! Writing generated domains to a file or stdout

use std::io::Write;
use std::path::Path;

use crate::error::{DomainHackError, Result};
use crate::types::{DomainReport, OutputFormat};

/// Render `report` in the requested format, without a trailing newline
pub fn render(report: &DomainReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(report.domains.join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Replace the contents of `path` with the rendered report and a trailing newline
pub async fn write_to_file(path: impl AsRef<Path>, report: &DomainReport, format: OutputFormat) -> Result<()> {
    let path = path.as_ref();
    let mut content = render(report, format)?;
    content.push('\n');

    tokio::fs::write(path, content).await.map_err(|e| {
        DomainHackError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    tracing::debug!(path = %path.display(), domains = report.count, "Domains written to file");
    Ok(())
}

/// Print the rendered report to stdout
pub fn write_to_stdout(report: &DomainReport, format: OutputFormat) -> Result<()> {
    let content = render(report, format)?;
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{}", content)?;
    handle.flush()?;
    Ok(())
}
