//! Domain Hack - a generator for short domains with dots
//!
//! Reads the IANA TLD list, splits the given words on every TLD they end
//! with and optionally drops the names that already resolve.

use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use domain_hack::{
    dictionary::load_dictionary,
    domain::AvailabilityChecker,
    hack::{dedup_preserving_order, generate_domains},
    output::{write_to_file, write_to_stdout},
    tld::TldTable,
    DomainHackError, DomainReport, Overrides, Settings,
};

#[derive(Parser, Debug)]
#[command(name = "domain-hack")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A generator for short domains with dots.")]
#[command(after_help = "The TLD list is read from tlds.txt in the working directory; fetch it once with --download-tlds.")]
struct Cli {
    /// Download an up-to-date list of TLDs and exit
    #[arg(long = "download-tlds")]
    download: bool,

    /// Generate domains from the given text. Can be used multiple times
    #[arg(short = 'g', long = "generate", value_name = "TEXT", num_args = 1.., action = ArgAction::Append)]
    generate: Vec<String>,

    /// Drop every domain that has a valid A record
    #[arg(short = 'd', long = "dns-check")]
    dns_check: bool,

    /// Write the domains to a file, one per line
    #[arg(long = "outfile", value_name = "FILE")]
    outfile: Option<PathBuf>,

    /// Add every dictionary word with a length equal or below LENGTH
    #[arg(long = "dictionary", value_name = "LENGTH", default_value_t = 0)]
    dictionary: usize,

    /// Word list used by --dictionary [env: DOMAIN_HACK_DICTIONARY]
    #[arg(long = "dictionary-file", value_name = "FILE")]
    dictionary_file: Option<PathBuf>,

    /// TLD list location [env: DOMAIN_HACK_TLD_FILE] [default: tlds.txt]
    #[arg(long = "tld-file", value_name = "FILE")]
    tld_file: Option<PathBuf>,

    /// Per-lookup DNS timeout in seconds [env: DOMAIN_HACK_DNS_TIMEOUT] [default: 5]
    #[arg(long = "dns-timeout", value_name = "SECS")]
    dns_timeout: Option<u64>,

    /// Remove repeated domains from the output
    #[arg(long = "unique")]
    unique: bool,

    /// Print a JSON report instead of plain lines
    #[arg(long = "json")]
    json: bool,

    /// Report progress for every word
    #[arg(short = 'v', long = "verbose", conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short = 'q', long = "quiet")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(&cli) {
        eprintln!("❌ Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = domain_hack::init() {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<DomainHackError>() {
            Some(e) => eprintln!("{}", e.user_message()),
            None => eprintln!("❌ Error: {:#}", err),
        }
        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,domain_hack={}", level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(Overrides {
        tld_file: cli.tld_file.clone(),
        dictionary_file: cli.dictionary_file.clone(),
        dns_timeout_secs: cli.dns_timeout,
        json: cli.json,
    })?;

    if cli.download {
        return download(&settings.tld_file).await;
    }

    let tlds = TldTable::load(&settings.tld_file).await?;

    let mut words = cli.generate;
    if cli.dictionary > 0 {
        info!("Grabbing dictionary...");
        words.extend(load_dictionary(&settings.dictionary_file, cli.dictionary).await?);
    }

    info!("Generating domains...");
    let mut domains = generate_domains(&words, &tlds, cli.verbose);
    if cli.unique {
        domains = dedup_preserving_order(domains);
    }

    if cli.dns_check {
        info!("Checking DNS...");
        let bar = progress_bar(domains.len() as u64, cli.quiet)?;
        let checker = AvailabilityChecker::with_config(settings.check.clone()).with_progress(bar.clone());
        domains = checker.filter_available(&domains).await?;
        bar.finish_and_clear();

        let metrics = checker.get_metrics_snapshot();
        info!(
            "{} of {} domains available ({} workers)",
            metrics.domains_available, metrics.domains_checked, metrics.batches_spawned
        );
    }

    let report = DomainReport::new(domains, cli.dns_check);
    match &cli.outfile {
        Some(path) => {
            info!("Writing domains to file...");
            write_to_file(path, &report, settings.format).await?;
            info!("Done!");
        }
        None => write_to_stdout(&report, settings.format)?,
    }

    Ok(())
}

#[cfg(feature = "download")]
async fn download(path: &Path) -> anyhow::Result<()> {
    use domain_hack::tld::{download_tlds, DOWNLOAD_TIMEOUT_SECS, IANA_TLD_URL};
    use std::time::Duration;

    info!("Downloading TLDs...");
    let count = download_tlds(IANA_TLD_URL, path, Duration::from_secs(DOWNLOAD_TIMEOUT_SECS)).await?;
    info!("Done! {} TLDs saved to {}", count, path.display());
    Ok(())
}

#[cfg(not(feature = "download"))]
async fn download(_path: &Path) -> anyhow::Result<()> {
    Err(DomainHackError::config("this build does not include the `download` feature").into())
}

fn progress_bar(len: u64, quiet: bool) -> anyhow::Result<ProgressBar> {
    if quiet {
        return Ok(ProgressBar::hidden());
    }
    let style = ProgressStyle::default_bar()
        .template("{spinner} [{elapsed_precise}] {wide_bar} {pos}/{len}")?;
    Ok(ProgressBar::new(len).with_style(style))
}
