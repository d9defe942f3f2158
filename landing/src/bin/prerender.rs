//! Render the landing page to a static HTML file.
//!
//! ```text
//! prerender --out dist/index.html --config site.json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use certifier_landing::{SiteConfig, VERSION, document};
use clap::Parser;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "prerender")]
#[command(about = "Render the Certifier landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,

    /// JSON site config; fields left out keep their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn run() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("prerender v{}", VERSION);

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load site config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    debug!(title = %config.meta.title, "site config ready");

    let bytes = document::write_page(&args.out, &config)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!("Wrote {} ({} bytes)", args.out.display(), bytes);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[prerender] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
