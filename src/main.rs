//! changelog-release - CLI entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use changelog_release::changelog::today;
use changelog_release::{Config, GitHubSource, run_release};

/// Add a release section built from closed PR descriptions to the changelog.
#[derive(Parser, Debug)]
#[command(name = "changelog-release")]
#[command(about = "Add a release section built from closed PR descriptions to the changelog")]
struct Cli {
    /// Path to changelog file
    #[arg(long, default_value = "CHANGELOG.md")]
    changelog_path: PathBuf,

    /// Version to release. Without it nothing is changed.
    #[arg(short = 'v', long = "version")]
    version: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let Some(version) = cli.version else {
        debug!("No version given, leaving changelog untouched");
        return Ok(());
    };

    let changed_paths = release(&cli.changelog_path, &version).await?;

    for path in changed_paths {
        info!("File changed: {}", path.display());
    }

    Ok(())
}

/// Run a release and print its output object on stdout.
async fn release(changelog_path: &Path, version: &str) -> Result<Vec<PathBuf>> {
    let config = Config::from_env().context("Invalid GitHub configuration")?;
    debug!("Releasing {} for {}", version, config.repository);

    let source = GitHubSource::from_config(&config)?;

    let report = run_release(&source, changelog_path, version, &today())
        .await
        .context("Failed to update changelog")?;

    let output = report.output.to_json_line()?;
    debug!("{}", output);
    println!("{}", output);

    Ok(report.changed_paths)
}

/// Log to stderr. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,changelog_release=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
