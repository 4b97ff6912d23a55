mod fallback;
mod github;
mod html;
mod icons;
mod loader;
mod model;
mod projects;
mod regions;
mod stats;
#[cfg(test)]
mod test_support;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use github::GithubClient;
use loader::{LoadOutcome, Loader};
use regions::DirectoryRegions;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Render the portfolio projects page regions from a public GitHub profile.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GitHub account whose repositories are listed.
    #[arg(long, env = "PORTFOLIO_USERNAME", default_value = "prachichoudhary2004")]
    username: String,

    /// GitHub REST API base URL.
    #[arg(long, default_value = github::DEFAULT_API_BASE)]
    api_base: String,

    /// Directory receiving one `<region-id>.html` file per region.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(args).await {
        Ok(outcome) => {
            match outcome {
                LoadOutcome::Live { projects_shown } => {
                    println!("Rendered {projects_shown} projects from GitHub.")
                }
                LoadOutcome::Fallback => println!("Rendered fallback projects."),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %format!("{e:#}"), "Failed to write page regions");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

async fn run(args: Args) -> anyhow::Result<LoadOutcome> {
    let mut regions = DirectoryRegions::new(&args.out_dir)?;
    let loader = Loader::new(GithubClient::new(&args.api_base)?);
    loader.load(&args.username, &mut regions).await
}
