//! `repo-stats` binary.
//!
//! # Flow
//! 1. Parse CLI arguments ([`Cli`]).
//! 2. Load config ([`load_config`]); flags override file values.
//! 3. Fetch the repository listing ([`GitHubClient`]).
//! 4. Filter ([`filter::filter`]) and summarize ([`stats::summarize`]).
//! 5. Write the JSON snapshot ([`snapshot::write_snapshot`]) unless `--no-snapshot`.
//! 6. Render the requested report ([`report`]).
//! 7. Exit `0` on success, `1` when the fetch failed.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use repo_stats::cli::{Cli, ReportFormat};
use repo_stats::config::load_config;
use repo_stats::github::GitHubClient;
use repo_stats::models::{SortKey, Visibility};
use repo_stats::{filter, report, snapshot, stats};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir().context("Cannot determine working directory")?;
    let mut config = load_config(&cwd, cli.config.as_deref())?;

    // Flags and env vars override the config file
    if cli.username.is_some() {
        config.github.username = cli.username.clone();
    }
    if cli.token.is_some() {
        config.github.token = cli.token.clone();
    }
    if let Some(visibility) = cli.visibility {
        config.fetch.visibility = Visibility::from(visibility).to_string();
    }
    if let Some(sort) = cli.sort {
        config.fetch.sort = SortKey::from(sort).to_string();
    }
    if let Some(per_page) = cli.per_page {
        config.fetch.per_page = per_page;
    }
    if let Some(output) = &cli.output {
        config.output.snapshot_path = output.clone();
    }

    let Some(client_config) = config.client_config() else {
        eprintln!(
            "{} no GitHub username given; pass it as an argument, set GITHUB_USER, or add [github] username to the config file",
            "error:".red().bold()
        );
        std::process::exit(2);
    };
    let client = GitHubClient::new(client_config)?;
    let username = client.config().username.as_str();

    let repos = match client.fetch_repositories(&config.list_options()).await {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            if let Some(hint) = e.suggestion() {
                eprintln!("  {} {}", "hint:".cyan(), hint);
            }
            std::process::exit(1);
        }
    };

    if !cli.quiet {
        eprintln!("  {} fetched {} repositories", "→".cyan(), repos.len());
    }

    let repo_filter = cli.repo_filter();
    let repos = if repo_filter.is_noop() {
        repos
    } else {
        let kept = filter::filter(&repos, &repo_filter);
        if !cli.quiet {
            eprintln!("  {} {} match the filter", "→".cyan(), kept.len());
        }
        kept
    };

    if !cli.no_snapshot {
        let path = &config.output.snapshot_path;
        snapshot::write_snapshot(&repos, path)?;
        if !cli.quiet {
            eprintln!("  {} saved to {}", "→".cyan(), path.display());
        }
    }

    let summary = stats::summarize(&repos);

    match cli.report {
        ReportFormat::Terminal => {
            report::terminal::render(
                username,
                &repos,
                summary.as_ref(),
                cli.verbose > 0,
                cli.quiet,
            )?;
        }
        ReportFormat::Json => {
            report::json::render(&repos, summary.as_ref())?;
        }
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise `-v` is info and `-vv` debug.
fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("repo_stats={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
