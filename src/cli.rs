use std::path::PathBuf;

use clap::Parser;

use crate::filter::RepoFilter;
use crate::models::{SortKey, Visibility};

#[derive(Parser, Debug)]
#[command(
    name = "repo-stats",
    about = "Fetch a user's GitHub repositories and summarize them",
    version
)]
pub struct Cli {
    /// GitHub username whose repositories are listed
    #[arg(env = "GITHUB_USER")]
    pub username: Option<String>,

    /// Personal access token, for private repositories and higher rate limits
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Config file [default: ./.repo-stats/config.toml, fallback ~/.config/repo-stats/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Which repositories to list
    #[arg(long, value_name = "TYPE")]
    pub visibility: Option<VisibilityArg>,

    /// Upstream sort order
    #[arg(long, value_name = "KEY")]
    pub sort: Option<SortArg>,

    /// Page size sent upstream (GitHub accepts 1-100)
    #[arg(long, value_name = "N")]
    pub per_page: Option<u32>,

    /// Keep only repositories in this language (exact match)
    #[arg(long, value_name = "LANG")]
    pub language: Option<String>,

    /// Keep only repositories with at least this many stars
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub min_stars: u64,

    /// Keep only repositories with at least one topic
    #[arg(long)]
    pub has_topics: bool,

    /// Keep only repositories whose name, description or topics contain this text
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Snapshot output path [default: repositories.json]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not write the JSON snapshot
    #[arg(long)]
    pub no_snapshot: bool,

    /// Show all repositories in the terminal report; repeat for debug logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn repo_filter(&self) -> RepoFilter {
        RepoFilter {
            language: self.language.clone(),
            min_stars: self.min_stars,
            has_topics: self.has_topics,
            search: self.search.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum VisibilityArg {
    All,
    Public,
    Private,
}

impl From<VisibilityArg> for Visibility {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::All => Visibility::All,
            VisibilityArg::Public => Visibility::Public,
            VisibilityArg::Private => Visibility::Private,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SortArg {
    Created,
    Updated,
    Pushed,
    #[value(name = "full_name")]
    FullName,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Created => SortKey::Created,
            SortArg::Updated => SortKey::Updated,
            SortArg::Pushed => SortKey::Pushed,
            SortArg::FullName => SortKey::FullName,
        }
    }
}
