use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{Repository, StatsSummary, Visibility};
use crate::stats::languages_by_count;

/// Rows shown in the table unless `--verbose` is given.
const DEFAULT_ROWS: usize = 20;

/// Render a colored terminal report.
pub fn render(
    username: &str,
    repos: &[Repository],
    stats: Option<&StatsSummary>,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let Some(stats) = stats else {
        println!("No repositories found for {}", username.bold());
        return Ok(());
    };

    if quiet {
        println!(
            "Total: {}  Public: {}  Private: {}  Stars: {}  Forks: {}",
            stats.total_repos,
            stats.public_repos.to_string().green(),
            stats.private_repos.to_string().yellow(),
            stats.total_stars.to_string().cyan(),
            stats.total_forks,
        );
        return Ok(());
    }

    println!("\n {} v{}", "repo-stats".bold(), env!("CARGO_PKG_VERSION"));
    println!(" User: {}\n", username);

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    for line in summary_lines(stats) {
        println!(" │  {:<48} │", line);
    }
    println!(" └────────────────────────────────────────────────────┘\n");

    let languages = summarize_languages(stats);
    if !languages.is_empty() {
        println!(" {} {}\n", "Languages:".bold(), languages);
    }

    let shown = if verbose { repos.len() } else { repos.len().min(DEFAULT_ROWS) };
    render_table(&repos[..shown]);
    if shown < repos.len() {
        println!(
            " … {} more, use {} to list all",
            repos.len() - shown,
            "--verbose".cyan()
        );
    }
    println!();

    Ok(())
}

/// Label/value rows of the summary box, colons aligned.
fn summary_lines(stats: &StatsSummary) -> Vec<String> {
    let most_starred = stats
        .most_starred
        .as_ref()
        .map(|r| format!("{} ({}★)", r.name, r.stars))
        .unwrap_or_default();
    let most_recent = stats
        .most_recent
        .as_ref()
        .map(|r| format!("{} ({})", r.name, short_date(r.updated_at.as_deref())))
        .unwrap_or_default();
    let visibility = format!("{}/{}", stats.public_repos, stats.private_repos);

    vec![
        format!("Repositories   : {:>6}", stats.total_repos),
        format!("Public/Private : {:>6}", visibility),
        format!("Total stars    : {:>6}", stats.total_stars),
        format!("Total forks    : {:>6}", stats.total_forks),
        format!("Most starred   : {}", most_starred),
        format!("Most recent    : {}", most_recent),
    ]
}

fn render_table(repos: &[Repository]) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Language").add_attribute(Attribute::Bold),
            Cell::new("Stars").add_attribute(Attribute::Bold),
            Cell::new("Forks").add_attribute(Attribute::Bold),
            Cell::new("Topics").add_attribute(Attribute::Bold),
            Cell::new("License").add_attribute(Attribute::Bold),
            Cell::new("Visibility").add_attribute(Attribute::Bold),
            Cell::new("Updated").add_attribute(Attribute::Bold),
        ]);

    for repo in repos {
        let (visibility, visibility_color) = match repo.visibility() {
            Visibility::Private => ("private", Color::Yellow),
            _ => ("public", Color::Green),
        };

        table.add_row(vec![
            Cell::new(&repo.name),
            Cell::new(repo.language.as_deref().unwrap_or("-")),
            Cell::new(repo.stars).set_alignment(CellAlignment::Right),
            Cell::new(repo.forks).set_alignment(CellAlignment::Right),
            Cell::new(repo.topics.join(", ")),
            Cell::new(repo.license.as_deref().unwrap_or("-")).fg(Color::DarkGrey),
            Cell::new(visibility)
                .fg(visibility_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(short_date(repo.updated_at.as_deref())),
        ]);
    }

    println!("{}", table);
}

fn summarize_languages(stats: &StatsSummary) -> String {
    languages_by_count(stats)
        .iter()
        .take(5)
        .map(|(lang, count)| format!("{} ({})", lang, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Date part of an ISO-8601 timestamp; anything shorter is returned whole.
fn short_date(timestamp: Option<&str>) -> &str {
    match timestamp {
        Some(ts) => ts.get(..10).unwrap_or(ts),
        None => "-",
    }
}
