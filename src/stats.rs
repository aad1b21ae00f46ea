use std::collections::BTreeMap;

use serde_json::Value;

use crate::models::{Repository, StatsSummary};

/// Compute aggregate statistics over `repos`.
///
/// Returns `None` for an empty slice rather than a zeroed summary.
///
/// Superlatives resolve ties to the first occurrence in input order.
/// `most_recent` compares `updated_at` as raw strings; for uniformly formatted
/// ISO-8601 UTC timestamps that is chronological order. A `null` timestamp
/// orders below every string.
pub fn summarize(repos: &[Repository]) -> Option<StatsSummary> {
    if repos.is_empty() {
        return None;
    }

    let mut languages: BTreeMap<String, usize> = BTreeMap::new();
    let mut total_stars: u64 = 0;
    let mut total_forks: u64 = 0;
    let mut private_repos = 0;

    for repo in repos {
        if let Some(lang) = &repo.language {
            *languages.entry(lang.clone()).or_insert(0) += 1;
        }
        total_stars = total_stars.saturating_add(repo.stars);
        total_forks = total_forks.saturating_add(repo.forks);
        if repo.private {
            private_repos += 1;
        }
    }

    Some(StatsSummary {
        total_repos: repos.len(),
        public_repos: repos.len() - private_repos,
        private_repos,
        total_stars,
        total_forks,
        languages,
        most_starred: first_max_by(repos, |a, b| a.stars > b.stars).cloned(),
        most_recent: first_max_by(repos, |a, b| a.updated_at > b.updated_at).cloned(),
    })
}

/// Linear scan that only replaces the current best on a strict improvement,
/// so the earliest of several equal maxima wins. `Iterator::max_by` keeps the
/// last one instead.
fn first_max_by<F>(repos: &[Repository], greater: F) -> Option<&Repository>
where
    F: Fn(&Repository, &Repository) -> bool,
{
    let mut iter = repos.iter();
    let mut best = iter.next()?;
    for repo in iter {
        if greater(repo, best) {
            best = repo;
        }
    }
    Some(best)
}

/// Wire shape for the stats endpoint: the summary object, or `{}` when absent.
pub fn summary_json(summary: Option<&StatsSummary>) -> serde_json::Result<Value> {
    match summary {
        Some(s) => serde_json::to_value(s),
        None => Ok(Value::Object(serde_json::Map::new())),
    }
}

/// Languages ordered by descending count, then name.
pub fn languages_by_count(summary: &StatsSummary) -> Vec<(&str, usize)> {
    let mut pairs: Vec<(&str, usize)> = summary
        .languages
        .iter()
        .map(|(lang, count)| (lang.as_str(), *count))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    pairs
}
