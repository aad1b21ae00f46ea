use crate::models::Repository;

/// Independent predicates over a repository list. A predicate at its default
/// value is skipped; the survivors keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoFilter {
    /// Exact, case-sensitive language match; an empty string is treated as unset.
    pub language: Option<String>,
    /// Minimum star count; `0` disables the predicate.
    pub min_stars: u64,
    /// Keep only repositories with at least one topic.
    pub has_topics: bool,
    /// Case-insensitive substring over name, description and topics.
    pub search: Option<String>,
}

impl RepoFilter {
    pub fn is_noop(&self) -> bool {
        self.language_term().is_none()
            && self.min_stars == 0
            && !self.has_topics
            && self.search_term().is_none()
    }

    pub fn matches(&self, repo: &Repository) -> bool {
        if let Some(language) = self.language_term() {
            if repo.language.as_deref() != Some(language) {
                return false;
            }
        }

        if self.min_stars > 0 && repo.stars < self.min_stars {
            return false;
        }

        if self.has_topics && repo.topics.is_empty() {
            return false;
        }

        if let Some(term) = self.search_term() {
            if !matches_search(repo, &term) {
                return false;
            }
        }

        true
    }

    fn language_term(&self) -> Option<&str> {
        self.language.as_deref().filter(|s| !s.is_empty())
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }
}

fn matches_search(repo: &Repository, term: &str) -> bool {
    repo.name.to_lowercase().contains(term)
        || repo
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(term))
        || repo.topics.iter().any(|t| t.to_lowercase().contains(term))
}

/// Apply `filter` to `repos`, returning the surviving repositories in order.
pub fn filter(repos: &[Repository], filter: &RepoFilter) -> Vec<Repository> {
    repos.iter().filter(|r| filter.matches(r)).cloned().collect()
}
