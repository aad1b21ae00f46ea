use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A repository object as returned by `GET /users/{user}/repos`.
///
/// Only the consumed fields are declared; everything else in the upstream
/// payload is ignored. Every declared key must be present. Keys GitHub
/// documents as nullable may carry `null` and become `None`, but a missing
/// key fails deserialization like any other required field.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub id: u64,
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(deserialize_with = "nullable")]
    pub homepage: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub watchers_count: u64,
    pub open_issues_count: u64,
    pub topics: Vec<String>,
    pub private: bool,
    #[serde(deserialize_with = "nullable")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub updated_at: Option<String>,
    #[serde(deserialize_with = "nullable")]
    pub pushed_at: Option<String>,
    pub size: u64,
    #[serde(deserialize_with = "nullable")]
    pub license: Option<RawLicense>,
}

// A plain `Option` field treats a missing key as `None`; routing it through
// `deserialize_with` makes the key mandatory while still accepting `null`.
fn nullable<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(d)
}

/// The nested `license` object of a [`RawRecord`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLicense {
    pub name: String,
}

/// Normalized projection of a [`RawRecord`], the shape served to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub stars: u64,
    pub forks: u64,
    pub watchers: u64,
    pub open_issues: u64,
    pub topics: Vec<String>,
    pub private: bool,
    /// ISO-8601, exactly as supplied upstream; `None` when GitHub sent `null`.
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    /// Size in kilobytes, as reported by GitHub.
    pub size: u64,
    /// License display name, e.g. `"MIT License"`.
    pub license: Option<String>,
}

impl Repository {
    pub fn visibility(&self) -> Visibility {
        if self.private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// Aggregate statistics over a non-empty sequence of [`Repository`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_repos: usize,
    pub public_repos: usize,
    pub private_repos: usize,
    pub total_stars: u64,
    pub total_forks: u64,
    /// Repository count per language; repositories without a language are not counted.
    pub languages: BTreeMap<String, usize>,
    pub most_starred: Option<Repository>,
    pub most_recent: Option<Repository>,
}

/// Value of the `type` query parameter on the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    All,
    Public,
    Private,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::All => "all",
            Visibility::Public => "public",
            Visibility::Private => "private",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value of the `sort` query parameter on the listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Created,
    Updated,
    Pushed,
    FullName,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Created => "created",
            SortKey::Updated => "updated",
            SortKey::Pushed => "pushed",
            SortKey::FullName => "full_name",
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
