//! Async client for the GitHub REST v3 repository listing endpoint.
//!
//! [`GitHubClient::fetch_repositories`] issues exactly one
//! `GET /users/{user}/repos` request and returns the projected
//! [`Repository`](crate::models::Repository) list in upstream order, or a
//! [`FetchError`] naming what went wrong. [`GitHubClient::fetch_or_empty`]
//! collapses every failure into an empty list plus a `warn` log line.
//!
//! No pagination, retry or rate-limit handling is performed.

mod client;
mod error;

pub use client::{ClientConfig, GitHubClient, ListOptions, DEFAULT_BASE_URL};
pub use error::FetchError;
