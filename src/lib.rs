//! `repo-stats` — list a GitHub user's repositories and compute dashboard statistics.
//!
//! # Flow
//! 1. Fetch one page of `GET /users/{user}/repos` ([`github::GitHubClient`]).
//! 2. Project each upstream record onto [`models::Repository`] ([`projector`]).
//! 3. Optionally narrow the list ([`filter::filter`]).
//! 4. Aggregate ([`stats::summarize`]).
//!
//! An HTTP wrapper serving a dashboard calls these functions directly:
//! `GET /repositories` maps to step 1, `GET /repositories/stats` to steps 1
//! and 4, with [`stats::summary_json`] giving `{}` for an empty list.
//!
//! The remaining modules ([`cli`], [`config`], [`snapshot`], [`report`]) back
//! the `repo-stats` binary.

pub mod cli;
pub mod config;
pub mod filter;
pub mod github;
pub mod models;
pub mod projector;
pub mod report;
pub mod snapshot;
pub mod stats;
