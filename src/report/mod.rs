//! Report renderers for a fetched repository list.
//!
//! - [`terminal`] — colored summary box, language line and repository table;
//!   respects `--verbose` / `--quiet`.
//! - [`json`] — repositories and stats as one pretty-printed JSON document.

pub mod json;
pub mod terminal;
