use anyhow::Result;
use serde_json::{json, Value};

use crate::models::{Repository, StatsSummary};
use crate::stats::summary_json;

/// `{"repositories": [...], "stats": {...}}`, with `stats` as `{}` when absent.
pub fn document(repos: &[Repository], stats: Option<&StatsSummary>) -> Result<Value> {
    Ok(json!({
        "repositories": repos,
        "stats": summary_json(stats)?,
    }))
}

pub fn render(repos: &[Repository], stats: Option<&StatsSummary>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&document(repos, stats)?)?);
    Ok(())
}
