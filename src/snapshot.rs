use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::Repository;

pub const DEFAULT_SNAPSHOT_PATH: &str = "repositories.json";

/// Serialize `repos` as a 2-space indented JSON array.
pub fn to_json_string(repos: &[Repository]) -> Result<String> {
    Ok(serde_json::to_string_pretty(repos)?)
}

/// Write the snapshot to `path`, replacing any previous contents.
pub fn write_snapshot(repos: &[Repository], path: &Path) -> Result<()> {
    let json = to_json_string(repos)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

    info!("Wrote {} repositories to {}", repos.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::fixtures::repo;

    #[test]
    fn test_snapshot_overwrites_and_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("repositories.json");
        std::fs::write(&path, "stale contents that are longer than the new file").unwrap();

        let repos = vec![repo(1, "one"), repo(2, "two")];
        write_snapshot(&repos, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<Repository> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, repos);
        assert!(content.starts_with("[\n  {\n    \"id\": 1,"));
    }

    #[test]
    fn test_absent_fields_written_as_null() {
        let json = to_json_string(&[repo(1, "one")]).unwrap();
        assert!(json.contains("\"license\": null"));
        assert!(json.contains("\"homepage\": null"));
    }

    #[test]
    fn test_empty_snapshot_is_empty_array() {
        assert_eq!(to_json_string(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = write_snapshot(&[], &path).unwrap_err();
        assert!(err.to_string().contains("Failed to write snapshot"));
    }
}
