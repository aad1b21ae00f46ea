//! Maps upstream [`RawRecord`]s onto the stable [`Repository`] schema.

use serde::Deserialize;

use crate::models::{RawRecord, Repository};

/// Project one raw record. Pure and total: every field comes from `raw`.
pub fn project(raw: RawRecord) -> Repository {
    Repository {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        url: raw.html_url,
        homepage: raw.homepage,
        language: raw.language,
        stars: raw.stargazers_count,
        forks: raw.forks_count,
        watchers: raw.watchers_count,
        open_issues: raw.open_issues_count,
        topics: raw.topics,
        private: raw.private,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
        pushed_at: raw.pushed_at,
        size: raw.size,
        license: raw.license.map(|l| l.name),
    }
}

/// Project every record, preserving input order.
pub fn project_all(raws: Vec<RawRecord>) -> Vec<Repository> {
    raws.into_iter().map(project).collect()
}

/// Project an untyped JSON object.
///
/// Fails when a required field is missing or has the wrong type; no defaults
/// are substituted.
pub fn project_value(value: &serde_json::Value) -> Result<Repository, serde_json::Error> {
    let raw = RawRecord::deserialize(value)?;
    Ok(project(raw))
}


#[cfg(test)]
mod tests {
    use super::fixtures::raw_json;
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_mapping() {
        let mut raw = raw_json(42, "demo");
        raw["homepage"] = json!("https://demo.dev");
        raw["stargazers_count"] = json!(7);
        raw["forks_count"] = json!(2);
        raw["watchers_count"] = json!(7);
        raw["open_issues_count"] = json!(3);
        raw["topics"] = json!(["cli", "rust"]);
        raw["private"] = json!(true);

        let repo = project_value(&raw).unwrap();
        assert_eq!(repo.id, 42);
        assert_eq!(repo.name, "demo");
        assert_eq!(repo.description.as_deref(), Some("demo description"));
        assert_eq!(repo.url, "https://github.com/octo/demo");
        assert_eq!(repo.homepage.as_deref(), Some("https://demo.dev"));
        assert_eq!(repo.stars, 7);
        assert_eq!(repo.forks, 2);
        assert_eq!(repo.watchers, 7);
        assert_eq!(repo.open_issues, 3);
        assert_eq!(repo.topics, vec!["cli", "rust"]);
        assert!(repo.private);
        assert_eq!(repo.size, 100);
    }

    #[test]
    fn test_null_license_is_absent() {
        let repo = project_value(&raw_json(1, "a")).unwrap();
        assert_eq!(repo.license, None);
    }

    #[test]
    fn test_license_name_extracted() {
        let mut raw = raw_json(1, "a");
        raw["license"] = json!({"key": "mit", "name": "MIT", "spdx_id": "MIT"});
        let repo = project_value(&raw).unwrap();
        assert_eq!(repo.license.as_deref(), Some("MIT"));
    }

    #[test]
    fn test_timestamps_not_reparsed() {
        let mut raw = raw_json(1, "a");
        raw["updated_at"] = json!("2024-06-01T12:30:00+02:00");
        let repo = project_value(&raw).unwrap();
        assert_eq!(repo.updated_at.as_deref(), Some("2024-06-01T12:30:00+02:00"));
    }

    #[test]
    fn test_null_pushed_at_projects_to_none() {
        let mut raw = raw_json(1, "empty-repo");
        raw["pushed_at"] = json!(null);
        let repo = project_value(&raw).unwrap();
        assert_eq!(repo.pushed_at, None);
        assert_eq!(repo.created_at.as_deref(), Some("2023-01-01T00:00:00Z"));
    }

    #[test]
    fn test_missing_required_field_fails() {
        let mut raw = raw_json(1, "a");
        raw.as_object_mut().unwrap().remove("stargazers_count");
        assert!(project_value(&raw).is_err());
    }

    #[test]
    fn test_projection_is_deterministic() {
        let raw = raw_json(9, "same");
        assert_eq!(project_value(&raw).unwrap(), project_value(&raw).unwrap());
    }

    #[test]
    fn test_json_round_trip_preserves_repository() {
        let mut raw = raw_json(5, "rt");
        raw["license"] = json!({"name": "Apache License 2.0"});
        raw["topics"] = json!(["x"]);
        let repo = project_value(&raw).unwrap();

        let text = serde_json::to_string(&repo).unwrap();
        let parsed: Repository = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, repo);
    }

    #[test]
    fn test_project_all_preserves_order() {
        let raws: Vec<RawRecord> = ["c", "a", "b"]
            .iter()
            .enumerate()
            .map(|(i, n)| serde_json::from_value(raw_json(i as u64, n)).unwrap())
            .collect();
        let names: Vec<String> = project_all(raws).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
