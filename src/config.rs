use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::github::{ClientConfig, ListOptions, DEFAULT_BASE_URL};
use crate::snapshot::DEFAULT_SNAPSHOT_PATH;

/// Root configuration structure, deserialized from `.repo-stats/config.toml`.
///
/// Every field is optional in the file; missing ones take the defaults below.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// Where to fetch from and as whom.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct GitHubConfig {
    pub username: Option<String>,
    pub token: Option<String>,
    pub base_url: String,
    /// Request timeout in seconds; `0` is treated as `1`.
    pub timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

/// Default query parameters for the listing request.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
    pub visibility: String,
    pub sort: String,
    pub per_page: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        let options = ListOptions::default();
        Self {
            visibility: options.visibility,
            sort: options.sort,
            per_page: options.per_page,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub snapshot_path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
        }
    }
}

impl Config {
    /// Build the client settings, or `None` when no username is configured.
    pub fn client_config(&self) -> Option<ClientConfig> {
        let username = self.github.username.as_deref()?;
        let mut config = ClientConfig::new(username, self.github.token.clone())
            .with_base_url(self.github.base_url.clone())
            .with_timeout(self.github.timeout_secs);
        if let Some(agent) = &self.github.user_agent {
            config.user_agent = agent.clone();
        }
        Some(config)
    }

    pub fn list_options(&self) -> ListOptions {
        ListOptions {
            visibility: self.fetch.visibility.clone(),
            sort: self.fetch.sort.clone(),
            per_page: self.fetch.per_page,
        }
    }
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<cwd>/.repo-stats/config.toml`
/// 3. `~/.config/repo-stats/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(cwd: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = cwd.join(".repo-stats").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home.join(".config").join("repo-stats").join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.github.base_url, "https://api.github.com");
        assert_eq!(cfg.github.timeout_secs, 30);
        assert_eq!(cfg.list_options(), ListOptions::default());
        assert_eq!(cfg.output.snapshot_path, PathBuf::from("repositories.json"));
        assert!(cfg.client_config().is_none());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[github]
username = "octocat"

[fetch]
sort = "pushed"
"#,
        )
        .unwrap();

        assert_eq!(cfg.github.username.as_deref(), Some("octocat"));
        assert_eq!(cfg.fetch.sort, "pushed");
        assert_eq!(cfg.fetch.visibility, "all");
        assert_eq!(cfg.fetch.per_page, 100);

        let client = cfg.client_config().unwrap();
        assert_eq!(client.username, "octocat");
        assert_eq!(client.token, None);
        assert_eq!(client.timeout_secs, 30);
    }

    #[test]
    fn test_full_file() {
        let cfg: Config = toml::from_str(
            r#"
[github]
username = "octocat"
token = "ghp_x"
base_url = "https://ghe.example.com/api/v3"
timeout_secs = 5
user_agent = "dashboard/2"

[fetch]
visibility = "private"
sort = "full_name"
per_page = 50

[output]
snapshot_path = "out/repos.json"
"#,
        )
        .unwrap();

        let client = cfg.client_config().unwrap();
        assert_eq!(client.token.as_deref(), Some("ghp_x"));
        assert_eq!(client.base_url, "https://ghe.example.com/api/v3");
        assert_eq!(client.timeout_secs, 5);
        assert_eq!(client.user_agent, "dashboard/2");
        assert_eq!(
            cfg.list_options(),
            ListOptions {
                visibility: "private".to_string(),
                sort: "full_name".to_string(),
                per_page: 50,
            }
        );
        assert_eq!(cfg.output.snapshot_path, PathBuf::from("out/repos.json"));
    }

    #[test]
    fn test_zero_timeout_is_clamped() {
        let cfg: Config =
            toml::from_str("[github]\nusername = \"octocat\"\ntimeout_secs = 0\n").unwrap();
        assert_eq!(cfg.github.timeout_secs, 0);
        assert_eq!(cfg.client_config().unwrap().timeout_secs, 1);
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempfile::tempdir().unwrap();
        let project_dir = dir.path().join(".repo-stats");
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(
            project_dir.join("config.toml"),
            "[github]\nusername = \"from-project\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("explicit.toml");
        std::fs::write(&explicit, "[github]\nusername = \"from-flag\"\n").unwrap();

        let cfg = load_config(dir.path(), Some(&explicit)).unwrap();
        assert_eq!(cfg.github.username.as_deref(), Some("from-flag"));

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.github.username.as_deref(), Some("from-project"));
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[github]\ntimeout_secs = \"soon\"\n").unwrap();
        let err = load_config(dir.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
