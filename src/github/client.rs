use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Url};
use tracing::{debug, info, warn};

use super::FetchError;
use crate::models::{RawRecord, Repository, SortKey, Visibility};
use crate::projector::project_all;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// Immutable settings for a [`GitHubClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub username: String,
    /// Personal access token; sent as `Authorization: token <value>` when set.
    pub token: Option<String>,
    pub base_url: String,
    /// Whole-request timeout. Always finite and at least one second.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, token: Option<String>) -> Self {
        Self {
            username: username.into(),
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            user_agent: format!("repo-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout; `0` is raised to one second.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs.max(1);
        self
    }
}

/// Query parameters of the listing request.
///
/// Values are sent as-is; GitHub decides what an unknown `type` or an
/// out-of-range `per_page` means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub visibility: String,
    pub sort: String,
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            visibility: Visibility::All.to_string(),
            sort: SortKey::Updated.to_string(),
            per_page: 100,
        }
    }
}

impl ListOptions {
    pub fn new(visibility: Visibility, sort: SortKey, per_page: u32) -> Self {
        Self {
            visibility: visibility.to_string(),
            sort: sort.to_string(),
            per_page,
        }
    }
}

/// Fetches one page of a user's repositories.
///
/// Holds only configuration and a cloneable reqwest client, so a server can
/// share one instance across requests.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: ClientConfig,
    listing_url: Url,
}

impl GitHubClient {
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let listing_url = listing_url(&config)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .default_headers(default_headers(&config)?)
            .build()?;

        info!(
            "Created GitHub client for user {} at {}",
            config.username, config.base_url
        );

        Ok(Self {
            client,
            config,
            listing_url,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// List the user's repositories, projected and in upstream order.
    pub async fn fetch_repositories(
        &self,
        options: &ListOptions,
    ) -> Result<Vec<Repository>, FetchError> {
        let url = &self.listing_url;
        debug!(
            "GET {} type={} sort={} per_page={}",
            url, options.visibility, options.sort, options.per_page
        );

        let per_page = options.per_page.to_string();
        let response = self
            .client
            .get(url.clone())
            .query(&[
                ("type", options.visibility.as_str()),
                ("sort", options.sort.as_str()),
                ("per_page", per_page.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let raws: Vec<RawRecord> = serde_json::from_str(&body)?;
        debug!("Received {} repositories", raws.len());

        Ok(project_all(raws))
    }

    /// Like [`fetch_repositories`](Self::fetch_repositories), but any failure
    /// is logged and reported as an empty list.
    pub async fn fetch_or_empty(&self, options: &ListOptions) -> Vec<Repository> {
        match self.fetch_repositories(options).await {
            Ok(repos) => repos,
            Err(e) => {
                warn!("Error fetching repositories for {}: {}", self.config.username, e);
                Vec::new()
            }
        }
    }
}

/// `<base_url>/users/<username>/repos`, with the username escaped as one path segment.
fn listing_url(config: &ClientConfig) -> Result<Url, FetchError> {
    let invalid = || FetchError::InvalidBaseUrl(config.base_url.clone());
    let mut url = Url::parse(&config.base_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(["users", config.username.as_str(), "repos"]);
    Ok(url)
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_V3));
    headers.insert(USER_AGENT, HeaderValue::from_str(&config.user_agent)?);

    if let Some(token) = &config.token {
        let mut auth = HeaderValue::from_str(&format!("token {}", token))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
    }

    Ok(headers)
}
