//! Package registry lookups for published skill versions

use std::time::Duration;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Result, SkillError};

/// Default package registry
pub const DEFAULT_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Maximum number of versions listed
pub const MAX_LISTED_VERSIONS: usize = 10;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Package document as served by the registry (only the fields we read)
#[derive(Debug, Deserialize)]
pub struct PackageDocument {
    /// Published versions in publication order
    #[serde(default)]
    pub versions: Map<String, Value>,
    #[serde(default, rename = "dist-tags")]
    pub dist_tags: DistTags,
}

#[derive(Debug, Default, Deserialize)]
pub struct DistTags {
    pub latest: Option<String>,
}

impl PackageDocument {
    /// Most recently published versions, newest first
    pub fn recent_versions(&self, limit: usize) -> Vec<String> {
        self.versions.keys().rev().take(limit).cloned().collect()
    }

    pub fn latest(&self) -> Option<&str> {
        self.dist_tags.latest.as_deref()
    }
}

/// HTTP client for the package registry
pub struct RegistryClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl RegistryClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("taiwan-skill/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch the package document for `package`
    pub fn fetch_package(&self, package: &str) -> Result<PackageDocument> {
        let url = format!("{}/{}", self.base_url, package);
        tracing::debug!(%url, "fetching package document");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkillError::Registry {
                message: format!("{url} returned {status}"),
            });
        }

        Ok(response.json()?)
    }
}
