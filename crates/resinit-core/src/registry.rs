//! Package version lookup against an npm-compatible registry
//!
//! Lookups never fail from the caller's point of view: network errors,
//! unknown packages and timeouts all resolve to [`FALLBACK_VERSION`].

use crate::product::ProductConfig;
use crate::resolved::Resolved;
use anyhow::Context;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tokio::time::timeout;
use url::Url;

/// Version used when a lookup fails
pub const FALLBACK_VERSION: &str = "latest";

/// Timeout for a single lookup (5 seconds)
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    #[error("registry returned HTTP {status} for {url}")]
    Status {
        url: Url,
        status: reqwest::StatusCode,
    },

    #[error("lookup timed out after {} seconds", LOOKUP_TIMEOUT.as_secs())]
    Timeout,

    #[error("invalid registry URL: {0}")]
    Url(String),
}

/// The only field read from a `/<name>/latest` document
#[derive(Debug, Deserialize)]
struct LatestVersion {
    version: String,
}

/// Registry client shared by all lookups of a run
#[derive(Debug, Clone)]
pub struct Registry {
    base: Url,
    client: reqwest::Client,
}

impl Registry {
    /// Create a registry client with a custom user agent
    pub fn new(base: Url, user_agent: &str) -> Self {
        Self {
            base,
            client: reqwest::Client::builder()
                .user_agent(user_agent)
                .build()
                .unwrap_or_else(|_| reqwest::Client::new()),
        }
    }

    /// Create a registry client from a product config, honoring the URL override
    pub fn from_config<C: ProductConfig>(config: &C) -> anyhow::Result<Self> {
        let url_str = std::env::var(config.registry_url_env())
            .unwrap_or_else(|_| config.default_registry_url().to_string());
        let url =
            Url::parse(&url_str).with_context(|| format!("Invalid registry URL: {}", url_str))?;
        Ok(Self::new(url, config.user_agent()))
    }

    /// Build `<base>/<package>/latest`; scoped names stay a single segment
    fn latest_url(&self, package: &str) -> Result<Url, RegistryError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RegistryError::Url(self.base.to_string()))?
            .pop_if_empty()
            .push(package)
            .push("latest");
        Ok(url)
    }

    /// Fetch the latest published version of a package
    pub async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.latest_url(package)?;

        let request = async {
            let response = self
                .client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| RegistryError::Request {
                    url: url.clone(),
                    source,
                })?;

            if !response.status().is_success() {
                return Err(RegistryError::Status {
                    url: url.clone(),
                    status: response.status(),
                });
            }

            let latest: LatestVersion =
                response
                    .json()
                    .await
                    .map_err(|source| RegistryError::Request {
                        url: url.clone(),
                        source,
                    })?;
            Ok(latest.version)
        };

        match timeout(LOOKUP_TIMEOUT, request).await {
            Ok(result) => result,
            Err(_) => Err(RegistryError::Timeout),
        }
    }

    /// Look up a version, falling back to [`FALLBACK_VERSION`] on any error
    pub async fn resolve(&self, package: &str) -> Resolved<String> {
        Resolved::from_result(self.latest_version(package).await, || {
            FALLBACK_VERSION.to_string()
        })
    }

    /// Resolve every package concurrently, keeping the input order
    pub async fn resolve_all(&self, packages: &[String]) -> Vec<(String, Resolved<String>)> {
        let handles: Vec<_> = packages
            .iter()
            .map(|package| {
                let registry = self.clone();
                let package = package.clone();
                tokio::spawn(async move {
                    let version = registry.resolve(&package).await;
                    (package, version)
                })
            })
            .collect();

        let mut resolved = Vec::with_capacity(handles.len());
        for (handle, package) in handles.into_iter().zip(packages) {
            match handle.await {
                Ok(entry) => resolved.push(entry),
                Err(_) => resolved.push((
                    package.clone(),
                    Resolved::Fallback(FALLBACK_VERSION.to_string()),
                )),
            }
        }
        resolved
    }
}

/// Format resolved packages as `name@version` install arguments
pub fn install_specs(resolved: &[(String, Resolved<String>)]) -> Vec<String> {
    resolved
        .iter()
        .map(|(package, version)| format!("{}@{}", package, version.value()))
        .collect()
}
