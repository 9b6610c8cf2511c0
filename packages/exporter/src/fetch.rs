//! Source fetching.
//!
//! One idempotent call per export run returns three named buckets of
//! path -> content. Failure is not an error at this interface: the
//! fetcher logs a warning and returns empty buckets, and generation
//! falls back to the registry's embedded code.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Fetched source files, keyed by path relative to their bucket root.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SourceBundle {
    /// Shared UI primitives (`button.tsx`, `card.tsx`, ...).
    pub primitives: BTreeMap<String, String>,
    /// Shared registry helpers (`utils.ts`, ...).
    pub helpers: BTreeMap<String, String>,
    /// Per-group component sources (`blocks/hero-section.tsx`, ...).
    pub components: BTreeMap<String, String>,
}

impl SourceBundle {
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty() && self.helpers.is_empty() && self.components.is_empty()
    }
}

/// Source endpoint interface. Infallible by contract: implementations
/// degrade to an empty bundle instead of raising.
pub trait SourceFetcher {
    fn fetch(&self) -> SourceBundle;
}

/// Fetches the bundle from an HTTP endpoint serving one JSON document.
pub struct HttpFetcher {
    endpoint: String,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn try_fetch(&self) -> Result<SourceBundle, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .user_agent("weaver-exporter/0.1")
            .build()?;
        client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json::<SourceBundle>()
    }
}

impl SourceFetcher for HttpFetcher {
    fn fetch(&self) -> SourceBundle {
        match self.try_fetch() {
            Ok(bundle) => bundle,
            Err(err) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    error = %err,
                    "source fetch failed, falling back to embedded component code"
                );
                SourceBundle::default()
            }
        }
    }
}

/// Serves a fixed bundle; used by tests and offline exports.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    bundle: SourceBundle,
}

impl StaticFetcher {
    pub fn new(bundle: SourceBundle) -> Self {
        Self { bundle }
    }

    /// An always-empty fetcher, equivalent to an unreachable endpoint.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl SourceFetcher for StaticFetcher {
    fn fetch(&self) -> SourceBundle {
        self.bundle.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundle_deserializes_with_missing_buckets() {
        let bundle: SourceBundle =
            serde_json::from_str(r#"{"primitives": {"button.tsx": "code"}}"#).unwrap();
        assert_eq!(bundle.primitives.len(), 1);
        assert!(bundle.helpers.is_empty());
        assert!(!bundle.is_empty());
    }

    #[test]
    fn static_fetcher_returns_its_bundle() {
        let mut bundle = SourceBundle::default();
        bundle
            .helpers
            .insert("utils.ts".to_string(), "export {}".to_string());
        let fetcher = StaticFetcher::new(bundle);
        assert_eq!(fetcher.fetch().helpers.len(), 1);
        assert!(StaticFetcher::empty().fetch().is_empty());
    }
}
