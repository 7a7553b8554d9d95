// ============================================================
// Layer 4 - Remote Document Fetcher
// ============================================================
// Issues a single blocking GET against the configured endpoint
// and decodes the body as JSON.
//
// Failure policy:
//   - http client cannot be built  → LoadError::Client
//   - connection / transport error → LoadError::Transport
//   - non-2xx status               → LoadError::Status
//   - body is not JSON             → LoadError::Decode
// Each is logged and reported as "no data" (Ok(None)); nothing
// is retried and no timeout is set beyond reqwest's default.
//
// Reference: reqwest::blocking documentation

use anyhow::Result;
use reqwest::blocking::Client;

use crate::domain::tag::{question_tags, RawDocument};
use crate::domain::traits::TaxonomySource;
use crate::infra::error::LoadError;

const USER_AGENT: &str = concat!("topin-tags/", env!("CARGO_PKG_VERSION"));

/// Fetches the tag document from a fixed URL.
///
/// The HTTP client is built per fetch, so a client that cannot be
/// constructed is reported like any other load failure.
pub struct UrlFetcher {
    url: String,
}

impl UrlFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// One request, classified into a LoadError on failure.
    pub fn fetch(&self) -> Result<RawDocument, LoadError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| LoadError::Client { source })?;

        let resp = client
            .get(&self.url)
            .send()
            .map_err(|source| LoadError::Transport {
                url: self.url.clone(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        resp.json::<RawDocument>().map_err(|source| LoadError::Decode {
            url: self.url.clone(),
            source,
        })
    }
}

impl TaxonomySource for UrlFetcher {
    fn load(&self) -> Result<Option<RawDocument>> {
        match self.fetch() {
            Ok(doc) => {
                tracing::info!(
                    "Fetched tag document from {} ({} sections)",
                    self.url,
                    question_tags(&doc).map_or(0, |tags| tags.len()),
                );
                Ok(Some(doc))
            }
            Err(e) => {
                tracing::error!(url = e.url(), "Error fetching tag document: {e}");
                Ok(None)
            }
        }
    }

    fn describe(&self) -> String {
        format!("url {}", self.url)
    }
}
