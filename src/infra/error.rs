// ============================================================
// Layer 6 - Load Errors
// ============================================================
// Why a remote load failed. These never escape the fetcher as
// errors; they become the diagnostic logged before the fetcher
// reports "no data".

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot build http client: {source}")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with HTTP status {status}")]
    Status { url: String, status: u16 },

    #[error("response from {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl LoadError {
    pub fn url(&self) -> &str {
        match self {
            LoadError::Client { .. } => "",
            LoadError::Transport { url, .. }
            | LoadError::Status { url, .. }
            | LoadError::Decode { url, .. } => url,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let e = LoadError::Status { url: "http://x/tags.json".into(), status: 503 };
        assert_eq!(e.to_string(), "http://x/tags.json answered with HTTP status 503");
        assert_eq!(e.url(), "http://x/tags.json");
    }
}
