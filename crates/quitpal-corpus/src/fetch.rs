use std::time::Duration;

use async_trait::async_trait;
use quitpal_core::{QuitpalError, QuitpalResult};
use tracing::{info, warn};

use crate::extract::extract_text;

/// Corpus supplied when every source fails. Always segmentable into at
/// least one sentence, so the engine never sees an empty pool.
pub const PLACEHOLDER_CORPUS: &str = "Unable to fetch articles. Using default responses.";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 5;

/// Trait for fetching a single corpus source into raw article text.
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Fetch `url` and return its readable text.
    async fn fetch_text(&self, url: &str) -> QuitpalResult<String>;
}

/// HTTP-backed [`CorpusSource`] that downloads a page and extracts its
/// article text.
pub struct ArticleFetcher {
    client: reqwest::Client,
}

impl ArticleFetcher {
    /// Create a fetcher with the default timeout and redirect policy.
    pub fn new() -> QuitpalResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| QuitpalError::Http(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl CorpusSource for ArticleFetcher {
    async fn fetch_text(&self, url: &str) -> QuitpalResult<String> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| QuitpalError::Http(format!("invalid URL '{url}': {e}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(QuitpalError::Http(format!(
                    "unsupported scheme '{scheme}' for '{url}'"
                )));
            }
        }

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| QuitpalError::Http(format!("request to '{url}' failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuitpalError::Http(format!("'{url}' returned status {status}")));
        }

        let body = response
            .text()
            .await
            .map_err(|e| QuitpalError::Http(format!("failed to read body of '{url}': {e}")))?;

        let text = extract_text(&body);
        if text.is_empty() {
            return Err(QuitpalError::Corpus(format!(
                "no article text extracted from '{url}'"
            )));
        }
        Ok(text)
    }
}

/// Fetch every source and concatenate the article texts with blank lines.
///
/// A per-source failure is logged and skipped, never fatal. When no source
/// yields text the result is [`PLACEHOLDER_CORPUS`].
pub async fn build_corpus(source: &dyn CorpusSource, urls: &[String]) -> String {
    let mut corpus = String::new();

    for url in urls {
        match source.fetch_text(url).await {
            Ok(text) => {
                info!(url = %url, chars = text.len(), "corpus source fetched");
                corpus.push_str(&text);
                corpus.push_str("\n\n");
            }
            Err(e) => {
                warn!(url = %url, error = %e, "skipping corpus source");
            }
        }
    }

    if corpus.trim().is_empty() {
        warn!("no corpus source succeeded, using placeholder corpus");
        PLACEHOLDER_CORPUS.to_string()
    } else {
        corpus
    }
}
