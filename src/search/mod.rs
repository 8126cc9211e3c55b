//! Search pipeline
//!
//! Ties the components together into the one operation this crate exposes:
//! compose the URL, fetch the page once, classify the response, and extract
//! the facet values. The chain is strictly sequential and owns all of its
//! data for the duration of one call — nothing is shared across invocations,
//! nothing is cached, nothing is retried.

use crate::classify::{classify, ClassificationOutcome};
use crate::config::{validate, SearchConfig};
use crate::extract::extract_facet_values;
use crate::fetch::{build_http_client, fetch_page};
use crate::query::compose_search_url;
use crate::{Result, ScoutError};
use reqwest::Client;

/// A configured faceted-search client
///
/// Holds the immutable configuration and the HTTP client. The client is
/// reusable across searches, but each search is an independent
/// fetch→classify→extract chain.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: SearchConfig,
    http: Client,
}

impl SearchClient {
    /// Creates a client from an explicit configuration
    ///
    /// The configuration is validated here so an injected one (not loaded
    /// through the config parser) cannot smuggle in an empty identity pool.
    pub fn new(config: SearchConfig) -> Result<Self> {
        validate(&config)?;
        let http = build_http_client().map_err(ScoutError::Client)?;
        Ok(SearchClient { config, http })
    }

    /// Runs one faceted search
    ///
    /// # Arguments
    ///
    /// * `query` - Free-text search query, passed through verbatim
    /// * `facet` - Facet name, not validated against any catalog
    ///
    /// # Returns
    ///
    /// * `Ok(values)` - Non-empty list of facet values in document order
    /// * `Err(ScoutError)` - A typed failure from any stage of the pipeline
    pub async fn search(&self, query: &str, facet: &str) -> Result<Vec<String>> {
        let url = compose_search_url(&self.config.endpoint, query, facet);
        tracing::debug!(query, facet, %url, "running faceted search");

        let page = fetch_page(&self.http, &url, &self.config.user_agents).await?;

        match classify(&page.body, page.status_code) {
            ClassificationOutcome::Success => {}
            outcome => {
                tracing::debug!(?outcome, "response rejected by classifier");
                return Err(outcome_error(outcome));
            }
        }

        let values = extract_facet_values(&page.body);
        if values.is_empty() {
            // A page can classify clean and still carry zero rows.
            return Err(ScoutError::NoResults);
        }

        tracing::debug!(count = values.len(), "search succeeded");
        Ok(values)
    }
}

/// Maps a non-success classification to its error value
fn outcome_error(outcome: ClassificationOutcome) -> ScoutError {
    match outcome {
        ClassificationOutcome::Success => {
            // Callers only reach this function for non-success outcomes.
            ScoutError::NoResults
        }
        ClassificationOutcome::BlockedByEdgeProtection => ScoutError::Blocked,
        ClassificationOutcome::ServiceNotice(message) => ScoutError::Notice(message),
        ClassificationOutcome::ServiceError(message) => ScoutError::Service(message),
        ClassificationOutcome::Timeout => ScoutError::Timeout,
        ClassificationOutcome::UnsupportedWildcard => ScoutError::Wildcard,
        ClassificationOutcome::HttpError(code) => ScoutError::Http(code),
        ClassificationOutcome::MalformedDocument => ScoutError::MalformedDocument,
    }
}
