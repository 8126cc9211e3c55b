//! Page fetching
//!
//! This module performs the single HTTP GET of the pipeline:
//! - Building the HTTP client (transport defaults, no timeout override)
//! - Drawing a fresh browser identity from the pool on every request
//! - Forwarding any received response, including 4xx/5xx, to the classifier
//!
//! There is no retry, no cookie jar, and no session state: each call is one
//! request, and the only failure this module signals itself is a transport
//! failure (DNS, connection refused, TLS, network timeout).

use crate::{Result, ScoutError};
use rand::seq::SliceRandom;
use reqwest::header::USER_AGENT;
use reqwest::Client;

/// Raw outcome of one page fetch
///
/// Immutable once produced; the classifier and extractor only borrow it.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// Response body as text
    pub body: String,

    /// HTTP status code, whatever it was
    pub status_code: u16,
}

/// Builds the HTTP client used for all requests
///
/// Deliberately minimal: transport-default timeouts, default redirect policy,
/// compressed transfer enabled. The per-request identity is set per call in
/// [`fetch_page`], not here, so it is never sticky across requests.
pub fn build_http_client() -> std::result::Result<Client, reqwest::Error> {
    Client::builder().gzip(true).brotli(true).build()
}

/// Draws one identity string from the pool at random
///
/// The pool is validated as non-empty at config load; the fallback only
/// exists so an empty slice cannot panic here.
fn pick_identity(pool: &[String]) -> &str {
    pool.choose(&mut rand::thread_rng())
        .map(|s| s.as_str())
        .unwrap_or("Mozilla/5.0")
}

/// Performs exactly one GET against the given URL
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `url` - Fully-composed request target
/// * `identities` - Pool of browser identity strings; a new one is drawn for
///   this call
///
/// # Returns
///
/// * `Ok(FetchResult)` - Any response was received, regardless of status code
/// * `Err(ScoutError::Transport)` - The request never completed
pub async fn fetch_page(client: &Client, url: &str, identities: &[String]) -> Result<FetchResult> {
    let identity = pick_identity(identities);
    tracing::debug!(url, identity, "fetching page");

    let response = client
        .get(url)
        .header(USER_AGENT, identity)
        .send()
        .await
        .map_err(|source| ScoutError::Transport { source })?;

    let status_code = response.status().as_u16();

    let body = response
        .text()
        .await
        .map_err(|source| ScoutError::Transport { source })?;

    tracing::debug!(status_code, bytes = body.len(), "page fetched");

    Ok(FetchResult { body, status_code })
}
