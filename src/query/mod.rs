//! Query composition
//!
//! Builds the fully-encoded request target for a faceted search. This is a
//! pure function: any pair of input strings produces a valid URL, and nothing
//! beyond percent-encoding is done to them (case, whitespace, and wildcards
//! pass through verbatim — the remote service decides what they mean).

use url::form_urlencoded;

/// Composes the absolute search URL for a query/facet pair
///
/// Both parameters are percent-encoded per standard query-encoding rules
/// (space becomes `+`, reserved characters are escaped). Decoding the result
/// recovers the original strings exactly.
///
/// # Arguments
///
/// * `endpoint` - Base URL of the faceted-search endpoint
/// * `query` - Free-text search query
/// * `facet` - Facet name, passed through without validation
pub fn compose_search_url(endpoint: &str, query: &str, facet: &str) -> String {
    let params = form_urlencoded::Serializer::new(String::new())
        .append_pair("query", query)
        .append_pair("facet", facet)
        .finish();

    format!("{}?{}", endpoint, params)
}
