//! Response classification
//!
//! This module decides what one fetched response *is*: a usable result page,
//! or one of several overlapping failure signatures that Shodan and its edge
//! layer emit as unstructured HTML. The decision is an ordered rule chain —
//! first match wins — kept as a literal table so the priority contract stays
//! visible and testable on its own:
//!
//! 1. edge-protection block (403/503 corroborated by a vendor marker in the body)
//! 2. any other non-200 status
//! 3. structurally unparseable document
//! 4. `.alert-notice` element
//! 5. `.alert-error` element
//! 6. server-side search timeout phrase
//! 7. unsupported-wildcard phrase
//! 8. success
//!
//! Rules 1, 6, and 7 are plain substring checks rather than structural ones:
//! the target phrases have moved between markup contexts across service
//! versions, so anchoring them to elements would silently break.

use scraper::{Html, Selector};

/// Marker corroborating that a 403/503 came from the edge layer, not the origin.
/// A 403/503 without it falls through to [`ClassificationOutcome::HttpError`];
/// broadening the match would mask genuine HTTP errors as blocks.
const EDGE_VENDOR_MARKER: &str = "cloudflare";

/// Phrase Shodan embeds when the search timed out server-side
const TIMEOUT_MARKER: &str = "The search request has timed out";

/// Phrase Shodan embeds when a wildcard query is rejected
const WILDCARD_MARKER: &str = "wildcard searches are not supported";

/// The single category assigned to one response
///
/// Exactly one variant holds per response. Every variant other than `Success`
/// is terminal for the pipeline; retry policy, if any, belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// Usable result page; extraction may proceed
    Success,

    /// Request intercepted by the edge-protection layer
    BlockedByEdgeProtection,

    /// Service-level notice banner, message cleaned of labels and whitespace
    ServiceNotice(String),

    /// Service-level error banner, message cleaned identically
    ServiceError(String),

    /// The search timed out on the server
    Timeout,

    /// The query used a wildcard the service rejects
    UnsupportedWildcard,

    /// Non-200 status with no corroborated block signature
    HttpError(u16),

    /// Body could not be parsed as an HTML document
    MalformedDocument,
}

/// One response, prepared once and borrowed by every rule
struct ResponseView<'a> {
    body: &'a str,
    body_lower: String,
    status_code: u16,
    document: Option<Html>,
}

impl<'a> ResponseView<'a> {
    fn new(body: &'a str, status_code: u16) -> Self {
        // html5ever error-recovers on nearly any input, so the structural
        // failure case is a payload with nothing to parse at all.
        let document = if body.trim().is_empty() {
            None
        } else {
            Some(Html::parse_document(body))
        };

        ResponseView {
            body,
            body_lower: body.to_lowercase(),
            status_code,
            document,
        }
    }
}

/// A single classification rule: returns an outcome or passes to the next rule
type Rule = fn(&ResponseView) -> Option<ClassificationOutcome>;

/// The rule chain, in priority order. First match wins.
const RULES: [Rule; 7] = [
    edge_block,
    http_error,
    malformed_document,
    service_notice,
    service_error,
    server_timeout,
    unsupported_wildcard,
];

/// Classifies one response into exactly one outcome
///
/// # Arguments
///
/// * `body` - Raw response body text
/// * `status_code` - HTTP status code of the response
pub fn classify(body: &str, status_code: u16) -> ClassificationOutcome {
    let view = ResponseView::new(body, status_code);

    RULES
        .iter()
        .find_map(|rule| rule(&view))
        .unwrap_or(ClassificationOutcome::Success)
}

fn edge_block(view: &ResponseView) -> Option<ClassificationOutcome> {
    // 403 and 503 are ambiguous on their own; require the vendor marker
    // before treating them as a block.
    if (view.status_code == 403 || view.status_code == 503)
        && view.body_lower.contains(EDGE_VENDOR_MARKER)
    {
        return Some(ClassificationOutcome::BlockedByEdgeProtection);
    }
    None
}

fn http_error(view: &ResponseView) -> Option<ClassificationOutcome> {
    if view.status_code != 200 {
        return Some(ClassificationOutcome::HttpError(view.status_code));
    }
    None
}

fn malformed_document(view: &ResponseView) -> Option<ClassificationOutcome> {
    if view.document.is_none() {
        return Some(ClassificationOutcome::MalformedDocument);
    }
    None
}

fn service_notice(view: &ResponseView) -> Option<ClassificationOutcome> {
    let message = select_alert_text(view.document.as_ref()?, ".alert-notice")?;
    Some(ClassificationOutcome::ServiceNotice(message))
}

fn service_error(view: &ResponseView) -> Option<ClassificationOutcome> {
    let message = select_alert_text(view.document.as_ref()?, ".alert-error")?;
    Some(ClassificationOutcome::ServiceError(message))
}

fn server_timeout(view: &ResponseView) -> Option<ClassificationOutcome> {
    if view.body.contains(TIMEOUT_MARKER) {
        return Some(ClassificationOutcome::Timeout);
    }
    None
}

fn unsupported_wildcard(view: &ResponseView) -> Option<ClassificationOutcome> {
    if view.body.contains(WILDCARD_MARKER) {
        return Some(ClassificationOutcome::UnsupportedWildcard);
    }
    None
}

/// Finds the first element matching `selector` and returns its cleaned text
fn select_alert_text(document: &Html, selector: &str) -> Option<String> {
    let selector = Selector::parse(selector).ok()?;
    let element = document.select(&selector).next()?;
    let text: String = element.text().collect();
    Some(clean_message(&text))
}

/// Normalizes a banner message for display
///
/// Collapses every run of internal whitespace (including newlines) to a
/// single space, trims the ends, and strips a leading `Error:` or `Note:`
/// label. The collapse is lossy by design; the original spacing carries no
/// meaning in these banners.
pub fn clean_message(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    let stripped = collapsed
        .strip_prefix("Error:")
        .or_else(|| collapsed.strip_prefix("Note:"))
        .unwrap_or(&collapsed);

    stripped.trim().to_string()
}
