//! Result extraction
//!
//! Walks a classified-good result page and pulls out the facet values. Each
//! result row is a `.facet-row` container holding a `.name` sub-element whose
//! emphasized (`<strong>`) text is the value. Values are trimmed, empties are
//! dropped, and document order and duplicates are preserved — the page is the
//! source of truth for both.

use scraper::{Html, Selector};

/// Structural pattern of one result row's value on the facet page
const VALUE_SELECTOR: &str = ".facet-row .name strong";

/// Extracts all facet values from a result page, in document order
///
/// An empty return is not an error here: the pipeline treats it as the
/// distinct no-results failure after this call, because a page can classify
/// as a success without carrying a single extractable row.
///
/// # Arguments
///
/// * `body` - HTML of a page already classified as a success
pub fn extract_facet_values(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);

    let Ok(selector) = Selector::parse(VALUE_SELECTOR) else {
        return Vec::new();
    };

    document
        .select(&selector)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facet_page(values: &[&str]) -> String {
        let rows: String = values
            .iter()
            .map(|v| {
                format!(
                    r#"<div class="facet-row"><div class="name"><strong>{}</strong></div><div class="count">42</div></div>"#,
                    v
                )
            })
            .collect();
        format!("<html><body><div class='facets'>{}</div></body></html>", rows)
    }

    #[test]
    fn test_extracts_in_document_order() {
        let html = facet_page(&["United States", "Germany", "Japan"]);
        assert_eq!(
            extract_facet_values(&html),
            vec!["United States", "Germany", "Japan"]
        );
    }

    #[test]
    fn test_trims_and_keeps_duplicates() {
        let html = facet_page(&["apache", " apache"]);
        assert_eq!(extract_facet_values(&html), vec!["apache", "apache"]);
    }

    #[test]
    fn test_drops_values_that_trim_to_empty() {
        let html = facet_page(&["nginx", "   ", ""]);
        assert_eq!(extract_facet_values(&html), vec!["nginx"]);
    }

    #[test]
    fn test_no_rows_yields_empty() {
        let html = "<html><body><p>Results for your search</p></body></html>";
        assert!(extract_facet_values(html).is_empty());
    }

    #[test]
    fn test_ignores_strong_outside_row_pattern() {
        let html = r#"<html><body>
            <strong>not a value</strong>
            <div class="name"><strong>also not a value</strong></div>
            <div class="facet-row"><div class="name"><strong>the-value</strong></div></div>
        </body></html>"#;
        assert_eq!(extract_facet_values(html), vec!["the-value"]);
    }

    #[test]
    fn test_value_text_spanning_nodes() {
        let html = r#"<html><body>
            <div class="facet-row"><div class="name"><strong>Hewlett<span>-</span>Packard</strong></div></div>
        </body></html>"#;
        assert_eq!(extract_facet_values(html), vec!["Hewlett-Packard"]);
    }
}
