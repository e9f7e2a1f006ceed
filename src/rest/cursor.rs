//! Continuation cursor extraction from `Link` headers.
//!
//! The platform advertises further pages in a single header value of
//! comma-separated `<url>; rel="<relation>"` segments. Only `rel="next"` is
//! consulted, and only its `page_info` query parameter matters.
//!
//! Anything unexpected (no header, an empty or `"null"` value, no next
//! segment, an unparsable URL, a missing or empty `page_info`) yields no
//! cursor, which ends pagination rather than failing it.

use std::collections::HashMap;

use crate::rest::filter::CURSOR_PARAM;

/// The (lower-cased) header carrying pagination links.
pub const LINK_HEADER: &str = "link";

const NEXT_RELATION: &str = r#"rel="next""#;

/// Returns the next-page cursor advertised by `headers`, if any.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use shopify_fetch::rest::next_cursor;
///
/// let mut headers = HashMap::new();
/// headers.insert(
///     "link".to_string(),
///     vec![r#"<https://x/y?page_info=ABC123>; rel="next""#.to_string()],
/// );
/// assert_eq!(next_cursor(&headers), Some("ABC123".to_string()));
///
/// headers.insert("link".to_string(), vec!["null".to_string()]);
/// assert_eq!(next_cursor(&headers), None);
/// ```
#[must_use]
pub fn next_cursor(headers: &HashMap<String, Vec<String>>) -> Option<String> {
    let values = headers.get(LINK_HEADER).or_else(|| {
        headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(LINK_HEADER))
            .map(|(_, values)| values)
    })?;

    let value = values.first()?.trim();
    if value.is_empty() || value == "null" {
        return None;
    }

    cursor_from_link(value)
}

/// Extracts the cursor from the `rel="next"` segment of a `Link` value.
///
/// # Example
///
/// ```rust
/// use shopify_fetch::rest::cursor_from_link;
///
/// let link = r#"<https://shop.myshopify.com/admin/api/2025-10/orders.json?limit=50&page_info=prev>; rel="previous", <https://shop.myshopify.com/admin/api/2025-10/orders.json?limit=50&page_info=next>; rel="next""#;
/// assert_eq!(cursor_from_link(link), Some("next".to_string()));
/// ```
#[must_use]
pub fn cursor_from_link(value: &str) -> Option<String> {
    let segment = value
        .split(',')
        .find(|segment| segment.contains(NEXT_RELATION))?;

    let target = segment
        .split(';')
        .next()?
        .trim()
        .trim_start_matches('<')
        .trim_end_matches('>');

    let url = parse_link_target(target)?;
    url.query_pairs()
        .find(|(key, _)| key == CURSOR_PARAM)
        .map(|(_, cursor)| cursor.into_owned())
        .filter(|cursor| !cursor.is_empty())
}

// Link targets are normally absolute; relative ones resolve against a
// placeholder origin since only the query string is read.
fn parse_link_target(target: &str) -> Option<url::Url> {
    match url::Url::parse(target) {
        Ok(url) => Some(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => url::Url::parse("http://localhost/")
            .ok()?
            .join(target)
            .ok(),
        Err(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_headers(value: &str) -> HashMap<String, Vec<String>> {
        let mut headers = HashMap::new();
        headers.insert(LINK_HEADER.to_string(), vec![value.to_string()]);
        headers
    }

    #[test]
    fn test_extracts_cursor_from_single_next_segment() {
        let headers = link_headers(r#"<https://x/y?page_info=ABC123>; rel="next""#);
        assert_eq!(next_cursor(&headers), Some("ABC123".to_string()));
    }

    #[test]
    fn test_picks_next_among_several_relations() {
        let headers = link_headers(
            r#"<https://s.myshopify.com/admin/api/2025-10/products.json?page_info=xyz789>; rel="previous", <https://s.myshopify.com/admin/api/2025-10/products.json?limit=250&page_info=abc123>; rel="next""#,
        );
        assert_eq!(next_cursor(&headers), Some("abc123".to_string()));
    }

    #[test]
    fn test_no_next_segment_terminates() {
        let headers = link_headers(r#"<https://x/y?page_info=PREV>; rel="previous""#);
        assert_eq!(next_cursor(&headers), None);
    }

    #[test]
    fn test_missing_empty_or_null_header_terminates() {
        assert_eq!(next_cursor(&HashMap::new()), None);
        assert_eq!(next_cursor(&link_headers("")), None);
        assert_eq!(next_cursor(&link_headers("null")), None);

        let mut headers = HashMap::new();
        headers.insert(LINK_HEADER.to_string(), Vec::new());
        assert_eq!(next_cursor(&headers), None);
    }

    #[test]
    fn test_header_name_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "Link".to_string(),
            vec![r#"<https://x/y?page_info=ABC>; rel="next""#.to_string()],
        );
        assert_eq!(next_cursor(&headers), Some("ABC".to_string()));
    }

    #[test]
    fn test_malformed_url_terminates_instead_of_failing() {
        assert_eq!(cursor_from_link(r#"<http://[::1>; rel="next""#), None);
        assert_eq!(cursor_from_link(r#"<https://x/y?limit=5>; rel="next""#), None);
        assert_eq!(cursor_from_link(r#"<https://x/y?page_info=>; rel="next""#), None);
        assert_eq!(cursor_from_link(r#"rel="next""#), None);
    }

    #[test]
    fn test_relative_target_is_accepted() {
        assert_eq!(
            cursor_from_link(r#"</admin/api/2025-10/orders.json?page_info=REL>; rel="next""#),
            Some("REL".to_string())
        );
    }

    #[test]
    fn test_cursor_is_percent_decoded() {
        assert_eq!(
            cursor_from_link(r#"<https://x/y?page_info=eyJ%3D%3D>; rel="next""#),
            Some("eyJ==".to_string())
        );
    }
}
