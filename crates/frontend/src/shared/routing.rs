//! Query-string helpers for tab-synchronized pages.
//!
//! The selected tab of a tabbed page lives in the `tabName` query
//! parameter, never in component state alone, so links stay shareable and
//! the back button works. These helpers are pure; the page components own
//! the navigation side effects.

use std::collections::BTreeMap;

pub const TAB_PARAM: &str = "tabName";

/// Parse a location search string (`"?a=b"` or `"a=b"`) into an ordered map.
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Serialize a query map back into a search string, without the leading `?`.
pub fn to_query_string(query: &BTreeMap<String, String>) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

/// Merge one parameter into a query map, preserving everything else.
pub fn with_param(
    query: &BTreeMap<String, String>,
    key: &str,
    value: &str,
) -> BTreeMap<String, String> {
    let mut merged = query.clone();
    merged.insert(key.to_string(), value.to_string());
    merged
}

/// The selected-tab parameter must always be explicit in the URL.
///
/// Returns the merged parameter set when a redirect is needed; `None` once
/// the parameter is present, so a re-run can never navigate twice.
pub fn ensure_selected_tab(
    query: &BTreeMap<String, String>,
    first_route_key: &str,
) -> Option<BTreeMap<String, String>> {
    if query.contains_key(TAB_PARAM) {
        return None;
    }
    Some(with_param(query, TAB_PARAM, first_route_key))
}

/// Build a same-page href from a pathname and a query map.
pub fn href_with_query(pathname: &str, query: &BTreeMap<String, String>) -> String {
    let qs = to_query_string(query);
    if qs.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{qs}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_tab_param_yields_one_merged_redirect() {
        let current = query(&[("id", "7"), ("filter", "active")]);
        let merged = ensure_selected_tab(&current, "setup").expect("redirect expected");

        assert_eq!(merged.get(TAB_PARAM).map(String::as_str), Some("setup"));
        // Unrelated parameters survive the merge verbatim.
        assert_eq!(merged.get("id").map(String::as_str), Some("7"));
        assert_eq!(merged.get("filter").map(String::as_str), Some("active"));
    }

    #[test]
    fn present_tab_param_never_redirects() {
        let current = query(&[("tabName", "limits")]);
        assert_eq!(ensure_selected_tab(&current, "setup"), None);
    }

    #[test]
    fn query_string_round_trips_through_serde_qs() {
        let current = query(&[("a", "1"), ("tabName", "setup")]);
        let rendered = to_query_string(&current);
        assert_eq!(parse_query(&rendered), current);
        assert_eq!(parse_query(&format!("?{rendered}")), current);
    }

    #[test]
    fn href_omits_question_mark_for_empty_query() {
        assert_eq!(href_with_query("/availability", &BTreeMap::new()), "/availability");
        let merged = query(&[("tabName", "setup")]);
        assert_eq!(
            href_with_query("/event-types/7", &merged),
            "/event-types/7?tabName=setup"
        );
    }
}
