use url::form_urlencoded;

use super::filter::VaultCriteria;
use super::model::{Category, EvidenceStatus};

/// Encodes the vault criteria as a query string: `search` carries the literal
/// search text, `categories` and `statuses` carry comma-joined selections.
/// Empty components are omitted entirely, so default criteria encode to "".
/// The sort key is never encoded; it stays in-memory view state.
pub fn encode_query(criteria: &VaultCriteria) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    if !criteria.search_term.is_empty() {
        serializer.append_pair("search", &criteria.search_term);
    }
    if !criteria.selected_categories.is_empty() {
        let joined = criteria
            .selected_categories
            .iter()
            .map(|category| category.as_str())
            .collect::<Vec<_>>()
            .join(",");
        serializer.append_pair("categories", &joined);
    }
    if !criteria.selected_statuses.is_empty() {
        let joined = criteria
            .selected_statuses
            .iter()
            .map(|status| status.as_str())
            .collect::<Vec<_>>()
            .join(",");
        serializer.append_pair("statuses", &joined);
    }
    serializer.finish()
}

/// Decodes a query string back into vault criteria. Decoding is defensive:
/// absent keys map to defaults, empty comma tokens are discarded, and tokens
/// naming no known category or status are dropped. A leading '?' is
/// tolerated so full URLs round-trip as well.
pub fn decode_query(query: &str) -> VaultCriteria {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut criteria = VaultCriteria::default();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            "search" => criteria.search_term = value.into_owned(),
            "categories" => {
                criteria.selected_categories = split_tokens(&value, Category::parse);
            }
            "statuses" => {
                criteria.selected_statuses = split_tokens(&value, EvidenceStatus::parse);
            }
            _ => {}
        }
    }
    criteria
}

fn split_tokens<T>(value: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    value
        .split(',')
        .filter(|token| !token.is_empty())
        .filter_map(|token| parse(token))
        .collect()
}
