use comply_core::vault::filter::{SortKey, VaultCriteria};
use comply_core::vault::model::{Category, EvidenceStatus};
use comply_core::vault::query::{decode_query, encode_query};

#[test]
fn empty_criteria_encode_to_empty_string_and_round_trip() {
    let criteria = VaultCriteria::default();
    let encoded = encode_query(&criteria);
    assert_eq!(encoded, "");
    assert_eq!(decode_query(&encoded), criteria);
}

#[test]
fn round_trip_preserves_search_and_selections() {
    let criteria = VaultCriteria {
        search_term: "Q4 records".to_string(),
        selected_categories: vec![Category::Financial, Category::Audit],
        selected_statuses: vec![EvidenceStatus::Archived],
        sort: SortKey::DateDesc,
    };
    let decoded = decode_query(&encode_query(&criteria));

    assert_eq!(decoded.search_term, criteria.search_term);
    assert_eq!(decoded.selected_categories, criteria.selected_categories);
    assert_eq!(decoded.selected_statuses, criteria.selected_statuses);
}

#[test]
fn sort_key_is_never_encoded() {
    let criteria = VaultCriteria {
        search_term: "audit".to_string(),
        sort: SortKey::SizeDesc,
        ..VaultCriteria::default()
    };
    let encoded = encode_query(&criteria);
    assert!(!encoded.contains("sort"));
    // Decoding yields the default sort; the caller keeps its own.
    assert_eq!(decode_query(&encoded).sort, SortKey::DateDesc);
}

#[test]
fn search_text_with_reserved_characters_round_trips() {
    let criteria = VaultCriteria {
        search_term: "contract, azure & terms".to_string(),
        ..VaultCriteria::default()
    };
    let decoded = decode_query(&encode_query(&criteria));
    assert_eq!(decoded.search_term, criteria.search_term);
}

#[test]
fn decode_discards_empty_comma_tokens() {
    let decoded = decode_query("categories=,Financial,,&statuses=,");
    assert_eq!(decoded.selected_categories, vec![Category::Financial]);
    assert!(decoded.selected_statuses.is_empty());
}

#[test]
fn decode_drops_unknown_keys_and_tokens() {
    let decoded = decode_query("page=2&categories=Financial,Bogus&statuses=Active,Nope");
    assert_eq!(decoded.selected_categories, vec![Category::Financial]);
    assert_eq!(decoded.selected_statuses, vec![EvidenceStatus::Active]);
    assert!(decoded.search_term.is_empty());
}

#[test]
fn decode_tolerates_leading_question_mark() {
    let decoded = decode_query("?search=gdpr&statuses=Active");
    assert_eq!(decoded.search_term, "gdpr");
    assert_eq!(decoded.selected_statuses, vec![EvidenceStatus::Active]);
}

#[test]
fn absent_keys_map_to_defaults() {
    let decoded = decode_query("search=logs");
    assert_eq!(decoded.search_term, "logs");
    assert!(decoded.selected_categories.is_empty());
    assert!(decoded.selected_statuses.is_empty());
    assert_eq!(decoded.sort, SortKey::DateDesc);
}
