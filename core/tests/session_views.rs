use comply_core::error::CoreError;
use comply_core::requests::model::RequestStatus;
use comply_core::requests::workflow::FormState;
use comply_core::session::Session;
use comply_core::vault::filter::SortKey;
use comply_core::vault::model::{Category, EvidenceStatus};

#[test]
fn detail_lookup_finds_seeded_record_by_exact_id() {
    let session = Session::new();
    let record = session.find_evidence("EV001").unwrap();
    assert_eq!(record.title, "Q4 Financial Records");

    let miss = session.find_evidence("EV999").unwrap_err();
    assert!(matches!(miss, CoreError::NotFound(_)));

    // No partial or case-insensitive matching.
    assert!(session.find_evidence("ev001").is_err());
    assert!(session.find_evidence("EV00").is_err());
}

#[test]
fn submit_flow_prepends_pending_record_and_closes_form() {
    let mut session = Session::new();
    let before = session.requests().len();

    session.open_request_form();
    {
        let draft = session.draft_mut().unwrap();
        draft.title = "Azure Contract - Follow Up".to_string();
        draft.evidence_id = "EV004".to_string();
        draft.requested_by = "procurement@company.com".to_string();
        draft.due_date = "2024-02-20".to_string();
    }
    let id = session.submit_request().unwrap();

    assert_eq!(id, "REQ006");
    assert_eq!(session.requests().len(), before + 1);
    let newest = &session.requests()[0];
    assert_eq!(newest.id, "REQ006");
    assert_eq!(newest.status, RequestStatus::Pending);
    // Calendar date only, no time component.
    assert_eq!(newest.requested_date.len(), 10);
    assert_eq!(newest.requested_date.matches('-').count(), 2);
    assert!(matches!(session.form(), FormState::Idle));
}

#[test]
fn rejected_submission_keeps_form_open_with_fields_intact() {
    let mut session = Session::new();
    let before = session.requests().len();

    session.open_request_form();
    session.draft_mut().unwrap().title = "Only a title".to_string();
    let error = session.submit_request().unwrap_err();
    assert!(matches!(error, CoreError::Validation(_)));

    assert_eq!(session.requests().len(), before);
    match session.form() {
        FormState::Editing(draft) => assert_eq!(draft.title, "Only a title"),
        FormState::Idle => panic!("form should remain open after a rejected submit"),
    }
}

#[test]
fn submit_without_open_form_is_a_validation_error() {
    let mut session = Session::new();
    assert!(session.submit_request().is_err());
}

#[test]
fn cancel_discards_the_draft() {
    let mut session = Session::new();
    session.open_request_form();
    session.draft_mut().unwrap().title = "Discard me".to_string();
    session.cancel_request_form();
    assert!(matches!(session.form(), FormState::Idle));

    session.open_request_form();
    assert!(session.draft_mut().unwrap().title.is_empty());
}

#[test]
fn category_toggle_is_an_involution() {
    let mut session = Session::new();
    let all = session.visible_evidence().len();

    session.toggle_category(Category::Financial);
    assert_eq!(session.visible_evidence().len(), 1);
    session.toggle_category(Category::Financial);
    assert_eq!(session.visible_evidence().len(), all);
}

#[test]
fn query_string_round_trips_through_a_fresh_session() {
    let mut session = Session::new();
    session.set_search("audit".to_string());
    session.toggle_evidence_status(EvidenceStatus::Archived);
    session.set_sort(SortKey::TitleAsc);

    let encoded = session.query_string();
    let mut restored = Session::new();
    restored.apply_query(&encoded);

    assert_eq!(restored.vault_criteria().search_term, "audit");
    assert_eq!(
        restored.vault_criteria().selected_statuses,
        vec![EvidenceStatus::Archived]
    );
    // The encoding never carries the sort key.
    assert_eq!(restored.vault_criteria().sort, SortKey::DateDesc);
    assert_eq!(
        restored.visible_evidence()[0].id,
        session.visible_evidence()[0].id
    );
}

#[test]
fn clear_vault_filters_keeps_sort_choice() {
    let mut session = Session::new();
    session.set_search("gdpr".to_string());
    session.toggle_category(Category::Compliance);
    session.set_sort(SortKey::SizeDesc);

    session.clear_vault_filters();
    assert!(!session.vault_criteria().has_active_filters());
    assert_eq!(session.vault_criteria().sort, SortKey::SizeDesc);
}

#[test]
fn request_status_toggle_filters_in_memory_only() {
    let mut session = Session::new();
    session.toggle_request_status(RequestStatus::Completed);

    let visible = session.visible_requests();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].id, "REQ003");
    // The request filter never reaches the URL projection.
    assert_eq!(session.query_string(), "");

    session.clear_request_filter();
    assert_eq!(session.visible_requests().len(), session.requests().len());
}
