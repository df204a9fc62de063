use comply_core::overview::render_overview_markdown;
use comply_core::requests::model::seed_requests;
use comply_core::requests::render::render_requests_markdown;
use comply_core::session::Session;
use comply_core::vault::render::{
    render_detail_markdown, render_not_found_markdown, render_vault_markdown,
};

#[test]
fn overview_names_the_views_and_stats() {
    let view = render_overview_markdown();
    assert!(view.contains("SentryLink Comply Phase A"));
    assert!(view.contains("/vault"));
    assert!(view.contains("/requests"));
    assert!(view.contains("Compliance Score"));
}

#[test]
fn vault_view_reports_visible_and_total_counts() {
    let session = Session::new();
    let visible = session.visible_evidence();
    let view = render_vault_markdown(&visible, session.evidence().len());

    assert!(view.contains("6 of 6 items"));
    assert!(view.contains("Q4 Financial Records"));
    assert!(view.contains("/vault/EV003"));
}

#[test]
fn vault_view_has_an_explicit_empty_state() {
    let view = render_vault_markdown(&[], 6);
    assert!(view.contains("0 of 6 items"));
    assert!(view.contains("No evidence found"));
    assert!(view.contains("Try adjusting your filters"));
}

#[test]
fn detail_view_carries_the_long_description() {
    let session = Session::new();
    let record = session.find_evidence("EV001").unwrap();
    let view = render_detail_markdown(record);

    assert!(view.contains("# Q4 Financial Records"));
    assert!(view.contains("Identifier: EV001"));
    assert!(view.contains("## Full Details"));
    assert!(view.contains("Cash Flow Analysis"));
    assert!(view.contains("/requests"));
}

#[test]
fn not_found_view_points_back_to_the_vault() {
    let view = render_not_found_markdown("EV999");
    assert!(view.contains("Evidence Not Found"));
    assert!(view.contains("EV999"));
    assert!(view.contains("/vault"));
}

#[test]
fn requests_view_links_each_evidence_reference() {
    let requests = seed_requests();
    let view = render_requests_markdown(&requests, requests.len());

    assert!(view.contains("5 of 5 requests"));
    assert!(view.contains("Status: In Progress | Priority: Normal"));
    assert!(view.contains("/vault/EV001"));

    let empty = render_requests_markdown(&[], requests.len());
    assert!(empty.contains("No requests found"));
}
