use time::{format_description, Date, OffsetDateTime};

use crate::error::{CoreError, CoreResult};

use super::model::{Priority, RequestRecord, RequestStatus};

/// Fields gathered by the new-request form. Priority defaults to Normal;
/// description is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestDraft {
    pub title: String,
    pub evidence_id: String,
    pub priority: Priority,
    pub requested_by: String,
    pub due_date: String,
    pub description: String,
}

/// The creation workflow has exactly two states: form closed, or form open
/// with a draft in progress. Cancel discards the draft; a successful submit
/// returns to Idle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Idle,
    Editing(RequestDraft),
}

/// Checks the four required fields together and reports every miss in one
/// aggregate notice, so the caller never learns about them one at a time.
pub fn validate_draft(draft: &RequestDraft) -> CoreResult<()> {
    let mut missing = Vec::new();
    if draft.title.trim().is_empty() {
        missing.push("title");
    }
    if draft.evidence_id.trim().is_empty() {
        missing.push("evidence id");
    }
    if draft.requested_by.trim().is_empty() {
        missing.push("requested by");
    }
    if draft.due_date.trim().is_empty() {
        missing.push("due date");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Sequential identifier derived from the current collection size, formatted
/// as "REQ" plus a zero-padded ordinal of width 3.
pub fn next_request_id(collection_size: usize) -> String {
    format!("REQ{:03}", collection_size + 1)
}

/// Synthesizes the record for a valid draft. New records always start
/// Pending; the evidence title is a display label derived from the supplied
/// evidence id, since no richer lookup is performed. The caller prepends the
/// record to keep the collection most-recent-first.
pub fn create_request(
    existing: &[RequestRecord],
    draft: &RequestDraft,
    requested_date: &str,
) -> CoreResult<RequestRecord> {
    validate_draft(draft)?;
    Ok(RequestRecord {
        id: next_request_id(existing.len()),
        title: draft.title.clone(),
        evidence_title: format!("Evidence - {}", draft.evidence_id),
        evidence_id: draft.evidence_id.clone(),
        status: RequestStatus::Pending,
        priority: draft.priority,
        requested_by: draft.requested_by.clone(),
        requested_date: requested_date.to_string(),
        due_date: draft.due_date.clone(),
        description: draft.description.clone(),
    })
}

/// Status-only request filtering; an empty selection matches every record.
pub fn filter_requests(
    records: &[RequestRecord],
    selected_statuses: &[RequestStatus],
) -> Vec<RequestRecord> {
    if selected_statuses.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| selected_statuses.contains(&record.status))
        .cloned()
        .collect()
}

/// Current calendar date as `YYYY-MM-DD`, no time component.
pub fn today_string() -> String {
    format_calendar_date(OffsetDateTime::now_utc().date())
}

pub fn format_calendar_date(date: Date) -> String {
    format_description::parse("[year]-[month]-[day]")
        .ok()
        .and_then(|format| date.format(&format).ok())
        .unwrap_or_else(|| date.to_string())
}
