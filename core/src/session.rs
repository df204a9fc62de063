//! Exclusive owner of all mutable view state. A `Session` is created from the
//! fixed seed data and passed explicitly to whatever drives the views; there
//! is no ambient shared state. Every mutation happens synchronously in
//! response to one user event, and the visible lists are recomputed on read.

use crate::error::{CoreError, CoreResult};
use crate::requests::model::{seed_requests, RequestRecord, RequestStatus};
use crate::requests::workflow::{self, FormState, RequestDraft};
use crate::vault::filter::{filter_evidence, SortKey, VaultCriteria};
use crate::vault::model::{seed_evidence, Category, EvidenceRecord, EvidenceStatus};
use crate::vault::query;

#[derive(Debug, Clone)]
pub struct Session {
    evidence: Vec<EvidenceRecord>,
    requests: Vec<RequestRecord>,
    vault_criteria: VaultCriteria,
    selected_request_statuses: Vec<RequestStatus>,
    form: FormState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            evidence: seed_evidence(),
            requests: seed_requests(),
            vault_criteria: VaultCriteria::default(),
            selected_request_statuses: Vec::new(),
            form: FormState::Idle,
        }
    }

    pub fn evidence(&self) -> &[EvidenceRecord] {
        &self.evidence
    }

    pub fn requests(&self) -> &[RequestRecord] {
        &self.requests
    }

    pub fn vault_criteria(&self) -> &VaultCriteria {
        &self.vault_criteria
    }

    pub fn visible_evidence(&self) -> Vec<EvidenceRecord> {
        filter_evidence(&self.evidence, &self.vault_criteria)
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.vault_criteria.search_term = term.into();
    }

    pub fn toggle_category(&mut self, category: Category) {
        toggle(&mut self.vault_criteria.selected_categories, category);
    }

    pub fn toggle_evidence_status(&mut self, status: EvidenceStatus) {
        toggle(&mut self.vault_criteria.selected_statuses, status);
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.vault_criteria.sort = sort;
    }

    /// "Clear All": resets search and both selections. The sort choice is not
    /// a filter and survives.
    pub fn clear_vault_filters(&mut self) {
        let sort = self.vault_criteria.sort;
        self.vault_criteria = VaultCriteria {
            sort,
            ..VaultCriteria::default()
        };
    }

    /// The URL-encoded projection of the current vault criteria. Derived and
    /// re-derivable; never a second source of truth.
    pub fn query_string(&self) -> String {
        query::encode_query(&self.vault_criteria)
    }

    /// Adopts the criteria encoded in `raw`, as when a filtered URL is opened
    /// directly. The sort key is not part of the encoding and is kept as-is.
    pub fn apply_query(&mut self, raw: &str) {
        let sort = self.vault_criteria.sort;
        let mut criteria = query::decode_query(raw);
        criteria.sort = sort;
        self.vault_criteria = criteria;
    }

    /// Exact-identifier lookup for the detail view.
    pub fn find_evidence(&self, id: &str) -> CoreResult<&EvidenceRecord> {
        self.evidence
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| CoreError::NotFound(format!("evidence {id}")))
    }

    pub fn visible_requests(&self) -> Vec<RequestRecord> {
        workflow::filter_requests(&self.requests, &self.selected_request_statuses)
    }

    pub fn toggle_request_status(&mut self, status: RequestStatus) {
        toggle(&mut self.selected_request_statuses, status);
    }

    pub fn clear_request_filter(&mut self) {
        self.selected_request_statuses.clear();
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Idle -> Editing with a fresh draft. A no-op while a draft is open.
    pub fn open_request_form(&mut self) {
        if matches!(self.form, FormState::Idle) {
            self.form = FormState::Editing(RequestDraft::default());
        }
    }

    /// Editing -> Idle, discarding the draft fields.
    pub fn cancel_request_form(&mut self) {
        self.form = FormState::Idle;
    }

    pub fn draft_mut(&mut self) -> Option<&mut RequestDraft> {
        match &mut self.form {
            FormState::Editing(draft) => Some(draft),
            FormState::Idle => None,
        }
    }

    /// Submits the open draft. On success the new record is prepended, the
    /// form closes, and the new identifier is returned. On a validation
    /// failure nothing is created and the form stays open with its fields
    /// intact.
    pub fn submit_request(&mut self) -> CoreResult<String> {
        let draft = match &self.form {
            FormState::Editing(draft) => draft.clone(),
            FormState::Idle => {
                return Err(CoreError::Validation(
                    "no request form is open".to_string(),
                ))
            }
        };
        let record = workflow::create_request(&self.requests, &draft, &workflow::today_string())?;
        let id = record.id.clone();
        self.requests.insert(0, record);
        self.form = FormState::Idle;
        Ok(id)
    }
}

fn toggle<T: PartialEq>(selected: &mut Vec<T>, value: T) {
    if let Some(position) = selected.iter().position(|item| *item == value) {
        selected.remove(position);
    } else {
        selected.push(value);
    }
}
