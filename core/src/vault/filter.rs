use std::cmp::Ordering;

use regex::Regex;
use serde::{Deserialize, Serialize};
use time::{format_description, Date};

use super::model::{Category, EvidenceRecord, EvidenceStatus};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    DateDesc,
    TitleAsc,
    SizeDesc,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::DateDesc => "date",
            SortKey::TitleAsc => "title",
            SortKey::SizeDesc => "size",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "date" => Some(SortKey::DateDesc),
            "title" => Some(SortKey::TitleAsc),
            "size" => Some(SortKey::SizeDesc),
            _ => None,
        }
    }
}

/// Active vault selections. Empty selection lists mean "no restriction",
/// never "match nothing".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VaultCriteria {
    pub search_term: String,
    pub selected_categories: Vec<Category>,
    pub selected_statuses: Vec<EvidenceStatus>,
    pub sort: SortKey,
}

impl VaultCriteria {
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || !self.selected_categories.is_empty()
            || !self.selected_statuses.is_empty()
    }
}

/// Derives the visible vault list from the full catalog: an AND of the
/// search/category/status predicates, ordered by the criteria's sort key.
/// Pure function; ties under a sort key may appear in any relative order.
pub fn filter_evidence(records: &[EvidenceRecord], criteria: &VaultCriteria) -> Vec<EvidenceRecord> {
    let needle = criteria.search_term.to_lowercase();
    let mut visible: Vec<EvidenceRecord> = records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .filter(|record| {
            criteria.selected_categories.is_empty()
                || criteria.selected_categories.contains(&record.category)
        })
        .filter(|record| {
            criteria.selected_statuses.is_empty()
                || criteria.selected_statuses.contains(&record.status)
        })
        .cloned()
        .collect();
    sort_evidence(&mut visible, criteria.sort);
    visible
}

fn matches_search(record: &EvidenceRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record.id.to_lowercase().contains(needle)
}

fn sort_evidence(records: &mut [EvidenceRecord], sort: SortKey) {
    match sort {
        SortKey::DateDesc => {
            records.sort_by(|a, b| {
                parse_calendar_date(&b.created_date).cmp(&parse_calendar_date(&a.created_date))
            });
        }
        SortKey::TitleAsc => {
            records.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::SizeDesc => {
            records.sort_by(|a, b| {
                size_magnitude(&b.file_size)
                    .partial_cmp(&size_magnitude(&a.file_size))
                    .unwrap_or(Ordering::Equal)
            });
        }
    }
}

/// Parses a `YYYY-MM-DD` value into a calendar date. Unparseable values come
/// back as `None`, which orders after every real date under `DateDesc`.
pub fn parse_calendar_date(value: &str) -> Option<Date> {
    let format = format_description::parse("[year]-[month]-[day]").ok()?;
    Date::parse(value.trim(), &format).ok()
}

/// Leading numeric magnitude of a free-text size such as "2.4 MB" or
/// "890 KB". The unit suffix is deliberately ignored: "890 KB" outranks
/// "5.2 MB" under the size ordering.
pub fn size_magnitude(value: &str) -> f64 {
    Regex::new(r"^\s*([0-9]+(?:\.[0-9]+)?)")
        .ok()
        .and_then(|pattern| {
            pattern
                .captures(value)
                .and_then(|captures| captures.get(1))
                .and_then(|magnitude| magnitude.as_str().parse::<f64>().ok())
        })
        .unwrap_or(0.0)
}
