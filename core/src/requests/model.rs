use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RequestStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::InProgress,
        RequestStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::InProgress => "In Progress",
            RequestStatus::Completed => "Completed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Pending" => Some(RequestStatus::Pending),
            "In Progress" => Some(RequestStatus::InProgress),
            "Completed" => Some(RequestStatus::Completed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Priority {
    High,
    #[default]
    Normal,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Normal => "Normal",
            Priority::Low => "Low",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "High" => Some(Priority::High),
            "Normal" => Some(Priority::Normal),
            "Low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A tracked ask against a catalog entry. `evidence_id` is a free reference;
/// it is never validated against the evidence catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestRecord {
    pub id: String,
    pub title: String,
    pub evidence_title: String,
    pub evidence_id: String,
    pub status: RequestStatus,
    pub priority: Priority,
    pub requested_by: String,
    pub requested_date: String,
    pub due_date: String,
    pub description: String,
}

/// Seed request collection, most-recent-first.
pub fn seed_requests() -> Vec<RequestRecord> {
    vec![
        RequestRecord {
            id: "REQ001".to_string(),
            title: "Q4 Financial Records - External Audit".to_string(),
            evidence_title: "Q4 Financial Records".to_string(),
            evidence_id: "EV001".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::High,
            requested_by: "audit@external.com".to_string(),
            requested_date: "2024-01-22".to_string(),
            due_date: "2024-01-25".to_string(),
            description: "External auditors require access to Q4 financial records for annual audit"
                .to_string(),
        },
        RequestRecord {
            id: "REQ002".to_string(),
            title: "Training Documentation - HR Verification".to_string(),
            evidence_title: "Employee Training Documentation".to_string(),
            evidence_id: "EV002".to_string(),
            status: RequestStatus::InProgress,
            priority: Priority::Normal,
            requested_by: "hr@company.com".to_string(),
            requested_date: "2024-01-20".to_string(),
            due_date: "2024-02-05".to_string(),
            description:
                "HR needs to verify completion of compliance training for performance reviews"
                    .to_string(),
        },
        RequestRecord {
            id: "REQ003".to_string(),
            title: "System Audit Log - Security Review".to_string(),
            evidence_title: "System Audit Log - January".to_string(),
            evidence_id: "EV003".to_string(),
            status: RequestStatus::Completed,
            priority: Priority::High,
            requested_by: "security@company.com".to_string(),
            requested_date: "2024-01-15".to_string(),
            due_date: "2024-01-18".to_string(),
            description: "Security team completed review of system access logs".to_string(),
        },
        RequestRecord {
            id: "REQ004".to_string(),
            title: "Azure Contract - Renewal Discussion".to_string(),
            evidence_title: "Vendor Contract - Azure Services".to_string(),
            evidence_id: "EV004".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::Normal,
            requested_by: "procurement@company.com".to_string(),
            requested_date: "2024-01-21".to_string(),
            due_date: "2024-01-28".to_string(),
            description: "Procurement team reviewing contract terms for renewal negotiations"
                .to_string(),
        },
        RequestRecord {
            id: "REQ005".to_string(),
            title: "GDPR Assessment - Legal Team".to_string(),
            evidence_title: "Data Privacy Impact Assessment".to_string(),
            evidence_id: "EV005".to_string(),
            status: RequestStatus::Pending,
            priority: Priority::High,
            requested_by: "legal@company.com".to_string(),
            requested_date: "2024-01-22".to_string(),
            due_date: "2024-01-24".to_string(),
            description: "Legal team requires GDPR assessment for compliance certification"
                .to_string(),
        },
    ]
}
