use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Category {
    Financial,
    Personnel,
    Audit,
    Legal,
    Compliance,
    Security,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Financial,
        Category::Personnel,
        Category::Audit,
        Category::Legal,
        Category::Compliance,
        Category::Security,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Financial => "Financial",
            Category::Personnel => "Personnel",
            Category::Audit => "Audit",
            Category::Legal => "Legal",
            Category::Compliance => "Compliance",
            Category::Security => "Security",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Financial" => Some(Category::Financial),
            "Personnel" => Some(Category::Personnel),
            "Audit" => Some(Category::Audit),
            "Legal" => Some(Category::Legal),
            "Compliance" => Some(Category::Compliance),
            "Security" => Some(Category::Security),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum EvidenceStatus {
    Active,
    Archived,
}

impl EvidenceStatus {
    pub const ALL: [EvidenceStatus; 2] = [EvidenceStatus::Active, EvidenceStatus::Archived];

    pub fn as_str(self) -> &'static str {
        match self {
            EvidenceStatus::Active => "Active",
            EvidenceStatus::Archived => "Archived",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(EvidenceStatus::Active),
            "Archived" => Some(EvidenceStatus::Archived),
            _ => None,
        }
    }
}

/// One catalog entry. The catalog is seeded once per session and is read-only;
/// `id` is the exact-match lookup key for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EvidenceRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: EvidenceStatus,
    pub created_by: String,
    pub created_date: String,
    pub last_modified: String,
    pub file_size: String,
    pub full_description: String,
}

pub fn seed_evidence() -> Vec<EvidenceRecord> {
    vec![
        EvidenceRecord {
            id: "EV001".to_string(),
            title: "Q4 Financial Records".to_string(),
            description: "Complete financial statements for Q4 2023".to_string(),
            category: Category::Financial,
            status: EvidenceStatus::Active,
            created_by: "John Smith".to_string(),
            created_date: "2024-01-15".to_string(),
            last_modified: "2024-01-20".to_string(),
            file_size: "2.4 MB".to_string(),
            full_description: [
                "This comprehensive document contains complete financial statements for Q4 2023, including:",
                "- Balance Sheet",
                "- Income Statement",
                "- Cash Flow Analysis",
                "- Financial Ratios and Analysis",
                "- Management Discussion and Analysis",
                "- Audit Notes",
            ]
            .join("\n"),
        },
        EvidenceRecord {
            id: "EV002".to_string(),
            title: "Employee Training Documentation".to_string(),
            description: "Compliance training records and certifications".to_string(),
            category: Category::Personnel,
            status: EvidenceStatus::Active,
            created_by: "Sarah Johnson".to_string(),
            created_date: "2024-01-10".to_string(),
            last_modified: "2024-01-18".to_string(),
            file_size: "1.8 MB".to_string(),
            full_description: [
                "Employee training records including:",
                "- Compliance Training Certificates",
                "- Security Awareness Certifications",
                "- Annual Training Logs",
                "- Department-Specific Training Records",
                "- Trainer Certifications",
            ]
            .join("\n"),
        },
        EvidenceRecord {
            id: "EV003".to_string(),
            title: "System Audit Log - January".to_string(),
            description: "Complete audit trail for system access".to_string(),
            category: Category::Audit,
            status: EvidenceStatus::Archived,
            created_by: "Mike Chen".to_string(),
            created_date: "2023-12-20".to_string(),
            last_modified: "2024-01-05".to_string(),
            file_size: "5.2 MB".to_string(),
            full_description: [
                "System audit log containing:",
                "- User Access Records",
                "- Failed Login Attempts",
                "- Administrative Changes",
                "- Data Access Logs",
                "- System Configuration Changes",
                "- Database Query Logs",
            ]
            .join("\n"),
        },
        EvidenceRecord {
            id: "EV004".to_string(),
            title: "Vendor Contract - Azure Services".to_string(),
            description: "Service agreement and terms with Microsoft Azure".to_string(),
            category: Category::Legal,
            status: EvidenceStatus::Active,
            created_by: "Lisa Park".to_string(),
            created_date: "2024-01-08".to_string(),
            last_modified: "2024-01-12".to_string(),
            file_size: "890 KB".to_string(),
            full_description: [
                "Complete service agreement with Microsoft Azure including:",
                "- Service Level Agreements (SLA)",
                "- Pricing Terms",
                "- Data Protection Clauses",
                "- Term and Termination",
                "- Liability and Indemnification",
                "- Compliance Requirements",
            ]
            .join("\n"),
        },
        EvidenceRecord {
            id: "EV005".to_string(),
            title: "Data Privacy Impact Assessment".to_string(),
            description: "GDPR compliance assessment document".to_string(),
            category: Category::Compliance,
            status: EvidenceStatus::Active,
            created_by: "David Brown".to_string(),
            created_date: "2024-01-20".to_string(),
            last_modified: "2024-01-22".to_string(),
            file_size: "3.1 MB".to_string(),
            full_description: [
                "GDPR compliance assessment including:",
                "- Data Processing Overview",
                "- Risk Assessment Matrix",
                "- Mitigation Measures",
                "- Compliance Checklist",
                "- Privacy Controls Documentation",
                "- Incident Response Procedures",
            ]
            .join("\n"),
        },
        EvidenceRecord {
            id: "EV006".to_string(),
            title: "Employee Security Incident Report".to_string(),
            description: "Investigation report on Q1 security incidents".to_string(),
            category: Category::Security,
            status: EvidenceStatus::Active,
            created_by: "Emma Wilson".to_string(),
            created_date: "2024-01-18".to_string(),
            last_modified: "2024-01-19".to_string(),
            file_size: "1.5 MB".to_string(),
            full_description: [
                "Security incident investigation report:",
                "- Incident Summary",
                "- Timeline of Events",
                "- Root Cause Analysis",
                "- Impact Assessment",
                "- Corrective Actions",
                "- Preventive Measures",
                "- Follow-up Timeline",
            ]
            .join("\n"),
        },
    ]
}
