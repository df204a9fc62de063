use super::model::EvidenceRecord;

pub fn render_vault_markdown(visible: &[EvidenceRecord], catalog_size: usize) -> String {
    let mut out = Vec::new();
    out.push("# Evidence Vault".to_string());
    out.push(String::new());
    out.push(format!("{} of {} items", visible.len(), catalog_size));
    out.push(String::new());

    if visible.is_empty() {
        out.push("No evidence found.".to_string());
        out.push(String::new());
        out.push("Try adjusting your filters or search terms.".to_string());
        out.push(String::new());
        return out.join("\n");
    }

    for record in visible {
        out.push(format!(
            "## {} [{}] [{}]",
            record.title,
            record.status.as_str(),
            record.category.as_str()
        ));
        out.push(String::new());
        out.push(record.description.clone());
        out.push(String::new());
        out.push(format!(
            "- Created: {} by {}",
            record.created_date, record.created_by
        ));
        out.push(format!("- Size: {}", record.file_size));
        out.push(format!("- Detail: /vault/{}", record.id));
        out.push(String::new());
    }
    out.join("\n")
}

pub fn render_detail_markdown(record: &EvidenceRecord) -> String {
    let mut out = Vec::new();
    out.push(format!("# {}", record.title));
    out.push(String::new());
    out.push(format!("- Identifier: {}", record.id));
    out.push(format!("- Status: {}", record.status.as_str()));
    out.push(format!("- Category: {}", record.category.as_str()));
    out.push(format!(
        "- Created: {} by {}",
        record.created_date, record.created_by
    ));
    out.push(format!("- Last Modified: {}", record.last_modified));
    out.push(format!("- File Size: {}", record.file_size));
    out.push(String::new());
    out.push("## Overview".to_string());
    out.push(String::new());
    out.push(record.description.clone());
    out.push(String::new());
    out.push("## Full Details".to_string());
    out.push(String::new());
    out.push(record.full_description.clone());
    out.push(String::new());
    out.push("## Need to Request This Evidence?".to_string());
    out.push(String::new());
    out.push("Create a fulfillment request at /requests to access or share this evidence item.".to_string());
    out.push(String::new());
    out.join("\n")
}

pub fn render_not_found_markdown(id: &str) -> String {
    let mut out = Vec::new();
    out.push("# Evidence Not Found".to_string());
    out.push(String::new());
    out.push(format!(
        "The evidence item \"{}\" could not be found.",
        id
    ));
    out.push(String::new());
    out.push("Return to the Evidence Vault: /vault".to_string());
    out.push(String::new());
    out.join("\n")
}
