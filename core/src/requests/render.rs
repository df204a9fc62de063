use super::model::RequestRecord;

pub fn render_requests_markdown(visible: &[RequestRecord], collection_size: usize) -> String {
    let mut out = Vec::new();
    out.push("# Request To-Do".to_string());
    out.push(String::new());
    out.push(format!(
        "{} of {} requests",
        visible.len(),
        collection_size
    ));
    out.push(String::new());

    if visible.is_empty() {
        out.push("No requests found.".to_string());
        out.push(String::new());
        out.push("Try adjusting your status filter or create a new request.".to_string());
        out.push(String::new());
        return out.join("\n");
    }

    for record in visible {
        out.push(format!("## {} ({})", record.title, record.id));
        out.push(String::new());
        out.push(format!(
            "- Status: {} | Priority: {}",
            record.status.as_str(),
            record.priority.as_str()
        ));
        out.push(format!(
            "- Evidence: {} (/vault/{})",
            record.evidence_title, record.evidence_id
        ));
        out.push(format!("- Requested by {} on {}", record.requested_by, record.requested_date));
        out.push(format!("- Due {}", record.due_date));
        if !record.description.is_empty() {
            out.push(String::new());
            out.push(record.description.clone());
        }
        out.push(String::new());
    }
    out.join("\n")
}
