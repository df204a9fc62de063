//! Landing view: static blurbs and headline stats from the Phase A summary.

pub struct OverviewStat {
    pub label: &'static str,
    pub value: &'static str,
}

pub const OVERVIEW_STATS: [OverviewStat; 4] = [
    OverviewStat { label: "Evidence Items", value: "2,847" },
    OverviewStat { label: "Open Requests", value: "143" },
    OverviewStat { label: "Compliance Score", value: "98.5%" },
    OverviewStat { label: "Active Users", value: "24" },
];

pub fn render_overview_markdown() -> String {
    let mut out = Vec::new();
    out.push("# Evidence Vault".to_string());
    out.push(String::new());
    out.push("SentryLink Comply Phase A".to_string());
    out.push(String::new());
    out.push("## Professional Evidence Management".to_string());
    out.push(String::new());
    out.push(
        "Organize, track, and manage evidence with precision. Access detailed information, \
         fulfill requests, and maintain compliance effortlessly."
            .to_string(),
    );
    out.push(String::new());
    out.push("- Evidence Vault: browse and filter evidence (/vault)".to_string());
    out.push("- Request To-Do: track pending requests (/requests)".to_string());
    out.push("- Secure Access: protected evidence details".to_string());
    out.push(String::new());
    out.push("## At a Glance".to_string());
    out.push(String::new());
    for stat in &OVERVIEW_STATS {
        out.push(format!("- {}: {}", stat.label, stat.value));
    }
    out.push(String::new());
    out.join("\n")
}
