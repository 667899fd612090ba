//! Markdown document generation
//!
//! Pure functions from a record snapshot to Markdown text. Nothing here touches
//! the filesystem or the clipboard.

use std::fmt::Write as _;

use crate::record::{present, KeyValueRow, NotesRecord, SectionId, ServiceRow, VmRecord};
use crate::select_config::Resources;

// ─────────────────────────────────────────────────────────────────────────────
// VM notes
// ─────────────────────────────────────────────────────────────────────────────

/// Render the quick VM description.
///
/// Every optional field that is blank is left out, and the services and
/// dependencies headings only appear when their list has entries.
pub fn render_vm_markdown(record: &VmRecord) -> String {
    let mut md = String::new();
    let _ = write!(md, "## {}\n\n", record.name.trim());

    if let Some(os) = present(&record.os) {
        let _ = writeln!(md, "* OS: {os}");
    }
    if let Some(ip) = present(&record.ip_address) {
        let _ = writeln!(md, "* IP Address: {ip}");
    }
    match present(&record.gui_link) {
        Some(link) => {
            let _ = write!(md, "* GUI Link: [{link}]({link})\n\n");
        }
        None => md.push('\n'),
    }

    if let Some(description) = present(&record.description) {
        let _ = write!(md, "### Description\n{description}\n\n");
    }

    push_bullet_list(&mut md, "Services:", &record.filled_services());
    push_bullet_list(&mut md, "Dependencies:", &record.filled_dependencies());

    md
}

fn push_bullet_list(md: &mut String, heading: &str, items: &[&str]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(md, "### {heading}");
    for item in items {
        let _ = writeln!(md, "* {item}");
    }
    md.push('\n');
}

// ─────────────────────────────────────────────────────────────────────────────
// Notes panel
// ─────────────────────────────────────────────────────────────────────────────

/// Render the notes panel document.
///
/// The header block is always emitted. Section rows that are entirely blank
/// are skipped, and a section's icon and title decorate only the first row it
/// emits.
pub fn render_notes_markdown(record: &NotesRecord, resources: &Resources) -> String {
    let header = &record.header;
    let title = header.title.trim();
    let mut md = String::new();

    let _ = writeln!(md, "# <i class=\"fa {}\"></i> {}", header.icon.trim(), title);
    md.push_str("| | |\n| - | - |\n");
    let _ = writeln!(
        md,
        "| <img title=\"{}\" src=\"{}\" alt=\"[Icon]\" style=\"{}\"> | <i class=\"fa fa-file-text-o\"></i> {} |",
        title,
        resources.image_url(&header.image),
        resources.image_style(),
        line_breaks(&header.summary)
    );
    let _ = writeln!(md, "### <i class=\"fa fa-sticky-note-o\"></i> Notes:");
    let _ = writeln!(md, "{}", line_breaks(&header.notes));
    md.push_str("| | |\n| - | - |\n");

    let sections = &record.sections;
    push_key_value_section(&mut md, SectionId::Creation, &sections.creation);
    push_key_value_section(&mut md, SectionId::Network, &sections.network);
    push_service_section(&mut md, &sections.services);
    push_key_value_section(&mut md, SectionId::Access, &sections.access);

    md
}

/// Newlines become `<br>` so multi-line text stays inside one table cell
fn line_breaks(text: &str) -> String {
    text.trim_end().replace("\r\n", "\n").replace('\n', "<br>")
}

fn push_key_value_section(md: &mut String, section: SectionId, rows: &[KeyValueRow]) {
    let decoration = format!(
        "<i class=\"fa {} fa-fw\"></i> **{}**",
        section.icon(),
        section.title()
    );
    for (i, row) in rows.iter().filter(|r| !r.is_blank()).enumerate() {
        let cell = if i == 0 { decoration.as_str() } else { "" };
        let _ = writeln!(
            md,
            "| {} | **{}:** {} |",
            cell,
            row.key.trim(),
            row.value.trim()
        );
    }
}

fn push_service_section(md: &mut String, rows: &[ServiceRow]) {
    let decoration = format!(
        "<i class=\"fa {}\"></i> **{}**",
        SectionId::Services.icon(),
        SectionId::Services.title()
    );
    for (i, row) in rows.iter().filter(|r| !r.is_blank()).enumerate() {
        let cell = if i == 0 { decoration.as_str() } else { "" };
        let _ = writeln!(
            md,
            "| {} | <a href=\"{}\" target=\"_blank\" style=\"text-decoration: none; color: #00f000;\">{}</a> |",
            cell,
            row.url.trim(),
            row.name.trim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vm_with_only_name_has_no_sections() {
        let md = render_vm_markdown(&VmRecord::new("web01"));
        assert_eq!(md, "## web01\n\n\n");
        assert!(!md.contains("###"));
        assert!(!md.contains("* "));
    }

    #[test]
    fn test_vm_full_document() {
        let record = VmRecord {
            name: "web01".into(),
            os: "Debian 12".into(),
            ip_address: "10.0.0.5".into(),
            gui_link: "https://10.0.0.5:8006".into(),
            description: "Front proxy".into(),
            services: vec!["nginx".into(), "".into()],
            dependencies: vec!["db01".into()],
        };
        let md = render_vm_markdown(&record);
        assert_eq!(
            md,
            "## web01\n\n\
             * OS: Debian 12\n\
             * IP Address: 10.0.0.5\n\
             * GUI Link: [https://10.0.0.5:8006](https://10.0.0.5:8006)\n\n\
             ### Description\nFront proxy\n\n\
             ### Services:\n* nginx\n\n\
             ### Dependencies:\n* db01\n\n"
        );
    }

    #[test]
    fn test_vm_whitespace_fields_are_absent() {
        let record = VmRecord {
            os: "   ".into(),
            description: "\n".into(),
            services: vec!["  ".into()],
            ..VmRecord::new("db")
        };
        let md = render_vm_markdown(&record);
        assert!(!md.contains("OS"));
        assert!(!md.contains("Description"));
        assert!(!md.contains("Services"));
    }

    fn notes_record() -> NotesRecord {
        let mut record = NotesRecord::default();
        record.header.icon = "fa-linux".into();
        record.header.title = "web01".into();
        record.header.image = "debian".into();
        record.header.summary = "Reverse proxy\nfor the lab".into();
        record.header.notes = "Patched monthly".into();
        record
    }

    #[test]
    fn test_notes_header_block() {
        let md = render_notes_markdown(&notes_record(), &Resources::default());
        let lines: Vec<&str> = md.lines().collect();
        assert_eq!(lines[0], "# <i class=\"fa fa-linux\"></i> web01");
        assert_eq!(lines[1], "| | |");
        assert_eq!(lines[2], "| - | - |");
        assert_eq!(
            lines[3],
            "| <img title=\"web01\" src=\"../icons/100x100/debian100x100.png\" alt=\"[Icon]\" \
             style=\"width:100px;height:100px;\"> | <i class=\"fa fa-file-text-o\"></i> \
             Reverse proxy<br>for the lab |"
        );
        assert_eq!(lines[4], "### <i class=\"fa fa-sticky-note-o\"></i> Notes:");
        assert_eq!(lines[5], "Patched monthly");
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_only_first_row_carries_decoration() {
        let mut record = notes_record();
        record.sections.network = vec![
            KeyValueRow::new("IP", "10.0.0.5"),
            KeyValueRow::new("VLAN", "20"),
        ];
        let md = render_notes_markdown(&record, &Resources::default());
        assert!(md.contains(
            "| <i class=\"fa fa-sitemap fa-fw\"></i> **Network:** | **IP:** 10.0.0.5 |\n"
        ));
        assert!(md.contains("|  | **VLAN:** 20 |\n"));
        assert_eq!(md.matches("fa-sitemap").count(), 1);
    }

    #[test]
    fn test_empty_sections_contribute_nothing() {
        let mut record = notes_record();
        record.sections.creation = vec![KeyValueRow::new(" ", "")];
        let md = render_notes_markdown(&record, &Resources::default());
        assert!(!md.contains("Creation:"));
        assert!(!md.contains("Services:"));
        assert!(!md.contains("Access:"));
    }

    #[test]
    fn test_blank_first_row_moves_decoration() {
        let mut record = notes_record();
        record.sections.access = vec![KeyValueRow::default(), KeyValueRow::new("User", "root")];
        let md = render_notes_markdown(&record, &Resources::default());
        assert!(md.contains("**Access:** | **User:** root |"));
    }

    #[test]
    fn test_service_rows_render_links() {
        let mut record = notes_record();
        record.sections.services = vec![
            ServiceRow::new("WebGUI", "https://10.0.0.5:8006"),
            ServiceRow::new("Grafana", "http://10.0.0.5:3000"),
        ];
        let md = render_notes_markdown(&record, &Resources::default());
        assert!(md.contains(
            "| <i class=\"fa fa-cogs\"></i> **Services:** | <a href=\"https://10.0.0.5:8006\" \
             target=\"_blank\" style=\"text-decoration: none; color: #00f000;\">WebGUI</a> |"
        ));
        assert!(md.contains("|  | <a href=\"http://10.0.0.5:3000\""));
    }

    #[test]
    fn test_sections_follow_fixed_order() {
        let mut record = notes_record();
        record.sections.access = vec![KeyValueRow::new("User", "root")];
        record.sections.creation = vec![KeyValueRow::new("Owner", "ops")];
        let md = render_notes_markdown(&record, &Resources::default());
        let creation = md.find("Creation:").unwrap();
        let access = md.find("Access:").unwrap();
        assert!(creation < access);
    }
}
