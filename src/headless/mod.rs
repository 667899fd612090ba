//! Headless commands - document rendering and validation without the TUI
//!
//! These back the `render` and `validate` subcommands. They read the same
//! project files the TUI does and print plain text (or JSON) to stdout, which
//! keeps them usable from scripts and CI jobs.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::json;
use vmnotes_app::config::{self, load_notes, read_select_config};
use vmnotes_app::pick_list::{validate_config, ValidationReport};
use vmnotes_core::prelude::*;
use vmnotes_core::{render_html, render_notes_markdown};

/// Render a saved notes state to Markdown, or to preview HTML when `html` is set.
///
/// Image resources come from the project's select configuration, following
/// the same fallback chain as the TUI.
pub fn render_notes(notes_path: &Path, project_path: &Path, html: bool) -> Result<String> {
    let record = load_notes(notes_path).context("Rendering notes")?;

    let settings = config::load_settings(project_path);
    let loaded = config::load_select_config(
        &settings.select_path(project_path),
        &settings.example_path(project_path),
    );
    debug!(
        "Rendering {:?} with resources from {:?}",
        notes_path, loaded.source
    );

    let markdown = render_notes_markdown(&record, &loaded.config.resources);
    if html {
        Ok(render_html(&markdown))
    } else {
        Ok(markdown)
    }
}

/// Validate one select configuration file
pub fn validate_select(path: &Path) -> Result<ValidationReport> {
    let config = read_select_config(path)
        .with_context(|| format!("Validating {}", path.display()))?;

    let report = validate_config(&config);

    info!(
        "Validated {:?}: {} blocking, {} info",
        path,
        report.blocking_messages().len(),
        report.infos.len()
    );
    Ok(report)
}

/// Human-readable report, one message per line
pub fn format_report(report: &ValidationReport) -> String {
    let mut out = String::new();
    let blocking = report.blocking_messages();

    if blocking.is_empty() {
        out.push_str("No validation errors.\n");
    }
    for message in &blocking {
        let _ = writeln!(out, "error: {message}");
    }
    for message in &report.infos {
        let _ = writeln!(out, "info: {message}");
    }
    out
}

/// Machine-readable report
pub fn report_json(report: &ValidationReport) -> serde_json::Value {
    let rows: Vec<_> = report
        .row_errors
        .iter()
        .map(|e| {
            json!({
                "list": e.list.title(),
                "row": e.row,
                "message": e.message,
            })
        })
        .collect();

    json!({
        "valid": !report.has_blocking(),
        "errors": report.errors,
        "row_errors": rows,
        "infos": report.infos,
    })
}
