//! Preview rendering for generated notes
//!
//! Handles only the Markdown subset the generator emits: `#` and `###`
//! headings, pipe tables, `**bold**` and plain lines. Parsing is a single pass
//! over lines with two states, outside a table and inside a table block.
//!
//! The parsed [`Block`] list is rendered two ways:
//! - [`render_html`] for the HTML preview
//! - [`render_text`] for the terminal preview pane

use std::sync::LazyLock;

use regex::Regex;
use unicode_width::UnicodeWidthStr;

static BOLD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Bold regex pattern is valid"));

/// `| --- | --- |`
static SEPARATOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\|\s*-+\s*\|\s*-+\s*\|$").expect("Table separator regex pattern is valid")
});

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Tag regex pattern is valid"));

/// A parsed unit of the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# ` heading
    Title(String),
    /// `### ` heading
    Heading(String),
    /// Consecutive pipe-delimited lines, separator rows removed
    Table(Vec<Vec<String>>),
    /// Any other non-blank line, trimmed
    Text(String),
    /// A blank line
    Spacer,
}

#[derive(Debug)]
enum ParseState {
    Outside,
    InTable(Vec<Vec<String>>),
}

fn is_table_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

fn is_separator_line(line: &str) -> bool {
    SEPARATOR_REGEX.is_match(line.trim())
}

fn split_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|c| c.trim().to_string()).collect()
}

/// Emit the collected table, unless it only held separator lines
fn flush_table(rows: Vec<Vec<String>>, blocks: &mut Vec<Block>) {
    if !rows.is_empty() {
        blocks.push(Block::Table(rows));
    }
}

fn classify_outside(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("# ") {
        Block::Title(rest.trim().to_string())
    } else if let Some(rest) = line.strip_prefix("### ") {
        Block::Heading(rest.trim().to_string())
    } else if line.trim().is_empty() {
        Block::Spacer
    } else {
        Block::Text(line.trim().to_string())
    }
}

/// Parse generated Markdown into blocks. Never fails.
pub fn parse(markdown: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut state = ParseState::Outside;

    for raw in markdown.split('\n') {
        let line = BOLD_REGEX.replace_all(raw, "<strong>$1</strong>");

        state = match state {
            ParseState::InTable(mut rows) if is_table_line(&line) => {
                if !is_separator_line(&line) {
                    rows.push(split_cells(&line));
                }
                ParseState::InTable(rows)
            }
            ParseState::InTable(rows) => {
                flush_table(rows, &mut blocks);
                blocks.push(classify_outside(&line));
                ParseState::Outside
            }
            ParseState::Outside if is_table_line(&line) => {
                let mut rows = Vec::new();
                if !is_separator_line(&line) {
                    rows.push(split_cells(&line));
                }
                ParseState::InTable(rows)
            }
            ParseState::Outside => {
                blocks.push(classify_outside(&line));
                ParseState::Outside
            }
        };
    }

    if let ParseState::InTable(rows) = state {
        flush_table(rows, &mut blocks);
    }

    blocks
}

/// Render generated Markdown as preview HTML
pub fn render_html(markdown: &str) -> String {
    let mut html = String::new();
    for block in parse(markdown) {
        match block {
            Block::Title(text) => html.push_str(&format!("<h1>{text}</h1>\n")),
            Block::Heading(text) => html.push_str(&format!("<h3>{text}</h3>\n")),
            Block::Table(rows) => {
                html.push_str("<table>\n");
                for row in rows {
                    html.push_str("<tr>");
                    for cell in row {
                        html.push_str(&format!("<td>{cell}</td>"));
                    }
                    html.push_str("</tr>\n");
                }
                html.push_str("</table>\n");
            }
            Block::Text(text) => html.push_str(&format!("<div>{text}</div>\n")),
            Block::Spacer => html.push_str("<div style=\"height:8px;\"></div>\n"),
        }
    }
    html
}

/// Remove markup for terminal display; `<br>` becomes a separator
pub fn strip_markup(text: &str) -> String {
    let text = text.replace("<br>", " / ");
    TAG_REGEX.replace_all(&text, "").trim().to_string()
}

/// A line of the terminal preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLine {
    Title(String),
    Heading(String),
    Row(String),
    Plain(String),
    Blank,
}

/// Project the parsed blocks to plain text lines with aligned table columns
pub fn render_text(markdown: &str) -> Vec<TextLine> {
    let mut lines = Vec::new();
    for block in parse(markdown) {
        match block {
            Block::Title(text) => lines.push(TextLine::Title(strip_markup(&text))),
            Block::Heading(text) => lines.push(TextLine::Heading(strip_markup(&text))),
            Block::Text(text) => lines.push(TextLine::Plain(strip_markup(&text))),
            Block::Spacer => lines.push(TextLine::Blank),
            Block::Table(rows) => lines.extend(align_rows(&rows).into_iter().map(TextLine::Row)),
        }
    }
    lines
}

fn align_rows(rows: &[Vec<String>]) -> Vec<String> {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| row.iter().map(|c| strip_markup(c)).collect())
        .collect();

    let columns = cells.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    cells
        .iter()
        .filter(|row| row.iter().any(|c| !c.is_empty()))
        .map(|row| {
            let mut out = String::new();
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    out.push_str("  ");
                }
                out.push_str(cell);
                if i + 1 < row.len() {
                    out.push_str(&" ".repeat(widths[i].saturating_sub(cell.width())));
                }
            }
            out.trim_end().to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_table_and_bold() {
        let html = render_html("# Title\n| a | b |\n| - | - |\n| **x** | y |\n");
        assert_eq!(html.matches("<h1>Title</h1>").count(), 1);
        assert_eq!(html.matches("<table>").count(), 1);
        assert!(html.contains("<tr><td>a</td><td>b</td></tr>"));
        assert!(html.contains("<tr><td><strong>x</strong></td><td>y</td></tr>"));
        assert!(!html.contains("<td>-</td>"));
    }

    #[test]
    fn test_parse_blocks() {
        let blocks = parse("# T\n### Notes:\nhello\n\n| a | b |");
        assert_eq!(
            blocks,
            vec![
                Block::Title("T".into()),
                Block::Heading("Notes:".into()),
                Block::Text("hello".into()),
                Block::Spacer,
                Block::Table(vec![vec!["a".into(), "b".into()]]),
            ]
        );
    }

    #[test]
    fn test_separator_only_table_emits_nothing() {
        let blocks = parse("| - | - |\n| --- | --- |\ntext");
        assert_eq!(blocks, vec![Block::Text("text".into())]);
    }

    #[test]
    fn test_table_ends_on_non_pipe_line() {
        let blocks = parse("| a | b |\n### H\n| c | d |");
        assert_eq!(blocks.len(), 3);
        assert!(matches!(blocks[0], Block::Table(_)));
        assert_eq!(blocks[1], Block::Heading("H".into()));
        assert!(matches!(blocks[2], Block::Table(_)));
    }

    #[test]
    fn test_irregular_lines_fall_through() {
        let blocks = parse("| open only\n#nospace");
        assert_eq!(
            blocks,
            vec![
                Block::Text("| open only".into()),
                Block::Text("#nospace".into())
            ]
        );
    }

    #[test]
    fn test_blank_line_becomes_spacer() {
        let html = render_html("a\n\nb");
        assert_eq!(
            html,
            "<div>a</div>\n<div style=\"height:8px;\"></div>\n<div>b</div>\n"
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        let html = render_html("**a** and **b**");
        assert_eq!(html, "<div><strong>a</strong> and <strong>b</strong></div>\n");
    }

    #[test]
    fn test_text_projection_aligns_columns() {
        let lines = render_text("# <i class=\"fa fa-linux\"></i> web\n| | |\n| - | - |\n| x | **IP:** 1 |\n| long | b |");
        assert_eq!(lines[0], TextLine::Title("web".into()));
        assert_eq!(
            lines[1..],
            [
                TextLine::Row("x     IP: 1".into()),
                TextLine::Row("long  b".into())
            ]
        );
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("<strong>A</strong><br>B"), "A / B");
    }
}
