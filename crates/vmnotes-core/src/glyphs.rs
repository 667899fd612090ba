//! Icon class → glyph lookup built from a Font Awesome style sheet
//!
//! The style sheet declares one rule per icon:
//!
//! ```css
//! .fa-linux:before { content: "\f17c"; }
//! ```
//!
//! Scanning those rules yields the glyph character for each class, which is
//! embedded in the display text of icon pick-list entries.

use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// `.fa-{name}:before { content: "\{hex}"; }`
static GLYPH_RULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.fa-([a-z0-9-]+):before\s*\{\s*content:\s*["']\\([0-9a-fA-F]+)["']\s*;\s*\}"#)
        .expect("Glyph rule regex pattern is valid")
});

/// Prefix shared by every icon class
pub const CLASS_PREFIX: &str = "fa-";

/// Add the `fa-` prefix when missing; blank input stays blank.
pub fn normalize_class(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with(CLASS_PREFIX) {
        trimmed.to_string()
    } else {
        format!("{CLASS_PREFIX}{trimmed}")
    }
}

/// Class name without the `fa-` prefix, as shown in the picker
pub fn short_name(class: &str) -> &str {
    class.strip_prefix(CLASS_PREFIX).unwrap_or(class)
}

/// Glyph table keyed by full class name.
#[derive(Debug, Clone, Default)]
pub struct GlyphMap {
    glyphs: HashMap<String, char>,
    /// Sorted class names, used by the picker
    classes: Vec<String>,
}

impl GlyphMap {
    /// Build the table from style-sheet text.
    ///
    /// Rules with a code point that is not a valid `char` are skipped. When a
    /// class is declared twice the later rule wins.
    pub fn parse(css: &str) -> Self {
        let mut glyphs = HashMap::new();
        for caps in GLYPH_RULE_REGEX.captures_iter(css) {
            let class = format!("{CLASS_PREFIX}{}", &caps[1]);
            let glyph = u32::from_str_radix(&caps[2], 16)
                .ok()
                .and_then(char::from_u32);
            if let Some(glyph) = glyph {
                glyphs.insert(class, glyph);
            }
        }

        let mut classes: Vec<String> = glyphs.keys().cloned().collect();
        classes.sort();

        Self { glyphs, classes }
    }

    /// Read and parse a style sheet from disk
    pub fn load(path: &Path) -> Result<Self> {
        let css = std::fs::read_to_string(path).map_err(|e| {
            Error::style_sheet(format!("Could not read {}: {}", path.display(), e))
        })?;
        let map = Self::parse(&css);
        if map.is_empty() {
            return Err(Error::style_sheet(format!(
                "No icon rules found in {}",
                path.display()
            )));
        }
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph for a class; the class is normalized first
    pub fn glyph(&self, class: &str) -> Option<char> {
        self.glyphs.get(&normalize_class(class)).copied()
    }

    /// All known classes in sorted order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Display text for an icon entry: `"{glyph} {label}"`.
    ///
    /// The label falls back to the normalized class when blank. Without a
    /// known glyph only the base text is returned.
    pub fn display_text(&self, label: &str, class: &str) -> String {
        let class = normalize_class(class);
        let label = label.trim();
        let base = if label.is_empty() { class.as_str() } else { label };
        match self.glyphs.get(&class) {
            Some(glyph) => format!("{glyph} {base}"),
            None => base.to_string(),
        }
    }

    /// Classes whose short name or full name contains `query`, case-insensitive.
    ///
    /// An empty query matches everything.
    pub fn search(&self, query: &str) -> Vec<&str> {
        let query = query.trim().to_lowercase();
        self.classes
            .iter()
            .filter(|class| {
                query.is_empty()
                    || short_name(class).to_lowercase().contains(&query)
                    || class.to_lowercase().contains(&query)
            })
            .map(String::as_str)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSS: &str = r#"
.fa-glass:before {
  content: "\f000";
}
.fa-linux:before { content: "\f17c"; }
.fa-windows:before { content: '\f17a'; }
.fa-fw { width: 1.28571429em; }
.fa-bogus:before { content: "\d800"; }
"#;

    #[test]
    fn test_parse_style_sheet() {
        let map = GlyphMap::parse(CSS);
        assert_eq!(map.len(), 3);
        assert_eq!(map.glyph("fa-linux"), Some('\u{f17c}'));
        assert_eq!(map.glyph("windows"), Some('\u{f17a}'));
        assert_eq!(map.glyph("fa-fw"), None);
        assert_eq!(map.glyph("fa-bogus"), None);
        assert_eq!(map.classes(), &["fa-glass", "fa-linux", "fa-windows"]);
    }

    #[test]
    fn test_normalize_class() {
        assert_eq!(normalize_class("linux"), "fa-linux");
        assert_eq!(normalize_class(" fa-linux "), "fa-linux");
        assert_eq!(normalize_class("  "), "");
        assert_eq!(short_name("fa-cogs"), "cogs");
        assert_eq!(short_name("cogs"), "cogs");
    }

    #[test]
    fn test_display_text() {
        let map = GlyphMap::parse(CSS);
        assert_eq!(map.display_text("Linux", "linux"), "\u{f17c} Linux");
        assert_eq!(map.display_text("", "fa-linux"), "\u{f17c} fa-linux");
        assert_eq!(map.display_text("Other", "fa-unknown"), "Other");
        assert_eq!(GlyphMap::default().display_text("Linux", "fa-linux"), "Linux");
    }

    #[test]
    fn test_search_matches_short_and_full_name() {
        let map = GlyphMap::parse(CSS);
        assert_eq!(map.search("WIN"), vec!["fa-windows"]);
        assert_eq!(map.search("fa-g"), vec!["fa-glass"]);
        assert_eq!(map.search("").len(), 3);
        assert!(map.search("zzz").is_empty());
    }

    #[test]
    fn test_load_missing_file_is_style_sheet_error() {
        let err = GlyphMap::load(Path::new("/nonexistent/font-awesome.css")).unwrap_err();
        assert!(matches!(err, Error::StyleSheet { .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("font-awesome.css");
        std::fs::write(&path, CSS).unwrap();
        let map = GlyphMap::load(&path).unwrap();
        assert_eq!(map.len(), 3);
    }
}
