//! Select configuration document (`select.json`)
//!
//! ```json
//! {
//!   "proxmox-notes": {
//!     "resources": { "image fqdn": "https://icons.lan/100x100", "image width": 100, "image height": 100 },
//!     "select01": { "Linux": { "fa-objects": "fa-linux", "text": "\u{f17c} Linux" } },
//!     "select02": { "Mint": "linuxmint02" },
//!     "select03": { "Debian 12": "Debian 12" }
//!   }
//! }
//! ```
//!
//! Key order of the three pick-lists is significant and preserved.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// Root key wrapping the configuration object
pub const ROOT_KEY: &str = "proxmox-notes";

/// Base URL used when a configuration has no resources block
pub const DEFAULT_IMAGE_FQDN: &str = "../icons/100x100";

/// Width and height used when a configuration has no resources block
pub const DEFAULT_IMAGE_SIZE: i64 = 100;

/// Image key used when the selected key is blank
pub const DEFAULT_IMAGE_KEY: &str = "default";

// ─────────────────────────────────────────────────────────────────────────────
// Resources
// ─────────────────────────────────────────────────────────────────────────────

/// Image resource settings shared by every image in the notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    #[serde(rename = "image fqdn", default)]
    pub image_fqdn: String,
    #[serde(
        rename = "image width",
        default,
        deserialize_with = "lenient_dimension"
    )]
    pub image_width: Option<i64>,
    #[serde(
        rename = "image height",
        default,
        deserialize_with = "lenient_dimension"
    )]
    pub image_height: Option<i64>,
}

impl Default for Resources {
    fn default() -> Self {
        Self {
            image_fqdn: DEFAULT_IMAGE_FQDN.to_string(),
            image_width: Some(DEFAULT_IMAGE_SIZE),
            image_height: Some(DEFAULT_IMAGE_SIZE),
        }
    }
}

impl Resources {
    /// Width to emit, falling back to the default for absent or invalid values
    pub fn width(&self) -> i64 {
        self.image_width
            .filter(|w| *w > 0)
            .unwrap_or(DEFAULT_IMAGE_SIZE)
    }

    /// Height to emit, falling back to the default for absent or invalid values
    pub fn height(&self) -> i64 {
        self.image_height
            .filter(|h| *h > 0)
            .unwrap_or(DEFAULT_IMAGE_SIZE)
    }

    /// Base URL with any trailing slash removed
    pub fn base_url(&self) -> &str {
        let trimmed = self.image_fqdn.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            DEFAULT_IMAGE_FQDN
        } else {
            trimmed
        }
    }

    /// `{base}/{key}{width}x{height}.png`, with a blank key mapped to `default`
    pub fn image_url(&self, key: &str) -> String {
        let key = match key.trim() {
            "" => DEFAULT_IMAGE_KEY,
            k => k,
        };
        format!(
            "{}/{}{}x{}.png",
            self.base_url(),
            key,
            self.width(),
            self.height()
        )
    }

    /// Inline style pinning the rendered image to the configured size
    pub fn image_style(&self) -> String {
        format!("width:{}px;height:{}px;", self.width(), self.height())
    }
}

/// Accepts numbers, numeric strings, empty strings and null.
///
/// Hand-edited files often carry `"100"` or `""`; anything that is not a
/// number becomes `None` and is reported by validation instead of failing the
/// whole load.
fn lenient_dimension<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(parse_dimension(&value))
}

fn parse_dimension(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok().map(|f| f as i64),
        _ => None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Pick-list entries
// ─────────────────────────────────────────────────────────────────────────────

/// An icon pick-list entry (`select01`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawIconOption")]
pub struct IconOption {
    /// Font Awesome class, e.g. `fa-linux`
    #[serde(rename = "fa-objects")]
    pub fa_objects: String,
    /// Display text: glyph, space, label
    pub text: String,
}

impl IconOption {
    pub fn new(fa_objects: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            fa_objects: fa_objects.into(),
            text: text.into(),
        }
    }
}

/// Shapes accepted for an icon entry.
///
/// Older files store either an object with alternate field names or a bare
/// display string.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawIconOption {
    Object {
        #[serde(rename = "fa-objects", alias = "fa", alias = "class", default)]
        fa_objects: String,
        #[serde(alias = "label", default)]
        text: String,
    },
    Text(String),
}

impl From<RawIconOption> for IconOption {
    fn from(raw: RawIconOption) -> Self {
        match raw {
            RawIconOption::Object { fa_objects, text } => Self { fa_objects, text },
            RawIconOption::Text(text) => Self {
                fa_objects: String::new(),
                text,
            },
        }
    }
}

/// Stringify scalar map values so `{"Build": 42}` reads as `"42"`.
fn lenient_string_map<'de, D>(deserializer: D) -> std::result::Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = IndexMap::<String, serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(label, value)| {
            let value = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Null => String::new(),
                other => other.to_string(),
            };
            (label, value)
        })
        .collect())
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// The configuration object under the `proxmox-notes` root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectConfig {
    #[serde(default)]
    pub resources: Resources,
    /// Icon label → icon class metadata
    #[serde(default)]
    pub select01: IndexMap<String, IconOption>,
    /// Image label → image key
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub select02: IndexMap<String, String>,
    /// OS label → OS value
    #[serde(default, deserialize_with = "lenient_string_map")]
    pub select03: IndexMap<String, String>,
}

/// Top-level document: the configuration wrapped in its root key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectDocument {
    #[serde(rename = "proxmox-notes")]
    pub config: SelectConfig,
}

impl SelectConfig {
    /// Parse a `select.json` document, requiring the `proxmox-notes` root.
    ///
    /// `origin` is only used in the error message.
    pub fn from_json(content: &str, origin: &Path) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(content)?;
        match value.get(ROOT_KEY) {
            Some(cfg) if cfg.is_object() => Ok(serde_json::from_value(cfg.clone())?),
            _ => Err(Error::missing_root(ROOT_KEY, origin)),
        }
    }

    /// Serialize wrapped in the root key, pretty-printed with two-space indent
    pub fn to_json_pretty(&self) -> Result<String> {
        let doc = SelectDocument {
            config: self.clone(),
        };
        Ok(serde_json::to_string_pretty(&doc)?)
    }

    /// Icon class for an icon label, falling back to the label itself
    pub fn icon_class<'a>(&'a self, label: &'a str) -> Option<&'a str> {
        self.select01.get(label).map(|opt| {
            if opt.fa_objects.is_empty() {
                label
            } else {
                opt.fa_objects.as_str()
            }
        })
    }

    /// OS choices as (label, value) pairs; an empty value stands for the label
    pub fn os_choices(&self) -> Vec<(String, String)> {
        self.select03
            .iter()
            .map(|(label, value)| {
                let value = if value.is_empty() { label } else { value };
                (label.clone(), value.clone())
            })
            .collect()
    }

    /// Built-in configuration used when neither file can be loaded
    pub fn builtin() -> Self {
        let mut select01 = IndexMap::new();
        select01.insert("Linux".to_string(), IconOption::new("fa-linux", "Linux"));
        select01.insert(
            "Windows".to_string(),
            IconOption::new("fa-windows", "Windows"),
        );

        let mut select02 = IndexMap::new();
        select02.insert("Default".to_string(), "default".to_string());
        select02.insert("Mint".to_string(), "linuxmint02".to_string());

        let mut select03 = IndexMap::new();
        select03.insert("Ubuntu 22.04".to_string(), "Ubuntu 22.04".to_string());
        select03.insert("Debian 12".to_string(), "Debian 12".to_string());

        Self {
            resources: Resources::default(),
            select01,
            select02,
            select03,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn origin() -> PathBuf {
        PathBuf::from("select.json")
    }

    #[test]
    fn test_parse_full_document_preserves_order() {
        let json = r#"{"proxmox-notes": {
            "resources": {"image fqdn": "https://icons.lan/blue", "image width": 64, "image height": 48},
            "select01": {"Windows": {"fa-objects": "fa-windows", "text": "Windows"},
                         "Linux": {"fa-objects": "fa-linux", "text": "Linux"}},
            "select02": {"Zorin": "zorin", "Arch": "arch"},
            "select03": {"Debian 12": "debian12", "Alpine": ""}
        }}"#;
        let cfg = SelectConfig::from_json(json, &origin()).unwrap();

        assert_eq!(cfg.resources.image_fqdn, "https://icons.lan/blue");
        assert_eq!(cfg.resources.image_width, Some(64));
        let icons: Vec<_> = cfg.select01.keys().cloned().collect();
        assert_eq!(icons, vec!["Windows", "Linux"]);
        let images: Vec<_> = cfg.select02.keys().cloned().collect();
        assert_eq!(images, vec!["Zorin", "Arch"]);
        assert_eq!(
            cfg.os_choices(),
            vec![
                ("Debian 12".to_string(), "debian12".to_string()),
                ("Alpine".to_string(), "Alpine".to_string())
            ]
        );
    }

    #[test]
    fn test_missing_root_is_reported() {
        let err = SelectConfig::from_json(r#"{"other": {}}"#, &origin()).unwrap_err();
        assert!(matches!(err, Error::MissingRoot { .. }));
    }

    #[test]
    fn test_malformed_json_is_reported() {
        let err = SelectConfig::from_json("{ not json", &origin()).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_lenient_dimensions() {
        let json = r#"{"proxmox-notes": {"resources":
            {"image fqdn": "x", "image width": "120", "image height": ""}}}"#;
        let cfg = SelectConfig::from_json(json, &origin()).unwrap();
        assert_eq!(cfg.resources.image_width, Some(120));
        assert_eq!(cfg.resources.image_height, None);
        assert_eq!(cfg.resources.height(), DEFAULT_IMAGE_SIZE);
    }

    #[test]
    fn test_icon_option_shapes() {
        let json = r#"{"proxmox-notes": {"select01": {
            "A": {"fa": "fa-apple", "label": "Apple"},
            "B": "Plain text"
        }}}"#;
        let cfg = SelectConfig::from_json(json, &origin()).unwrap();
        assert_eq!(cfg.select01["A"], IconOption::new("fa-apple", "Apple"));
        assert_eq!(cfg.select01["B"], IconOption::new("", "Plain text"));
        assert_eq!(cfg.icon_class("A"), Some("fa-apple"));
        assert_eq!(cfg.icon_class("B"), Some("B"));
    }

    #[test]
    fn test_scalar_values_are_stringified() {
        let json = r#"{"proxmox-notes": {"select02": {"Build": 42, "None": null}}}"#;
        let cfg = SelectConfig::from_json(json, &origin()).unwrap();
        assert_eq!(cfg.select02["Build"], "42");
        assert_eq!(cfg.select02["None"], "");
    }

    #[test]
    fn test_round_trip_through_pretty_json() {
        let cfg = SelectConfig::builtin();
        let json = cfg.to_json_pretty().unwrap();
        assert!(json.starts_with("{\n  \"proxmox-notes\": {"));
        let parsed = SelectConfig::from_json(&json, &origin()).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn test_image_url() {
        let res = Resources {
            image_fqdn: "https://icons.lan/blue/".into(),
            image_width: Some(64),
            image_height: Some(64),
        };
        assert_eq!(
            res.image_url("ubuntu"),
            "https://icons.lan/blue/ubuntu64x64.png"
        );
        assert_eq!(
            res.image_url("  "),
            "https://icons.lan/blue/default64x64.png"
        );
        assert_eq!(res.image_style(), "width:64px;height:64px;");
    }

    #[test]
    fn test_image_url_falls_back_on_invalid_size() {
        let res = Resources {
            image_fqdn: String::new(),
            image_width: Some(0),
            image_height: None,
        };
        assert_eq!(res.image_url("mint"), "../icons/100x100/mint100x100.png");
    }
}
