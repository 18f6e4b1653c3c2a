//! Template interchange model.
//!
//! A template is `{ basePdf, schemas: Region[][], ... }`. Only the parts the
//! engine reasons about are typed; `basePdf`, unknown template keys and every
//! plugin/style property of a region are carried through untouched.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

pub type Props = IndexMap<String, serde_json::Value>;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Barcode flavours the renderer knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    QrCode,
    Code128,
    Code39,
    Ean13,
    Ean8,
    Nw7,
    Itf14,
    Upca,
    Upce,
    JapanPost,
    Gs1DataMatrix,
    Pdf417,
}

impl Symbology {
    pub const ALL: [Symbology; 12] = [
        Symbology::QrCode,
        Symbology::Code128,
        Symbology::Code39,
        Symbology::Ean13,
        Symbology::Ean8,
        Symbology::Nw7,
        Symbology::Itf14,
        Symbology::Upca,
        Symbology::Upce,
        Symbology::JapanPost,
        Symbology::Gs1DataMatrix,
        Symbology::Pdf417,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QrCode => "qrcode",
            Self::Code128 => "code128",
            Self::Code39 => "code39",
            Self::Ean13 => "ean13",
            Self::Ean8 => "ean8",
            Self::Nw7 => "nw7",
            Self::Itf14 => "itf14",
            Self::Upca => "upca",
            Self::Upce => "upce",
            Self::JapanPost => "japanpost",
            Self::Gs1DataMatrix => "gs1datamatrix",
            Self::Pdf417 => "pdf417",
        }
    }

    #[must_use]
    pub fn from_type(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sym| sym.as_str() == s)
    }
}

/// The `type` of a region. Anything the engine does not special-case is kept
/// as `Other` and binds like a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RegionKind {
    #[default]
    Text,
    Table,
    Barcode(Symbology),
    Signature,
    Other(String),
}

impl RegionKind {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::Table => "table",
            Self::Barcode(sym) => sym.as_str(),
            Self::Signature => "signature",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RegionKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "text" => Self::Text,
            "table" => Self::Table,
            "signature" => Self::Signature,
            other => match Symbology::from_type(other) {
                Some(sym) => Self::Barcode(sym),
                None => Self::Other(s),
            },
        }
    }
}

impl From<RegionKind> for String {
    fn from(kind: RegionKind) -> Self {
        kind.as_str().to_string()
    }
}

/// A single named, positioned element on a template page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: RegionKind,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub props: Props,
}

impl Region {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: RegionKind, position: Position, size: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
            width: size.0,
            height: size.1,
            content: None,
            props: Props::new(),
        }
    }

    /// Stand-in for a page entry that is not an object: an unnamed 10x10
    /// text box at the origin with empty content.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::new("", RegionKind::Text, Position::default(), (10.0, 10.0)).with_content("")
    }

    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn with_prop(mut self, key: &str, value: serde_json::Value) -> Self {
        self.props.insert(key.to_string(), value);
        self
    }

    #[must_use]
    pub fn prop(&self, key: &str) -> Option<&serde_json::Value> {
        self.props.get(key)
    }

    /// Column labels of a table region.
    #[must_use]
    pub fn table_head(&self) -> Option<Vec<String>> {
        let head = self.prop("head")?.as_array()?;
        Some(
            head.iter()
                .map(|h| match h {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect(),
        )
    }

    /// Body rows stored in a table region's `content` (a JSON string).
    #[must_use]
    pub fn table_rows(&self) -> Option<Vec<Vec<serde_json::Value>>> {
        let content = self.content.as_deref().unwrap_or("[]");
        let content = if content.is_empty() { "[]" } else { content };
        serde_json::from_str(content).ok()
    }
}

/// Page size and padding of a blank (non-PDF-backed) base page, in mm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlankPage {
    pub width: f64,
    pub height: f64,
    /// top, right, bottom, left
    pub padding: [f64; 4],
}

impl Default for BlankPage {
    fn default() -> Self {
        // A4 portrait
        Self {
            width: 210.0,
            height: 297.0,
            padding: [10.0; 4],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "basePdf", default)]
    pub base_pdf: serde_json::Value,
    #[serde(default, deserialize_with = "lenient_pages")]
    pub schemas: Vec<Vec<Region>>,
    #[serde(flatten)]
    pub extra: Props,
}

impl Template {
    /// An A4 blank page with no regions.
    #[must_use]
    pub fn blank() -> Self {
        Self::on_page(BlankPage::default())
    }

    #[must_use]
    pub fn on_page(page: BlankPage) -> Self {
        Self {
            base_pdf: serde_json::to_value(page).unwrap_or(serde_json::Value::Null),
            schemas: vec![Vec::new()],
            extra: Props::new(),
        }
    }

    /// Parses stored template content, falling back to [`Template::blank`]
    /// unless it carries both a `basePdf` and a `schemas` array.
    #[must_use]
    pub fn parse_or_blank(content: &str) -> Self {
        let Ok(raw) = serde_json::from_str::<serde_json::Value>(content) else {
            return Self::blank();
        };
        let has_base = raw.get("basePdf").is_some_and(|b| !b.is_null());
        let has_schemas = raw.get("schemas").is_some_and(serde_json::Value::is_array);
        if !(has_base && has_schemas) {
            return Self::blank();
        }
        serde_json::from_value(raw).unwrap_or_else(|_| Self::blank())
    }

    #[must_use]
    pub fn blank_page(&self) -> Option<BlankPage> {
        serde_json::from_value(self.base_pdf.clone()).ok()
    }

    /// True when page 0 is missing or has no regions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schemas.first().map_or(true, Vec::is_empty)
    }

    #[must_use]
    pub fn first_page(&self) -> &[Region] {
        self.schemas.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn regions(&self) -> impl Iterator<Item = &Region> {
        self.schemas.iter().flatten()
    }

    /// Sorted, deduplicated region names across all pages.
    #[must_use]
    pub fn used_names(&self) -> Vec<String> {
        self.regions()
            .filter(|r| !r.name.is_empty())
            .map(|r| r.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn from_json_str(s: &str) -> Result<Self, crate::Error> {
        serde_json::from_str(s).map_err(|e| crate::Error::Template(e.to_string()))
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Pages as stored by older editors: a page that is not an array is empty,
/// and an entry that is not an object becomes [`Region::placeholder`].
fn lenient_pages<'de, D>(deserializer: D) -> Result<Vec<Vec<Region>>, D::Error>
where
    D: Deserializer<'de>,
{
    let pages = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    pages
        .into_iter()
        .map(|page| match page {
            serde_json::Value::Array(entries) => entries
                .into_iter()
                .map(|entry| match entry {
                    serde_json::Value::Object(_) => {
                        serde_json::from_value(entry).map_err(serde::de::Error::custom)
                    }
                    _ => Ok(Region::placeholder()),
                })
                .collect(),
            _ => Ok(Vec::new()),
        })
        .collect()
}

/// Whether stored content looks like a structured template rather than
/// legacy free text.
#[must_use]
pub fn is_template_content(content: &str) -> bool {
    match serde_json::from_str::<serde_json::Value>(content) {
        Ok(serde_json::Value::Object(o)) => o.contains_key("basePdf") || o.contains_key("schemas"),
        _ => false,
    }
}
