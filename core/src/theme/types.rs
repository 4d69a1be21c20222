use crate::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Style-variable names every palette must define.
pub const REQUIRED_COLOR_KEYS: [&str; 4] =
    ["--bg-color", "--text-color", "--accent-color", "--card-bg"];

/// Style-variable names every font pairing must define.
pub const REQUIRED_FONT_KEYS: [&str; 2] = ["--heading-font", "--body-font"];

/// Layout applied when a record carries none.
pub const DEFAULT_LAYOUT: &str = "split";

/// The marker stored in a record's `date` field when the record was
/// produced by a remix rather than for a calendar date.
const REMIX_SENTINEL: &str = "Remixed";

/// A named set of color variable bindings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: BTreeMap<String, String>,
}

/// A named heading/body font combination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontPairing {
    pub name: String,
    pub fonts: BTreeMap<String, String>,
}

/// The selectable axes a theme is composed from. Loaded once per process
/// and immutable thereafter; each collection must be non-empty whenever a
/// theme is generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub palettes: Vec<Palette>,
    #[serde(rename = "fontPairings")]
    pub font_pairings: Vec<FontPairing>,
    pub layouts: Vec<String>,
}

impl ThemeConfig {
    /// Minimal single-entry config used when the config document cannot
    /// be loaded, so a page still renders with sane styling.
    pub fn fallback() -> Self {
        let mut colors = BTreeMap::new();
        colors.insert("--bg-color".to_string(), "#0f172a".to_string());
        colors.insert("--text-color".to_string(), "#e2e8f0".to_string());
        colors.insert("--accent-color".to_string(), "#38bdf8".to_string());
        colors.insert("--card-bg".to_string(), "rgba(255,255,255,0.05)".to_string());

        let mut fonts = BTreeMap::new();
        fonts.insert("--heading-font".to_string(), "'Inter', sans-serif".to_string());
        fonts.insert("--body-font".to_string(), "'Inter', sans-serif".to_string());

        Self {
            palettes: vec![Palette {
                name: "Default".to_string(),
                colors,
            }],
            font_pairings: vec![FontPairing {
                name: "Default".to_string(),
                fonts,
            }],
            layouts: vec![DEFAULT_LAYOUT.to_string()],
        }
    }
}

/// The `date` field of a theme record: a calendar day for archived
/// records, or the remix sentinel for ad-hoc ones. Serialized as the ISO
/// date string or the literal marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeDate {
    Day(NaiveDate),
    Remixed,
}

impl ThemeDate {
    pub fn as_day(&self) -> Option<NaiveDate> {
        match self {
            ThemeDate::Day(date) => Some(*date),
            ThemeDate::Remixed => None,
        }
    }

    /// The display/wire string: `YYYY-MM-DD` or `Remixed`.
    pub fn label(&self) -> String {
        match self {
            ThemeDate::Day(date) => dates::iso(*date),
            ThemeDate::Remixed => REMIX_SENTINEL.to_string(),
        }
    }
}

impl Serialize for ThemeDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

impl<'de> Deserialize<'de> for ThemeDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw == REMIX_SENTINEL {
            return Ok(ThemeDate::Remixed);
        }
        dates::parse_iso(&raw)
            .map(ThemeDate::Day)
            .map_err(serde::de::Error::custom)
    }
}

/// One composed theme: the unit of persistence and of application.
///
/// `colors` is the union of a palette's colors and a font pairing's fonts
/// (the key sets are disjoint). `font` mirrors the body-font entry for
/// older consumers; `palette_name` and `font_name` retain the contributing
/// axis names independent of the composed display `name`. Records written
/// by early month batches carry neither `layout` nor `font`, so both stay
/// optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeRecord {
    pub date: ThemeDate,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    pub colors: BTreeMap<String, String>,
    #[serde(rename = "paletteName", skip_serializing_if = "Option::is_none")]
    pub palette_name: Option<String>,
    #[serde(rename = "fontName", skip_serializing_if = "Option::is_none")]
    pub font_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<String>,
}

impl ThemeRecord {
    /// Body-font value, preferring the legacy mirror field.
    pub fn body_font(&self) -> Option<&str> {
        self.font
            .as_deref()
            .or_else(|| self.colors.get("--body-font").map(String::as_str))
    }

    /// Layout identifier, defaulting when the record carries none.
    pub fn layout_or_default(&self) -> &str {
        self.layout.as_deref().unwrap_or(DEFAULT_LAYOUT)
    }
}
