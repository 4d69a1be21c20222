//! Materializes a theme record into page-level style bindings.
//!
//! Page-agnostic form of the apply step: every `colors` entry becomes a
//! root-level custom property, the body font is mirrored into a dedicated
//! `--font-family` variable for older stylesheets, and the layout becomes
//! a `data-layout` attribute on the content container. Pure function of
//! the record, so applying twice is identical to applying once.

use crate::theme::types::ThemeRecord;
use std::collections::BTreeMap;

/// Variable kept distinct from the `colors` loop for legacy stylesheets;
/// its value must agree with the `--body-font` entry.
pub const FONT_FAMILY_VAR: &str = "--font-family";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBindings {
    /// Custom-property name to value, in deterministic order.
    pub vars: BTreeMap<String, String>,
    /// Value for the content container's `data-layout` attribute.
    pub layout: String,
}

impl StyleBindings {
    pub fn from_record(record: &ThemeRecord) -> Self {
        let mut vars = record.colors.clone();
        if let Some(body_font) = record.body_font() {
            vars.insert(FONT_FAMILY_VAR.to_string(), body_font.to_string());
        }
        Self {
            vars,
            layout: record.layout_or_default().to_string(),
        }
    }

    /// Printable `:root` block plus the layout attribute, the CLI's
    /// rendition of applying a theme.
    pub fn render_css(&self) -> String {
        let mut out = String::from(":root {\n");
        for (name, value) in &self.vars {
            out.push_str(&format!("  {name}: {value};\n"));
        }
        out.push_str("}\n");
        out.push_str(&format!("[data-layout=\"{}\"]\n", self.layout));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::types::{ThemeDate, DEFAULT_LAYOUT};
    use std::collections::BTreeMap;

    fn record(layout: Option<&str>, font: Option<&str>) -> ThemeRecord {
        let mut colors = BTreeMap::new();
        colors.insert("--bg-color".to_string(), "#0a0a0a".to_string());
        colors.insert("--body-font".to_string(), "'Inter', sans-serif".to_string());
        ThemeRecord {
            date: ThemeDate::Remixed,
            name: "Noir x Modern Editorial".to_string(),
            layout: layout.map(str::to_string),
            colors,
            palette_name: None,
            font_name: None,
            font: font.map(str::to_string),
        }
    }

    #[test]
    fn binds_every_color_and_the_font_family_mirror() {
        let bindings = StyleBindings::from_record(&record(Some("hero"), Some("'Inter', sans-serif")));
        assert_eq!(bindings.vars["--bg-color"], "#0a0a0a");
        assert_eq!(bindings.vars[FONT_FAMILY_VAR], "'Inter', sans-serif");
        assert_eq!(bindings.vars[FONT_FAMILY_VAR], bindings.vars["--body-font"]);
        assert_eq!(bindings.layout, "hero");
    }

    #[test]
    fn layout_defaults_to_split_when_absent() {
        let bindings = StyleBindings::from_record(&record(None, None));
        assert_eq!(bindings.layout, DEFAULT_LAYOUT);
        // Legacy records still get a font-family via the colors map.
        assert_eq!(bindings.vars[FONT_FAMILY_VAR], "'Inter', sans-serif");
    }

    #[test]
    fn applying_twice_is_identical_to_applying_once() {
        let rec = record(Some("stacked"), Some("'Inter', sans-serif"));
        let once = StyleBindings::from_record(&rec);
        let twice = StyleBindings::from_record(&rec);
        assert_eq!(once, twice);
        assert_eq!(once.render_css(), twice.render_css());
    }

    #[test]
    fn css_output_lists_each_binding() {
        let css = StyleBindings::from_record(&record(Some("hero"), None)).render_css();
        assert!(css.contains("--bg-color: #0a0a0a;"));
        assert!(css.contains("--font-family: 'Inter', sans-serif;"));
        assert!(css.contains("[data-layout=\"hero\"]"));
    }
}
