//! Theme palette and typography

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Font families for headings, body text and code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Typography {
    pub header: String,
    pub body: String,
    pub code: String,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            header: "Playfair Display".to_string(),
            body: "IBM Plex Sans".to_string(),
            code: "JetBrains Mono".to_string(),
        }
    }
}

/// Named colors for one scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub light: String,
    pub lightgray: String,
    pub gray: String,
    pub darkgray: String,
    pub dark: String,
    pub secondary: String,
    pub tertiary: String,
    pub highlight: String,
    pub text_highlight: String,
}

impl Palette {
    pub fn light_mode() -> Self {
        Self {
            light: "#FFFFFF".to_string(),
            lightgray: "#D7DCD7".to_string(),
            gray: "#AEC6C1".to_string(),
            darkgray: "#2A4D3A".to_string(),
            dark: "#2A4D3A".to_string(),
            secondary: "#00B4A6".to_string(),
            tertiary: "#F7C948".to_string(),
            highlight: "rgba(180, 209, 184, 0.15)".to_string(),
            text_highlight: "#F7C94844".to_string(),
        }
    }

    pub fn dark_mode() -> Self {
        Self {
            light: "#1a1f1a".to_string(),
            lightgray: "#2d3d2d".to_string(),
            gray: "#5a6f5a".to_string(),
            darkgray: "#B4D1B8".to_string(),
            dark: "#FFFFFF".to_string(),
            secondary: "#00B4A6".to_string(),
            tertiary: "#F7C948".to_string(),
            highlight: "rgba(180, 209, 184, 0.15)".to_string(),
            text_highlight: "#F7C94844".to_string(),
        }
    }

    /// (css variable name, value) pairs in declaration order
    pub fn entries(&self) -> [(&'static str, &str); 9] {
        [
            ("light", self.light.as_str()),
            ("lightgray", self.lightgray.as_str()),
            ("gray", self.gray.as_str()),
            ("darkgray", self.darkgray.as_str()),
            ("dark", self.dark.as_str()),
            ("secondary", self.secondary.as_str()),
            ("tertiary", self.tertiary.as_str()),
            ("highlight", self.highlight.as_str()),
            ("textHighlight", self.text_highlight.as_str()),
        ]
    }
}

/// Theme: typography plus one palette per color scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub typography: Typography,
    pub light: Palette,
    pub dark: Palette,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            typography: Typography::default(),
            light: Palette::light_mode(),
            dark: Palette::dark_mode(),
        }
    }
}

impl ThemeConfig {
    /// CSS custom properties for both schemes
    ///
    /// The dark block is keyed on the `saved-theme` attribute the page
    /// toggles on the root element.
    pub fn css_variables(&self) -> String {
        let mut css = String::new();
        css.push_str(":root {\n");
        for (name, value) in self.light.entries() {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        let _ = writeln!(css, "  --headerFont: \"{}\";", self.typography.header);
        let _ = writeln!(css, "  --bodyFont: \"{}\";", self.typography.body);
        let _ = writeln!(css, "  --codeFont: \"{}\";", self.typography.code);
        css.push_str("}\n\n:root[saved-theme=\"dark\"] {\n");
        for (name, value) in self.dark.entries() {
            let _ = writeln!(css, "  --{}: {};", name, value);
        }
        css.push_str("}\n");
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_theme_keeps_other_palette() {
        let theme: ThemeConfig = toml::from_str(
            r##"
            [dark]
            light = "#000000"
            lightgray = "#111111"
            gray = "#222222"
            darkgray = "#333333"
            dark = "#444444"
            secondary = "#555555"
            tertiary = "#666666"
            highlight = "#777777"
            text_highlight = "#888888"
            "##,
        )
        .unwrap();
        assert_eq!(theme.light, Palette::light_mode());
        assert_eq!(theme.dark.light, "#000000");
        assert!(theme.css_variables().contains("  --textHighlight: #888888;\n"));
    }

    #[test]
    fn test_css_variables_cover_both_schemes() {
        let css = ThemeConfig::default().css_variables();
        assert!(css.starts_with(":root {\n"));
        assert!(css.contains("  --tertiary: #F7C948;\n"));
        assert!(css.contains("  --headerFont: \"Playfair Display\";\n"));
        assert!(css.contains(":root[saved-theme=\"dark\"] {\n  --light: #1a1f1a;\n"));
        assert_eq!(css.matches("--textHighlight").count(), 2);
    }
}
