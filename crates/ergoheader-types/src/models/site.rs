//! Site-level configuration (from ergoheader.toml)

use super::nav::NavItem;
use super::theme::ThemeConfig;
use serde::{Deserialize, Serialize};

/// Whole-site configuration consumed by the header, page title and footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Public host the site is served from (no scheme)
    pub base_url: String,

    /// BCP 47 locale tag
    pub locale: String,

    /// Page title and its optional sub-title line
    pub title: TitleConfig,

    /// Navigation entries, in display order
    pub nav: Vec<NavItem>,

    pub header: HeaderConfig,

    pub footer: FooterConfig,

    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "applications.mostlyoptimal.com".to_string(),
            locale: "en-US".to_string(),
            title: TitleConfig::default(),
            nav: NavItem::defaults(),
            header: HeaderConfig::default(),
            footer: FooterConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

/// Thresholds and timings for the adaptive header
///
/// Distances are CSS pixels, durations are milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Cumulative upward scroll needed before the full header comes back
    pub scroll_up_threshold: f64,

    /// The header minimizes once the offset passes `viewport_height - minimize_margin`
    pub minimize_margin: f64,

    /// Duration of the header container fade
    pub transition_ms: u32,

    /// Delay before the minimized badge fades in
    pub badge_delay_ms: u32,

    /// Clear the hover override when the pointer leaves the minimized badge.
    /// Off by default: only leaving the header container clears it.
    pub badge_leave_clears_hover: bool,

    /// Per-entry animation delay step in the mobile menu
    pub nav_stagger_ms: u32,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            scroll_up_threshold: 100.0,
            minimize_margin: 200.0,
            transition_ms: 300,
            badge_delay_ms: 200,
            badge_leave_clears_hover: false,
            nav_stagger_ms: 50,
        }
    }
}

impl HeaderConfig {
    /// Offset past which the header is considered scrolled away
    pub fn minimize_offset(&self, viewport_height: f64) -> f64 {
        viewport_height - self.minimize_margin
    }
}

/// Page title text and the optional second line under it
///
/// TOML has no null, so an empty `subtitle` also drops the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleConfig {
    pub text: String,
    pub subtitle: Option<String>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            text: "Ergodicity Advantage".to_string(),
            subtitle: Some("Applications".to_string()),
        }
    }
}

impl TitleConfig {
    /// Second title line, if any
    pub fn subtitle_line(&self) -> Option<&str> {
        self.subtitle.as_deref().filter(|s| !s.is_empty())
    }

    /// Split a two-word title into its styled halves
    ///
    /// Returns `None` for any other word count, in which case the
    /// title renders as plain text.
    pub fn split_pair(&self) -> Option<(&str, &str)> {
        let mut parts = self.text.split(' ');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => Some((first, second)),
            _ => None,
        }
    }
}

/// Footer tagline and extra links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    pub tagline: String,
    pub links: Vec<NavItem>,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            tagline: "Ergodicity Advantage. Transforming risk management through first principles."
                .to_string(),
            links: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defaults_match_site() {
        let config = HeaderConfig::default();
        assert_eq!(config.scroll_up_threshold, 100.0);
        assert_eq!(config.minimize_margin, 200.0);
        assert!(!config.badge_leave_clears_hover);
        assert_eq!(config.minimize_offset(300.0), 100.0);
    }

    #[test]
    fn test_split_pair_two_words() {
        let title = TitleConfig::default();
        assert_eq!(title.split_pair(), Some(("Ergodicity", "Advantage")));
    }

    #[test]
    fn test_split_pair_other_counts() {
        let one = TitleConfig {
            text: "Notes".to_string(),
            subtitle: None,
        };
        let three = TitleConfig {
            text: "Mostly Optimal Notes".to_string(),
            subtitle: None,
        };
        assert_eq!(one.split_pair(), None);
        assert_eq!(three.split_pair(), None);
    }

    #[test]
    fn test_empty_subtitle_is_absent() {
        let title: TitleConfig = toml::from_str(r#"subtitle = """#).unwrap();
        assert_eq!(title.subtitle_line(), None);
        assert_eq!(TitleConfig::default().subtitle_line(), Some("Applications"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: SiteConfig = toml::from_str(
            r#"
            locale = "fr-FR"

            [header]
            scroll_up_threshold = 40.0
            "#,
        )
        .unwrap();

        assert_eq!(config.locale, "fr-FR");
        assert_eq!(config.header.scroll_up_threshold, 40.0);
        assert_eq!(config.header.minimize_margin, 200.0);
        assert_eq!(config.nav.len(), 7);
        assert_eq!(config.title.subtitle.as_deref(), Some("Applications"));
    }

    #[test]
    fn test_json_roundtrip_preserves_nav() {
        let config = SiteConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
