//! Stylesheet for the header components

use ergoheader_types::SiteConfig;
use std::fmt::Write;

/// Static rules shared by every configuration
pub const BASE_CSS: &str = include_str!("../style/header.css");

/// Full stylesheet: theme variables, base rules, then configured timings
pub fn stylesheet(config: &SiteConfig) -> String {
    let mut css = config.theme.css_variables();
    css.push('\n');
    css.push_str(BASE_CSS);
    css.push('\n');
    css.push_str(&transition_rules(config));
    css
}

/// Transition timings that vary with the header config
pub fn transition_rules(config: &SiteConfig) -> String {
    let header = &config.header;
    let mut css = String::new();
    let _ = writeln!(
        css,
        ".ergodicity-header {{\n  transition: all {}ms ease;\n}}\n",
        header.transition_ms
    );
    let _ = writeln!(
        css,
        ".header-container {{\n  transition: all {}ms ease-in-out;\n}}\n",
        header.transition_ms
    );
    let _ = writeln!(
        css,
        ".header-content {{\n  transition: all {}ms;\n}}\n",
        header.transition_ms
    );
    let _ = writeln!(
        css,
        ".minimized-logo {{\n  transition: opacity {0}ms ease;\n  transition-delay: {0}ms;\n}}",
        header.badge_delay_ms
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timings() {
        let rules = transition_rules(&SiteConfig::default());
        assert!(rules.contains("transition: all 300ms ease;"));
        assert!(rules.contains("transition-delay: 200ms;"));
    }

    #[test]
    fn test_timings_follow_config() {
        let mut config = SiteConfig::default();
        config.header.transition_ms = 150;
        config.header.badge_delay_ms = 0;

        let css = stylesheet(&config);
        assert!(css.contains("transition: all 150ms ease-in-out;"));
        assert!(css.contains("transition: opacity 0ms ease;"));
        // hidden badge override must come from the base rules
        assert!(css.contains(".minimized-logo.hidden {"));
    }

    #[test]
    fn test_variables_come_first() {
        let css = stylesheet(&SiteConfig::default());
        assert!(css.starts_with(":root {"));
    }
}
