//! DOM contract shared by the markup components and the DOM binding
//!
//! The markup must carry these names verbatim; the binding looks them up
//! and the presentation step toggles the classes listed here.

use ergoheader_types::HeaderConfig;

pub const HEADER_ROOT: &str = ".ergodicity-header";
pub const HEADER_CONTAINER: &str = ".header-container";
pub const MINIMIZED_LOGO: &str = ".minimized-logo";
pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";
pub const MENU_PANEL_ID: &str = "mobile-menu";
pub const MENU_ICON: &str = ".menu-icon";
pub const CLOSE_ICON: &str = ".close-icon";
pub const MOBILE_NAV_LINK: &str = ".mobile-nav-link";

pub const HIDDEN: &str = "hidden";
pub const MINIMIZED_MODE: &str = "minimized-mode";
pub const MINIMIZED: &str = "minimized";

/// Body `overflow` value while the mobile menu locks background scrolling
pub const SCROLL_LOCK: &str = "hidden";

/// Data attributes on the header root carrying the behavior thresholds
pub const DATA_SCROLL_UP_THRESHOLD: &str = "data-scroll-up-threshold";
pub const DATA_MINIMIZE_MARGIN: &str = "data-minimize-margin";
pub const DATA_BADGE_LEAVE_CLEARS_HOVER: &str = "data-badge-leave-clears-hover";

/// Attribute values the header root is rendered with
pub fn header_data_attributes(config: &HeaderConfig) -> [(&'static str, String); 3] {
    [
        (DATA_SCROLL_UP_THRESHOLD, config.scroll_up_threshold.to_string()),
        (DATA_MINIMIZE_MARGIN, config.minimize_margin.to_string()),
        (
            DATA_BADGE_LEAVE_CLEARS_HOVER,
            config.badge_leave_clears_hover.to_string(),
        ),
    ]
}

/// Read the behavior thresholds back from the header root
///
/// `attr` returns the raw attribute value. Each field that is absent or does
/// not parse to an accepted value keeps the one from `base`.
pub fn header_config_from_attributes(
    base: HeaderConfig,
    attr: impl Fn(&str) -> Option<String>,
) -> HeaderConfig {
    let distance = |name: &str, fallback: f64| {
        attr(name)
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value >= 0.0)
            .unwrap_or(fallback)
    };

    HeaderConfig {
        scroll_up_threshold: distance(DATA_SCROLL_UP_THRESHOLD, base.scroll_up_threshold),
        minimize_margin: distance(DATA_MINIMIZE_MARGIN, base.minimize_margin),
        badge_leave_clears_hover: attr(DATA_BADGE_LEAVE_CLEARS_HOVER)
            .and_then(|raw| raw.trim().parse::<bool>().ok())
            .unwrap_or(base.badge_leave_clears_hover),
        ..base
    }
}

/// Element a class edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    HeaderRoot,
    HeaderContainer,
    MinimizedLogo,
    MenuPanel,
    MenuIcon,
    CloseIcon,
}

/// Add (`present = true`) or remove one class on one element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEdit {
    pub target: Target,
    pub class: &'static str,
    pub present: bool,
}

impl ClassEdit {
    pub const fn new(target: Target, class: &'static str, present: bool) -> Self {
        Self {
            target,
            class,
            present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_rendered_attributes_read_back() {
        let config = HeaderConfig {
            scroll_up_threshold: 40.0,
            minimize_margin: 120.5,
            badge_leave_clears_hover: true,
            ..HeaderConfig::default()
        };
        let rendered = header_data_attributes(&config);
        let pairs: Vec<(&str, &str)> = rendered.iter().map(|(k, v)| (*k, v.as_str())).collect();

        let back = header_config_from_attributes(HeaderConfig::default(), lookup(&pairs));
        assert_eq!(back, config);
    }

    #[test]
    fn test_missing_attributes_keep_base() {
        let back = header_config_from_attributes(HeaderConfig::default(), lookup(&[]));
        assert_eq!(back, HeaderConfig::default());
    }

    #[test]
    fn test_unparseable_attributes_fall_back_per_field() {
        let back = header_config_from_attributes(
            HeaderConfig::default(),
            lookup(&[
                (DATA_SCROLL_UP_THRESHOLD, "lots"),
                (DATA_MINIMIZE_MARGIN, "-5"),
                (DATA_BADGE_LEAVE_CLEARS_HOVER, "true"),
            ]),
        );
        assert_eq!(back.scroll_up_threshold, 100.0);
        assert_eq!(back.minimize_margin, 200.0);
        assert!(back.badge_leave_clears_hover);
    }

    #[test]
    fn test_non_finite_threshold_rejected() {
        let back = header_config_from_attributes(
            HeaderConfig::default(),
            lookup(&[(DATA_SCROLL_UP_THRESHOLD, "inf")]),
        );
        assert_eq!(back.scroll_up_threshold, 100.0);
    }
}
