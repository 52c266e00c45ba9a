use serde::{Deserialize, Serialize};

/// A single navigation entry, rendered identically in the desktop and mobile regions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Navigation shipped with the site
    pub fn defaults() -> Vec<NavItem> {
        vec![
            NavItem::new("Applications", "https://applications.mostlyoptimal.com/"),
            NavItem::new("Research", "https://mostlyoptimal.com/research/"),
            NavItem::new("Foundations", "https://mostlyoptimal.com/theory/"),
            NavItem::new("FAQ", "https://ergodicityadvantage.com/faq/"),
            NavItem::new("Quick Start", "https://mostlyoptimal.com/tutorial/"),
            NavItem::new("About", "https://ergodicityadvantage.com/about/"),
            NavItem::new("Contact", "https://ergodicityadvantage.com/contact/"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nav_order() {
        let labels: Vec<_> = NavItem::defaults().into_iter().map(|n| n.label).collect();
        assert_eq!(
            labels,
            vec![
                "Applications",
                "Research",
                "Foundations",
                "FAQ",
                "Quick Start",
                "About",
                "Contact"
            ]
        );
    }
}
