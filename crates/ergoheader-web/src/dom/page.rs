//! One-call setup for a page view

use super::header::HeaderBinding;
use super::menu::MenuBinding;
use ergoheader_core::AttachReport;
use ergoheader_types::SiteConfig;
use tracing::debug;

/// Everything attached for the current page view
pub struct PageBindings {
    pub header: Option<HeaderBinding>,
    pub menu: Option<MenuBinding>,
    pub report: AttachReport,
}

impl PageBindings {
    /// Remove all listeners now
    pub fn detach(&mut self) {
        if let Some(header) = self.header.as_mut() {
            header.detach();
        }
        if let Some(menu) = self.menu.as_mut() {
            menu.detach();
        }
    }

    /// Keep the listeners alive until the page unloads
    pub fn keep_for_page(self) {
        std::mem::forget(self);
    }
}

/// Attach both controllers to the current document
///
/// Each controller attaches independently; with no window or document the
/// result is empty.
pub fn attach_all(config: &SiteConfig) -> PageBindings {
    let mut report = AttachReport::new();

    let Some(window) = web_sys::window() else {
        return PageBindings {
            header: None,
            menu: None,
            report,
        };
    };
    let Some(document) = window.document() else {
        return PageBindings {
            header: None,
            menu: None,
            report,
        };
    };

    let header = HeaderBinding::attach(&window, &document, config.header, &mut report);
    let menu = MenuBinding::attach(&document, &mut report);

    debug!(
        complete = report.is_complete(),
        links = report.links_bound,
        "page bindings attached"
    );

    PageBindings {
        header,
        menu,
        report,
    }
}
