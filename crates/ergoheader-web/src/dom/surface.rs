//! DOM implementations of the presentation surfaces

use ergoheader_core::contract::{
    ClassEdit, Target, CLOSE_ICON, HEADER_CONTAINER, HEADER_ROOT, HIDDEN, MENU_ICON,
    MENU_PANEL_ID, MENU_TOGGLE_ID, MINIMIZED_LOGO,
};
use ergoheader_core::{AttachReport, HeaderSurface, MenuState, MenuSurface, VisibilityMode};
use web_sys::{Document, Element, HtmlElement};

fn query(root: &Document, selector: &'static str, report: &mut AttachReport) -> Option<Element> {
    let found = root.query_selector(selector).ok().flatten();
    if found.is_none() {
        report.add_missing(selector);
    }
    found
}

fn query_within(
    root: &Element,
    selector: &'static str,
    report: &mut AttachReport,
) -> Option<Element> {
    let found = root.query_selector(selector).ok().flatten();
    if found.is_none() {
        report.add_missing(selector);
    }
    found
}

fn by_id(root: &Document, id: &'static str, report: &mut AttachReport) -> Option<Element> {
    let found = root.get_element_by_id(id);
    if found.is_none() {
        report.add_missing(id);
    }
    found
}

fn apply_edit(element: &Element, edit: &ClassEdit) {
    let _ = element
        .class_list()
        .toggle_with_force(edit.class, edit.present);
}

/// Header root, content container and minimized badge
pub struct DomHeaderSurface {
    pub(crate) root: Element,
    pub(crate) container: Element,
    pub(crate) badge: Element,
}

impl DomHeaderSurface {
    /// Look up all three elements; `None` if any is missing
    pub fn find(document: &Document, report: &mut AttachReport) -> Option<Self> {
        let root = query(document, HEADER_ROOT, report);
        let container = query(document, HEADER_CONTAINER, report);
        let badge = query(document, MINIMIZED_LOGO, report);

        Some(Self {
            root: root?,
            container: container?,
            badge: badge?,
        })
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::HeaderRoot => Some(&self.root),
            Target::HeaderContainer => Some(&self.container),
            Target::MinimizedLogo => Some(&self.badge),
            _ => None,
        }
    }
}

impl HeaderSurface for DomHeaderSurface {
    fn show_mode(&mut self, mode: VisibilityMode) {
        for edit in mode.class_edits() {
            if let Some(element) = self.element(edit.target) {
                apply_edit(element, &edit);
            }
        }
    }
}

/// Mobile menu panel, its toggle icons and the body scroll lock
pub struct DomMenuSurface {
    pub(crate) button: Element,
    pub(crate) panel: Element,
    menu_icon: Option<Element>,
    close_icon: Option<Element>,
    body: Option<HtmlElement>,
}

impl DomMenuSurface {
    /// Toggle button and panel are required; icons and body are optional
    pub fn find(document: &Document, report: &mut AttachReport) -> Option<Self> {
        let button = by_id(document, MENU_TOGGLE_ID, report);
        let panel = by_id(document, MENU_PANEL_ID, report);
        let (button, panel) = (button?, panel?);

        let menu_icon = query_within(&button, MENU_ICON, report);
        let close_icon = query_within(&button, CLOSE_ICON, report);

        Some(Self {
            button,
            panel,
            menu_icon,
            close_icon,
            body: document.body(),
        })
    }

    fn element(&self, target: Target) -> Option<&Element> {
        match target {
            Target::MenuPanel => Some(&self.panel),
            Target::MenuIcon => self.menu_icon.as_ref(),
            Target::CloseIcon => self.close_icon.as_ref(),
            _ => None,
        }
    }
}

impl MenuSurface for DomMenuSurface {
    fn is_open(&self) -> bool {
        !self.panel.class_list().contains(HIDDEN)
    }

    fn show_menu(&mut self, state: MenuState) {
        for edit in state.class_edits() {
            if let Some(element) = self.element(edit.target) {
                apply_edit(element, &edit);
            }
        }

        if let Some(body) = &self.body {
            let style = body.style();
            let _ = match state.body_overflow() {
                "" => style.remove_property("overflow").map(|_| ()),
                value => style.set_property("overflow", value),
            };
        }
    }
}
