//! Mobile menu binding: toggle button plus one close handler per nav link

use super::listener::Listener;
use super::surface::DomMenuSurface;
use ergoheader_core::contract::MOBILE_NAV_LINK;
use ergoheader_core::{AttachReport, MenuController, MenuState};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

type SharedMenu = Rc<RefCell<MenuController<DomMenuSurface>>>;

pub struct MenuBinding {
    controller: SharedMenu,
    listeners: Vec<Listener>,
}

impl MenuBinding {
    pub fn attach(document: &Document, report: &mut AttachReport) -> Option<Self> {
        let surface = DomMenuSurface::find(document, report)?;
        let button = surface.button.clone();
        let links = nav_links(&surface.panel);

        let controller: SharedMenu = Rc::new(RefCell::new(MenuController::new(surface)));
        let mut listeners = Vec::with_capacity(links.len() + 1);

        let c = Rc::clone(&controller);
        listeners.extend(Listener::add(button.as_ref(), "click", false, move |_| {
            c.borrow_mut().on_toggle_click();
        }));

        let mut bound = 0;
        for link in &links {
            let c = Rc::clone(&controller);
            if let Some(listener) = Listener::add(link.as_ref(), "click", false, move |_| {
                c.borrow_mut().on_nav_link_click();
            }) {
                listeners.push(listener);
                bound += 1;
            }
        }

        report.menu_attached = true;
        report.links_bound += bound;
        debug!(links = bound, "mobile menu binding attached");

        Some(Self {
            controller,
            listeners,
        })
    }

    pub fn state(&self) -> MenuState {
        self.controller.borrow().state()
    }

    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        debug!("mobile menu binding detached");
    }
}

impl Drop for MenuBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Links inside the panel, in document order
fn nav_links(panel: &Element) -> Vec<Element> {
    let Ok(nodes) = panel.query_selector_all(MOBILE_NAV_LINK) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
