//! Header visibility binding: hover on container and badge, scroll on window

use super::listener::Listener;
use super::surface::DomHeaderSurface;
use ergoheader_core::contract::header_config_from_attributes;
use ergoheader_core::{AttachReport, HeaderConfig, HeaderController, HeaderState, VisibilityMode};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use web_sys::{Document, Window};

type SharedHeader = Rc<RefCell<HeaderController<DomHeaderSurface>>>;

/// Live header controller plus the listeners feeding it
///
/// Dropping the binding removes every listener.
pub struct HeaderBinding {
    controller: SharedHeader,
    listeners: Vec<Listener>,
}

impl HeaderBinding {
    /// Attach to the header in `document`
    ///
    /// Thresholds rendered onto the header root override the matching
    /// fields of `config`.
    pub fn attach(
        window: &Window,
        document: &Document,
        config: HeaderConfig,
        report: &mut AttachReport,
    ) -> Option<Self> {
        let surface = DomHeaderSurface::find(document, report)?;
        let config = header_config_from_attributes(config, |name| surface.root.get_attribute(name));
        let container = surface.container.clone();
        let badge = surface.badge.clone();

        let initial_offset = window.scroll_y().unwrap_or(0.0);
        let controller: SharedHeader = Rc::new(RefCell::new(HeaderController::new(
            surface,
            config,
            initial_offset,
        )));

        let mut listeners = Vec::new();

        let c = Rc::clone(&controller);
        listeners.extend(Listener::add(container.as_ref(), "mouseenter", false, move |_| {
            c.borrow_mut().on_header_hover_enter();
        }));

        let c = Rc::clone(&controller);
        listeners.extend(Listener::add(container.as_ref(), "mouseleave", false, move |_| {
            c.borrow_mut().on_header_hover_leave();
        }));

        let c = Rc::clone(&controller);
        listeners.extend(Listener::add(badge.as_ref(), "mouseenter", false, move |_| {
            c.borrow_mut().on_minimized_logo_hover_enter();
        }));

        if config.badge_leave_clears_hover {
            let c = Rc::clone(&controller);
            listeners.extend(Listener::add(badge.as_ref(), "mouseleave", false, move |_| {
                c.borrow_mut().on_minimized_logo_hover_leave();
            }));
        }

        let c = Rc::clone(&controller);
        let win = window.clone();
        let mut last_viewport = None;
        listeners.extend(Listener::add(window.as_ref(), "scroll", true, move |_| {
            let reading = win.inner_height().ok().and_then(|h| h.as_f64());
            let Some(viewport_height) = current_viewport(reading, &mut last_viewport) else {
                return;
            };
            let offset = win.scroll_y().unwrap_or(0.0);
            c.borrow_mut().on_scroll(offset, viewport_height);
        }));

        report.header_attached = true;
        debug!(
            listeners = listeners.len(),
            initial_offset, "header binding attached"
        );

        Some(Self {
            controller,
            listeners,
        })
    }

    pub fn mode(&self) -> VisibilityMode {
        self.controller.borrow().mode()
    }

    pub fn state(&self) -> HeaderState {
        *self.controller.borrow().state()
    }

    pub fn config(&self) -> HeaderConfig {
        *self.controller.borrow().config()
    }

    /// Remove all listeners; the controller stops receiving events
    pub fn detach(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        for listener in self.listeners.drain(..) {
            listener.remove();
        }
        debug!("header binding detached");
    }
}

impl Drop for HeaderBinding {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Viewport height for one scroll event: the fresh reading if usable, else
/// the last usable one. `None` until the browser has reported a height.
fn current_viewport(reading: Option<f64>, last: &mut Option<f64>) -> Option<f64> {
    if let Some(height) = reading.filter(|h| h.is_finite() && *h > 0.0) {
        *last = Some(height);
    }
    *last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_reading_is_remembered() {
        let mut last = None;
        assert_eq!(current_viewport(Some(700.0), &mut last), Some(700.0));
        assert_eq!(current_viewport(None, &mut last), Some(700.0));
        assert_eq!(current_viewport(Some(0.0), &mut last), Some(700.0));
        assert_eq!(current_viewport(Some(900.0), &mut last), Some(900.0));
    }

    #[test]
    fn test_no_viewport_before_first_reading() {
        let mut last = None;
        assert_eq!(current_viewport(None, &mut last), None);
        assert_eq!(current_viewport(Some(f64::NAN), &mut last), None);
    }
}
