//! Mobile menu state machine
//!
//! The panel's `hidden` class is the source of truth, so the controller
//! asks its surface for the current state before every transition instead
//! of keeping a copy.

use crate::contract::{ClassEdit, Target, HIDDEN, SCROLL_LOCK};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// Toggle button clicked
    Toggle,
    /// A link inside the panel was activated
    LinkClick,
}

impl MenuState {
    pub fn from_open(open: bool) -> Self {
        if open {
            MenuState::Open
        } else {
            MenuState::Closed
        }
    }

    pub fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        match (self, event) {
            (MenuState::Open, MenuEvent::Toggle) => MenuState::Closed,
            (MenuState::Closed, MenuEvent::Toggle) => MenuState::Open,
            (_, MenuEvent::LinkClick) => MenuState::Closed,
        }
    }

    /// Panel visibility and icon swap for this state
    pub fn class_edits(self) -> [ClassEdit; 3] {
        let open = self.is_open();
        [
            ClassEdit::new(Target::MenuPanel, HIDDEN, !open),
            ClassEdit::new(Target::MenuIcon, HIDDEN, open),
            ClassEdit::new(Target::CloseIcon, HIDDEN, !open),
        ]
    }

    /// Body `overflow` value: locked while open, cleared otherwise
    pub fn body_overflow(self) -> &'static str {
        if self.is_open() {
            SCROLL_LOCK
        } else {
            ""
        }
    }
}

impl fmt::Display for MenuState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuState::Closed => write!(f, "closed"),
            MenuState::Open => write!(f, "open"),
        }
    }
}

/// Side-effecting target for the mobile menu
pub trait MenuSurface {
    /// Current state as shown (the panel is visible)
    fn is_open(&self) -> bool;

    fn show_menu(&mut self, state: MenuState);
}

pub struct MenuController<S> {
    surface: S,
}

impl<S: MenuSurface> MenuController<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn state(&self) -> MenuState {
        MenuState::from_open(self.surface.is_open())
    }

    pub fn handle(&mut self, event: MenuEvent) {
        let next = self.state().apply(event);
        tracing::trace!(?event, state = %next, "mobile menu");
        self.surface.show_menu(next);
    }

    pub fn on_toggle_click(&mut self) {
        self.handle(MenuEvent::Toggle);
    }

    /// Closes unconditionally, even if the panel is already closed
    pub fn on_nav_link_click(&mut self) {
        self.handle(MenuEvent::LinkClick);
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
