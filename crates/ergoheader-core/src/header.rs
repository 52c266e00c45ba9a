//! Header visibility state machine
//!
//! [`HeaderState`] holds the scroll and hover flags for one page view.
//! Transitions are pure (`state + event -> state`); the decision of FULL vs
//! MINIMIZED is derived from the flags on demand and handed to a
//! [`HeaderSurface`] by [`HeaderController`].

use crate::contract::{ClassEdit, Target, HIDDEN, MINIMIZED, MINIMIZED_MODE};
use ergoheader_types::HeaderConfig;
use serde::Serialize;
use std::fmt;

/// Rendering state of the site header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityMode {
    /// Full header bar
    #[default]
    Full,
    /// Collapsed into the minimized logo badge
    Minimized,
}

impl VisibilityMode {
    pub fn is_minimized(self) -> bool {
        matches!(self, VisibilityMode::Minimized)
    }

    /// Class edits that put the header markup into this mode
    pub fn class_edits(self) -> [ClassEdit; 3] {
        let minimized = self.is_minimized();
        [
            ClassEdit::new(Target::HeaderRoot, MINIMIZED_MODE, minimized),
            ClassEdit::new(Target::HeaderContainer, MINIMIZED, minimized),
            ClassEdit::new(Target::MinimizedLogo, HIDDEN, !minimized),
        ]
    }
}

impl fmt::Display for VisibilityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VisibilityMode::Full => write!(f, "full"),
            VisibilityMode::Minimized => write!(f, "minimized"),
        }
    }
}

/// Input events for the header state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeaderEvent {
    /// Window scrolled; offsets in CSS pixels
    Scroll { offset: f64, viewport_height: f64 },
    /// Pointer entered the header container
    HeaderEnter,
    /// Pointer left the header container
    HeaderLeave,
    /// Pointer entered the minimized logo badge
    BadgeEnter,
    /// Pointer left the minimized logo badge (ignored unless configured)
    BadgeLeave,
}

impl fmt::Display for HeaderEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderEvent::Scroll { offset, .. } => write!(f, "scroll {}", offset),
            HeaderEvent::HeaderEnter => write!(f, "enter header"),
            HeaderEvent::HeaderLeave => write!(f, "leave header"),
            HeaderEvent::BadgeEnter => write!(f, "enter badge"),
            HeaderEvent::BadgeLeave => write!(f, "leave badge"),
        }
    }
}

/// Scroll and hover flags for one page view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderState {
    /// Offset seen at the previous scroll event
    pub last_scroll_y: f64,
    /// Upward distance accumulated since the last downward or stationary scroll
    pub scroll_up_distance: f64,
    pub is_scrolling_up: bool,
    pub is_minimized: bool,
    pub is_header_hovered: bool,
}

impl HeaderState {
    /// Fresh state for a page currently scrolled to `initial_offset`
    pub fn new(initial_offset: f64) -> Self {
        Self {
            last_scroll_y: initial_offset,
            scroll_up_distance: 0.0,
            is_scrolling_up: false,
            is_minimized: false,
            is_header_hovered: false,
        }
    }

    /// Apply one event and return the next state
    pub fn apply(self, event: HeaderEvent, config: &HeaderConfig) -> Self {
        match event {
            HeaderEvent::Scroll {
                offset,
                viewport_height,
            } => self.on_scroll(offset, viewport_height, config),
            HeaderEvent::HeaderEnter | HeaderEvent::BadgeEnter => self.with_hover(true),
            HeaderEvent::HeaderLeave => self.with_hover(false),
            HeaderEvent::BadgeLeave if config.badge_leave_clears_hover => self.with_hover(false),
            HeaderEvent::BadgeLeave => self,
        }
    }

    pub fn on_scroll(self, offset: f64, viewport_height: f64, config: &HeaderConfig) -> Self {
        let mut next = self;

        if offset < self.last_scroll_y {
            next.scroll_up_distance += self.last_scroll_y - offset;
            next.is_scrolling_up = next.scroll_up_distance >= config.scroll_up_threshold;
        } else {
            next.scroll_up_distance = 0.0;
            next.is_scrolling_up = false;
        }

        next.is_minimized = offset > config.minimize_offset(viewport_height);
        next.last_scroll_y = offset;
        next
    }

    pub fn with_hover(self, hovered: bool) -> Self {
        Self {
            is_header_hovered: hovered,
            ..self
        }
    }

    /// Minimized iff scrolled away, not hovered and not scrolling back up
    pub fn mode(&self) -> VisibilityMode {
        if self.is_minimized && !self.is_header_hovered && !self.is_scrolling_up {
            VisibilityMode::Minimized
        } else {
            VisibilityMode::Full
        }
    }
}

impl Default for HeaderState {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Side-effecting target the header decision is rendered to
pub trait HeaderSurface {
    fn show_mode(&mut self, mode: VisibilityMode);
}

/// Owns the header state for one page view and drives a surface
pub struct HeaderController<S> {
    state: HeaderState,
    config: HeaderConfig,
    shown: VisibilityMode,
    surface: S,
}

impl<S: HeaderSurface> HeaderController<S> {
    /// Markup starts in full mode, so nothing is applied until the first event
    pub fn new(surface: S, config: HeaderConfig, initial_offset: f64) -> Self {
        Self {
            state: HeaderState::new(initial_offset),
            config,
            shown: VisibilityMode::Full,
            surface,
        }
    }

    pub fn handle(&mut self, event: HeaderEvent) {
        self.state = self.state.apply(event, &self.config);
        self.recompute_presentation();
    }

    pub fn on_scroll(&mut self, offset: f64, viewport_height: f64) {
        self.handle(HeaderEvent::Scroll {
            offset,
            viewport_height,
        });
    }

    pub fn on_header_hover_enter(&mut self) {
        self.handle(HeaderEvent::HeaderEnter);
    }

    pub fn on_header_hover_leave(&mut self) {
        self.handle(HeaderEvent::HeaderLeave);
    }

    pub fn on_minimized_logo_hover_enter(&mut self) {
        self.handle(HeaderEvent::BadgeEnter);
    }

    pub fn on_minimized_logo_hover_leave(&mut self) {
        self.handle(HeaderEvent::BadgeLeave);
    }

    /// Derive the mode from the current flags and render it
    pub fn recompute_presentation(&mut self) {
        let mode = self.state.mode();
        if mode != self.shown {
            tracing::trace!(from = %self.shown, to = %mode, "header mode changed");
            self.shown = mode;
        }
        self.surface.show_mode(mode);
    }

    pub fn state(&self) -> &HeaderState {
        &self.state
    }

    pub fn mode(&self) -> VisibilityMode {
        self.shown
    }

    pub fn config(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}
