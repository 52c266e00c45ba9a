//! Replay event scripts through both controllers without a DOM
//!
//! The recorders stand in for the page: they remember every mode and menu
//! state the controllers rendered, which is what the CLI prints and what
//! the integration tests assert on.

use crate::header::{HeaderController, HeaderState, HeaderSurface, VisibilityMode};
use crate::menu::{MenuController, MenuState, MenuSurface};
use crate::script::{ScriptAction, ScriptStep};
use ergoheader_types::HeaderConfig;
use serde::Serialize;

/// Viewport height used until a script sets one
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

/// Header surface that records every rendered mode
#[derive(Debug, Default, Clone)]
pub struct HeaderRecorder {
    pub rendered: Vec<VisibilityMode>,
}

impl HeaderRecorder {
    pub fn current(&self) -> VisibilityMode {
        self.rendered.last().copied().unwrap_or_default()
    }
}

impl HeaderSurface for HeaderRecorder {
    fn show_mode(&mut self, mode: VisibilityMode) {
        self.rendered.push(mode);
    }
}

/// Menu surface backed by a flag, standing in for the panel's `hidden` class
#[derive(Debug, Default, Clone)]
pub struct MenuRecorder {
    state: MenuState,
    pub rendered: Vec<MenuState>,
}

impl MenuRecorder {
    pub fn current(&self) -> MenuState {
        self.state
    }

    /// Body overflow as the page would see it
    pub fn body_overflow(&self) -> &'static str {
        self.state.body_overflow()
    }
}

impl MenuSurface for MenuRecorder {
    fn is_open(&self) -> bool {
        self.state.is_open()
    }

    fn show_menu(&mut self, state: MenuState) {
        self.state = state;
        self.rendered.push(state);
    }
}

/// Snapshot after one script step
#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub line: usize,
    pub action: String,
    pub viewport_height: f64,
    pub header: HeaderState,
    pub mode: VisibilityMode,
    pub menu: MenuState,
}

/// Both controllers wired to recorders, driven step by step
pub struct Simulation {
    header: HeaderController<HeaderRecorder>,
    menu: MenuController<MenuRecorder>,
    viewport_height: f64,
}

impl Simulation {
    pub fn new(config: HeaderConfig, initial_offset: f64) -> Self {
        Self {
            header: HeaderController::new(HeaderRecorder::default(), config, initial_offset),
            menu: MenuController::new(MenuRecorder::default()),
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    /// Replay a parsed script, returning one frame per step
    pub fn run(config: HeaderConfig, steps: &[ScriptStep]) -> Vec<Frame> {
        let initial_offset = steps
            .iter()
            .find_map(|s| match s.action {
                ScriptAction::Start(offset) => Some(offset),
                _ => None,
            })
            .unwrap_or(0.0);

        let mut simulation = Simulation::new(config, initial_offset);
        steps.iter().map(|step| simulation.step(step)).collect()
    }

    pub fn step(&mut self, step: &ScriptStep) -> Frame {
        if let ScriptAction::Viewport(height) = step.action {
            self.viewport_height = height;
        }
        if let Some(event) = step.action.header_event(self.viewport_height) {
            self.header.handle(event);
        }
        if let Some(event) = step.action.menu_event() {
            self.menu.handle(event);
        }

        Frame {
            line: step.line,
            action: step.action.to_string(),
            viewport_height: self.viewport_height,
            header: *self.header.state(),
            mode: self.header.mode(),
            menu: self.menu.state(),
        }
    }

    pub fn header(&self) -> &HeaderController<HeaderRecorder> {
        &self.header
    }

    pub fn menu(&self) -> &MenuController<MenuRecorder> {
        &self.menu
    }
}
