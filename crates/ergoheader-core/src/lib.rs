//! ergoheader-core - Core library for ergoheader
//!
//! Provides the header visibility and mobile menu state machines, the
//! surfaces they render through, config loading and event-script replay.
//! Nothing in here touches the DOM.

pub mod config;
pub mod contract;
pub mod error;
pub mod header;
pub mod menu;
pub mod script;
pub mod simulate;

pub use config::{load_site_config, resolve_site_config};
pub use error::{AttachReport, CoreError};
pub use header::{HeaderController, HeaderEvent, HeaderState, HeaderSurface, VisibilityMode};
pub use menu::{MenuController, MenuEvent, MenuState, MenuSurface};
pub use script::{parse_script, Region, ScriptAction, ScriptStep};
pub use simulate::{Frame, HeaderRecorder, MenuRecorder, Simulation};

pub use ergoheader_types::{HeaderConfig, NavItem, SiteConfig};
