//! ergoheader-types - Shared data types for ergoheader
//!
//! This crate contains pure configuration structures without heavy dependencies.
//! No DOM bindings, no leptos - just serde-serializable types.
//!
//! Used by:
//! - ergoheader-core (state machines, config loading)
//! - ergoheader-web (markup components, DOM binding)
//! - ergoheader (CLI)

pub mod models;

pub use models::{
    FooterConfig, HeaderConfig, NavItem, Palette, SiteConfig, ThemeConfig, TitleConfig,
    Typography,
};
