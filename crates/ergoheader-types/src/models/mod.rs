//! Configuration models for the site header and its companions

pub mod nav;
pub mod site;
pub mod theme;

pub use nav::NavItem;
pub use site::{FooterConfig, HeaderConfig, SiteConfig, TitleConfig};
pub use theme::{Palette, ThemeConfig, Typography};
