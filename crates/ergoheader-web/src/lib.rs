//! ergoheader-web - Site header, page title and footer for Leptos, plus the
//! DOM binding that drives the adaptive header in the browser

#![recursion_limit = "512"]

pub mod components;
pub mod dom;
pub mod paths;
#[cfg(feature = "ssr")]
pub mod render;
pub mod style;

pub use components::{PageTitle, SiteFooter, SiteHeader};
pub use dom::{attach_all, HeaderBinding, MenuBinding, PageBindings};
pub use paths::path_to_root;
pub use style::stylesheet;
