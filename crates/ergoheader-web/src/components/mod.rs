//! Leptos UI components

mod footer;
mod page_title;
mod site_header;

pub use footer::SiteFooter;
pub use page_title::PageTitle;
pub use site_header::{Logo, SiteHeader};
