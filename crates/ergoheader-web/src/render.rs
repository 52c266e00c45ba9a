//! Server-side rendering of the components to HTML strings

use crate::components::{PageTitle, SiteFooter, SiteHeader};
use ergoheader_types::SiteConfig;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Which component(s) to render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Header,
    Title,
    Footer,
    All,
}

pub fn render_header(config: &SiteConfig, slug: &str) -> String {
    let nav = config.nav.clone();
    let title = config.title.clone();
    let behavior = config.header;
    let slug = slug.to_string();
    Owner::new().with(move || {
        view! { <SiteHeader slug=slug nav=nav title=title behavior=behavior /> }.to_html()
    })
}

pub fn render_title(config: &SiteConfig, slug: &str) -> String {
    let title = config.title.clone();
    let slug = slug.to_string();
    Owner::new().with(move || view! { <PageTitle slug=slug title=title /> }.to_html())
}

pub fn render_footer(config: &SiteConfig, year: Option<i32>) -> String {
    let footer = config.footer.clone();
    Owner::new().with(move || match year {
        Some(year) => view! { <SiteFooter footer=footer year=year /> }.to_html(),
        None => view! { <SiteFooter footer=footer /> }.to_html(),
    })
}

pub fn render_part(config: &SiteConfig, slug: &str, part: Part) -> String {
    match part {
        Part::Header => render_header(config, slug),
        Part::Title => render_title(config, slug),
        Part::Footer => render_footer(config, None),
        Part::All => [
            render_header(config, slug),
            render_title(config, slug),
            render_footer(config, None),
        ]
        .join("\n"),
    }
}
