//! Footer component

use chrono::{Datelike, Utc};
use ergoheader_types::FooterConfig;
use leptos::prelude::*;

/// Footer with copyright line and optional links
#[component]
pub fn SiteFooter(
    footer: FooterConfig,
    /// Copyright year (defaults to the current year)
    #[prop(optional)]
    year: Option<i32>,
    #[prop(optional, into)] display_class: Option<String>,
) -> impl IntoView {
    let year = year.unwrap_or_else(|| Utc::now().year());
    let class = format!("{} ergodicity-footer", display_class.unwrap_or_default())
        .trim_start()
        .to_string();
    let copyright = format!("© {} {}", year, footer.tagline);

    let links = (!footer.links.is_empty()).then(|| {
        let items = footer
            .links
            .into_iter()
            .map(|link| {
                view! {
                    <li>
                        <a href=link.href>{link.label}</a>
                    </li>
                }
            })
            .collect_view();
        view! { <ul>{items}</ul> }
    });

    view! {
        <footer class=class>
            <div class="footer-content">
                <p class="footer-text">{copyright}</p>
                {links}
            </div>
        </footer>
    }
}
