//! Page title component

use crate::paths::path_to_root;
use ergoheader_types::TitleConfig;
use leptos::prelude::*;

/// Site title linking to the root
///
/// A two-word title is split into gold and forest halves, followed by the
/// optional sub-title line. Any other title renders as plain text.
#[component]
pub fn PageTitle(
    #[prop(into)] slug: String,
    title: TitleConfig,
    /// Extra class from the surrounding layout slot
    #[prop(optional, into)]
    display_class: Option<String>,
) -> impl IntoView {
    let base_dir = path_to_root(&slug);
    let class = match display_class {
        Some(extra) if !extra.is_empty() => format!("{} page-title", extra),
        _ => "page-title".to_string(),
    };

    let content = match title.split_pair() {
        Some((first, second)) => {
            let first = first.to_string();
            let second = format!(" {}", second);
            let subtitle = title.subtitle_line().map(str::to_string).map(|line| {
                view! {
                    <br />
                    <span class="title-green">{line}</span>
                }
            });

            view! {
                <span class="title-gold">{first}</span>
                <span class="title-forest">{second}</span>
                {subtitle}
            }
            .into_any()
        }
        None => title.text.clone().into_any(),
    };

    view! {
        <h2 class=class>
            <a href=base_dir>{content}</a>
        </h2>
    }
}
