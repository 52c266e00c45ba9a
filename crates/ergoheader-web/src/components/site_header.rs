//! Site header component
//!
//! Renders the DOM contract the header binding attaches to: header root,
//! content container, minimized logo badge, mobile menu toggle with its two
//! icons, and the mobile menu panel. Both badge and panel start hidden.
//! The header root carries the scroll thresholds as data attributes so the
//! browser binding runs with the same values the page was rendered with.

use crate::paths::path_to_root;
use ergoheader_core::contract::header_data_attributes;
use ergoheader_types::{HeaderConfig, NavItem, TitleConfig};
use leptos::prelude::*;

/// Two-tone wordmark linking back to the site root
#[component]
pub fn Logo(#[prop(into)] base_dir: String, title: TitleConfig) -> impl IntoView {
    let wordmark = match title.split_pair() {
        Some((first, second)) => {
            let first = first.to_string();
            let second = format!(" {}", second);
            view! {
                <span class="logo-gold">{first}</span>
                <span class="logo-forest">{second}</span>
            }
            .into_any()
        }
        None => view! { <span class="logo-forest">{title.text.clone()}</span> }.into_any(),
    };

    view! {
        <a href=base_dir class="logo-section">
            <div class="logo-text">{wordmark}</div>
        </a>
    }
}

/// Header with logo, desktop navigation, mobile menu toggle and panel
#[component]
pub fn SiteHeader(
    /// Slug of the page being rendered
    #[prop(into)]
    slug: String,
    nav: Vec<NavItem>,
    /// Wordmark text
    #[prop(default = TitleConfig::default())]
    title: TitleConfig,
    /// Scroll thresholds and mobile menu animation step
    #[prop(default = HeaderConfig::default())]
    behavior: HeaderConfig,
) -> impl IntoView {
    let base_dir = path_to_root(&slug);
    let stagger_ms = behavior.nav_stagger_ms;
    let [(_, scroll_up_threshold), (_, minimize_margin), (_, badge_leave_clears_hover)] =
        header_data_attributes(&behavior);

    let desktop_links = nav
        .iter()
        .map(|item| {
            view! {
                <a href=item.href.clone() class="nav-link">
                    {item.label.clone()}
                </a>
            }
        })
        .collect_view();

    let mobile_links = nav
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let delay = format!("animation-delay: {}ms", index as u32 * stagger_ms);
            view! {
                <a href=item.href.clone() class="mobile-nav-link" style=delay>
                    {item.label.clone()}
                </a>
            }
        })
        .collect_view();

    view! {
        <header
            class="ergodicity-header"
            data-scroll-up-threshold=scroll_up_threshold
            data-minimize-margin=minimize_margin
            data-badge-leave-clears-hover=badge_leave_clears_hover
        >
            <div class="header-container">
                <div class="header-content">
                    <Logo base_dir=base_dir.clone() title=title.clone() />

                    <nav class="desktop-nav">{desktop_links}</nav>

                    <button
                        class="mobile-menu-button"
                        aria-label="Toggle menu"
                        id="mobile-menu-toggle"
                    >
                        <svg class="menu-icon" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <line x1="3" y1="12" x2="21" y2="12" stroke-width="2" />
                            <line x1="3" y1="6" x2="21" y2="6" stroke-width="2" />
                            <line x1="3" y1="18" x2="21" y2="18" stroke-width="2" />
                        </svg>
                        <svg class="close-icon hidden" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor">
                            <line x1="18" y1="6" x2="6" y2="18" stroke-width="2" />
                            <line x1="6" y1="6" x2="18" y2="18" stroke-width="2" />
                        </svg>
                    </button>
                </div>
            </div>

            <div class="minimized-logo hidden">
                <Logo base_dir=base_dir title=title />
            </div>

            <div class="mobile-menu hidden" id="mobile-menu">
                <nav class="mobile-nav">{mobile_links}</nav>
            </div>
        </header>
    }
}
