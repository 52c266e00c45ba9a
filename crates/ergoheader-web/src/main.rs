//! WASM entry point: bind the server-rendered header for this page view

use ergoheader_types::SiteConfig;

/// Thresholds come from the header root's data attributes; defaults fill gaps
fn main() {
    console_error_panic_hook::set_once();
    ergoheader_web::attach_all(&SiteConfig::default()).keep_for_page();
}
