use dioxus::prelude::*;

use crate::Route;

/// Unmatched paths land back on the public home page.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!(path = segments.join("/"), "unmatched route");
    nav.replace(Route::Home {});
    rsx! {}
}
