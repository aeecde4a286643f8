use dioxus::prelude::*;
use ui::{use_session, LogoutButton};

use crate::Route;

/// Shown when an authenticated session lacks the role a route requires.
#[component]
pub fn Unauthorized() -> Element {
    let session = use_session();

    rsx! {
        div {
            class: "public-page",
            h1 { "No access" }
            p {
                "The account "
                strong { "{session().username()}" }
                " is signed in but does not have permission to view that page."
            }
            div {
                class: "hero-links",
                Link { to: Route::Home {}, "Back to the home page" }
                LogoutButton { label: "Switch account".to_string() }
            }
        }
    }
}
