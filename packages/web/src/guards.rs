//! Route guards for protected navigation.
//!
//! Guards hold no state of their own: every render evaluates the current
//! session against the route's role requirement and either renders the
//! target or redirects. Unauthenticated visitors go to the login page;
//! authenticated visitors without the required role go to the unauthorized
//! page.

use dioxus::prelude::*;
use store::{Admission, ADMIN_ROLE};
use ui::use_session;

use crate::Route;

/// Admits only administrators.
#[component]
pub fn AdminGuard(children: Element) -> Element {
    rsx! {
        RoleGuard {
            roles: vec![ADMIN_ROLE.to_string()],
            {children}
        }
    }
}

/// Admits an authenticated session holding any of `roles`. An empty list
/// admits any authenticated user.
#[component]
pub fn RoleGuard(roles: Vec<String>, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let required: Vec<&str> = roles.iter().map(String::as_str).collect();
    match session().admission(&required) {
        Admission::Granted => rsx! {
            {children}
        },
        Admission::LoginRequired => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Admission::Forbidden => {
            nav.replace(Route::Unauthorized {});
            rsx! {}
        }
    }
}
