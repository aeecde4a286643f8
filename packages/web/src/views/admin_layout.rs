use dioxus::prelude::*;
use ui::{icons::FaDumbbell, use_session, Icon, LogoutButton, Navbar};

use crate::guards::AdminGuard;
use crate::Route;

/// Shell around every admin route: guard, navigation, content outlet.
#[component]
pub fn AdminLayout() -> Element {
    rsx! {
        AdminGuard {
            div {
                class: "admin-layout",
                AdminNav {}
                main {
                    class: "admin-main",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// `/admin` lands on the users table.
#[component]
pub fn AdminHome() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Users {});
    rsx! {}
}

#[component]
fn AdminNav() -> Element {
    let session = use_session();

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Home {},
                Icon { icon: FaDumbbell, width: 18, height: 18 }
                span { "LiftDesk" }
            }
            div {
                class: "navbar-links",
                Link { to: Route::Users {}, "Users" }
                Link { to: Route::Memberships {}, "Memberships" }
                Link { to: Route::Schedules {}, "Schedules" }
                Link { to: Route::Exercises {}, "Exercises" }
            }
            div {
                class: "navbar-session",
                span { class: "navbar-user", "{session().username()}" }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
