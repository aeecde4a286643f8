use dioxus::prelude::*;

use ui::{NotificationProvider, SessionProvider};
use views::{
    AdminHome, AdminLayout, Calendar, Exercises, Home, Login, Memberships,
    NotFound, Schedules, Team, Unauthorized, Users,
};

mod guards;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/team")]
    Team {},
    #[route("/calendar")]
    Calendar {},
    #[route("/login")]
    Login {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminHome {},
        #[route("/admin/users")]
        Users {},
        #[route("/admin/memberships")]
        Memberships {},
        #[route("/admin/schedules")]
        Schedules {},
        #[route("/admin/exercises")]
        Exercises {},
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        SessionProvider {
            NotificationProvider {
                Router::<Route> {}
            }
        }
    }
}
