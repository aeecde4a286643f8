use dioxus::prelude::*;

use crate::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div {
            class: "hero",
            h1 { "LiftDesk" }
            p {
                class: "hero-tagline",
                "Strength, cardio and classes under one roof."
            }
            div {
                class: "hero-links",
                Link { to: Route::Team {}, "Meet the team" }
                Link { to: Route::Calendar {}, "Class calendar" }
                Link { to: Route::Login {}, "Member login" }
            }
        }

        section {
            class: "home-info",
            div {
                class: "home-card",
                h2 { "Open every day" }
                p { "Weekdays 06:00 – 22:00" }
                p { "Weekends 08:00 – 20:00" }
            }
            div {
                class: "home-card",
                h2 { "Classes included" }
                p { "Every membership covers the full class calendar, from spinning to strength fundamentals." }
            }
            div {
                class: "home-card",
                h2 { "Personal coaching" }
                p { "Book one of our trainers for a program tailored to your goals." }
            }
        }
    }
}
