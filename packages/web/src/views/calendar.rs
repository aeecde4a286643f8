use dioxus::prelude::*;

const WEEK: &[(&str, &[&str])] = &[
    ("Monday", &["08:00 Spinning", "17:30 Strength fundamentals"]),
    ("Tuesday", &["07:00 Mobility", "18:00 Olympic lifting"]),
    ("Wednesday", &["08:00 Spinning", "19:00 Core"]),
    ("Thursday", &["07:00 Mobility", "17:30 Strength fundamentals"]),
    ("Friday", &["08:00 Spinning", "18:00 Olympic lifting"]),
    ("Saturday", &["10:00 Open gym intro"]),
    ("Sunday", &["10:00 Yoga"]),
];

/// Public weekly class calendar. The live, editable schedule lives in the
/// admin console; this page is the printed-poster version.
#[component]
pub fn Calendar() -> Element {
    rsx! {
        div {
            class: "public-page",
            h1 { "Class calendar" }
            div {
                class: "calendar-grid",
                for (day, slots) in WEEK {
                    div {
                        key: "{day}",
                        class: "calendar-day",
                        h2 { "{day}" }
                        ul {
                            for slot in slots.iter() {
                                li { key: "{slot}", "{slot}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
