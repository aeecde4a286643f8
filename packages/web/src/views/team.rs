use dioxus::prelude::*;

struct Trainer {
    name: &'static str,
    role: &'static str,
    specialty: &'static str,
}

const TRAINERS: &[Trainer] = &[
    Trainer {
        name: "Maja Lindqvist",
        role: "Head coach",
        specialty: "Olympic lifting",
    },
    Trainer {
        name: "Tomas Ried",
        role: "Trainer",
        specialty: "Endurance and spinning",
    },
    Trainer {
        name: "Ana Duarte",
        role: "Trainer",
        specialty: "Mobility and rehab",
    },
    Trainer {
        name: "Piotr Nowak",
        role: "Trainer",
        specialty: "Strength fundamentals",
    },
];

/// Public team roster.
#[component]
pub fn Team() -> Element {
    rsx! {
        div {
            class: "public-page",
            h1 { "The team" }
            div {
                class: "team-grid",
                for trainer in TRAINERS {
                    div {
                        key: "{trainer.name}",
                        class: "team-card",
                        h2 { "{trainer.name}" }
                        p { class: "team-role", "{trainer.role}" }
                        p { "{trainer.specialty}" }
                    }
                }
            }
        }
    }
}
