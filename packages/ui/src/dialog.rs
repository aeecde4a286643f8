use dioxus::prelude::*;

/// Modal shell: dimmed backdrop, titled card, caller-provided body.
#[component]
pub fn Dialog(title: String, on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        div {
            class: "dialog-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog",
                onclick: move |evt| evt.stop_propagation(),
                div {
                    class: "dialog-header",
                    h2 { "{title}" }
                    button {
                        class: "dialog-close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                div { class: "dialog-body", {children} }
            }
        }
    }
}

/// Confirmation prompt for destructive actions.
#[component]
pub fn ConfirmDialog(
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        Dialog {
            title: "Are you sure?",
            on_close: move |_| on_cancel.call(()),
            p { "{message}" }
            div {
                class: "form-actions",
                button {
                    class: "danger",
                    onclick: move |_| on_confirm.call(()),
                    "Delete"
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
