//! Transient notification tray.
//!
//! Store failures are not exceptions: views observe the store's `error`
//! field, push it here as a dismissible notice, and clear the field. The
//! tray renders above whatever view is active.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notifications {
    pub notices: Vec<Notice>,
}

pub fn use_notifications() -> Signal<Notifications> {
    use_context::<Signal<Notifications>>()
}

/// Push a notice onto the tray.
pub fn notify(tray: &mut Signal<Notifications>, severity: Severity, message: impl Into<String>) {
    tray.write().notices.push(Notice {
        severity,
        message: message.into(),
    });
}

/// Provider that owns the tray state and renders it after the app content.
#[component]
pub fn NotificationProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(Notifications::default()));

    rsx! {
        {children}
        NotificationTray {}
    }
}

#[component]
pub fn NotificationTray() -> Element {
    let mut tray = use_notifications();

    rsx! {
        div {
            class: "notification-tray",
            for (index, notice) in tray().notices.into_iter().enumerate() {
                div {
                    key: "{index}",
                    class: match notice.severity {
                        Severity::Info => "notice notice-info",
                        Severity::Success => "notice notice-success",
                        Severity::Error => "notice notice-error",
                    },
                    span { "{notice.message}" }
                    button {
                        class: "notice-dismiss",
                        onclick: move |_| {
                            tray.write().notices.remove(index);
                        },
                        "×"
                    }
                }
            }
        }
    }
}
