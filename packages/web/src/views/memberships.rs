//! Admin membership ledger.
//!
//! Creation picks the owner, the membership type and a start date; the
//! server derives the end date, price and duration from the type. Editing
//! can move a membership to another type, adjust the end date, or toggle it
//! inactive.

use api::{CreateMembership, Membership, UpdateMembership};
use chrono::{DateTime, NaiveDate, Utc};
use dioxus::prelude::*;
use store::ResourceStore;
use ui::{
    notify, use_api, use_notifications, ConfirmDialog, Dialog, Severity,
    StoreSignal,
};

#[derive(Clone, Debug, PartialEq)]
enum MembershipDraft {
    Create(CreateMembership),
    Update { id: i64, req: UpdateMembership },
}

fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

fn date_input(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%d").to_string()
}

#[component]
pub fn Memberships() -> Element {
    let client = use_api();
    let memberships =
        use_hook(move || StoreSignal::new(ResourceStore::new(client.memberships())));
    let mut tray = use_notifications();

    let mut show_editor = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Membership>::None);

    let _loader = use_resource({
        let memberships = memberships.clone();
        move || {
            let memberships = memberships.clone();
            async move { memberships.fetch_all().await }
        }
    });

    use_effect({
        let memberships = memberships.clone();
        move || {
            if let Some(message) = memberships.state().error {
                notify(&mut tray, Severity::Error, message);
                memberships.clear_error();
            }
        }
    });

    let state = memberships.state();

    let open_create = {
        let memberships = memberships.clone();
        move |_| {
            memberships.set_selected(None);
            show_editor.set(true);
        }
    };

    let save = {
        let memberships = memberships.clone();
        move |draft: MembershipDraft| {
            let memberships = memberships.clone();
            spawn(async move {
                let saved = match draft {
                    MembershipDraft::Create(req) => memberships.create(req).await,
                    MembershipDraft::Update { id, req } => {
                        memberships.update(id, req).await
                    }
                };
                if saved {
                    memberships.set_selected(None);
                    show_editor.set(false);
                }
            });
        }
    };

    let confirm_delete = {
        let memberships = memberships.clone();
        move |_| {
            if let Some(membership) = pending_delete() {
                let memberships = memberships.clone();
                spawn(async move {
                    memberships.delete(membership.id).await;
                    pending_delete.set(None);
                });
            }
        }
    };

    rsx! {
        div {
            class: "resource-view",
            header {
                class: "resource-header",
                h1 { "Memberships" }
                button { class: "primary", onclick: open_create, "New membership" }
            }

            if state.is_loading && state.collection.is_empty() {
                p { class: "table-status", "Loading memberships..." }
            } else if state.collection.is_empty() {
                p { class: "table-status", "No memberships yet." }
            } else {
                table {
                    class: "resource-table",
                    thead {
                        tr {
                            th { "Member" }
                            th { "Type" }
                            th { "Period" }
                            th { "Price" }
                            th { "Duration" }
                            th { "Active" }
                            th { "" }
                        }
                    }
                    tbody {
                        for membership in state.collection.iter() {
                            tr {
                                key: "{membership.id}",
                                td { "{membership.user_name}" }
                                td { "{membership.membership_type_name}" }
                                td { {membership.period()} }
                                td { "{membership.price}" }
                                td { "{membership.duration}" }
                                td {
                                    if membership.is_active {
                                        span { class: "badge badge-active", "active" }
                                    } else {
                                        span { class: "badge badge-inactive", "inactive" }
                                    }
                                }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let memberships = memberships.clone();
                                            let membership = membership.clone();
                                            move |_| {
                                                memberships.set_selected(Some(membership.clone()));
                                                show_editor.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let membership = membership.clone();
                                            move |_| pending_delete.set(Some(membership.clone()))
                                        },
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if show_editor() {
                MembershipEditor {
                    membership: memberships.state().selected,
                    on_save: save,
                    on_cancel: {
                        let memberships = memberships.clone();
                        move |_| {
                            memberships.set_selected(None);
                            show_editor.set(false);
                        }
                    },
                }
            }

            if let Some(membership) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "Delete the {} membership for {}?",
                        membership.membership_type_name, membership.user_name
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn MembershipEditor(
    membership: Option<Membership>,
    on_save: EventHandler<MembershipDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = membership.clone();
    let mut user_id = use_signal({
        let membership = membership.clone();
        move || membership.map(|m| m.user_id).unwrap_or_default()
    });
    let mut type_id = use_signal({
        let membership = membership.clone();
        move || {
            membership
                .map(|m| m.membership_type_id.to_string())
                .unwrap_or_default()
        }
    });
    let mut date = use_signal({
        let membership = membership.clone();
        move || match membership {
            Some(m) => date_input(&m.end_date),
            None => String::new(),
        }
    });
    let mut active = use_signal({
        let membership = membership.clone();
        move || membership.map(|m| m.is_active).unwrap_or(true)
    });

    let submit = {
        let editing = editing.clone();
        move |_| {
            let Ok(membership_type_id) = type_id().trim().parse::<i64>() else {
                return;
            };
            let Some(when) = parse_date(date().trim()) else {
                return;
            };
            let draft = match &editing {
                Some(existing) => MembershipDraft::Update {
                    id: existing.id,
                    req: UpdateMembership {
                        membership_type_id,
                        end_date: when,
                        is_active: active(),
                    },
                },
                None => {
                    if user_id().trim().is_empty() {
                        return;
                    }
                    MembershipDraft::Create(CreateMembership {
                        user_id: user_id().trim().to_string(),
                        membership_type_id,
                        start_date: when,
                    })
                }
            };
            on_save.call(draft);
        }
    };

    rsx! {
        Dialog {
            title: (if editing.is_some() { "Edit membership" } else { "New membership" }).to_string(),
            on_close: move |_| on_cancel.call(()),

            if editing.is_none() {
                div {
                    class: "form-field",
                    label { "Member user id" }
                    input {
                        r#type: "text",
                        value: user_id(),
                        oninput: move |evt| user_id.set(evt.value()),
                    }
                }
            }
            div {
                class: "form-field",
                label { "Membership type #" }
                input {
                    r#type: "number",
                    value: type_id(),
                    oninput: move |evt| type_id.set(evt.value()),
                }
            }
            div {
                class: "form-field",
                label { if editing.is_some() { "End date" } else { "Start date" } }
                input {
                    r#type: "date",
                    value: date(),
                    oninput: move |evt| date.set(evt.value()),
                }
            }
            if editing.is_some() {
                div {
                    class: "form-field form-field-inline",
                    label { "Active" }
                    input {
                        r#type: "checkbox",
                        checked: active(),
                        onchange: move |evt| active.set(evt.checked()),
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: submit,
                    if editing.is_some() { "Save" } else { "Create" }
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
