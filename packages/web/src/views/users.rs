//! Admin user directory: table, editor dialog, delete confirmation.

use api::{CreateUser, UpdateUser, User};
use dioxus::prelude::*;
use store::ResourceStore;
use ui::{
    notify, use_api, use_notifications, ConfirmDialog, Dialog, Severity,
    StoreSignal,
};

/// Editor draft; mapped onto a create or update request on save.
#[derive(Clone, Debug, Default, PartialEq)]
struct UserForm {
    user_name: String,
    email: String,
    password: String,
    first_name: String,
    last_name: String,
}

impl UserForm {
    fn from_user(user: &User) -> Self {
        Self {
            user_name: user.user_name.clone(),
            email: user.email.clone(),
            password: String::new(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }
}

#[component]
pub fn Users() -> Element {
    let client = use_api();
    let users = use_hook(move || StoreSignal::new(ResourceStore::new(client.users())));
    let mut tray = use_notifications();

    let mut show_editor = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<User>::None);

    // Load the directory on mount.
    let _loader = use_resource({
        let users = users.clone();
        move || {
            let users = users.clone();
            async move { users.fetch_all().await }
        }
    });

    // Surface store failures as notifications, then clear the field.
    use_effect({
        let users = users.clone();
        move || {
            if let Some(message) = users.state().error {
                notify(&mut tray, Severity::Error, message);
                users.clear_error();
            }
        }
    });

    let state = users.state();

    let open_create = {
        let users = users.clone();
        move |_| {
            users.set_selected(None);
            show_editor.set(true);
        }
    };

    let save = {
        let users = users.clone();
        move |form: UserForm| {
            let users = users.clone();
            spawn(async move {
                let saved = match users.state().selected {
                    Some(existing) => {
                        users
                            .update(
                                existing.id.clone(),
                                UpdateUser {
                                    email: form.email,
                                    first_name: form.first_name,
                                    last_name: form.last_name,
                                    roles: existing.roles.clone(),
                                },
                            )
                            .await
                    }
                    None => {
                        users
                            .create(CreateUser {
                                user_name: form.user_name,
                                email: form.email,
                                password: form.password,
                                first_name: form.first_name,
                                last_name: form.last_name,
                            })
                            .await
                    }
                };
                // a failed save keeps the editor open for a retry
                if saved {
                    users.set_selected(None);
                    show_editor.set(false);
                }
            });
        }
    };

    let confirm_delete = {
        let users = users.clone();
        move |_| {
            if let Some(user) = pending_delete() {
                let users = users.clone();
                spawn(async move {
                    users.delete(user.id.clone()).await;
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
                h1 { "Users" }
                button { class: "primary", onclick: open_create, "New user" }
            }

            if state.is_loading && state.collection.is_empty() {
                p { class: "table-status", "Loading users..." }
            } else if state.collection.is_empty() {
                p { class: "table-status", "No users yet." }
            } else {
                table {
                    class: "resource-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Account" }
                            th { "Email" }
                            th { "Roles" }
                            th { "" }
                        }
                    }
                    tbody {
                        for user in state.collection.iter() {
                            tr {
                                key: "{user.id}",
                                td { {user.full_name()} }
                                td { "{user.user_name}" }
                                td { "{user.email}" }
                                td { {user.roles.join(", ")} }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let users = users.clone();
                                            let user = user.clone();
                                            move |_| {
                                                users.set_selected(Some(user.clone()));
                                                show_editor.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let user = user.clone();
                                            move |_| pending_delete.set(Some(user.clone()))
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
                UserEditor {
                    user: users.state().selected,
                    on_save: save,
                    on_cancel: {
                        let users = users.clone();
                        move |_| {
                            users.set_selected(None);
                            show_editor.set(false);
                        }
                    },
                }
            }

            if let Some(user) = pending_delete() {
                ConfirmDialog {
                    message: format!("Delete user {}?", user.full_name()),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn UserEditor(
    user: Option<User>,
    on_save: EventHandler<UserForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = user.is_some();
    let mut form =
        use_signal(move || user.as_ref().map(UserForm::from_user).unwrap_or_default());

    let submit = move |_| {
        let draft = form();
        if draft.user_name.trim().is_empty() || draft.email.trim().is_empty() {
            return;
        }
        on_save.call(draft);
    };

    rsx! {
        Dialog {
            title: (if editing { "Edit user" } else { "New user" }).to_string(),
            on_close: move |_| on_cancel.call(()),

            div {
                class: "form-field",
                label { "Account name" }
                input {
                    r#type: "text",
                    value: form().user_name,
                    disabled: editing,
                    oninput: move |evt| form.write().user_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Email" }
                input {
                    r#type: "email",
                    value: form().email,
                    oninput: move |evt| form.write().email = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "First name" }
                input {
                    r#type: "text",
                    value: form().first_name,
                    oninput: move |evt| form.write().first_name = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Last name" }
                input {
                    r#type: "text",
                    value: form().last_name,
                    oninput: move |evt| form.write().last_name = evt.value(),
                }
            }
            if !editing {
                div {
                    class: "form-field",
                    label { "Password" }
                    input {
                        r#type: "password",
                        value: form().password,
                        oninput: move |evt| form.write().password = evt.value(),
                    }
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    onclick: submit,
                    if editing { "Save" } else { "Create" }
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
