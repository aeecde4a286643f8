//! Admin exercise catalogue.

use api::{CreateExercise, Exercise, UpdateExercise};
use dioxus::prelude::*;
use store::ResourceStore;
use ui::{
    notify, use_api, use_notifications, ConfirmDialog, Dialog, Severity,
    StoreSignal,
};

#[derive(Clone, Debug, Default, PartialEq)]
struct ExerciseForm {
    name: String,
    description: String,
    muscle_group: String,
}

impl ExerciseForm {
    fn from_exercise(exercise: &Exercise) -> Self {
        Self {
            name: exercise.name.clone(),
            description: exercise.description.clone(),
            muscle_group: exercise.muscle_group.clone(),
        }
    }
}

#[component]
pub fn Exercises() -> Element {
    let client = use_api();
    let exercises =
        use_hook(move || StoreSignal::new(ResourceStore::new(client.exercises())));
    let mut tray = use_notifications();

    let mut show_editor = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Exercise>::None);

    let _loader = use_resource({
        let exercises = exercises.clone();
        move || {
            let exercises = exercises.clone();
            async move { exercises.fetch_all().await }
        }
    });

    use_effect({
        let exercises = exercises.clone();
        move || {
            if let Some(message) = exercises.state().error {
                notify(&mut tray, Severity::Error, message);
                exercises.clear_error();
            }
        }
    });

    let state = exercises.state();

    let open_create = {
        let exercises = exercises.clone();
        move |_| {
            exercises.set_selected(None);
            show_editor.set(true);
        }
    };

    let save = {
        let exercises = exercises.clone();
        move |form: ExerciseForm| {
            let exercises = exercises.clone();
            spawn(async move {
                let saved = match exercises.state().selected {
                    Some(existing) => {
                        exercises
                            .update(
                                existing.id,
                                UpdateExercise {
                                    name: form.name,
                                    description: form.description,
                                    muscle_group: form.muscle_group,
                                },
                            )
                            .await
                    }
                    None => {
                        exercises
                            .create(CreateExercise {
                                name: form.name,
                                description: form.description,
                                muscle_group: form.muscle_group,
                            })
                            .await
                    }
                };
                if saved {
                    exercises.set_selected(None);
                    show_editor.set(false);
                }
            });
        }
    };

    let confirm_delete = {
        let exercises = exercises.clone();
        move |_| {
            if let Some(exercise) = pending_delete() {
                let exercises = exercises.clone();
                spawn(async move {
                    exercises.delete(exercise.id).await;
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
                h1 { "Exercises" }
                button { class: "primary", onclick: open_create, "New exercise" }
            }

            if state.is_loading && state.collection.is_empty() {
                p { class: "table-status", "Loading exercises..." }
            } else if state.collection.is_empty() {
                p { class: "table-status", "No exercises yet." }
            } else {
                table {
                    class: "resource-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Muscle group" }
                            th { "Description" }
                            th { "" }
                        }
                    }
                    tbody {
                        for exercise in state.collection.iter() {
                            tr {
                                key: "{exercise.id}",
                                td { "{exercise.name}" }
                                td { "{exercise.muscle_group}" }
                                td { class: "cell-muted", "{exercise.description}" }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let exercises = exercises.clone();
                                            let exercise = exercise.clone();
                                            move |_| {
                                                exercises.set_selected(Some(exercise.clone()));
                                                show_editor.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let exercise = exercise.clone();
                                            move |_| pending_delete.set(Some(exercise.clone()))
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
                ExerciseEditor {
                    exercise: exercises.state().selected,
                    on_save: save,
                    on_cancel: {
                        let exercises = exercises.clone();
                        move |_| {
                            exercises.set_selected(None);
                            show_editor.set(false);
                        }
                    },
                }
            }

            if let Some(exercise) = pending_delete() {
                ConfirmDialog {
                    message: format!("Delete exercise {}?", exercise.name),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ExerciseEditor(
    exercise: Option<Exercise>,
    on_save: EventHandler<ExerciseForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = exercise.is_some();
    let mut form = use_signal(move || {
        exercise
            .as_ref()
            .map(ExerciseForm::from_exercise)
            .unwrap_or_default()
    });

    let submit = move |_| {
        let draft = form();
        if draft.name.trim().is_empty() {
            return;
        }
        on_save.call(draft);
    };

    rsx! {
        Dialog {
            title: (if editing { "Edit exercise" } else { "New exercise" }).to_string(),
            on_close: move |_| on_cancel.call(()),

            div {
                class: "form-field",
                label { "Name" }
                input {
                    r#type: "text",
                    placeholder: "Back squat",
                    value: form().name,
                    oninput: move |evt| form.write().name = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Muscle group" }
                input {
                    r#type: "text",
                    placeholder: "Legs",
                    value: form().muscle_group,
                    oninput: move |evt| form.write().muscle_group = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Description" }
                textarea {
                    rows: 3,
                    value: form().description,
                    oninput: move |evt| form.write().description = evt.value(),
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
