//! Admin weekly schedule: one row per recurring class slot.

use api::{CreateSchedule, Schedule, UpdateSchedule};
use chrono::NaiveTime;
use dioxus::prelude::*;
use store::ResourceStore;
use ui::{
    notify, use_api, use_notifications, ConfirmDialog, Dialog, Severity,
    StoreSignal,
};

const WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// HTML time inputs report "HH:MM" or "HH:MM:SS" depending on the browser.
fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
struct ScheduleForm {
    day: String,
    start: String,
    end: String,
    exercise_id: String,
    trainer: String,
}

impl ScheduleForm {
    fn from_schedule(schedule: &Schedule) -> Self {
        Self {
            day: schedule.day.clone(),
            start: schedule.start_time.format("%H:%M").to_string(),
            end: schedule.end_time.format("%H:%M").to_string(),
            exercise_id: schedule.exercise_id.to_string(),
            trainer: schedule.trainer_name.clone(),
        }
    }
}

#[component]
pub fn Schedules() -> Element {
    let client = use_api();
    let schedules =
        use_hook(move || StoreSignal::new(ResourceStore::new(client.schedules())));
    let mut tray = use_notifications();

    let mut show_editor = use_signal(|| false);
    let mut pending_delete = use_signal(|| Option::<Schedule>::None);

    let _loader = use_resource({
        let schedules = schedules.clone();
        move || {
            let schedules = schedules.clone();
            async move { schedules.fetch_all().await }
        }
    });

    use_effect({
        let schedules = schedules.clone();
        move || {
            if let Some(message) = schedules.state().error {
                notify(&mut tray, Severity::Error, message);
                schedules.clear_error();
            }
        }
    });

    let state = schedules.state();

    let open_create = {
        let schedules = schedules.clone();
        move |_| {
            schedules.set_selected(None);
            show_editor.set(true);
        }
    };

    let save = {
        let schedules = schedules.clone();
        move |form: ScheduleForm| {
            let schedules = schedules.clone();
            let (Some(start_time), Some(end_time)) =
                (parse_time(form.start.trim()), parse_time(form.end.trim()))
            else {
                return;
            };
            let Ok(exercise_id) = form.exercise_id.trim().parse::<i64>() else {
                return;
            };
            spawn(async move {
                let saved = match schedules.state().selected {
                    Some(existing) => {
                        schedules
                            .update(
                                existing.id,
                                UpdateSchedule {
                                    day: form.day,
                                    start_time,
                                    end_time,
                                    exercise_id,
                                    trainer_name: form.trainer,
                                },
                            )
                            .await
                    }
                    None => {
                        schedules
                            .create(CreateSchedule {
                                day: form.day,
                                start_time,
                                end_time,
                                exercise_id,
                                trainer_name: form.trainer,
                            })
                            .await
                    }
                };
                if saved {
                    schedules.set_selected(None);
                    show_editor.set(false);
                }
            });
        }
    };

    let confirm_delete = {
        let schedules = schedules.clone();
        move |_| {
            if let Some(schedule) = pending_delete() {
                let schedules = schedules.clone();
                spawn(async move {
                    schedules.delete(schedule.id).await;
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
                h1 { "Schedules" }
                button { class: "primary", onclick: open_create, "New slot" }
            }

            if state.is_loading && state.collection.is_empty() {
                p { class: "table-status", "Loading schedules..." }
            } else if state.collection.is_empty() {
                p { class: "table-status", "No class slots yet." }
            } else {
                table {
                    class: "resource-table",
                    thead {
                        tr {
                            th { "Day" }
                            th { "Time" }
                            th { "Class" }
                            th { "Trainer" }
                            th { "" }
                        }
                    }
                    tbody {
                        for schedule in state.collection.iter() {
                            tr {
                                key: "{schedule.id}",
                                td { "{schedule.day}" }
                                td { {schedule.time_slot()} }
                                td { "{schedule.exercise_name}" }
                                td { "{schedule.trainer_name}" }
                                td {
                                    class: "row-actions",
                                    button {
                                        class: "secondary",
                                        onclick: {
                                            let schedules = schedules.clone();
                                            let schedule = schedule.clone();
                                            move |_| {
                                                schedules.set_selected(Some(schedule.clone()));
                                                show_editor.set(true);
                                            }
                                        },
                                        "Edit"
                                    }
                                    button {
                                        class: "danger",
                                        onclick: {
                                            let schedule = schedule.clone();
                                            move |_| pending_delete.set(Some(schedule.clone()))
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
                ScheduleEditor {
                    schedule: schedules.state().selected,
                    on_save: save,
                    on_cancel: {
                        let schedules = schedules.clone();
                        move |_| {
                            schedules.set_selected(None);
                            show_editor.set(false);
                        }
                    },
                }
            }

            if let Some(schedule) = pending_delete() {
                ConfirmDialog {
                    message: format!(
                        "Delete the {} {} slot?",
                        schedule.day, schedule.exercise_name
                    ),
                    on_confirm: confirm_delete,
                    on_cancel: move |_| pending_delete.set(None),
                }
            }
        }
    }
}

#[component]
fn ScheduleEditor(
    schedule: Option<Schedule>,
    on_save: EventHandler<ScheduleForm>,
    on_cancel: EventHandler<()>,
) -> Element {
    let editing = schedule.is_some();
    let mut form = use_signal(move || match schedule {
        Some(ref existing) => ScheduleForm::from_schedule(existing),
        None => ScheduleForm {
            day: WEEKDAYS[0].to_string(),
            ..ScheduleForm::default()
        },
    });

    let submit = move |_| {
        let draft = form();
        if draft.trainer.trim().is_empty() {
            return;
        }
        on_save.call(draft);
    };

    rsx! {
        Dialog {
            title: (if editing { "Edit slot" } else { "New slot" }).to_string(),
            on_close: move |_| on_cancel.call(()),

            div {
                class: "form-field",
                label { "Day" }
                select {
                    value: form().day,
                    onchange: move |evt| form.write().day = evt.value(),
                    for day in WEEKDAYS {
                        option { key: "{day}", value: "{day}", "{day}" }
                    }
                }
            }
            div {
                class: "form-field",
                label { "Starts" }
                input {
                    r#type: "time",
                    value: form().start,
                    oninput: move |evt| form.write().start = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Ends" }
                input {
                    r#type: "time",
                    value: form().end,
                    oninput: move |evt| form.write().end = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Exercise #" }
                input {
                    r#type: "number",
                    value: form().exercise_id,
                    oninput: move |evt| form.write().exercise_id = evt.value(),
                }
            }
            div {
                class: "form-field",
                label { "Trainer" }
                input {
                    r#type: "text",
                    value: form().trainer,
                    oninput: move |evt| form.write().trainer = evt.value(),
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
