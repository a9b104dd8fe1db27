use dioxus::prelude::*;

use crate::{client::store::time_entry::TimeEntry, model::timer::form_field};

/// Date field plus the days / hours / minutes remaining fields of the timer form.
///
/// Focusing either kind of field clears the other.
#[component]
pub fn TimeEntryFields(entry: Signal<TimeEntry>) -> Element {
    let mut entry = entry;
    let current = entry.read().clone();

    rsx!(
        div { class: "flex flex-col gap-2",
            label { class: "form-control",
                span { class: "label-text", "Date (EVE time)" }
                input {
                    id: "timer-date-field",
                    class: "input input-bordered",
                    name: form_field::DATE,
                    placeholder: "YYYY-MM-DD HH:MM",
                    value: "{current.date}",
                    onfocus: move |_| entry.write().focus_date(),
                    oninput: move |evt| entry.write().date = evt.value(),
                }
            }
            div { class: "divider text-xs", "or time remaining" }
            div { class: "flex gap-2",
                label { class: "form-control w-24",
                    span { class: "label-text", "Days" }
                    input {
                        class: "timer-time-remaining-field input input-bordered",
                        r#type: "number",
                        min: "0",
                        name: form_field::DAYS_LEFT,
                        value: "{current.days}",
                        onfocus: move |_| entry.write().focus_time_remaining(),
                        oninput: move |evt| entry.write().days = evt.value(),
                    }
                }
                label { class: "form-control w-24",
                    span { class: "label-text", "Hours" }
                    input {
                        class: "timer-time-remaining-field input input-bordered",
                        r#type: "number",
                        min: "0",
                        max: "23",
                        name: form_field::HOURS_LEFT,
                        value: "{current.hours}",
                        onfocus: move |_| entry.write().focus_time_remaining(),
                        oninput: move |evt| entry.write().hours = evt.value(),
                    }
                }
                label { class: "form-control w-24",
                    span { class: "label-text", "Minutes" }
                    input {
                        class: "timer-time-remaining-field input input-bordered",
                        r#type: "number",
                        min: "0",
                        max: "59",
                        name: form_field::MINUTES_LEFT,
                        value: "{current.minutes}",
                        onfocus: move |_| entry.write().focus_time_remaining(),
                        oninput: move |evt| entry.write().minutes = evt.value(),
                    }
                }
            }
        }
    )
}
