use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, RenderSelect, SearchSelect, TimeEntryFields},
        config::PageConfig,
        store::time_entry::TimeEntry,
        util::{countdown::time_cell, ticker::UtcNow},
    },
    model::timer::{form_field, OBJECTIVES, TIMER_TYPES, VISIBILITIES},
};

#[component]
pub fn CreateTimer() -> Element {
    let config = use_context::<PageConfig>();
    let UtcNow(now) = use_context::<UtcNow>();
    let entry = use_signal(TimeEntry::default);

    let now = now();
    let preview = entry.read().resolve(&now);
    let (preview_text, preview_error) = match preview {
        Ok(Some(eve_time)) => (time_cell(&eve_time, &now), None),
        Ok(None) => ("Enter a date or the time remaining".to_string(), None),
        Err(err) => (String::new(), Some(err.to_string())),
    };

    rsx!(
        Title { "Create Timer | Structure Timers" }
        Meta {
            name: "description",
            content: "Create a new structure timer."
        }
        Page { class: "flex flex-col items-center",
            form {
                method: "post",
                class: "card shadow-sm w-full max-w-2xl",
                div { class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Create New Timer" }
                    label { class: "form-control",
                        span { class: "label-text", "Solar System" }
                        SearchSelect {
                            name: form_field::SOLAR_SYSTEM.to_string(),
                            url: config.solar_systems_url.clone(),
                            placeholder: "Enter name of solar system",
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Location Details" }
                        input { class: "input input-bordered", name: form_field::LOCATION_DETAILS }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Structure Type" }
                        SearchSelect {
                            name: form_field::STRUCTURE_TYPE.to_string(),
                            url: config.structure_types_url.clone(),
                            placeholder: "Enter name of structure type",
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Structure Name" }
                        input { class: "input input-bordered", name: form_field::STRUCTURE_NAME }
                    }
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-2",
                        label { class: "form-control",
                            span { class: "label-text", "Timer Type" }
                            RenderSelect { name: form_field::TIMER_TYPE.to_string(), options: TIMER_TYPES }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Objective" }
                            RenderSelect { name: form_field::OBJECTIVE.to_string(), options: OBJECTIVES }
                        }
                        label { class: "form-control",
                            span { class: "label-text", "Visibility" }
                            RenderSelect { name: form_field::VISIBILITY.to_string(), options: VISIBILITIES }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Owner" }
                        input { class: "input input-bordered", name: form_field::OWNER_NAME }
                    }
                    TimeEntryFields { entry }
                    div { class: "whitespace-pre-line font-mono text-sm",
                        if let Some(err) = preview_error {
                            span { class: "text-error", "{err}" }
                        } else {
                            "{preview_text}"
                        }
                    }
                    div { class: "flex gap-4",
                        label { class: "label cursor-pointer gap-2",
                            input { r#type: "checkbox", class: "checkbox", name: form_field::IMPORTANT }
                            span { class: "label-text", "Important" }
                        }
                        if config.has_perm_opsec {
                            label { class: "label cursor-pointer gap-2",
                                input { r#type: "checkbox", class: "checkbox", name: form_field::OPSEC }
                                span { class: "label-text", "OPSEC" }
                            }
                        }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Details Image URL" }
                        input { class: "input input-bordered", r#type: "url", name: form_field::DETAILS_IMAGE_URL }
                    }
                    label { class: "form-control",
                        span { class: "label-text", "Notes" }
                        textarea { class: "textarea textarea-bordered", rows: 4, name: form_field::DETAILS_NOTES }
                    }
                    div { class: "card-actions justify-end",
                        button { class: "btn btn-primary", r#type: "submit", "Create" }
                    }
                }
            }
        }
    )
}
