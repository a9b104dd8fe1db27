use dioxus::prelude::*;

use crate::client::{
    store::detail_modal::{detail_url, DetailModalState, ModalContent},
    util::fetch::fetch_timer_detail,
};

/// Opens the details modal for a timer and fetches its details.
pub fn open_timer_detail(mut modal: Signal<DetailModalState>, template: &str, timer_id: i64) {
    let token = modal.write().open(timer_id);
    let url = detail_url(template, timer_id);

    spawn(async move {
        let result = fetch_timer_detail(&url).await;
        modal.write().resolve(token, result);
    });
}

#[component]
pub fn TimerDetailModal() -> Element {
    let mut modal = use_context::<Signal<DetailModalState>>();

    let state = modal.read();
    let class = if state.is_open() {
        "modal modal-open"
    } else {
        "modal"
    };

    rsx!(
        div { id: "modalTimerDetails", class, role: "dialog",
            div { class: "modal-box max-w-3xl",
                h3 { class: "text-lg font-bold", "Timer Details" }
                div { class: "modal-body flex flex-col gap-4 py-4",
                    {match state.content() {
                        None => rsx!(),
                        Some(ModalContent::Loading) => rsx!(
                            span { class: "loading loading-spinner" }
                        ),
                        Some(ModalContent::Loaded(detail)) => {
                            let summary = detail.summary();
                            let image_url = detail.details_image_url.clone().unwrap_or_default();
                            rsx!(
                                span { class: "font-semibold", "{summary}" }
                                if !image_url.is_empty() {
                                    a { href: "{image_url}", target: "_blank",
                                        img { class: "max-w-full rounded", src: "{image_url}" }
                                    }
                                }
                                textarea {
                                    class: "textarea textarea-bordered w-full",
                                    rows: 6,
                                    readonly: true,
                                    value: "{detail.notes}",
                                }
                            )
                        }
                        Some(ModalContent::Failed(message)) => rsx!(
                            span {
                                span { class: "text-error", "{message}" }
                            }
                        ),
                    }}
                }
                div { class: "modal-action",
                    button { class: "btn", onclick: move |_| modal.write().close(), "Close" }
                }
            }
            div { class: "modal-backdrop", onclick: move |_| modal.write().close() }
        }
    )
}
