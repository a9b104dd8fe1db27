use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{
    components::{Page, TimerDetailModal, TimerTable},
    store::{detail_modal::DetailModalState, timer_table::TableKind},
};

#[component]
pub fn TimerBoard() -> Element {
    let mut tab = use_signal(|| TableKind::Current);
    let modal = use_signal(DetailModalState::default);
    use_context_provider(|| modal);

    let tab_class = |kind: TableKind| {
        if tab() == kind {
            "tab tab-active"
        } else {
            "tab"
        }
    };
    let panel_class = |kind: TableKind| if tab() == kind { "" } else { "hidden" };

    rsx!(
        Title { "Structure Timers" }
        Meta {
            name: "description",
            content: "Upcoming and past structure timers with a live EVE time countdown."
        }
        Page { class: "flex flex-col items-center",
            div { class: "w-full max-w-[1440px] flex flex-col gap-4",
                div { role: "tablist", class: "tabs tabs-bordered",
                    a {
                        role: "tab",
                        class: tab_class(TableKind::Current),
                        onclick: move |_| tab.set(TableKind::Current),
                        "Current"
                    }
                    a {
                        role: "tab",
                        class: tab_class(TableKind::Past),
                        onclick: move |_| tab.set(TableKind::Past),
                        "Past"
                    }
                }
                // Both tables load eagerly, the inactive one is only hidden
                div { class: panel_class(TableKind::Current),
                    TimerTable { kind: TableKind::Current }
                }
                div { class: panel_class(TableKind::Past),
                    TimerTable { kind: TableKind::Past }
                }
            }
            TimerDetailModal {}
        }
    )
}
