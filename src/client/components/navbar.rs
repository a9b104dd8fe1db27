use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaPlus;
use dioxus_free_icons::Icon;

use crate::client::components::{EveClock, TimerboardTitleButton};
use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed z-10",
            div {
                class: "navbar-start",
                TimerboardTitleButton {}
            }
            div {
                class: "navbar-end gap-4",
                EveClock {}
                Link {
                    to: Route::CreateTimer {},
                    class: "btn btn-outline flex gap-2",
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaPlus
                    }
                    "Create Timer"
                }
            }
        }

        Outlet::<Route> {}
    }
}
