use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaClock;
use dioxus_free_icons::Icon;

use crate::client::util::{countdown::format_clock, ticker::UtcNow};

#[component]
pub fn EveClock() -> Element {
    let UtcNow(now) = use_context::<UtcNow>();
    let current_time = format_clock(&now());

    rsx!(
        div { class: "flex items-center gap-2", title: "Current EVE time (UTC)",
            Icon { width: 18, height: 18, icon: FaClock }
            span { id: "current-time", class: "font-mono", "{current_time}" }
        }
    )
}
