use dioxus::prelude::*;

use crate::client::router::Route;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[component]
pub fn TimerboardTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::TimerBoard {},
            div { class: "flex items-center gap-2",
                p { class: "text-xl",
                    "Structure Timers"
                }
                p { class: "text-xs",
                    "v{VERSION}"
                }
            }
        }
    )
}
