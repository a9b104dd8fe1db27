use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    components::Page,
    config::PageConfig,
    error::ConfigError,
    router::Route,
    util::ticker::{use_utc_clock, UtcNow},
};

#[component]
pub fn App() -> Element {
    // One tick drives both the EVE clock and the countdowns
    let now = use_utc_clock();
    use_context_provider(|| UtcNow(now));

    let config = use_hook(load_page_config);

    match config {
        Ok(config) => rsx!(ConfiguredApp { config }),
        Err(err) => rsx!(
            Page { class: "flex items-center justify-center",
                p { class: "text-error", "Failed to load the timer board: {err}" }
            }
        ),
    }
}

#[component]
fn ConfiguredApp(config: PageConfig) -> Element {
    use_context_provider(|| config.clone());

    rsx!(Router::<Route> {})
}

fn load_page_config() -> Result<PageConfig, ConfigError> {
    #[cfg(feature = "web")]
    let config = PageConfig::from_document();

    #[cfg(not(feature = "web"))]
    let config: Result<PageConfig, ConfigError> = Err(ConfigError::MissingElement(
        crate::client::config::CONFIG_ELEMENT_ID.to_string(),
    ));

    match &config {
        Ok(config) => tracing::info!(
            "Loaded timer board configuration (OPSEC filter: {})",
            config.has_perm_opsec
        ),
        Err(err) => tracing::error!("Configuration error: {}", err),
    }

    config
}
