//! Tests for the timer board view model.
//!
//! These tests drive the board the way the page does: list responses are decoded from JSON,
//! prepared for display, then refreshed on every clock tick; detail requests are built from
//! the page configuration and resolved into the modal.

mod countdown_tick;
mod detail_modal;
mod filter_columns;

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use timerboard::client::config::PageConfig;

/// Fixed instant used as "now" by the board tests.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

/// Builds a page configuration as the server renders it into `#dataExport`.
pub fn page_config(has_perm_opsec: bool) -> PageConfig {
    let permission = if has_perm_opsec { "True" } else { "False" };
    let attributes: HashMap<&str, &str> = HashMap::from([
        ("data-select2SolarSystemsUrl", "/structuretimers/select2_solar_systems/"),
        ("data-select2StructureTypesUrl", "/structuretimers/select2_structure_types/"),
        ("data-listDataCurrentUrl", "/structuretimers/timer_list_data/current"),
        ("data-listDataPastUrl", "/structuretimers/timer_list_data/past"),
        ("data-getTimerDataUrl", "/structuretimers/get_timer_data/pk_dummy"),
        ("data-titleSolarSystem", "Solar System"),
        ("data-titleRegion", "Region"),
        ("data-titleStructureType", "Structure Type"),
        ("data-titleTimerType", "Timer Type"),
        ("data-titleObjective", "Objective"),
        ("data-titleOwner", "Owner"),
        ("data-titleVisibility", "Visibility"),
        ("data-hasPermOPSEC", permission),
    ]);

    PageConfig::from_attributes(|name| attributes.get(name).map(|value| value.to_string()))
        .unwrap()
}
