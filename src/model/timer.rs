use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One entry of the current or past timer list endpoints.
///
/// The visible cell fields (`location`, `structure_details`, `owner`, `name_objective`,
/// `creator`, `actions`) are HTML fragments rendered by the server. The classification fields
/// after them are plain text and only feed the filter dropdowns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerRowDto {
    #[serde(default)]
    pub id: i64,
    /// Display text of the time cell, recomputed on the client
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub structure_details: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub name_objective: String,
    #[serde(default)]
    pub creator: String,
    #[serde(default)]
    pub actions: String,

    #[serde(default)]
    pub system_name: String,
    #[serde(default)]
    pub region_name: String,
    #[serde(default)]
    pub structure_type_name: String,
    #[serde(default)]
    pub timer_type_name: String,
    #[serde(default)]
    pub objective_name: String,
    #[serde(default)]
    pub owner_name: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub opsec: String,

    #[serde(default, deserialize_with = "null_as_false")]
    pub is_important: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_passed: bool,
    pub eve_time: DateTime<Utc>,
}

/// Details of a single timer shown in the details modal
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimerDetailDto {
    pub structure_display_name: String,
    pub eve_time: String,
    #[serde(default)]
    pub details_image_url: Option<String>,
    #[serde(default)]
    pub notes: String,
}

impl TimerDetailDto {
    pub fn summary(&self) -> String {
        format!("{} @ {}", self.structure_display_name, self.eve_time)
    }
}

/// Timer types offered by the timer form, as `(code, label)`
pub const TIMER_TYPES: &[(&str, &str)] = &[
    ("NO", "Unspecified"),
    ("AR", "Armor"),
    ("HL", "Hull"),
    ("FI", "Final"),
    ("AN", "Anchoring"),
    ("UA", "Unanchoring"),
    ("MM", "Moon Mining"),
];

pub const OBJECTIVES: &[(&str, &str)] = &[
    ("UN", "undefined"),
    ("HO", "hostile"),
    ("FR", "friendly"),
    ("NE", "neutral"),
];

pub const VISIBILITIES: &[(&str, &str)] = &[
    ("UN", "unrestricted"),
    ("AL", "Alliance only"),
    ("CO", "Corporation only"),
];

// Timers without a date come back with `"is_passed": null`
fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

/// Field names the server's timer form accepts.
pub mod form_field {
    pub const SOLAR_SYSTEM: &str = "eve_solar_system_2";
    pub const LOCATION_DETAILS: &str = "location_details";
    pub const STRUCTURE_TYPE: &str = "structure_type_2";
    pub const STRUCTURE_NAME: &str = "structure_name";
    pub const TIMER_TYPE: &str = "timer_type";
    pub const OBJECTIVE: &str = "objective";
    pub const VISIBILITY: &str = "visibility";
    pub const OWNER_NAME: &str = "owner_name";
    pub const DATE: &str = "date";
    pub const DAYS_LEFT: &str = "days_left";
    pub const HOURS_LEFT: &str = "hours_left";
    pub const MINUTES_LEFT: &str = "minutes_left";
    pub const IMPORTANT: &str = "important";
    pub const OPSEC: &str = "opsec";
    pub const DETAILS_IMAGE_URL: &str = "details_image_url";
    pub const DETAILS_NOTES: &str = "details_notes";
}
