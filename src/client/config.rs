//! Page-embedded configuration.
//!
//! The server renders an element with id `dataExport` whose `data-*` attributes carry the
//! endpoint URLs, the filter titles and the viewer's OPSEC permission. The client reads them
//! once when it mounts.

use crate::client::error::ConfigError;

/// Id of the element carrying the configuration attributes.
pub const CONFIG_ELEMENT_ID: &str = "dataExport";

/// Table page length used when the page does not set `data-pageLength`.
pub const DEFAULT_PAGE_LENGTH: usize = 10;

/// Human-readable titles of the filter dropdowns.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterTitles {
    pub solar_system: String,
    pub region: String,
    pub structure_type: String,
    pub timer_type: String,
    pub objective: String,
    pub owner: String,
    pub visibility: String,
}

/// Configuration of the timer board read from the page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub solar_systems_url: String,
    pub structure_types_url: String,
    pub list_current_url: String,
    pub list_past_url: String,
    /// Detail URL template containing the `pk_dummy` placeholder
    pub timer_detail_url: String,
    pub titles: FilterTitles,
    pub has_perm_opsec: bool,
    pub page_length: usize,
    pub paging: bool,
}

impl PageConfig {
    /// Builds the configuration from an attribute lookup.
    ///
    /// `lookup` receives the full attribute name (e.g. `data-listDataCurrentUrl`) and returns
    /// its value if present.
    ///
    /// # Returns
    /// - `Ok(PageConfig)` - All required attributes present and valid
    /// - `Err(ConfigError::MissingAttribute)` - A required URL or title is absent
    /// - `Err(ConfigError::InvalidAttribute)` - `data-pageLength` is not a positive integer
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingAttribute(name.to_string()))
        };

        let page_length = match lookup("data-pageLength") {
            Some(value) => parse_page_length(&value)?,
            None => DEFAULT_PAGE_LENGTH,
        };

        Ok(Self {
            solar_systems_url: required("data-select2SolarSystemsUrl")?,
            structure_types_url: required("data-select2StructureTypesUrl")?,
            list_current_url: required("data-listDataCurrentUrl")?,
            list_past_url: required("data-listDataPastUrl")?,
            timer_detail_url: required("data-getTimerDataUrl")?,
            titles: FilterTitles {
                solar_system: required("data-titleSolarSystem")?,
                region: required("data-titleRegion")?,
                structure_type: required("data-titleStructureType")?,
                timer_type: required("data-titleTimerType")?,
                objective: required("data-titleObjective")?,
                owner: required("data-titleOwner")?,
                visibility: required("data-titleVisibility")?,
            },
            has_perm_opsec: lookup("data-hasPermOPSEC")
                .map(|value| is_true(&value))
                .unwrap_or(false),
            page_length,
            paging: lookup("data-paging")
                .map(|value| is_true(&value))
                .unwrap_or(true),
        })
    }

    /// Reads the configuration from the `#dataExport` element of the current document.
    #[cfg(feature = "web")]
    pub fn from_document() -> Result<Self, ConfigError> {
        let element = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .ok_or_else(|| ConfigError::MissingElement(CONFIG_ELEMENT_ID.to_string()))?;

        Self::from_attributes(|name| element.get_attribute(name))
    }
}

// Django renders booleans as `True` / `False`
fn is_true(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

fn parse_page_length(value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(length) if length > 0 => Ok(length),
        _ => Err(ConfigError::InvalidAttribute {
            attribute: "data-pageLength".to_string(),
            reason: format!("expected a positive integer, got {:?}", value),
        }),
    }
}
