//! Requests to the timer server.

use serde::de::DeserializeOwned;

use crate::{
    client::error::FetchError,
    model::{select::SelectOptionDto, timer::TimerDetailDto, timer::TimerRowDto},
};

/// Appends a cache-busting `_` parameter so the browser always fetches fresh data.
pub fn no_cache_url(url: &str, timestamp_ms: i64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}_={}", url, separator, timestamp_ms)
}

/// Builds the search request URL of a search-as-you-type select.
pub fn search_url(url: &str, term: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}term={}", url, separator, urlencoding::encode(term))
}

/// Retrieve JSON from the timer server
#[cfg(feature = "web")]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    use reqwasm::http::Request;

    use crate::model::api::ErrorDto;

    let response = Request::get(url)
        .credentials(reqwasm::http::RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| FetchError::Request(e.to_string()))?;

    match response.status() {
        200..=299 => response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string())),
        status => {
            let message = if let Ok(error_dto) = response.json::<ErrorDto>().await {
                error_dto.error
            } else {
                response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string())
            };
            Err(FetchError::Status { status, message })
        }
    }
}

#[cfg(not(feature = "web"))]
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    Err(FetchError::Request(format!(
        "Cannot request {} without the web feature",
        url
    )))
}

/// Retrieve a timer list, bypassing the browser cache
pub async fn fetch_timer_rows(url: &str) -> Result<Vec<TimerRowDto>, FetchError> {
    let url = no_cache_url(url, chrono::Utc::now().timestamp_millis());
    get_json::<Vec<TimerRowDto>>(&url).await
}

pub async fn fetch_timer_detail(url: &str) -> Result<TimerDetailDto, FetchError> {
    get_json::<TimerDetailDto>(url).await
}

/// Retrieve suggestions for a search select. Failures yield no suggestions.
pub async fn search_options(url: &str, term: &str) -> Vec<SelectOptionDto> {
    use dioxus_logger::tracing;

    use crate::model::select::SelectResultsDto;

    match get_json::<SelectResultsDto>(&search_url(url, term)).await {
        Ok(results) => results.into_options(),
        Err(err) => {
            tracing::debug!("Search request to {} failed: {}", url, err);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod no_cache_url {
        use super::*;

        /// Tests adding the cache-busting parameter to a bare URL.
        ///
        /// Expected: "?_=<timestamp>" appended
        #[test]
        fn starts_query_string() {
            assert_eq!(
                no_cache_url("/timers/list_data/current", 1700000000000),
                "/timers/list_data/current?_=1700000000000"
            );
        }

        /// Tests adding the parameter to a URL that already has a query.
        ///
        /// Expected: "&_=<timestamp>" appended
        #[test]
        fn extends_query_string() {
            assert_eq!(
                no_cache_url("/timers/list_data/current?staging=3", 5),
                "/timers/list_data/current?staging=3&_=5"
            );
        }
    }

    mod search_url {
        use super::*;

        /// Tests encoding the search term.
        ///
        /// Expected: spaces and reserved characters percent-encoded
        #[test]
        fn encodes_term() {
            assert_eq!(
                search_url("/timers/select2_solar_systems/", "1DQ 1&A"),
                "/timers/select2_solar_systems/?term=1DQ%201%26A"
            );
        }
    }
}
