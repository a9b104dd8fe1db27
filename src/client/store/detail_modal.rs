//! State of the timer details modal.
//!
//! Each time the modal is opened a new request token is issued. Responses carrying an older
//! token are dropped so a slow response for a previously opened timer can't overwrite the
//! timer currently shown.

use dioxus_logger::tracing;

use crate::{client::error::FetchError, model::timer::TimerDetailDto};

/// Placeholder the detail URL template carries in place of the timer id.
pub const TIMER_ID_PLACEHOLDER: &str = "pk_dummy";

/// Builds the detail request URL for a timer.
pub fn detail_url(template: &str, timer_id: i64) -> String {
    template.replace(TIMER_ID_PLACEHOLDER, &timer_id.to_string())
}

pub fn failure_message(timer_id: i64) -> String {
    format!("Failed to load timer with ID {}", timer_id)
}

#[derive(Clone, Debug, PartialEq)]
pub enum ModalContent {
    Loading,
    Loaded(TimerDetailDto),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetailModalState {
    latest_token: u64,
    timer_id: Option<i64>,
    content: Option<ModalContent>,
}

impl DetailModalState {
    /// Opens the modal for `timer_id` and returns the token its response must carry.
    pub fn open(&mut self, timer_id: i64) -> u64 {
        self.latest_token += 1;
        self.timer_id = Some(timer_id);
        self.content = Some(ModalContent::Loading);
        self.latest_token
    }

    /// Closes the modal; responses still in flight are discarded.
    pub fn close(&mut self) {
        self.latest_token += 1;
        self.timer_id = None;
        self.content = None;
    }

    /// Applies the response of the request issued with `token`.
    ///
    /// # Returns
    /// - `true` - The response was for the latest request and is now displayed
    /// - `false` - The response was stale and has been discarded
    pub fn resolve(&mut self, token: u64, result: Result<TimerDetailDto, FetchError>) -> bool {
        if token != self.latest_token {
            tracing::debug!(
                "Discarding stale timer detail response (token {}, latest {})",
                token,
                self.latest_token
            );
            return false;
        }

        let Some(timer_id) = self.timer_id else {
            return false;
        };

        self.content = Some(match result {
            Ok(detail) => ModalContent::Loaded(detail),
            Err(err) => {
                tracing::warn!("Failed to load timer {}: {}", timer_id, err);
                ModalContent::Failed(failure_message(timer_id))
            }
        });
        true
    }

    pub fn is_open(&self) -> bool {
        self.content.is_some()
    }

    pub fn timer_id(&self) -> Option<i64> {
        self.timer_id
    }

    pub fn content(&self) -> Option<&ModalContent> {
        self.content.as_ref()
    }
}
