//! Tests for loading a timer into the details modal.

use timerboard::{
    client::{
        error::FetchError,
        store::detail_modal::{detail_url, DetailModalState, ModalContent},
    },
    model::timer::TimerDetailDto,
};

use super::*;

/// Tests the request issued when opening the modal for timer 42.
///
/// Expected: placeholder replaced by 42 in the configured template
#[test]
fn requests_detail_url_for_timer() {
    let config = page_config(false);

    let url = detail_url(&config.timer_detail_url, 42);

    assert_eq!(url, "/structuretimers/get_timer_data/42");
    assert!(!url.contains("pk_dummy"));
}

/// Tests a failed detail request.
///
/// Verifies that the modal shows an error naming the requested timer.
///
/// Expected: Failed content containing "42"
#[test]
fn shows_error_naming_timer_on_failure() {
    let mut modal = DetailModalState::default();
    let token = modal.open(42);

    modal.resolve(
        token,
        Err(FetchError::Status {
            status: 500,
            message: "Internal server error".to_string(),
        }),
    );

    match modal.content() {
        Some(ModalContent::Failed(message)) => {
            assert!(message.contains("42"));
            assert!(message.starts_with("Failed"));
        }
        other => panic!("expected an error, got {:?}", other),
    }
}

/// Tests a successful detail request decoded from the server response.
///
/// Expected: Loaded content with summary, image URL and notes
#[test]
fn shows_decoded_detail_on_success() {
    let json = r#"{
        "structure_display_name": "Fortizar \"Home\" in 1DQ1-A",
        "eve_time": "2024-01-15 18:30",
        "details_image_url": "https://example.com/fit.png",
        "notes": "Form up 30 minutes early"
    }"#;
    let detail: TimerDetailDto = serde_json::from_str(json).unwrap();
    let mut modal = DetailModalState::default();
    let token = modal.open(42);

    assert!(modal.resolve(token, Ok(detail)));

    match modal.content() {
        Some(ModalContent::Loaded(detail)) => {
            assert_eq!(detail.summary(), "Fortizar \"Home\" in 1DQ1-A @ 2024-01-15 18:30");
            assert_eq!(
                detail.details_image_url.as_deref(),
                Some("https://example.com/fit.png")
            );
            assert_eq!(detail.notes, "Form up 30 minutes early");
        }
        other => panic!("expected loaded detail, got {:?}", other),
    }
}

/// Tests out-of-order responses for two quick opens.
///
/// Expected: the second timer stays displayed
#[test]
fn keeps_latest_timer_when_responses_race() {
    let mut modal = DetailModalState::default();
    let first = modal.open(41);
    let second = modal.open(42);

    modal.resolve(second, Err(FetchError::Request("network down".to_string())));
    modal.resolve(
        first,
        Ok(TimerDetailDto {
            structure_display_name: "stale".to_string(),
            eve_time: "2024-01-15 18:30".to_string(),
            details_image_url: None,
            notes: String::new(),
        }),
    );

    assert_eq!(modal.timer_id(), Some(42));
    assert!(matches!(modal.content(), Some(ModalContent::Failed(message)) if message.contains("42")));
}
