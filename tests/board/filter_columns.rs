//! Tests for the filter dropdowns derived from the page configuration.

use timerboard::client::util::columns::{filter_columns, idx_start, timer_columns, ColumnKey};

use super::*;

/// Tests the filter dropdowns for a viewer without OPSEC clearance.
///
/// Expected: 7 filters, indices idx_start through idx_start + 6
#[test]
fn offers_seven_filters_without_opsec_permission() {
    let config = page_config(false);
    let columns = timer_columns(&config.titles, config.has_perm_opsec);
    let start = idx_start(&columns);

    let filters = filter_columns(&columns);

    assert_eq!(filters.len(), 7);
    assert_eq!(filters.first().map(|filter| filter.idx), Some(start));
    assert_eq!(filters.last().map(|filter| filter.idx), Some(start + 6));
    assert!(filters.iter().all(|filter| filter.title != "OPSEC"));
}

/// Tests the filter dropdowns for a viewer with OPSEC clearance.
///
/// Expected: 8 filters, indices idx_start through idx_start + 7, the last on the OPSEC column
#[test]
fn offers_eight_filters_with_opsec_permission() {
    let config = page_config(true);
    let columns = timer_columns(&config.titles, config.has_perm_opsec);
    let start = idx_start(&columns);

    let filters = filter_columns(&columns);

    assert_eq!(filters.len(), 8);
    assert_eq!(filters.last().map(|filter| filter.idx), Some(start + 7));
    assert_eq!(columns[start + 7].key, ColumnKey::Opsec);
}

/// Tests that every filter targets a hidden column.
///
/// Expected: no filter points at a visible column
#[test]
fn filters_only_hidden_columns() {
    let config = page_config(true);
    let columns = timer_columns(&config.titles, config.has_perm_opsec);

    for filter in filter_columns(&columns) {
        assert!(!columns[filter.idx].visible, "filter {:?}", filter);
    }
}
