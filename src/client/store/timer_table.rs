//! View state of the current and past timer tables.
//!
//! Rows are fetched once per load and kept in memory. Sorting, searching, filtering and paging
//! are applied on the client, and the current table's time cells are recomputed every tick
//! without touching the network.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use dioxus_logger::tracing;

use crate::{
    client::{
        config::PageConfig,
        error::FetchError,
        util::{
            columns::{
                plain_text, strip_details_control, text_lines, ColumnDescriptor, ColumnKey,
            },
            countdown::{format_eve_time, time_cell},
        },
    },
    model::timer::TimerRowDto,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableKind {
    Current,
    Past,
}

impl TableKind {
    pub fn list_url<'a>(&self, config: &'a PageConfig) -> &'a str {
        match self {
            Self::Current => &config.list_current_url,
            Self::Past => &config.list_past_url,
        }
    }

    /// Initial ordering: upcoming timers soonest first, past timers latest first
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Current => SortDirection::Ascending,
            Self::Past => SortDirection::Descending,
        }
    }

    /// Only the current table highlights rows and runs the countdown
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Current)
    }

    pub fn element_id(&self) -> &'static str {
        match self {
            Self::Current => "tab_timers_current",
            Self::Past => "tab_timers_past",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub column: usize,
    pub direction: SortDirection,
}

/// CSS class of a row in the current table.
///
/// Important timers are highlighted even once passed.
pub fn row_class(row: &TimerRowDto) -> Option<&'static str> {
    if row.is_important {
        Some("warning")
    } else if row.is_passed {
        Some("active")
    } else {
        None
    }
}

/// Normalizes freshly loaded rows for display.
///
/// The server's time cell has its `<br>` turned into a newline, or is filled with the event
/// time when missing; passed rows keep this display for as long as they are loaded. The
/// server's details link is dropped from the actions cell since the table renders its own.
pub fn prepare_rows(rows: &mut [TimerRowDto]) {
    for row in rows.iter_mut() {
        row.time = if row.time.trim().is_empty() {
            format_eve_time(&row.eve_time)
        } else {
            text_lines(&row.time)
        };
        row.actions = strip_details_control(&row.actions);
    }
}

/// Recomputes the time cell of every outstanding row.
///
/// Rows flagged `is_passed` are left untouched.
///
/// # Returns
/// Number of rows whose cell changed
pub fn refresh_countdowns(rows: &mut [TimerRowDto], now: &DateTime<Utc>) -> usize {
    let mut changed = 0;

    for row in rows.iter_mut().filter(|row| !row.is_passed) {
        let cell = time_cell(&row.eve_time, now);
        if row.time != cell {
            row.time = cell;
            changed += 1;
        }
    }

    changed
}

/// Rows to display after a (re)load of `kind`.
///
/// A successful load is prepared and, for the live table, given its countdown at `now`. A
/// failed load leaves no rows so nothing stale stays on screen next to the error.
pub fn loaded_rows(
    kind: TableKind,
    result: &Result<Vec<TimerRowDto>, FetchError>,
    now: &DateTime<Utc>,
) -> Vec<TimerRowDto> {
    match result {
        Ok(fetched) => {
            let mut rows = fetched.clone();
            prepare_rows(&mut rows);
            if kind.is_live() {
                refresh_countdowns(&mut rows, now);
            }
            tracing::debug!("Loaded {} timers into {}", rows.len(), kind.element_id());
            rows
        }
        Err(err) => {
            tracing::error!("Failed to load timers for {}: {}", kind.element_id(), err);
            Vec::new()
        }
    }
}

/// Sorting, search, filter and paging state of one table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableState {
    pub order: SortOrder,
    pub search: String,
    /// Selected value per filter column index
    pub filters: HashMap<usize, String>,
    pub page: usize,
    /// `None` shows every row on one page
    pub page_length: Option<usize>,
}

/// Rows of the current page plus the counts shown under the table.
#[derive(Debug, PartialEq)]
pub struct TableView<'a> {
    pub rows: Vec<&'a TimerRowDto>,
    pub total: usize,
    pub filtered: usize,
    pub page: usize,
    pub page_count: usize,
    /// 1-based index of the first shown row, 0 when nothing is shown
    pub first: usize,
    pub last: usize,
}

impl TableState {
    pub fn new(kind: TableKind, page_length: Option<usize>) -> Self {
        Self {
            order: SortOrder {
                column: 0,
                direction: kind.default_direction(),
            },
            search: String::new(),
            filters: HashMap::new(),
            page: 0,
            page_length,
        }
    }

    /// Sorts by `column`, toggling the direction if it already is the sort column.
    pub fn sort_by(&mut self, column: usize) {
        if self.order.column == column {
            self.order.direction = self.order.direction.toggled();
        } else {
            self.order = SortOrder {
                column,
                direction: SortDirection::Ascending,
            };
        }
        self.page = 0;
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 0;
    }

    /// Selects a filter value; an empty value clears the filter.
    pub fn set_filter(&mut self, idx: usize, value: String) {
        if value.is_empty() {
            self.filters.remove(&idx);
        } else {
            self.filters.insert(idx, value);
        }
        self.page = 0;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Applies filters, search, ordering and paging to `rows`.
    pub fn apply<'a>(
        &self,
        columns: &[ColumnDescriptor],
        rows: &'a [TimerRowDto],
    ) -> TableView<'a> {
        let needle = self.search.trim().to_lowercase();

        let mut matching: Vec<&TimerRowDto> = rows
            .iter()
            .filter(|row| self.matches_filters(columns, row))
            .filter(|row| needle.is_empty() || matches_search(columns, row, &needle))
            .collect();

        if let Some(column) = columns.get(self.order.column) {
            matching.sort_by(|a, b| {
                let ordering = compare_rows(column.key, a, b);
                match self.order.direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            });
        }

        let filtered = matching.len();
        let (page, page_count, start, end) = match self.page_length {
            Some(length) => {
                let page_count = filtered.div_ceil(length).max(1);
                let page = self.page.min(page_count - 1);
                let start = page * length;
                (page, page_count, start, (start + length).min(filtered))
            }
            None => (0, 1, 0, filtered),
        };

        TableView {
            rows: matching[start..end].to_vec(),
            total: rows.len(),
            filtered,
            page,
            page_count,
            first: if start < end { start + 1 } else { 0 },
            last: end,
        }
    }

    fn matches_filters(&self, columns: &[ColumnDescriptor], row: &TimerRowDto) -> bool {
        self.filters.iter().all(|(idx, value)| {
            columns
                .get(*idx)
                .map(|column| column.key.cell(row) == value.as_str())
                .unwrap_or(true)
        })
    }
}

/// Distinct non-empty values of a column, sorted, used as filter dropdown options.
pub fn filter_options(key: ColumnKey, rows: &[TimerRowDto]) -> Vec<String> {
    rows.iter()
        .map(|row| key.cell(row))
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn matches_search(columns: &[ColumnDescriptor], row: &TimerRowDto, needle: &str) -> bool {
    columns
        .iter()
        .filter(|column| column.key != ColumnKey::Actions)
        .any(|column| plain_text(column.key.cell(row)).to_lowercase().contains(needle))
}

fn compare_rows(key: ColumnKey, a: &TimerRowDto, b: &TimerRowDto) -> Ordering {
    match key {
        ColumnKey::Time => a.eve_time.cmp(&b.eve_time),
        key => plain_text(key.cell(a))
            .to_lowercase()
            .cmp(&plain_text(key.cell(b)).to_lowercase()),
    }
    .then_with(|| a.id.cmp(&b.id))
}
