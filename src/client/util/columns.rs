//! Column schema shared by the current and past timer tables.
//!
//! Every column is described once, carrying its own visibility, sortability and filter label.
//! Indices used by the filter dropdowns are derived from the position in this list.

use crate::{client::config::FilterTitles, model::timer::TimerRowDto};

/// Field of [`TimerRowDto`] a column displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColumnKey {
    Time,
    Location,
    StructureDetails,
    Owner,
    NameObjective,
    Creator,
    Actions,
    SystemName,
    RegionName,
    StructureTypeName,
    TimerTypeName,
    ObjectiveName,
    OwnerName,
    Visibility,
    Opsec,
}

impl ColumnKey {
    /// Raw cell content of this column for a row. Visible cells may contain markup.
    pub fn cell<'a>(&self, row: &'a TimerRowDto) -> &'a str {
        match self {
            Self::Time => &row.time,
            Self::Location => &row.location,
            Self::StructureDetails => &row.structure_details,
            Self::Owner => &row.owner,
            Self::NameObjective => &row.name_objective,
            Self::Creator => &row.creator,
            Self::Actions => &row.actions,
            Self::SystemName => &row.system_name,
            Self::RegionName => &row.region_name,
            Self::StructureTypeName => &row.structure_type_name,
            Self::TimerTypeName => &row.timer_type_name,
            Self::ObjectiveName => &row.objective_name,
            Self::OwnerName => &row.owner_name,
            Self::Visibility => &row.visibility,
            Self::Opsec => &row.opsec,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescriptor {
    pub key: ColumnKey,
    pub header: &'static str,
    pub visible: bool,
    pub sortable: bool,
    /// Title of the filter dropdown driven by this column, if any
    pub filter_label: Option<String>,
}

impl ColumnDescriptor {
    fn visible(key: ColumnKey, header: &'static str) -> Self {
        Self {
            key,
            header,
            visible: true,
            sortable: true,
            filter_label: None,
        }
    }

    fn hidden(key: ColumnKey, filter_label: Option<String>) -> Self {
        Self {
            key,
            header: "",
            visible: false,
            sortable: false,
            filter_label,
        }
    }

    fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// A filter dropdown: the column index it filters and its title.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterColumn {
    pub idx: usize,
    pub title: String,
}

/// Builds the column list of the timer tables.
///
/// Seven visible columns come first, followed by the hidden classification columns. The OPSEC
/// column is always present so both tables keep one schema, but it only drives a filter
/// dropdown when the viewer holds the OPSEC permission.
pub fn timer_columns(titles: &FilterTitles, has_perm_opsec: bool) -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::visible(ColumnKey::Time, "Time"),
        ColumnDescriptor::visible(ColumnKey::Location, "Location"),
        ColumnDescriptor::visible(ColumnKey::StructureDetails, "Structure"),
        ColumnDescriptor::visible(ColumnKey::Owner, "Owner"),
        ColumnDescriptor::visible(ColumnKey::NameObjective, "Name & Objective"),
        ColumnDescriptor::visible(ColumnKey::Creator, "Creator"),
        ColumnDescriptor::visible(ColumnKey::Actions, "").unsortable(),
        ColumnDescriptor::hidden(ColumnKey::SystemName, Some(titles.solar_system.clone())),
        ColumnDescriptor::hidden(ColumnKey::RegionName, Some(titles.region.clone())),
        ColumnDescriptor::hidden(
            ColumnKey::StructureTypeName,
            Some(titles.structure_type.clone()),
        ),
        ColumnDescriptor::hidden(ColumnKey::TimerTypeName, Some(titles.timer_type.clone())),
        ColumnDescriptor::hidden(ColumnKey::ObjectiveName, Some(titles.objective.clone())),
        ColumnDescriptor::hidden(ColumnKey::OwnerName, Some(titles.owner.clone())),
        ColumnDescriptor::hidden(ColumnKey::Visibility, Some(titles.visibility.clone())),
        ColumnDescriptor::hidden(
            ColumnKey::Opsec,
            has_perm_opsec.then(|| "OPSEC".to_string()),
        ),
    ]
}

/// Index of the first hidden column.
pub fn idx_start(columns: &[ColumnDescriptor]) -> usize {
    columns
        .iter()
        .position(|column| !column.visible)
        .unwrap_or(columns.len())
}

pub fn filter_columns(columns: &[ColumnDescriptor]) -> Vec<FilterColumn> {
    columns
        .iter()
        .enumerate()
        .filter_map(|(idx, column)| {
            column.filter_label.as_ref().map(|title| FilterColumn {
                idx,
                title: title.clone(),
            })
        })
        .collect()
}

/// Strips markup from a server-rendered cell so it can be sorted and searched as text.
///
/// `<br>` becomes a space; common entities are decoded.
pub fn plain_text(html: &str) -> String {
    strip_markup(html, ' ')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips markup from a server-rendered cell but keeps its `<br>` line breaks as newlines.
///
/// Blank lines are dropped.
pub fn text_lines(html: &str) -> String {
    strip_markup(html, '\n')
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Removes the server's details link (the `<a>` carrying `data-timerpk`) from an actions cell.
///
/// The board renders its own details control, so only the remaining actions are kept.
pub fn strip_details_control(actions: &str) -> String {
    let mut rest = actions;
    let mut kept = String::with_capacity(actions.len());

    while let Some(start) = rest.find("<a") {
        let Some(tag_len) = rest[start..].find('>') else {
            break;
        };
        let tag = &rest[start..start + tag_len];
        if !tag.contains("data-timerpk") {
            kept.push_str(&rest[..start + tag_len + 1]);
            rest = &rest[start + tag_len + 1..];
            continue;
        }

        kept.push_str(&rest[..start]);
        rest = match rest[start..].find("</a>") {
            Some(close) => &rest[start + close + "</a>".len()..],
            None => "",
        };
        rest = rest.strip_prefix("&nbsp;").unwrap_or(rest);
    }

    kept.push_str(rest);
    kept
}

fn strip_markup(html: &str, line_break: char) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;
    let mut tag = String::new();

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                tag.clear();
            }
            '>' if in_tag => {
                in_tag = false;
                if tag.trim_start().to_ascii_lowercase().starts_with("br") {
                    text.push(line_break);
                }
            }
            c if in_tag => tag.push(c),
            c => text.push(c),
        }
    }

    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
