use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaMagnifyingGlassPlus, FaRotate, FaSort, FaSortDown, FaSortUp,
};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::detail_modal::open_timer_detail,
        config::PageConfig,
        store::{
            detail_modal::DetailModalState,
            timer_table::{
                filter_options, loaded_rows, refresh_countdowns, row_class, SortDirection,
                TableKind, TableState,
            },
        },
        util::{
            columns::{filter_columns, timer_columns, ColumnKey},
            fetch::fetch_timer_rows,
            ticker::UtcNow,
        },
    },
    model::timer::TimerRowDto,
};

#[component]
pub fn TimerTable(kind: TableKind) -> Element {
    let config = use_context::<PageConfig>();
    let UtcNow(now) = use_context::<UtcNow>();
    let modal = use_context::<Signal<DetailModalState>>();
    let detail_template = use_signal(|| config.timer_detail_url.clone());

    let columns = use_hook(|| timer_columns(&config.titles, config.has_perm_opsec));
    let filters = use_hook(|| filter_columns(&columns));
    let page_length = config.paging.then_some(config.page_length);

    let mut state = use_signal(|| TableState::new(kind, page_length));
    let mut rows = use_signal(Vec::<TimerRowDto>::new);

    let list_url = kind.list_url(&config).to_string();
    let mut timers = use_resource(move || {
        let url = list_url.clone();
        async move { fetch_timer_rows(&url).await }
    });

    // Every (re)load supersedes the previous rows
    use_effect(move || {
        if let Some(result) = &*timers.read() {
            rows.set(loaded_rows(kind, result, &now.peek()));
        }
    });

    use_effect(move || {
        if !kind.is_live() {
            return;
        }
        let now = now();
        rows.with_mut(|rows| refresh_countdowns(rows, &now));
    });

    let load_error = match &*timers.read() {
        Some(Err(err)) => Some(err.to_string()),
        _ => None,
    };
    let loading = timers.read().is_none();

    let table = state.read();
    let all_rows = rows.read();
    let view = table.apply(&columns, &all_rows);
    let order = table.order;
    let visible_count = columns.iter().filter(|column| column.visible).count();
    let page = view.page;
    let page_count = view.page_count;

    rsx!(
        div { class: "flex flex-col gap-2",
            div { class: "flex flex-wrap items-end gap-2",
                {filters.iter().map(|filter| {
                    let idx = filter.idx;
                    let selected = table.filters.get(&idx).cloned().unwrap_or_default();
                    let options = filter_options(columns[idx].key, &all_rows);
                    rsx!(
                        label { key: "{idx}", class: "form-control w-44",
                            span { class: "label-text text-xs", "{filter.title}" }
                            select {
                                class: "select select-bordered select-sm",
                                value: "{selected}",
                                onchange: move |evt| state.write().set_filter(idx, evt.value()),
                                option { value: "", "All" }
                                {options.into_iter().map(|value| rsx!(
                                    option {
                                        key: "{value}",
                                        value: "{value}",
                                        selected: value == selected,
                                        "{value}"
                                    }
                                ))}
                            }
                        }
                    )
                })}
                div { class: "flex gap-2 ml-auto",
                    input {
                        class: "input input-bordered input-sm",
                        r#type: "search",
                        placeholder: "Search",
                        value: "{table.search}",
                        oninput: move |evt| state.write().set_search(evt.value()),
                    }
                    button {
                        class: "btn btn-sm btn-outline",
                        title: "Reload timers",
                        onclick: move |_| timers.restart(),
                        Icon { width: 16, height: 16, icon: FaRotate }
                    }
                }
            }
            div { class: "overflow-x-auto",
                table { id: kind.element_id(), class: "table table-md",
                    thead {
                        tr {
                            {columns.iter().enumerate().filter(|(_, column)| column.visible).map(|(idx, column)| {
                                let sortable = column.sortable;
                                let header = column.header;
                                rsx!(
                                    th {
                                        key: "{idx}",
                                        class: if sortable { "cursor-pointer select-none" } else { "" },
                                        onclick: move |_| {
                                            if sortable {
                                                state.write().sort_by(idx);
                                            }
                                        },
                                        div { class: "flex items-center gap-1",
                                            "{header}"
                                            if sortable {
                                                SortIndicator { active: order.column == idx, direction: order.direction }
                                            }
                                        }
                                    }
                                )
                            })}
                        }
                    }
                    tbody {
                        if loading {
                            tr {
                                td { colspan: "{visible_count}", class: "text-center",
                                    span { class: "loading loading-spinner" }
                                }
                            }
                        } else if let Some(err) = load_error {
                            tr {
                                td { colspan: "{visible_count}", class: "text-center text-error",
                                    "Failed to load timers: {err}"
                                }
                            }
                        } else if view.rows.is_empty() {
                            tr {
                                td { colspan: "{visible_count}", class: "text-center",
                                    "No timers found"
                                }
                            }
                        }
                        {view.rows.iter().map(|row| {
                            let timer_id = row.id;
                            let class = if kind.is_live() { row_class(row).unwrap_or("") } else { "" };
                            rsx!(
                                tr { key: "{timer_id}", class: "{class}",
                                    {columns.iter().filter(|column| column.visible).map(|column| {
                                        match column.key {
                                            ColumnKey::Time => rsx!(
                                                td { class: "whitespace-pre-line font-mono", "{row.time}" }
                                            ),
                                            ColumnKey::Actions => rsx!(
                                                td { class: "whitespace-nowrap",
                                                    div { class: "flex items-center gap-1",
                                                        button {
                                                            class: "btn btn-sm btn-primary",
                                                            title: "Show details of this timer",
                                                            "data-timerpk": "{timer_id}",
                                                            onclick: move |_| {
                                                                open_timer_detail(modal, &detail_template.read(), timer_id)
                                                            },
                                                            Icon { width: 14, height: 14, icon: FaMagnifyingGlassPlus }
                                                        }
                                                        span { dangerous_inner_html: "{row.actions}" }
                                                    }
                                                }
                                            ),
                                            key => rsx!(
                                                td { dangerous_inner_html: key.cell(row) }
                                            ),
                                        }
                                    })}
                                }
                            )
                        })}
                    }
                }
            }
            div { class: "flex flex-wrap items-center justify-between gap-2 text-sm",
                p {
                    "Showing {view.first} to {view.last} of {view.filtered} entries"
                    if view.filtered != view.total {
                        " (filtered from {view.total} total entries)"
                    }
                }
                if page_count > 1 {
                    div { class: "join",
                        button {
                            class: "join-item btn btn-sm",
                            disabled: page == 0,
                            onclick: move |_| state.write().set_page(page.saturating_sub(1)),
                            "Previous"
                        }
                        {(0..page_count).map(|target| rsx!(
                            button {
                                key: "{target}",
                                class: if target == page { "join-item btn btn-sm btn-active" } else { "join-item btn btn-sm" },
                                onclick: move |_| state.write().set_page(target),
                                {(target + 1).to_string()}
                            }
                        ))}
                        button {
                            class: "join-item btn btn-sm",
                            disabled: page + 1 >= page_count,
                            onclick: move |_| state.write().set_page(page + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn SortIndicator(active: bool, direction: SortDirection) -> Element {
    rsx!(
        if !active {
            span { class: "opacity-30",
                Icon { width: 12, height: 12, icon: FaSort }
            }
        } else if direction == SortDirection::Ascending {
            Icon { width: 12, height: 12, icon: FaSortUp }
        } else {
            Icon { width: 12, height: 12, icon: FaSortDown }
        }
    )
}
