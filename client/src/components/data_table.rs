//! Generic data table over any `grid::Row` type.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every list in the portal (payment history, pending fees, students, the
//! payment ledger, fee structures) renders through this component. The
//! interaction state is a `grid::TableState` held in a signal; the rendered
//! page is a memo over the data and that state.
//!
//! DESIGN
//! ======
//! All state changes go through [`settle_after`]: apply the change, rerun
//! the pipeline, store the clamped page, and prune the selection to the
//! rendered keys. A new `data` value resets page and selection instead.
//! Selection callbacks fire only when the key set actually changed.
//!
//! Data changes are counted by a `data_epoch` memo. `settled_epoch` is the
//! epoch the stored state reflects; while the two differ the model renders
//! the reset state, so new rows never show the old page or checkmarks.

#[cfg(test)]
#[path = "data_table_test.rs"]
mod data_table_test;

use std::sync::Arc;

use grid::page::{DEFAULT_ROWS_PER_PAGE, DEFAULT_ROWS_PER_PAGE_OPTIONS, PageItem};
use grid::sort::SortIndicator;
use grid::{Column, Row, RowKey, TableOptions, TableState};
use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::state::settings::PortalSettings;

/// Cell renderer producing arbitrary markup for one row.
pub type CellRenderer<R> = Arc<dyn Fn(&R) -> AnyView + Send + Sync>;

/// A `grid::Column` plus an optional view renderer. Without a renderer the
/// cell shows the column's display text.
pub struct TableColumn<R> {
    pub column: Column<R>,
    render: Option<CellRenderer<R>>,
}

impl<R> TableColumn<R> {
    pub fn new(column: Column<R>) -> Self {
        Self { column, render: None }
    }

    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&R) -> AnyView + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }
}

impl<R> From<Column<R>> for TableColumn<R> {
    fn from(column: Column<R>) -> Self {
        Self::new(column)
    }
}

impl<R> Clone for TableColumn<R> {
    fn clone(&self) -> Self {
        Self { column: self.column.clone(), render: self.render.clone() }
    }
}

// =============================================================================
// PURE HELPERS
// =============================================================================

/// What one render of the table needs, detached from the borrowed view.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModel<R> {
    pub rows: Vec<(RowKey, R)>,
    pub keys: Vec<RowKey>,
    pub selected: Vec<RowKey>,
    pub items: Vec<PageItem>,
    pub summary: Option<String>,
    pub shows_pager: bool,
    pub all_selected: bool,
}

pub fn page_model<R: Row + Clone>(state: &TableState, rows: &[R], columns: &[Column<R>]) -> PageModel<R> {
    let view = state.view(rows, columns);
    PageModel {
        rows: view.keys.iter().cloned().zip(view.rows.iter().map(|r| (*r).clone())).collect(),
        all_selected: state.selection().all_selected(&view.keys),
        selected: state.selection().keys().to_vec(),
        items: view.page_items(),
        summary: view.summary().map(|s| s.to_string()),
        shows_pager: view.shows_pager(),
        keys: view.keys,
    }
}

/// Model for the current render. `data_changed` means the rows were
/// replaced since `state` last settled; the model then shows page 1 with
/// nothing selected.
pub fn current_model<R: Row + Clone>(
    state: &TableState,
    data_changed: bool,
    rows: &[R],
    columns: &[Column<R>],
) -> PageModel<R> {
    if data_changed {
        let mut fresh = state.clone();
        fresh.reset_for_new_data();
        page_model(&fresh, rows, columns)
    } else {
        page_model(state, rows, columns)
    }
}

/// Apply `change`, then clamp the page and prune the selection against the
/// new view. Returns the selection when it changed.
pub fn settle_after<R: Row>(
    state: &mut TableState,
    rows: &[R],
    columns: &[Column<R>],
    change: impl FnOnce(&mut TableState),
) -> Option<Vec<RowKey>> {
    let before = state.selection().keys().to_vec();
    change(state);
    let view = state.view(rows, columns);
    state.settle(&view);
    let after = state.selection().keys();
    (after != before.as_slice()).then(|| after.to_vec())
}

/// Header cell class for a column's sort state.
pub fn header_class(indicator: SortIndicator, sortable: bool, extra: Option<&str>) -> String {
    let mut class = String::from("data-table__header");
    if sortable {
        class.push_str(" data-table__header--sortable data-table__header--");
        class.push_str(indicator.css_modifier());
    }
    if let Some(extra) = extra {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Bring the stored state up to the latest data epoch. Returns whether the
/// selection was cleared.
fn catch_up(state: RwSignal<TableState>, data_epoch: Memo<u64>, settled_epoch: RwSignal<u64>) -> bool {
    let epoch = data_epoch.get_untracked();
    if settled_epoch.get_untracked() == epoch {
        return false;
    }
    settled_epoch.set(epoch);
    state.try_update(TableState::reset_for_new_data).unwrap_or(false)
}

fn settle_signal<R>(
    state: RwSignal<TableState>,
    data: Signal<Vec<R>>,
    columns: StoredValue<Vec<Column<R>>>,
    epochs: (Memo<u64>, RwSignal<u64>),
    change: impl FnOnce(&mut TableState),
) -> Option<Vec<RowKey>>
where
    R: Row + Send + Sync + 'static,
{
    let cleared = catch_up(state, epochs.0, epochs.1);
    data.with_untracked(|rows| {
        columns.with_value(|cols| state.try_update(|s| settle_after(s, rows, cols, change)))
    })
    .flatten()
    .or_else(|| cleared.then(Vec::new))
}

// =============================================================================
// COMPONENT
// =============================================================================

/// Sortable, searchable, paginated, selectable table.
///
/// Rows-per-page defaults to the admin setting when a settings context is
/// present and no explicit default is given.
#[component]
pub fn DataTable<R>(
    columns: Vec<TableColumn<R>>,
    #[prop(into)] data: Signal<Vec<R>>,
    #[prop(default = true)] sortable: bool,
    #[prop(default = true)] pagination: bool,
    #[prop(optional)] searchable: bool,
    #[prop(optional)] selectable: bool,
    #[prop(optional)] rows_per_page_options: Option<Vec<usize>>,
    #[prop(optional)] default_rows_per_page: Option<usize>,
    #[prop(into, default = "No data available".to_owned())] empty_message: String,
    #[prop(into, default = "id".to_owned())] row_key: String,
    #[prop(into, default = "Search...".to_owned())] search_placeholder: String,
    #[prop(optional)] on_row_click: Option<Callback<R>>,
    #[prop(optional)] on_selection_change: Option<Callback<Vec<RowKey>>>,
) -> impl IntoView
where
    R: Row + Clone + PartialEq + Send + Sync + 'static,
{
    let settings = use_context::<RwSignal<PortalSettings>>();
    let default_rows_per_page = default_rows_per_page
        .or_else(|| settings.map(|s| s.get_untracked().system.rows_per_page))
        .unwrap_or(DEFAULT_ROWS_PER_PAGE);
    let sizes = rows_per_page_options.unwrap_or_else(|| DEFAULT_ROWS_PER_PAGE_OPTIONS.to_vec());

    let state = RwSignal::new(TableState::new(TableOptions {
        sortable,
        pagination,
        searchable,
        selectable,
        rows_per_page_options: sizes.clone(),
        default_rows_per_page,
        row_key,
        empty_message: empty_message.clone(),
    }));
    let grid_columns = StoredValue::new(columns.iter().map(|c| c.column.clone()).collect::<Vec<_>>());
    let column_count = columns.len() + usize::from(selectable);
    let columns = StoredValue::new(columns);

    let notify = move |changed: Option<Vec<RowKey>>| {
        if let (Some(keys), Some(callback)) = (changed, on_selection_change) {
            callback.run(keys);
        }
    };

    let data_epoch = Memo::new(move |prev: Option<&u64>| {
        data.track();
        prev.map_or(0, |epoch| epoch + 1)
    });
    let settled_epoch = RwSignal::new(0_u64);
    let epochs = (data_epoch, settled_epoch);

    // New input rows: back to page 1, nothing selected.
    Effect::new(move |_| {
        data_epoch.track();
        if catch_up(state, data_epoch, settled_epoch) {
            notify(Some(Vec::new()));
        }
    });

    let model = Memo::new(move |_| {
        let data_changed = data_epoch.get() != settled_epoch.get();
        data.with(|rows| {
            state.with(|s| grid_columns.with_value(|cols| current_model(s, data_changed, rows, cols)))
        })
    });

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|tc| {
                let column = tc.column.clone();
                let field = column.field().to_owned();
                let text = column.header_text().to_owned();
                let col_sortable = sortable && column.is_sortable();
                let width = column.width_style().map(|w| format!("width: {w}"));
                let extra = column.header_class_name().map(str::to_owned);
                let class_field = field.clone();
                let class = move || {
                    header_class(state.with(|s| s.indicator(&class_field)), col_sortable, extra.as_deref())
                };
                let on_click = move |_| {
                    if col_sortable {
                        let column = column.clone();
                        notify(settle_signal(state, data, grid_columns, epochs, move |s| {
                            s.toggle_sort(&column);
                        }));
                    }
                };
                view! {
                    <th class=class style=width on:click=on_click>
                        {text}
                        {col_sortable
                            .then(|| {
                                view! {
                                    <span class="data-table__sort-indicator">
                                        {move || state.with(|s| s.indicator(&field).glyph())}
                                    </span>
                                }
                            })}
                    </th>
                }
            })
            .collect_view()
    });

    let render_row = move |key: RowKey, row: R| {
        let selected_key = key.clone();
        let row_class = move || {
            let mut class = String::from("data-table__row");
            if on_row_click.is_some() {
                class.push_str(" data-table__row--clickable");
            }
            if model.with(|m| m.selected.contains(&selected_key)) {
                class.push_str(" data-table__row--selected");
            }
            class
        };
        let clicked = row.clone();
        let on_click = move |_| {
            if let Some(callback) = on_row_click {
                callback.run(clicked.clone());
            }
        };
        let select_cell = selectable.then(|| {
            let checked_key = key.clone();
            let toggle_key = key.clone();
            view! {
                <td class="data-table__select" on:click=|ev| ev.stop_propagation()>
                    <input
                        type="checkbox"
                        class="form-check-input"
                        prop:checked=move || model.with(|m| m.selected.contains(&checked_key))
                        on:change=move |_| {
                            let key = toggle_key.clone();
                            notify(settle_signal(state, data, grid_columns, epochs, move |s| {
                                s.toggle_row(&key);
                            }));
                        }
                    />
                </td>
            }
        });
        let cells = columns.with_value(|cols| {
            cols.iter()
                .map(|tc| {
                    let class = tc.column.cell_class_name().map(str::to_owned);
                    let content = match &tc.render {
                        Some(render) => render(&row),
                        None => tc.column.display(&row).into_any(),
                    };
                    view! { <td class=class>{content}</td> }
                })
                .collect_view()
        });
        view! {
            <tr class=row_class on:click=on_click>
                {select_cell}
                {cells}
            </tr>
        }
    };

    let body = move || {
        let page = model.get();
        if page.rows.is_empty() {
            view! {
                <tr>
                    <td class="data-table__empty" colspan=column_count>
                        {empty_message.clone()}
                    </td>
                </tr>
            }
            .into_any()
        } else {
            page.rows.into_iter().map(|(key, row)| render_row(key, row)).collect_view().into_any()
        }
    };

    let on_page = Callback::new(move |page: usize| {
        notify(settle_signal(state, data, grid_columns, epochs, move |s| s.set_page(page)));
    });
    let on_page_size = Callback::new(move |size: usize| {
        notify(settle_signal(state, data, grid_columns, epochs, move |s| {
            s.set_page_size(size);
        }));
    });

    view! {
        <div class="data-table">
            {searchable
                .then(|| {
                    view! {
                        <div class="data-table__toolbar">
                            <input
                                type="search"
                                class="form-control data-table__search"
                                placeholder=search_placeholder
                                prop:value=move || state.with(|s| s.search().to_owned())
                                on:input=move |ev| {
                                    let term = event_target_value(&ev);
                                    notify(settle_signal(state, data, grid_columns, epochs, move |s| {
                                        s.set_search(&term);
                                    }));
                                }
                            />
                        </div>
                    }
                })}
            <div class="table-responsive">
                <table class="table table-hover data-table__table">
                    <thead>
                        <tr>
                            {selectable
                                .then(|| {
                                    view! {
                                        <th class="data-table__select">
                                            <input
                                                type="checkbox"
                                                class="form-check-input"
                                                prop:checked=move || model.with(|m| m.all_selected)
                                                on:change=move |_| {
                                                    let keys = model.with_untracked(|m| m.keys.clone());
                                                    notify(settle_signal(state, data, grid_columns, epochs, move |s| {
                                                        s.toggle_all(&keys);
                                                    }));
                                                }
                                            />
                                        </th>
                                    }
                                })}
                            {header_cells}
                        </tr>
                    </thead>
                    <tbody>{body}</tbody>
                </table>
            </div>
            {pagination
                .then(|| {
                    view! {
                        <Pagination
                            items=Signal::derive(move || model.with(|m| m.items.clone()))
                            summary=Signal::derive(move || model.with(|m| m.summary.clone()))
                            shows_pager=Signal::derive(move || model.with(|m| m.shows_pager))
                            page_size=Signal::derive(move || state.with(|s| s.rows_per_page().current()))
                            sizes=sizes.clone()
                            on_page=on_page
                            on_page_size=on_page_size
                        />
                    }
                })}
        </div>
    }
}
