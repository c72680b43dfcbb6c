//! Pager strip and rows-per-page selector under a data table.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use grid::page::PageItem;
use leptos::prelude::*;

/// Label, click target, and `li` class for one pager item. Disabled,
/// active, and ellipsis items have no target.
pub fn describe(item: PageItem) -> (String, Option<usize>, &'static str) {
    match item {
        PageItem::Previous { target, disabled } => {
            ("‹".to_owned(), (!disabled).then_some(target), if disabled { "page-item disabled" } else { "page-item" })
        }
        PageItem::Next { target, disabled } => {
            ("›".to_owned(), (!disabled).then_some(target), if disabled { "page-item disabled" } else { "page-item" })
        }
        PageItem::Page { number, active } => {
            (number.to_string(), (!active).then_some(number), if active { "page-item active" } else { "page-item" })
        }
        PageItem::Ellipsis => ("…".to_owned(), None, "page-item disabled"),
    }
}

#[component]
pub fn Pagination(
    #[prop(into)] items: Signal<Vec<PageItem>>,
    #[prop(into)] summary: Signal<Option<String>>,
    #[prop(into)] shows_pager: Signal<bool>,
    #[prop(into)] page_size: Signal<usize>,
    sizes: Vec<usize>,
    on_page: Callback<usize>,
    on_page_size: Callback<usize>,
) -> impl IntoView {
    let options = sizes
        .into_iter()
        .map(|size| {
            view! {
                <option value=size.to_string() selected=move || page_size.get() == size>
                    {size}
                </option>
            }
        })
        .collect_view();

    let strip = move || {
        items
            .get()
            .into_iter()
            .map(|item| {
                let (label, target, class) = describe(item);
                view! {
                    <li class=class>
                        <button
                            type="button"
                            class="page-link"
                            disabled=target.is_none()
                            on:click=move |_| {
                                if let Some(page) = target {
                                    on_page.run(page);
                                }
                            }
                        >
                            {label}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class=move || {
            if summary.with(Option::is_none) { "data-table__footer d-none" } else { "data-table__footer" }
        }>
            <span class="data-table__summary">{move || summary.get().unwrap_or_default()}</span>
            <label class="data-table__page-size">
                "Rows per page "
                <select
                    class="form-select form-select-sm"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size.run(size);
                        }
                    }
                >
                    {options}
                </select>
            </label>
            <Show when=move || shows_pager.get()>
                <ul class="pagination pagination-sm mb-0">{strip}</ul>
            </Show>
        </div>
    }
}
