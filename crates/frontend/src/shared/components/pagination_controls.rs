use crate::shared::icons::icon;
use crate::shared::pagination::PageBounds;
use contracts::enums::PageSize;
use leptos::prelude::*;

/// PaginationControls component - reusable pagination controls
///
/// Pages are 1-based. Buttons at a bound are disabled, and the bounds are
/// re-checked on click since `total_pages` may change under a pending click.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<u64>,

    /// Current page size
    #[prop(into)]
    page_size: Signal<PageSize>,

    /// Callback when page changes
    on_page_change: Callback<u32>,

    /// Callback when page size changes
    on_page_size_change: Callback<PageSize>,
) -> impl IntoView {
    let bounds = move || PageBounds::new(current_page.get(), total_pages.get());
    let go = move |target: Option<u32>| {
        if let Some(page) = target {
            on_page_change.run(page);
        }
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(bounds().first())
                disabled=move || !bounds().can_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(bounds().prev())
                disabled=move || !bounds().can_prev()
                title="Prev"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} ({} items)", bounds().label(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| go(bounds().next())
                disabled=move || !bounds().can_next()
                title="Next"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(bounds().last())
                disabled=move || !bounds().can_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let selected = event_target_value(&ev)
                        .parse::<u32>()
                        .ok()
                        .and_then(PageSize::from_value);
                    if let Some(size) = selected {
                        on_page_size_change.run(size);
                    }
                }
                prop:value=move || page_size.get().value().to_string()
            >
                {PageSize::all().into_iter().map(|size| {
                    view! {
                        <option value={size.value().to_string()} selected=move || page_size.get() == size>
                            {size.label()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
