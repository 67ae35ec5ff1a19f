use super::sales_table::SalesTable;
use crate::dashboards::d410_retail_sales::api::{fetch_filter_options, fetch_sales};
use crate::dashboards::d410_retail_sales::lifecycle::{reconcile_page, RequestLifecycle};
use crate::dashboards::d410_retail_sales::state::{create_state, FilterOptions, QueryState};
use crate::shared::api_utils::api_base;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag, FilterToggleGroup};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::DashboardConfig;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::enums::{PageSize, SortKey};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

type SalesLifecycle = RequestLifecycle<Option<AbortController>>;

/// Дашборд розничных продаж
///
/// Каждое изменение состояния запроса отправляет один запрос; предыдущий
/// отменяется, а его поздний ответ игнорируется.
#[component]
pub fn RetailSalesDashboard() -> impl IntoView {
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let base = api_base(&config);
    let debounce_ms = config.search_debounce_ms;

    let query = create_state(config.default_page_size);
    // AbortController не Send
    let lifecycle = RwSignal::new_local(SalesLifecycle::new());
    let filter_options = RwSignal::new(FilterOptions::default());
    let is_filter_expanded = RwSignal::new(true);

    // Значения фильтров загружаем один раз, при ошибке остаются встроенные
    {
        let base = base.clone();
        Effect::new(move |_| {
            let base = base.clone();
            spawn_local(async move {
                match fetch_filter_options(&base).await {
                    Ok(response) => {
                        filter_options.try_set(FilterOptions::from_response(response));
                    }
                    Err(e) => log::warn!("filter options unavailable, using defaults: {}", e),
                }
            });
        });
    }

    // Запрос данных при каждом изменении состояния запроса
    Effect::new(move |_| {
        let snapshot = query.get();
        let controller = AbortController::new().ok();
        let abort_signal = controller.as_ref().map(|c| c.signal());

        let Some(issued) = lifecycle.try_update(|l| l.issue(&snapshot, controller)) else {
            return;
        };

        let base = base.clone();
        spawn_local(async move {
            let outcome = fetch_sales(&base, &issued.params, abort_signal.as_ref()).await;
            // Результат сократился: возвращаемся на последнюю страницу
            if let Some(settlement) = lifecycle.try_update(|l| l.settle(issued.token, outcome)) {
                query.maybe_update(|q| reconcile_page(q, settlement));
            }
        });
    });

    on_cleanup(move || {
        lifecycle.try_update(|l| l.cancel_live());
    });

    let on_search = Callback::new(move |text: String| {
        query.maybe_update(|q| q.set_search_text(text));
    });
    let on_sort = Callback::new(move |key: SortKey| {
        query.maybe_update(|q| q.set_sort(key));
    });
    let on_page_change = Callback::new(move |page: u32| {
        query.maybe_update(|q| q.set_page(page));
    });
    let on_page_size_change = Callback::new(move |size: PageSize| {
        query.maybe_update(|q| q.set_page_size(size));
    });
    let on_toggle_category = Callback::new(move |value: String| {
        query.maybe_update(|q| q.toggle_category(&value));
    });
    let on_toggle_region = Callback::new(move |value: String| {
        query.maybe_update(|q| q.toggle_region(&value));
    });
    let reset_filters = move |_| {
        query.maybe_update(|q| q.reset_filters());
    };

    let search_text = Signal::derive(move || query.with(|q| q.search_text().to_string()));
    let current_sort = Signal::derive(move || query.with(QueryState::sort));
    let current_page = Signal::derive(move || query.with(QueryState::page));
    let page_size = Signal::derive(move || query.with(QueryState::page_size));
    let active_filters_count = Signal::derive(move || query.with(QueryState::active_filters_count));

    let records = Signal::derive(move || lifecycle.with(|l| l.result().records.clone()));
    // Число страниц известно только для запроса, который его вернул
    let total_pages =
        Signal::derive(move || query.with(|q| lifecycle.with(|l| l.total_pages_for(q))));
    let total_count = Signal::derive(move || lifecycle.with(|l| l.result().total_items));
    let is_loading = move || lifecycle.with(|l| l.is_loading());
    let error = move || lifecycle.with(|l| l.error().map(str::to_string));

    let categories = Signal::derive(move || filter_options.with(|o| o.categories.clone()));
    let regions = Signal::derive(move || filter_options.with(|o| o.regions.clone()));

    view! {
        <div class="page retail-sales-dashboard">
            <div class="page__header">
                <h2 class="page__title">"Retail Sales Dashboard"</h2>
                <SearchInput
                    value=search_text
                    on_change=on_search
                    delay_ms=debounce_ms
                />
            </div>

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        total_count=total_count
                        page_size=page_size
                        on_page_change=on_page_change
                        on_page_size_change=on_page_size_change
                    />
                }
                filter_content=move || view! {
                    <div class="filter-panel__groups">
                        <FilterToggleGroup
                            title="Category"
                            options=categories
                            is_selected=Callback::new(move |value: String| {
                                query.with(|q| q.selected_categories().contains(&value))
                            })
                            on_toggle=on_toggle_category
                        />
                        <FilterToggleGroup
                            title="Region"
                            options=regions
                            is_selected=Callback::new(move |value: String| {
                                query.with(|q| q.selected_regions().contains(&value))
                            })
                            on_toggle=on_toggle_region
                        />
                        <button class="button button--secondary" on:click=reset_filters>
                            {icon("rotate-ccw")}
                            " Reset filters"
                        </button>
                    </div>
                }
                filter_tags=move || active_filter_tags(query, on_toggle_category, on_toggle_region)
            />

            {move || if is_loading() {
                view! { <div class="loading-indicator">"Loading..."</div> }.into_any()
            } else {
                view! { <></> }.into_any()
            }}

            {move || error().map(|message| view! {
                <div class="alert alert--error">{message}</div>
            })}

            <SalesTable
                records=records
                current_sort=current_sort
                on_sort=on_sort
            />
        </div>
    }
}

/// Теги выбранных категорий и регионов; удаление тега снимает фильтр
fn active_filter_tags(
    query: RwSignal<QueryState>,
    on_toggle_category: Callback<String>,
    on_toggle_region: Callback<String>,
) -> impl IntoView {
    move || {
        let (categories, regions) = query.with(|q| {
            (
                q.selected_categories().iter().cloned().collect::<Vec<_>>(),
                q.selected_regions().iter().cloned().collect::<Vec<_>>(),
            )
        });

        let category_tags = categories.into_iter().map(move |value| {
            let label = format!("Category: {}", value);
            view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_| on_toggle_category.run(value.clone()))
                />
            }
            .into_any()
        });
        let region_tags = regions.into_iter().map(move |value| {
            let label = format!("Region: {}", value);
            view! {
                <FilterTag
                    label=label
                    on_remove=Callback::new(move |_| on_toggle_region.run(value.clone()))
                />
            }
            .into_any()
        });

        category_tags.chain(region_tags).collect_view()
    }
}
