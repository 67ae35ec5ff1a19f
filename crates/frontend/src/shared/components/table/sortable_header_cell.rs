//! Компонент сортируемой ячейки заголовка таблицы
//!
//! # Примеры
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Quantity"
//!     sort_key=SortKey::Quantity
//!     current_sort=Signal::derive(move || query.with(|q| q.sort()))
//!     on_sort=Callback::new(move |key| { query.maybe_update(|q| q.set_sort(key)); })
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::enums::{SalesSort, SortKey};
use leptos::prelude::*;

/// Ячейка заголовка, запрашивающая сортировку на сервере по клику
///
/// Показывает ↑/↓ на активной колонке и ↕ на остальных.
#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Колонка, по которой сортирует заголовок
    sort_key: SortKey,

    /// Текущая сортировка из state
    #[prop(into)]
    current_sort: Signal<SalesSort>,

    /// Callback при клике на заголовок
    on_sort: Callback<SortKey>,
) -> impl IntoView {
    view! {
        <th
            class="table__sortable-header"
            on:click=move |_| on_sort.run(sort_key)
        >
            {label}
            " "
            <span class=move || get_sort_class(current_sort.get(), sort_key)>
                {move || get_sort_indicator(current_sort.get(), sort_key)}
            </span>
        </th>
    }
}
