//! Утилиты для списков: поиск с debounce и индикаторы сортировки

use crate::shared::debounce::Debouncer;
use contracts::enums::{SalesSort, SortKey};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Компонент поиска с debounce и кнопкой очистки
///
/// Ввод меняет только локальное значение; `on_change` получает текст, когда
/// ввод затих на `delay_ms`. Очистка применяется сразу.
#[component]
pub fn SearchInput(
    /// Применённый текст поиска (подсветка активного фильтра)
    #[prop(into)]
    value: Signal<String>,
    /// Callback для применённого значения
    #[prop(into)]
    on_change: Callback<String>,
    /// Задержка debounce в миллисекундах
    #[prop(optional, default = 500)]
    delay_ms: u32,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search customer, product, region...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Timeout не Send, храним машину состояний локально
    let debouncer = StoredValue::new_local(Debouncer::<Timeout>::new());

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debouncer.update_value(|d| {
            d.input(new_value, |ticket| {
                Timeout::new(delay_ms, move || {
                    let committed = debouncer.try_update_value(|d| d.fire(ticket)).flatten();
                    if let Some(text) = committed {
                        log::debug!("search committed: {:?}", text);
                        on_change.run(text);
                    }
                })
            })
        });
    };

    // Внешний сброс (Reset) подтягиваем в input, если нет незавершённого ввода
    Effect::new(move |_| {
        let committed = value.get();
        let pending = debouncer.try_with_value(|d| d.is_pending()).unwrap_or(false);
        if needs_resync(&input_value.get_untracked(), &committed, pending) {
            set_input_value.set(committed);
        }
    });

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debouncer.update_value(|d| d.cancel());
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        class="search-input__clear"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

/// Нужно ли перезаписать input применённым значением.
///
/// Применённый текст хранится обрезанным, поэтому "lamp " в input уже
/// совпадает с "lamp" и не трогается.
fn needs_resync(input: &str, committed: &str, pending: bool) -> bool {
    !pending && input.trim() != committed.trim()
}

/// Получить индикатор сортировки для заголовка
pub fn get_sort_indicator(current: SalesSort, key: SortKey) -> &'static str {
    if current.key == key {
        if current.is_ascending() { "↑" } else { "↓" }
    } else {
        "↕"
    }
}

/// CSS-класс индикатора, активная колонка подсвечивается
pub fn get_sort_class(current: SalesSort, key: SortKey) -> &'static str {
    if current.key == key {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}
