/// Shared helpers for list pages (search, client-side sorting).
use leptos::prelude::*;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;

/// Types that can be filtered by a free-text query.
pub trait Searchable {
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Types that can be sorted by a named column.
pub trait Sortable {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering;
}

/// Sort a list by column, in place.
pub fn sort_list<T: Sortable>(items: &mut Vec<T>, field: &str, ascending: bool) {
    items.sort_by(|a, b| {
        let cmp = a.compare_by_field(b, field);
        if ascending {
            cmp
        } else {
            cmp.reverse()
        }
    });
}

/// Filter a list by query. Queries shorter than 3 characters match all.
pub fn filter_list<T: Searchable + Clone>(items: Vec<T>, filter: &str) -> Vec<T> {
    if filter.trim().is_empty() || filter.trim().len() < 3 {
        return items;
    }
    items
        .into_iter()
        .filter(|item| item.matches_filter(filter))
        .collect()
}

/// Sort indicator for a column header.
pub fn get_sort_indicator(current_field: &str, field: &str, ascending: bool) -> &'static str {
    if current_field == field {
        if ascending {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

/// Search input with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current filter value (for display)
    #[prop(into)]
    value: Signal<String>,
    /// Callback invoked after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari (min. 3 huruf)...".to_string()
    } else {
        placeholder
    };

    // Local input state, before debounce fires
    let (input_value, set_input_value) = signal(String::new());

    let debounce_timeout = StoredValue::new(None::<i32>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        if let Some(timeout_id) = debounce_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(timeout_id);
            }
        }

        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            on_change.run(new_value.clone());
        }) as Box<dyn Fn()>);

        if let Ok(timeout_id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            300,
        ) {
            debounce_timeout.set_value(Some(timeout_id));
        }
        closure.forget();
    };

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder={placeholder}
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    let val = event_target_value(&ev);
                    handle_input_change(val);
                }
            />
            {move || if !value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear_filter title="Bersihkan">
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
