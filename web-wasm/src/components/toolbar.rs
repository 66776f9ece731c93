//! 検索・ソート・表示切替

use leptos::prelude::*;
use stock_manager_common::{DisplayMode, SortField};

#[component]
pub fn Toolbar<FS, FO, FT>(
    search: Memo<String>,
    sort: Memo<SortField>,
    display_mode: Memo<DisplayMode>,
    on_search: FS,
    on_sort: FO,
    on_toggle_view: FT,
) -> impl IntoView
where
    FS: Fn(String) + 'static + Clone,
    FO: Fn(SortField) + 'static + Clone,
    FT: Fn(()) + 'static + Clone,
{
    view! {
        <div class="toolbar">
            <input
                type="search"
                id="search"
                placeholder="Search by name..."
                prop:value=move || search.get()
                on:input=move |ev| on_search(event_target_value(&ev))
            />

            <label for="sortCategory">"Sort by"</label>
            <select
                id="sortCategory"
                on:change=move |ev| {
                    if let Some(field) = SortField::parse(&event_target_value(&ev)) {
                        on_sort(field);
                    }
                }
            >
                {SortField::ALL
                    .into_iter()
                    .map(|field| {
                        view! {
                            <option value=field.as_str() selected=move || sort.get() == field>
                                {field.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>

            <button
                id="toggleView"
                class="btn btn-secondary"
                on:click={
                    let on_toggle_view = on_toggle_view.clone();
                    move |_| on_toggle_view(())
                }
            >
                {move || display_mode.get().toggle_label()}
            </button>
        </div>
    }
}
