//! ページ送りコンポーネント

use leptos::prelude::*;
use stock_manager_common::RenderedPage;

#[component]
pub fn Pagination<FP, FN>(page: Memo<RenderedPage>, on_prev: FP, on_next: FN) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class="pagination">
            <button
                id="prevPage"
                class="btn btn-small btn-secondary"
                disabled=move || !page.get().has_prev()
                on:click=move |_| on_prev(())
            >
                "Previous"
            </button>
            <span id="pageInfo">{move || page.get().label()}</span>
            <button
                id="nextPage"
                class="btn btn-small btn-secondary"
                disabled=move || !page.get().has_next()
                on:click=move |_| on_next(())
            >
                "Next"
            </button>
        </div>
    }
}
