//! 在庫入力フォームコンポーネント

use leptos::prelude::*;
use stock_manager_common::ItemDraft;

#[component]
pub fn ItemForm<FN, FQ, FC, FS>(
    draft: Memo<ItemDraft>,
    form_error: ReadSignal<Option<String>>,
    on_name: FN,
    on_quantity: FQ,
    on_category: FC,
    on_submit: FS,
) -> impl IntoView
where
    FN: Fn(String) + 'static + Clone,
    FQ: Fn(String) + 'static + Clone,
    FC: Fn(String) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    view! {
        <form
            id="stockForm"
            class="stock-form"
            on:submit={
                let on_submit = on_submit.clone();
                move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit(());
                }
            }
        >
            <div class="form-group">
                <label for="itemName">"Item Name"</label>
                <input
                    type="text"
                    id="itemName"
                    placeholder="Item name"
                    prop:value=move || draft.get().name
                    on:input=move |ev| on_name(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="itemQuantity">"Quantity"</label>
                <input
                    type="number"
                    id="itemQuantity"
                    min="1"
                    placeholder="Quantity"
                    prop:value=move || draft.get().quantity
                    on:input=move |ev| on_quantity(event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="itemCategory">"Category"</label>
                <input
                    type="text"
                    id="itemCategory"
                    placeholder="Category"
                    prop:value=move || draft.get().category
                    on:input=move |ev| on_category(event_target_value(&ev))
                />
            </div>

            <button type="submit" class="btn btn-primary">"Add Item"</button>

            <Show when=move || form_error.get().is_some()>
                <p class="form-error">{move || form_error.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}
