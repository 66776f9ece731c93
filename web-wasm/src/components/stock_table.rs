//! テーブル表示コンポーネント

use leptos::prelude::*;
use stock_manager_common::{Item, RenderedPage};

#[component]
pub fn StockTable<FE, FD>(
    page: Memo<RenderedPage>,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FE: Fn(u64) + 'static + Clone + Send + Sync,
    FD: Fn(u64) + 'static + Clone + Send + Sync,
{
    view! {
        <table id="stockTable" class="stock-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Quantity"</th>
                    <th>"Category"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || page.get().items
                    key=|item| item.id
                    children=move |item| {
                        view! {
                            <StockRow
                                item=item
                                on_edit=on_edit.clone()
                                on_delete=on_delete.clone()
                            />
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn StockRow<FE, FD>(item: Item, on_edit: FE, on_delete: FD) -> impl IntoView
where
    FE: Fn(u64) + 'static + Clone + Send + Sync,
    FD: Fn(u64) + 'static + Clone + Send + Sync,
{
    let id = item.id;

    view! {
        <tr data-id=id.to_string()>
            <td>{item.name}</td>
            <td>{item.quantity}</td>
            <td>{item.category}</td>
            <td class="actions">
                <button class="btn btn-small btn-secondary edit" on:click=move |_| on_edit(id)>
                    "Edit"
                </button>
                <button class="btn btn-small btn-tertiary delete" on:click=move |_| on_delete(id)>
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
