//! リスト表示コンポーネント

use leptos::prelude::*;
use stock_manager_common::{Item, RenderedPage};

#[component]
pub fn StockList<FE, FD>(
    page: Memo<RenderedPage>,
    on_edit: FE,
    on_delete: FD,
) -> impl IntoView
where
    FE: Fn(u64) + 'static + Clone + Send + Sync,
    FD: Fn(u64) + 'static + Clone + Send + Sync,
{
    view! {
        <ul id="stockList" class="stock-list">
            <For
                each=move || page.get().items
                key=|item| item.id
                children=move |item| {
                    let on_edit = on_edit.clone();
                    let on_delete = on_delete.clone();
                    let id = item.id;
                    view! {
                        <li data-id=id.to_string()>
                            <span>{entry_text(&item)}</span>
                            <div class="actions">
                                <button class="btn btn-small btn-secondary edit" on:click=move |_| on_edit(id)>
                                    "Edit"
                                </button>
                                <button class="btn btn-small btn-tertiary delete" on:click=move |_| on_delete(id)>
                                    "Delete"
                                </button>
                            </div>
                        </li>
                    }
                }
            />
        </ul>
    }
}

fn entry_text(item: &Item) -> String {
    format!("{} - {} ({})", item.name, item.quantity, item.category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_text() {
        let item = Item {
            id: 1,
            name: "Bolts".into(),
            quantity: 10,
            category: "Hardware".into(),
        };
        assert_eq!(entry_text(&item), "Bolts - 10 (Hardware)");
    }
}
