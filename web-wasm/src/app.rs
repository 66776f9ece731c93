//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::components::{
    header::Header,
    item_form::ItemForm,
    toolbar::Toolbar,
    stock_table::StockTable,
    stock_list::StockList,
    pagination::Pagination,
};
use crate::storage::BrowserStorage;
use stock_manager_common::{Config, Controller, DisplayMode, SortField};

/// アプリケーションの状態（一覧・表示状態・フォーム値）
pub type AppState = Controller<BrowserStorage>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let config = Config::load(&BrowserStorage);
    let state = RwSignal::new(AppState::new(BrowserStorage, &config));
    let (form_error, set_form_error) = signal(None::<String>);

    // 状態から毎回作り直す表示内容
    let page = Memo::new(move |_| state.with(|s| s.render()));
    let draft = Memo::new(move |_| state.with(|s| s.draft().clone()));
    let search = Memo::new(move |_| state.with(|s| s.view_state().search.clone()));
    let sort = Memo::new(move |_| state.with(|s| s.view_state().sort));
    let display_mode = Memo::new(move |_| state.with(|s| s.view_state().display_mode));

    // フォーム送信ハンドラ
    let on_submit = move |_| {
        let now_ms = js_sys::Date::now() as u64;
        match state.try_update(|s| s.submit(now_ms)) {
            Some(Ok(_)) => set_form_error.set(None),
            Some(Err(e)) => set_form_error.set(Some(e.to_string())),
            None => {}
        }
    };

    let on_name = move |value: String| state.update(|s| s.set_draft_name(value));
    let on_quantity = move |value: String| state.update(|s| s.set_draft_quantity(value));
    let on_category = move |value: String| state.update(|s| s.set_draft_category(value));

    // 編集: フォームに値を戻し、元のアイテムは削除
    let on_edit = move |id: u64| {
        if state.try_update(|s| s.edit(id)).flatten().is_some() {
            set_form_error.set(None);
        }
    };

    let on_delete = move |id: u64| {
        state.update(|s| {
            s.delete(id);
        });
    };

    let on_search = move |value: String| state.update(|s| s.set_search(value));
    let on_sort = move |field: SortField| state.update(|s| s.set_sort(field));
    let on_toggle_view = move |_| {
        state.update(|s| {
            s.toggle_display_mode();
        });
    };

    let on_prev = move |_| {
        state.update(|s| {
            s.prev_page();
        });
    };
    let on_next = move |_| {
        state.update(|s| {
            s.next_page();
        });
    };

    view! {
        <div class="container">
            <Header />

            <ItemForm
                draft=draft
                form_error=form_error
                on_name=on_name
                on_quantity=on_quantity
                on_category=on_category
                on_submit=on_submit
            />

            <Toolbar
                search=search
                sort=sort
                display_mode=display_mode
                on_search=on_search
                on_sort=on_sort
                on_toggle_view=on_toggle_view
            />

            // 両方の表示を常に構築し、表示モードで切り替える
            <div id="tableView" class:hidden=move || display_mode.get() != DisplayMode::Table>
                <StockTable page=page on_edit=on_edit on_delete=on_delete />
            </div>
            <div id="listView" class:hidden=move || display_mode.get() != DisplayMode::List>
                <StockList page=page on_edit=on_edit on_delete=on_delete />
            </div>

            <Pagination page=page on_prev=on_prev on_next=on_next />
        </div>
    }
}
