//! 操作ハンドラ
//!
//! 在庫一覧・表示状態・入力フォームの値を1つのオブジェクトで保持し、
//! ユーザー操作ごとに状態を更新する。一覧を変更する操作は必ず直後に保存する。

use crate::config::Config;
use crate::error::ValidationError;
use crate::id::IdGenerator;
use crate::storage::KeyValueStorage;
use crate::store::InventoryStore;
use crate::types::{DisplayMode, Item, ItemDraft, SortField};
use crate::view::{self, RenderedPage, ViewState};

#[derive(Debug, Clone)]
pub struct Controller<S> {
    store: InventoryStore<S>,
    items: Vec<Item>,
    view: ViewState,
    draft: ItemDraft,
    ids: IdGenerator,
    page_size: usize,
}

impl<S: KeyValueStorage> Controller<S> {
    /// ストレージから一覧を読み込んで初期化
    pub fn new(storage: S, config: &Config) -> Self {
        let store = InventoryStore::new(storage, config.storage_key.clone());
        let items = store.load();
        tracing::debug!(count = items.len(), key = %store.key(), "在庫データを読み込み");

        Self {
            ids: IdGenerator::seeded_from(&items),
            store,
            items,
            view: ViewState::default(),
            draft: ItemDraft::default(),
            page_size: config.page_size.max(1),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn store(&self) -> &InventoryStore<S> {
        &self.store
    }

    /// 現在の表示内容
    pub fn render(&self) -> RenderedPage {
        view::render(&self.items, &self.view, self.page_size)
    }

    pub fn set_draft_name(&mut self, value: impl Into<String>) {
        self.draft.name = value.into();
    }

    pub fn set_draft_quantity(&mut self, value: impl Into<String>) {
        self.draft.quantity = value.into();
    }

    pub fn set_draft_category(&mut self, value: impl Into<String>) {
        self.draft.category = value.into();
    }

    /// フォーム送信
    ///
    /// 検証に失敗した場合は一覧も保存内容も変更しない。
    /// 成功時はアイテムを末尾に追加して保存し、フォームを空にする。
    pub fn submit(&mut self, now_ms: u64) -> Result<Item, ValidationError> {
        let (name, quantity, category) = validate(&self.draft)?;

        let item = Item {
            id: self.ids.next(now_ms),
            name,
            quantity,
            category,
        };
        self.items.push(item.clone());
        self.persist();
        self.draft.clear();

        tracing::info!(id = item.id, name = %item.name, "アイテムを追加");
        Ok(item)
    }

    /// 編集: フォームに値をコピーし、元のアイテムは一覧から削除して保存する
    ///
    /// 再送信しなければアイテムは失われる。
    pub fn edit(&mut self, id: u64) -> Option<Item> {
        let index = self.position(id)?;
        let item = self.items.remove(index);
        self.draft = ItemDraft::from(&item);
        self.persist();
        self.clamp_page();

        tracing::info!(id, name = %item.name, "アイテムを編集フォームへ移動");
        Some(item)
    }

    /// 削除。存在しないIDは何もしない
    pub fn delete(&mut self, id: u64) -> Option<Item> {
        let index = self.position(id)?;
        let item = self.items.remove(index);
        self.persist();
        self.clamp_page();

        tracing::info!(id, name = %item.name, "アイテムを削除");
        Some(item)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.view.set_search(search);
    }

    pub fn set_sort(&mut self, sort: SortField) {
        self.view.set_sort(sort);
    }

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.view.toggle_display_mode();
        self.view.display_mode
    }

    pub fn prev_page(&mut self) -> bool {
        self.view.prev_page()
    }

    pub fn next_page(&mut self) -> bool {
        let filtered_count = self.filtered_count();
        self.view.next_page(filtered_count, self.page_size)
    }

    fn position(&self, id: u64) -> Option<usize> {
        let index = self.items.iter().position(|item| item.id == id);
        if index.is_none() {
            tracing::debug!(id, "対象アイテムが見つからない");
        }
        index
    }

    fn filtered_count(&self) -> usize {
        view::filter_items(&self.items, &self.view.search).len()
    }

    fn clamp_page(&mut self) {
        let filtered_count = self.filtered_count();
        self.view.clamp_page(filtered_count, self.page_size);
    }

    fn persist(&mut self) {
        // 書き込み失敗時もメモリ上の一覧はセッション中有効
        if let Err(e) = self.store.save(&self.items) {
            tracing::error!(key = %self.store.key(), error = %e, "在庫データの保存に失敗");
        }
    }
}

/// フォームの値を検証し、トリム済みの (名前, 数量, カテゴリ) を返す
pub fn validate(draft: &ItemDraft) -> Result<(String, u64, String), ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let quantity = parse_quantity(&draft.quantity)?;

    let category = draft.category.trim();
    if category.is_empty() {
        return Err(ValidationError::EmptyCategory);
    }

    Ok((name.to_string(), quantity, category.to_string()))
}

/// 入力できる数量の上限（JavaScriptで正確に扱える最大の整数）
pub const MAX_QUANTITY: u64 = (1 << 53) - 1;

/// 数量のパース
///
/// 先頭の符号と数字列だけを読み、後続の文字は無視する（"12abc" → 12, "3.7" → 3）。
fn parse_quantity(raw: &str) -> Result<u64, ValidationError> {
    let trimmed = raw.trim();

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(ValidationError::InvalidQuantity(trimmed.to_string()));
    }

    // 桁あふれは None
    let value = rest[..digits_len].parse::<u64>().ok();
    if negative {
        let value = value
            .and_then(|v| i64::try_from(v).ok())
            .map_or(i64::MIN, |v| -v);
        return Err(ValidationError::NonPositiveQuantity(value));
    }

    match value {
        Some(0) => Err(ValidationError::NonPositiveQuantity(0)),
        Some(v) if v <= MAX_QUANTITY => Ok(v),
        _ => Err(ValidationError::QuantityTooLarge(trimmed.to_string())),
    }
}
