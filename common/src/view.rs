//! 表示用の射影計算
//!
//! 在庫一覧から「検索 → ソート → ページ分割」した表示内容を毎回作り直す。
//! DOMへの反映はWeb側のコンポーネントが担当する。

use crate::types::{DisplayMode, Item, SortField};
use std::cmp::Ordering;

/// 表示状態（永続化しない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortField,
    pub page: usize,
    pub display_mode: DisplayMode,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortField::default(),
            page: 1,
            display_mode: DisplayMode::default(),
        }
    }
}

impl ViewState {
    /// 検索文字列の変更（ページは1に戻る）
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// ソート項目の変更（ページは1に戻る）
    pub fn set_sort(&mut self, sort: SortField) {
        self.sort = sort;
        self.page = 1;
    }

    pub fn toggle_display_mode(&mut self) {
        self.display_mode = self.display_mode.toggled();
    }

    /// 前のページへ。移動した場合true
    pub fn prev_page(&mut self) -> bool {
        if self.page > 1 {
            self.page -= 1;
            true
        } else {
            false
        }
    }

    /// 次のページへ。現在の範囲より後ろに要素がある場合のみ移動する
    pub fn next_page(&mut self, filtered_count: usize, page_size: usize) -> bool {
        if self.page.saturating_mul(page_size) < filtered_count {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// ページ番号を `[1, total_pages]` に収める
    pub fn clamp_page(&mut self, filtered_count: usize, page_size: usize) {
        self.page = self.page.clamp(1, total_pages(filtered_count, page_size));
    }
}

/// 描画結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub items: Vec<Item>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl RenderedPage {
    /// "Page {page} of {total}" 形式のページ情報
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// 表示内容を計算
pub fn render(items: &[Item], state: &ViewState, page_size: usize) -> RenderedPage {
    let page_size = page_size.max(1);
    let mut filtered = filter_items(items, &state.search);
    sort_items(&mut filtered, state.sort);

    let filtered_count = filtered.len();
    let total_pages = total_pages(filtered_count, page_size);
    let page = state.page.clamp(1, total_pages);

    RenderedPage {
        items: paginate(filtered, page, page_size),
        page,
        total_pages,
        filtered_count,
    }
}

/// 名前に検索文字列を含むアイテムを抽出（大文字小文字を区別しない）
pub fn filter_items(items: &[Item], search: &str) -> Vec<Item> {
    let needle = search.to_lowercase();
    items
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// 安定ソート。数量は数値順、文字列は辞書順
pub fn sort_items(items: &mut [Item], field: SortField) {
    items.sort_by(|a, b| compare_by(a, b, field));
}

fn compare_by(a: &Item, b: &Item, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Quantity => a.quantity.cmp(&b.quantity),
        SortField::Category => a.category.cmp(&b.category),
    }
}

fn paginate(items: Vec<Item>, page: usize, page_size: usize) -> Vec<Item> {
    let start = (page - 1).saturating_mul(page_size);
    items.into_iter().skip(start).take(page_size).collect()
}

/// 総ページ数（0件でも1ページ）
pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, quantity: u64, category: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            quantity,
            category: category.to_string(),
        }
    }

    fn sample() -> Vec<Item> {
        vec![
            item(1, "Washers", 9, "Hardware"),
            item(2, "Bolts", 10, "Hardware"),
            item(3, "Paper", 100, "Office"),
            item(4, "bolt cutter", 2, "Tools"),
        ]
    }

    #[test]
    fn test_filter_case_insensitive() {
        let items = sample();
        let filtered = filter_items(&items, "BOLT");
        let names: Vec<_> = filtered.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bolts", "bolt cutter"]);

        // 除外されたアイテムは検索文字列を含まない
        for excluded in items.iter().filter(|i| !filtered.contains(i)) {
            assert!(!excluded.name.to_lowercase().contains("bolt"));
        }
    }

    #[test]
    fn test_filter_empty_matches_all() {
        assert_eq!(filter_items(&sample(), "").len(), 4);
    }

    #[test]
    fn test_filter_does_not_search_category() {
        assert!(filter_items(&sample(), "hardware").is_empty());
    }

    #[test]
    fn test_sort_quantity_numeric() {
        let mut items = sample();
        sort_items(&mut items, SortField::Quantity);
        let quantities: Vec<_> = items.iter().map(|i| i.quantity).collect();
        assert_eq!(quantities, vec![2, 9, 10, 100]);
    }

    #[test]
    fn test_sort_name_lexicographic() {
        let mut items = sample();
        sort_items(&mut items, SortField::Name);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();
        // 大文字が小文字より先
        assert_eq!(names, vec!["Bolts", "Paper", "Washers", "bolt cutter"]);
    }

    #[test]
    fn test_sort_category_is_stable() {
        let mut items = sample();
        sort_items(&mut items, SortField::Category);
        let ids: Vec<_> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn test_render_empty_label() {
        let page = render(&[], &ViewState::default(), 5);
        assert!(page.items.is_empty());
        assert_eq!(page.label(), "Page 1 of 1");
        assert!(!page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn test_render_second_page() {
        let items: Vec<_> = (0..7).map(|n| item(n, &format!("Item {n}"), 1, "c")).collect();
        let state = ViewState { page: 2, ..Default::default() };
        let page = render(&items, &state, 5);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].name, "Item 5");
        assert_eq!(page.label(), "Page 2 of 2");
        assert!(page.has_prev());
    }

    #[test]
    fn test_render_clamps_out_of_range_page() {
        let state = ViewState { page: 9, ..Default::default() };
        let page = render(&sample(), &state, 5);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn test_search_and_sort_reset_page() {
        let mut state = ViewState { page: 3, ..Default::default() };
        state.set_search("bol");
        assert_eq!(state.page, 1);

        state.page = 2;
        state.set_sort(SortField::Quantity);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_toggle_keeps_page() {
        let mut state = ViewState { page: 2, ..Default::default() };
        state.toggle_display_mode();
        assert_eq!(state.display_mode, DisplayMode::List);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_next_page_bound() {
        let mut state = ViewState::default();
        assert!(state.next_page(6, 5));
        assert_eq!(state.page, 2);
        assert!(!state.next_page(6, 5));
        assert!(!state.next_page(10, 5));
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_prev_page_stops_at_one() {
        let mut state = ViewState::default();
        assert!(!state.prev_page());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_clamp_page() {
        let mut state = ViewState { page: 3, ..Default::default() };
        state.clamp_page(10, 5);
        assert_eq!(state.page, 2);
        state.clamp_page(0, 5);
        assert_eq!(state.page, 1);
    }
}
