//! 在庫データの型定義
//!
//! - Item: 永続化される在庫レコード
//! - ItemDraft: 入力フォームの生の値
//! - SortField / DisplayMode: 表示状態の選択肢

use serde::{Deserialize, Serialize};

/// 在庫アイテム
///
/// localStorage上では `{id, name, quantity, category}` のJSONオブジェクト。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub quantity: u64,
    pub category: String,
}

/// 入力フォームの値（未検証）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub quantity: String,
    pub category: String,
}

impl ItemDraft {
    pub fn clear(&mut self) {
        self.name.clear();
        self.quantity.clear();
        self.category.clear();
    }
}

impl From<&Item> for ItemDraft {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            category: item.category.clone(),
        }
    }
}

/// ソート対象フィールド
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Name,
    Quantity,
    Category,
}

impl SortField {
    pub const ALL: [SortField; 3] = [SortField::Name, SortField::Quantity, SortField::Category];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Quantity => "quantity",
            SortField::Category => "category",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Quantity => "Quantity",
            SortField::Category => "Category",
        }
    }

    /// `<select>` の値から変換。未知の値はNone
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortField::Name),
            "quantity" => Some(SortField::Quantity),
            "category" => Some(SortField::Category),
            _ => None,
        }
    }
}

/// 表示モード（テーブル / リスト）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Table,
    List,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Table => DisplayMode::List,
            DisplayMode::List => DisplayMode::Table,
        }
    }

    /// 切替ボタンの文言（切替先を示す）
    pub fn toggle_label(&self) -> &'static str {
        match self {
            DisplayMode::Table => "Switch to List View",
            DisplayMode::List => "Switch to Table View",
        }
    }
}
