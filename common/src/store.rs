//! 在庫一覧の永続化モジュール
//!
//! 一覧全体をJSON配列として1つのキーに保存する。
//! 差分保存はせず、変更のたびに全体を上書きする。

use crate::error::Result;
use crate::storage::KeyValueStorage;
use crate::types::Item;

/// 在庫一覧ストア
#[derive(Debug, Clone)]
pub struct InventoryStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> InventoryStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 一覧を読み込み
    ///
    /// キーが無い、読み込めない、形式が合わない場合は空の一覧を返す。
    pub fn load(&self) -> Vec<Item> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "在庫データの読み込みに失敗、空で開始");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<Item>>>(&raw) {
            Ok(items) => items.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "在庫データが不正、空で開始");
                Vec::new()
            }
        }
    }

    /// 一覧全体を保存（既存の値を上書き）
    pub fn save(&mut self, items: &[Item]) -> Result<()> {
        let content = serde_json::to_string(items)?;
        self.storage.set_item(&self.key, &content)
    }
}
