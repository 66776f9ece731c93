use crate::error::{Error, Result};
use crate::storage::KeyValueStorage;
use serde::Deserialize;

/// 設定を保存するキー
pub const CONFIG_KEY: &str = "stockManagerConfig";

/// 在庫一覧を保存するデフォルトのキー
pub const DEFAULT_STORAGE_KEY: &str = "stockItems";

/// 1ページあたりのデフォルト件数
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub storage_key: String,
    pub page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Config {
    /// ストレージから設定を読み込み。未設定・不正な値はデフォルトにフォールバック
    pub fn load<S: KeyValueStorage>(storage: &S) -> Self {
        let raw = match storage.get_item(CONFIG_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                tracing::warn!(error = %e, "設定の読み込みに失敗、デフォルトを使用");
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "設定が不正、デフォルトを使用");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(raw)?;
        config.normalized()
    }

    fn normalized(mut self) -> Result<Self> {
        if self.storage_key.trim().is_empty() {
            return Err(Error::Config("storageKey must not be empty".into()));
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        Ok(self)
    }
}
