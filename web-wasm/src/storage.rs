//! localStorage バックエンド

use stock_manager_common::{Error, KeyValueStorage, Result};
use wasm_bindgen::JsValue;

/// ブラウザの localStorage
///
/// 操作ごとに取得し直す。アクセスが拒否された環境（Cookie無効、
/// sandbox iframe など）では各操作が `Error::Storage` を返す。
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        local_storage()?.get_item(key).map_err(storage_error)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()?.set_item(key, value).map_err(storage_error)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        local_storage()?.remove_item(key).map_err(storage_error)
    }
}

fn local_storage() -> Result<web_sys::Storage> {
    web_sys::window()
        .ok_or_else(|| Error::Storage("window is not available".into()))?
        .local_storage()
        .map_err(storage_error)?
        .ok_or_else(|| Error::Storage("localStorage is not available".into()))
}

fn storage_error(value: JsValue) -> Error {
    let message = value
        .as_string()
        .or_else(|| js_sys::Reflect::get(&value, &JsValue::from_str("name")).ok()?.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    Error::Storage(message)
}
