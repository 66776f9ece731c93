//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// 入力フォームの検証エラー
///
/// 最初に見つかった不正フィールドのみを表す。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Item name is required")]
    EmptyName,

    #[error("Quantity must be a number: {0:?}")]
    InvalidQuantity(String),

    #[error("Quantity must be greater than zero: {0}")]
    NonPositiveQuantity(i64),

    #[error("Quantity is too large: {0}")]
    QuantityTooLarge(String),

    #[error("Category is required")]
    EmptyCategory,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
