//! Stock Manager Common Library
//!
//! Web(WASM)フロントエンドから利用される在庫管理のコアロジック。
//! ストレージ・表示計算・操作ハンドラはすべてここにあり、ホスト上でテストできる。

pub mod types;
pub mod error;
pub mod config;
pub mod storage;
pub mod store;
pub mod id;
pub mod view;
pub mod controller;

pub use types::{DisplayMode, Item, ItemDraft, SortField};
pub use error::{Error, Result, ValidationError};
pub use config::Config;
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::InventoryStore;
pub use id::IdGenerator;
pub use view::{render, RenderedPage, ViewState};
pub use controller::Controller;
