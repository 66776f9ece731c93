//! UIコンポーネント

pub mod header;
pub mod item_form;
pub mod toolbar;
pub mod stock_table;
pub mod stock_list;
pub mod pagination;
