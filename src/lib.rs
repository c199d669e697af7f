//! Garage Inventory
//!
//! Desktop client for a tyre shop's remote inventory service. The library holds
//! everything except rendering: the HTTP client, the cached item list, search,
//! form validation, grid formatting, CSV export and the splash timer.

pub mod config;
pub mod controller;
pub mod error;
pub mod export;
pub mod filter;
pub mod form;
pub mod grid;
pub mod inventory_api;
pub mod models;
pub mod splash;
pub mod store;
pub mod ui;

pub use config::Args;
pub use controller::{InventoryController, StatusKind, StatusMessage};
pub use error::{InventoryError, Result};
pub use export::{items_to_csv, write_csv_file, EXPORT_FILE_NAME};
pub use filter::filter_items;
pub use form::{EditDraft, ItemForm, QuantityEdit, ValidationError};
pub use grid::{build_rows, format_price, totals, GridRow, InventoryTotals, RowAction};
pub use inventory_api::InventoryApi;
pub use models::{Item, NewItem};
pub use splash::{Splash, SplashFrame, SplashPath, SplashPhase};
pub use store::ItemStore;
