//! Client-side cache of the full item list.

use chrono::{DateTime, Local};
use log::{debug, error, info};

use crate::inventory_api::InventoryApi;
use crate::models::Item;

/// The last successfully fetched item list, newest first.
///
/// The store never patches itself; every change goes through [`ItemStore::refresh`].
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
    loading: bool,
    last_refreshed: Option<DateTime<Local>>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from an already fetched list.
    pub fn from_items(mut items: Vec<Item>) -> Self {
        sort_newest_first(&mut items);
        Self {
            items,
            loading: false,
            last_refreshed: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn find(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Re-fetches the whole list and replaces the cache.
    ///
    /// On failure the previous list is kept and `false` is returned; the
    /// loading flag is cleared either way.
    pub async fn refresh(&mut self, api: &InventoryApi) -> bool {
        debug!("Refreshing item store");
        self.loading = true;

        let refreshed = match api.list_items().await {
            Ok(mut items) => {
                sort_newest_first(&mut items);
                info!("Item store refreshed with {} items", items.len());
                self.items = items;
                self.last_refreshed = Some(Local::now());
                true
            }
            Err(e) => {
                error!("Error fetching items: {e}");
                false
            }
        };

        self.loading = false;
        refreshed
    }
}

fn sort_newest_first(items: &mut [Item]) {
    items.sort_by(|a, b| b.id.cmp(&a.id));
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
