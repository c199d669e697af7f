//! Item endpoints: list, create, update, quantity changes and deletes.

use log::{debug, info};

use super::InventoryApi;
use crate::error::Result;
use crate::models::{Item, NewItem};

impl InventoryApi {
    /// `GET /items`
    pub async fn list_items(&self) -> Result<Vec<Item>> {
        let url = self.items_url(&[]);
        debug!("Fetching items from: {url}");

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response, "List items").await?;

        let body = response.text().await?;
        debug!("List items response body: {body}");
        let items: Vec<Item> = serde_json::from_str(&body)?;

        info!("Fetched {} items", items.len());
        Ok(items)
    }

    /// `POST /items`
    pub async fn create_item(&self, item: &NewItem) -> Result<()> {
        let url = self.items_url(&[]);
        info!("Creating item '{}' ({})", item.item, item.size);
        debug!(
            "Create payload: {}",
            serde_json::to_string(item).unwrap_or_else(|_| "Failed to serialize".to_string())
        );

        let response = self.client.post(&url).json(item).send().await?;
        self.check_status(response, "Create item").await?;
        Ok(())
    }

    /// `PUT /items/update/{id}` with the full record as body.
    pub async fn update_item(&self, item: &Item) -> Result<()> {
        let id = item.id.to_string();
        let url = self.items_url(&["update", &id]);
        info!("Updating item {} ('{}')", item.id, item.item);

        let response = self.client.put(&url).json(item).send().await?;
        self.check_status(response, "Update item").await?;
        Ok(())
    }

    /// `PUT /items/{name}?new_quantity={n}`
    pub async fn set_quantity(&self, name: &str, new_quantity: i64) -> Result<()> {
        let url = self.items_url(&[name]);
        info!("Setting quantity of '{name}' to {new_quantity}");

        let response = self
            .client
            .put(&url)
            .query(&[("new_quantity", new_quantity)])
            .send()
            .await?;
        self.check_status(response, "Set quantity").await?;
        Ok(())
    }

    /// `PATCH /items/{name}?change={n}`; the service clamps the result at zero.
    pub async fn adjust_quantity(&self, name: &str, change: i64) -> Result<()> {
        let url = self.items_url(&[name]);
        info!("Adjusting quantity of '{name}' by {change}");

        let response = self
            .client
            .patch(&url)
            .query(&[("change", change)])
            .send()
            .await?;
        self.check_status(response, "Adjust quantity").await?;
        Ok(())
    }

    /// `DELETE /items/{name}`
    pub async fn delete_item(&self, name: &str) -> Result<()> {
        let url = self.items_url(&[name]);
        info!("Deleting item '{name}'");

        let response = self.client.delete(&url).send().await?;
        self.check_status(response, "Delete item").await?;
        Ok(())
    }

    /// `DELETE /items`
    pub async fn delete_all(&self) -> Result<()> {
        let url = self.items_url(&[]);
        info!("Deleting all items");

        let response = self.client.delete(&url).send().await?;
        self.check_status(response, "Delete all items").await?;
        Ok(())
    }
}
