//! Application state and the operations that change it.
//!
//! [`InventoryController`] owns everything the window shows. Rendering code
//! reads through accessors and changes state only by calling the named
//! operations below; each network operation awaits its request and then, on
//! success, re-fetches the full list.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, error, info, warn};

use crate::error::Result;
use crate::export::{default_export_path, write_csv_file};
use crate::filter::filter_items;
use crate::form::{EditDraft, ItemForm, QuantityEdit};
use crate::grid::{build_rows, totals, GridRow, InventoryTotals, RowAction};
use crate::inventory_api::InventoryApi;
use crate::models::Item;
use crate::splash::Splash;
use crate::store::ItemStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line feedback shown under the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

pub struct InventoryController {
    api: InventoryApi,
    store: ItemStore,
    splash: Splash,
    form: ItemForm,
    form_error: Option<String>,
    search: String,
    edit: Option<EditDraft>,
    edit_error: Option<String>,
    quantity_edit: Option<QuantityEdit>,
    confirm_delete_all: bool,
    status: Option<StatusMessage>,
    export_dir: PathBuf,
}

impl InventoryController {
    pub fn new(api: InventoryApi, splash: Splash, export_dir: PathBuf) -> Self {
        info!("Initializing inventory controller");
        Self {
            api,
            store: ItemStore::new(),
            splash,
            form: ItemForm::default(),
            form_error: None,
            search: String::new(),
            edit: None,
            edit_error: None,
            quantity_edit: None,
            confirm_delete_all: false,
            status: None,
            export_dir,
        }
    }

    // ── read access ──────────────────────────────────────────────────

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn splash(&self) -> &Splash {
        &self.splash
    }

    pub fn form(&self) -> &ItemForm {
        &self.form
    }

    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn edit_draft(&self) -> Option<&EditDraft> {
        self.edit.as_ref()
    }

    pub fn edit_error(&self) -> Option<&str> {
        self.edit_error.as_deref()
    }

    pub fn quantity_edit(&self) -> Option<&QuantityEdit> {
        self.quantity_edit.as_ref()
    }

    pub fn is_confirming_delete_all(&self) -> bool {
        self.confirm_delete_all
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    /// Items matching the current search, in store order.
    pub fn visible_items(&self) -> Vec<&Item> {
        filter_items(self.store.items(), &self.search)
    }

    pub fn rows(&self) -> Vec<GridRow> {
        build_rows(&self.visible_items())
    }

    pub fn totals(&self) -> InventoryTotals {
        totals(&self.visible_items())
    }

    // ── field editing ────────────────────────────────────────────────

    /// Text fields of the add form, for binding to input widgets.
    pub fn form_mut(&mut self) -> &mut ItemForm {
        &mut self.form
    }

    pub fn search_mut(&mut self) -> &mut String {
        &mut self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub fn edit_draft_mut(&mut self) -> Option<&mut EditDraft> {
        self.edit.as_mut()
    }

    pub fn quantity_edit_mut(&mut self) -> Option<&mut QuantityEdit> {
        self.quantity_edit.as_mut()
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    // ── splash and loading ───────────────────────────────────────────

    /// Advances the splash timer; the first list load runs when it finishes.
    pub async fn tick(&mut self, now: Instant) {
        if self.splash.poll(now) {
            self.refresh().await;
        }
    }

    /// Dismisses the splash without triggering the initial load.
    pub fn cancel_splash(&mut self) {
        self.splash.cancel();
    }

    /// Re-fetches the item list. A failure keeps the current list.
    pub async fn refresh(&mut self) {
        if !self.store.refresh(&self.api).await {
            warn!("Keeping {} cached items after failed refresh", self.store.items().len());
        }
    }

    // ── create ───────────────────────────────────────────────────────

    /// Validates the add form and creates the item.
    ///
    /// An invalid form sets [`Self::form_error`] and sends nothing. On
    /// success the form is cleared and the list re-fetched.
    pub async fn submit_create(&mut self) {
        let new_item = match self.form.validate() {
            Ok(new_item) => new_item,
            Err(e) => {
                self.form_error = Some(e.to_string());
                return;
            }
        };
        self.form_error = None;

        let result = self.api.create_item(&new_item).await;
        if self.finish_mutation(&format!("Added '{}'", new_item.item), result) {
            self.form.clear();
            self.refresh().await;
        }
    }

    // ── full edit ────────────────────────────────────────────────────

    /// Opens an editable copy of the item with `id`.
    pub fn start_edit(&mut self, id: u64) {
        match self.store.find(id) {
            Some(item) => {
                debug!("Editing item {id}");
                self.edit = Some(EditDraft::from_item(item));
                self.edit_error = None;
            }
            None => warn!("Cannot edit item {id}: not in the current list"),
        }
    }

    /// Sends the edited record. An invalid draft stays open with a message.
    pub async fn save_edit(&mut self) {
        let Some(draft) = self.edit.as_ref() else {
            return;
        };

        let item = match draft.validate() {
            Ok(item) => item,
            Err(e) => {
                self.edit_error = Some(e.to_string());
                return;
            }
        };

        let result = self.api.update_item(&item).await;
        if self.finish_mutation(&format!("Saved '{}'", item.item), result) {
            self.edit = None;
            self.edit_error = None;
            self.refresh().await;
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
        self.edit_error = None;
    }

    // ── quantity only ────────────────────────────────────────────────

    pub fn start_quantity_edit(&mut self, name: impl Into<String>, current_quantity: i64) {
        self.quantity_edit = Some(QuantityEdit::new(name, current_quantity));
    }

    /// Sets the quantity by item name. Negative values are sent as entered.
    pub async fn commit_quantity_edit(&mut self) {
        let Some(edit) = self.quantity_edit.as_ref() else {
            return;
        };

        let new_quantity = match edit.parse() {
            Ok(quantity) => quantity,
            Err(e) => {
                self.status = Some(StatusMessage::error(e.to_string()));
                return;
            }
        };
        let name = edit.name.clone();

        let result = self.api.set_quantity(&name, new_quantity).await;
        if self.finish_mutation(&format!("Set '{name}' to {new_quantity}"), result) {
            self.quantity_edit = None;
            self.refresh().await;
        }
    }

    pub fn cancel_quantity_edit(&mut self) {
        self.quantity_edit = None;
    }

    /// Changes the quantity by `change`; the service stops at zero.
    pub async fn adjust_quantity(&mut self, name: &str, change: i64) {
        let result = self.api.adjust_quantity(name, change).await;
        if self.finish_mutation(&format!("Adjusted '{name}' by {change:+}"), result) {
            self.refresh().await;
        }
    }

    // ── deletes ──────────────────────────────────────────────────────

    /// Deletes one item by name, without confirmation.
    pub async fn delete_item(&mut self, name: &str) {
        let result = self.api.delete_item(name).await;
        if self.finish_mutation(&format!("Deleted '{name}'"), result) {
            self.refresh().await;
        }
    }

    /// Opens the delete-all confirmation. Sends nothing by itself.
    pub fn request_delete_all(&mut self) {
        self.confirm_delete_all = true;
    }

    pub fn cancel_delete_all(&mut self) {
        self.confirm_delete_all = false;
    }

    /// Deletes every item. Does nothing unless the confirmation is open.
    pub async fn confirm_delete_all(&mut self) {
        if !self.confirm_delete_all {
            warn!("Delete all requested without confirmation");
            return;
        }
        self.confirm_delete_all = false;

        let result = self.api.delete_all().await;
        if self.finish_mutation("Deleted all items", result) {
            self.refresh().await;
        }
    }

    // ── grid actions and export ──────────────────────────────────────

    pub async fn apply_row_action(&mut self, action: RowAction) {
        debug!("Row action: {action:?}");
        match action {
            RowAction::Edit(id) => self.start_edit(id),
            RowAction::Delete(name) => self.delete_item(&name).await,
            RowAction::SetQuantity { name, current } => self.start_quantity_edit(name, current),
            RowAction::Adjust { name, change } => self.adjust_quantity(&name, change).await,
        }
    }

    /// Path offered by the save dialog.
    pub fn suggested_export_path(&self) -> PathBuf {
        default_export_path(&self.export_dir)
    }

    /// Writes the full, unfiltered list to `path`.
    pub fn export_to(&mut self, path: &Path) -> bool {
        let items = self.store.items();
        match write_csv_file(path, items) {
            Ok(()) => {
                self.status = Some(StatusMessage::info(format!(
                    "Exported {} items to {}",
                    items.len(),
                    path.display()
                )));
                true
            }
            Err(e) => {
                error!("Export failed: {e}");
                self.status = Some(StatusMessage::error(format!("Export failed: {e}")));
                false
            }
        }
    }

    /// Records the outcome of a mutation. Returns whether it succeeded.
    fn finish_mutation(&mut self, success: &str, result: Result<()>) -> bool {
        match result {
            Ok(()) => {
                info!("{success}");
                self.status = Some(StatusMessage::info(success));
                true
            }
            Err(e) => {
                error!("Request failed: {e}");
                self.status = Some(StatusMessage::error(format!("Request failed: {e}")));
                false
            }
        }
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
