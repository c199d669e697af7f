use eframe::egui;
use log::debug;
use tokio::runtime::Runtime;

use crate::controller::{InventoryController, StatusKind};
use crate::export::EXPORT_FILE_NAME;
use crate::grid::{RowAction, GRID_HEADERS};
use crate::ui::components::{ConfirmDeleteAllDialog, EditItemDialog, QuantityDialog};
use crate::ui::theme::{APP_TITLE, BRAND_GREEN, BRAND_RED};

/// Everything the main screen can ask the controller to do.
///
/// Collected while drawing and applied afterwards, so no widget holds a
/// borrow of the controller while a request runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    Create,
    Refresh,
    Export,
    Row(RowAction),
    RequestDeleteAll,
    ConfirmDeleteAll,
    CancelDeleteAll,
    SaveEdit,
    CancelEdit,
    CommitQuantity,
    CancelQuantity,
    DismissStatus,
}

impl UiAction {
    /// Whether applying the action waits on the inventory service.
    pub fn sends_request(&self) -> bool {
        match self {
            UiAction::Create
            | UiAction::Refresh
            | UiAction::ConfirmDeleteAll
            | UiAction::SaveEdit
            | UiAction::CommitQuantity => true,
            UiAction::Row(RowAction::Delete(_) | RowAction::Adjust { .. }) => true,
            UiAction::Row(RowAction::Edit(_) | RowAction::SetQuantity { .. })
            | UiAction::Export
            | UiAction::RequestDeleteAll
            | UiAction::CancelDeleteAll
            | UiAction::CancelEdit
            | UiAction::CancelQuantity
            | UiAction::DismissStatus => false,
        }
    }
}

pub struct InventoryScreen;

impl InventoryScreen {
    /// Draws the screen and returns what the user asked for this frame.
    ///
    /// `busy` replaces the grid with a spinner while queued requests wait
    /// for their turn.
    pub fn show(ctx: &egui::Context, controller: &mut InventoryController, busy: bool) -> Vec<UiAction> {
        let mut actions = Vec::new();

        egui::CentralPanel::default().show(ctx, |ui| {
            Self::toolbar(ui, &mut actions);
            Self::status_line(ui, controller, &mut actions);
            ui.add_space(10.0);

            Self::add_form(ui, controller, &mut actions);
            ui.add_space(10.0);

            Self::search_box(ui, controller);
            ui.add_space(5.0);

            if busy || controller.store().is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
            } else {
                Self::grid(ui, controller, &mut actions);
            }
        });

        EditItemDialog::show(ctx, controller, &mut actions);
        QuantityDialog::show(ctx, controller, &mut actions);
        ConfirmDeleteAllDialog::show(ctx, controller, &mut actions);

        actions
    }

    fn toolbar(ui: &mut egui::Ui, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            ui.heading(egui::RichText::new(APP_TITLE).color(BRAND_RED).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete All").clicked() {
                    actions.push(UiAction::RequestDeleteAll);
                }
                if ui.button("Export CSV").clicked() {
                    actions.push(UiAction::Export);
                }
                if ui.button("Refresh").clicked() {
                    actions.push(UiAction::Refresh);
                }
            });
        });
        ui.separator();
    }

    fn status_line(ui: &mut egui::Ui, controller: &InventoryController, actions: &mut Vec<UiAction>) {
        ui.horizontal(|ui| {
            if let Some(status) = controller.status() {
                let color = match status.kind {
                    StatusKind::Info => BRAND_GREEN,
                    StatusKind::Error => egui::Color32::RED,
                };
                ui.colored_label(color, &status.text);
                if ui.small_button("x").clicked() {
                    actions.push(UiAction::DismissStatus);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                match controller.store().last_refreshed() {
                    Some(at) => ui.weak(format!("Last refreshed {}", at.format("%H:%M:%S"))),
                    None => ui.weak("Not loaded yet"),
                };
            });
        });
    }

    fn add_form(ui: &mut egui::Ui, controller: &mut InventoryController, actions: &mut Vec<UiAction>) {
        let error = controller.form_error().map(str::to_string);

        ui.group(|ui| {
            let form = controller.form_mut();
            egui::Grid::new("add_item_form")
                .num_columns(3)
                .spacing([16.0, 8.0])
                .show(ui, |ui| {
                    labelled_field(ui, "Item", &mut form.item);
                    labelled_field(ui, "Size", &mut form.size);
                    labelled_field(ui, "Quantity", &mut form.quantity);
                    ui.end_row();

                    labelled_field(ui, "Price (€)", &mut form.price);
                    labelled_field(ui, "Notes", &mut form.notes);
                    ui.vertical(|ui| {
                        ui.add_space(16.0);
                        let add = egui::Button::new(
                            egui::RichText::new("Add Item").color(egui::Color32::WHITE),
                        )
                        .fill(BRAND_GREEN);
                        if ui.add(add).clicked() {
                            actions.push(UiAction::Create);
                        }
                    });
                    ui.end_row();
                });

            if let Some(error) = &error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });
    }

    fn search_box(ui: &mut egui::Ui, controller: &mut InventoryController) {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add(
                egui::TextEdit::singleline(controller.search_mut())
                    .hint_text("Search items...")
                    .desired_width(300.0),
            );
            ui.label("Search:");
        });
    }

    fn grid(ui: &mut egui::Ui, controller: &InventoryController, actions: &mut Vec<UiAction>) {
        let rows = controller.rows();
        let totals = controller.totals();

        if rows.is_empty() {
            ui.label("No items to show.");
        } else {
            egui::ScrollArea::vertical()
                .max_height(ui.available_height() - 30.0)
                .show(ui, |ui| {
                    egui::Grid::new("inventory_grid")
                        .num_columns(GRID_HEADERS.len() + 1)
                        .spacing([14.0, 4.0])
                        .striped(true)
                        .show(ui, |ui| {
                            for header in GRID_HEADERS {
                                ui.strong(header);
                            }
                            ui.strong("Actions");
                            ui.end_row();

                            for row in &rows {
                                ui.label(row.row_id.to_string());
                                ui.label(&row.item);
                                ui.label(&row.size);
                                ui.horizontal(|ui| {
                                    if ui.small_button("-").clicked() {
                                        actions.push(UiAction::Row(RowAction::Adjust {
                                            name: row.item.clone(),
                                            change: -1,
                                        }));
                                    }
                                    ui.label(row.quantity.to_string());
                                    if ui.small_button("+").clicked() {
                                        actions.push(UiAction::Row(RowAction::Adjust {
                                            name: row.item.clone(),
                                            change: 1,
                                        }));
                                    }
                                });
                                ui.label(&row.price);
                                ui.label(&row.notes);
                                ui.label(&row.updated);
                                ui.horizontal(|ui| {
                                    if ui.button("Edit").clicked() {
                                        actions.push(UiAction::Row(RowAction::Edit(row.row_id)));
                                    }
                                    if ui.button("Qty").on_hover_text("Set quantity").clicked() {
                                        actions.push(UiAction::Row(RowAction::SetQuantity {
                                            name: row.item.clone(),
                                            current: row.quantity,
                                        }));
                                    }
                                    if ui
                                        .button(egui::RichText::new("Delete").color(egui::Color32::RED))
                                        .clicked()
                                    {
                                        actions.push(UiAction::Row(RowAction::Delete(row.item.clone())));
                                    }
                                });
                                ui.end_row();
                            }
                        });
                });
        }

        ui.separator();
        ui.label(format!(
            "{} items, {} units, stock value {}",
            totals.rows,
            totals.quantity,
            totals.value_display()
        ));
    }

    pub fn apply(controller: &mut InventoryController, runtime: &Runtime, action: UiAction) {
        match action {
            UiAction::Create => runtime.block_on(controller.submit_create()),
            UiAction::Refresh => runtime.block_on(controller.refresh()),
            UiAction::Export => {
                let dialog = rfd::FileDialog::new()
                    .set_directory(controller.export_dir())
                    .set_file_name(EXPORT_FILE_NAME)
                    .add_filter("CSV Files", &["csv"]);
                match dialog.save_file() {
                    Some(path) => {
                        controller.export_to(&path);
                    }
                    None => debug!("Export dialog cancelled by user"),
                }
            }
            UiAction::Row(row_action) => runtime.block_on(controller.apply_row_action(row_action)),
            UiAction::RequestDeleteAll => controller.request_delete_all(),
            UiAction::ConfirmDeleteAll => runtime.block_on(controller.confirm_delete_all()),
            UiAction::CancelDeleteAll => controller.cancel_delete_all(),
            UiAction::SaveEdit => runtime.block_on(controller.save_edit()),
            UiAction::CancelEdit => controller.cancel_edit(),
            UiAction::CommitQuantity => runtime.block_on(controller.commit_quantity_edit()),
            UiAction::CancelQuantity => controller.cancel_quantity_edit(),
            UiAction::DismissStatus => controller.dismiss_status(),
        }
    }
}

fn labelled_field(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.vertical(|ui| {
        ui.label(label);
        ui.add(egui::TextEdit::singleline(value).desired_width(220.0));
    });
}

#[cfg(test)]
#[path = "inventory_tests.rs"]
mod tests;
