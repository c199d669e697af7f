use eframe::egui;

use crate::controller::InventoryController;
use crate::ui::screens::UiAction;

fn modal(title: &str) -> egui::Window<'_> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
}

/// Full-record edit of one row.
pub struct EditItemDialog;

impl EditItemDialog {
    pub fn show(ctx: &egui::Context, controller: &mut InventoryController, actions: &mut Vec<UiAction>) {
        let error = controller.edit_error().map(str::to_string);
        let Some(draft) = controller.edit_draft_mut() else {
            return;
        };

        modal("Edit Item").show(ctx, |ui| {
            egui::Grid::new("edit_item_fields")
                .num_columns(2)
                .spacing([10.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Item");
                    ui.text_edit_singleline(&mut draft.item);
                    ui.end_row();

                    ui.label("Size");
                    ui.text_edit_singleline(&mut draft.size);
                    ui.end_row();

                    ui.label("Quantity");
                    ui.text_edit_singleline(&mut draft.quantity);
                    ui.end_row();

                    ui.label("Price (€)");
                    ui.text_edit_singleline(&mut draft.price);
                    ui.end_row();

                    ui.label("Notes");
                    ui.text_edit_singleline(&mut draft.notes);
                    ui.end_row();
                });

            if let Some(error) = &error {
                ui.colored_label(egui::Color32::RED, error);
            }

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelEdit);
                }
                if ui.button("Save").clicked() {
                    actions.push(UiAction::SaveEdit);
                }
            });
        });
    }
}

/// Quantity-only change keyed by item name.
pub struct QuantityDialog;

impl QuantityDialog {
    pub fn show(ctx: &egui::Context, controller: &mut InventoryController, actions: &mut Vec<UiAction>) {
        let Some(edit) = controller.quantity_edit_mut() else {
            return;
        };

        modal("Set Quantity").show(ctx, |ui| {
            ui.label(format!("New quantity for {}:", edit.name));
            ui.text_edit_singleline(&mut edit.new_quantity);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelQuantity);
                }
                if ui.button("Update").clicked() {
                    actions.push(UiAction::CommitQuantity);
                }
            });
        });
    }
}

pub struct ConfirmDeleteAllDialog;

impl ConfirmDeleteAllDialog {
    pub fn show(ctx: &egui::Context, controller: &InventoryController, actions: &mut Vec<UiAction>) {
        if !controller.is_confirming_delete_all() {
            return;
        }

        modal("Confirm Delete All").show(ctx, |ui| {
            ui.label("Are you sure you want to delete all items?");
            ui.add_space(10.0);
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CancelDeleteAll);
                }
                if ui
                    .add(egui::Button::new(
                        egui::RichText::new("Delete All").color(egui::Color32::WHITE),
                    ).fill(egui::Color32::from_rgb(0xC6, 0x28, 0x28)))
                    .clicked()
                {
                    actions.push(UiAction::ConfirmDeleteAll);
                }
            });
        });
    }
}
