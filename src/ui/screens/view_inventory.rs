use eframe::egui;

use crate::error::StoreError;
use crate::store::ProductStore;
use crate::ui::state::{AppState, Screen};

pub struct ViewInventoryScreen;

impl ViewInventoryScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, products: &Option<ProductStore>) {
        // Load once per screen entry; navigation resets the flag
        if !state.view_inventory.loaded {
            state.view_inventory.loaded = true;
            Self::refresh(state, products);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(30.0);
                ui.heading("Inventory");
                ui.add_space(20.0);
            });

            if let Some(err) = &state.view_inventory.error {
                ui.vertical_centered(|ui| {
                    ui.colored_label(egui::Color32::RED, format!("Error: {err}"));
                });
            } else if state.view_inventory.products.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.label("No products in inventory.");
                });
            } else {
                egui::ScrollArea::vertical()
                    .max_height(ui.available_height() - 50.0)
                    .show(ui, |ui| {
                        for product in &state.view_inventory.products {
                            ui.label(format!(
                                "ID: {}, Name: {}, Quantity: {}, Price: {:.2}",
                                product.id, product.name, product.quantity, product.price
                            ));
                        }
                    });
            }

            ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                ui.add_space(20.0);
                if ui.button("Back").clicked() {
                    state.navigate(Screen::Main);
                }
            });
        });
    }

    fn refresh(state: &mut AppState, products: &Option<ProductStore>) {
        let result = products
            .as_ref()
            .ok_or(StoreError::Unavailable)
            .and_then(|store| store.list_all());

        match result {
            Ok(rows) => {
                state.view_inventory.products = rows;
                state.view_inventory.error = None;
            }
            Err(e) => {
                log::warn!("Failed to load inventory: {e}");
                state.view_inventory.error = Some(e.to_string());
            }
        }
    }
}
