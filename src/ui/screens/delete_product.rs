use eframe::egui;

use crate::error::StoreError;
use crate::store::ProductStore;
use crate::ui::state::{AppState, Dialog, Screen};
use crate::validation;

pub struct DeleteProductScreen;

impl DeleteProductScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, products: &Option<ProductStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Delete Product Form");
                ui.add_space(20.0);

                ui.label("Product ID:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.delete_product.id).desired_width(200.0),
                );
                ui.add_space(15.0);

                if ui.button("Delete").clicked() {
                    Self::submit(state, products);
                }
            });
        });
    }

    /// Validates the id and deletes the matching row; deleting an absent
    /// id still reports success (store contract).
    fn submit(state: &mut AppState, products: &Option<ProductStore>) {
        let id = match validation::parse_id("Product ID", &state.delete_product.id) {
            Ok(id) => id,
            Err(e) => {
                state.show_dialog(Dialog::error(e.to_string()));
                return;
            }
        };

        let result = products
            .as_ref()
            .ok_or(StoreError::Unavailable)
            .and_then(|store| store.delete(id));

        match result {
            Ok(()) => state
                .show_dialog(Dialog::success("Product deleted successfully.").then(Screen::Main)),
            Err(e) => state.show_dialog(
                Dialog::error(format!("Failed to delete product: {e}")).then(Screen::Main),
            ),
        }
    }
}
