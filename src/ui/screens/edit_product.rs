use eframe::egui;

use crate::error::{StoreError, ValidationError};
use crate::store::ProductStore;
use crate::ui::state::{AppState, Dialog, EditProductState, Screen};
use crate::validation;

pub struct EditProductScreen;

impl EditProductScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, products: &Option<ProductStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Edit Product Form");
                ui.add_space(20.0);

                ui.label("Product ID:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.edit_product.id).desired_width(200.0),
                );
                ui.add_space(5.0);

                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.edit_product.name).desired_width(200.0),
                );
                ui.add_space(5.0);

                ui.label("Quantity:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.edit_product.quantity)
                        .desired_width(200.0),
                );
                ui.add_space(5.0);

                ui.label("Price:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.edit_product.price).desired_width(200.0),
                );
                ui.add_space(15.0);

                if ui.button("Edit").clicked() {
                    Self::submit(state, products);
                }
            });
        });
    }

    fn parse_form(form: &EditProductState) -> Result<(i64, String, i64, f64), ValidationError> {
        Ok((
            validation::parse_id("Product ID", &form.id)?,
            validation::require_nonempty("Name", &form.name)?,
            validation::parse_quantity("Quantity", &form.quantity)?,
            validation::parse_price("Price", &form.price)?,
        ))
    }

    /// Validates the form and overwrites the matching row. An id that
    /// matches nothing still reports success (store contract).
    fn submit(state: &mut AppState, products: &Option<ProductStore>) {
        let (id, name, quantity, price) = match Self::parse_form(&state.edit_product) {
            Ok(parsed) => parsed,
            Err(e) => {
                state.show_dialog(Dialog::error(e.to_string()));
                return;
            }
        };

        let result = products
            .as_ref()
            .ok_or(StoreError::Unavailable)
            .and_then(|store| store.edit(id, &name, quantity, price));

        match result {
            Ok(()) => state
                .show_dialog(Dialog::success("Product updated successfully.").then(Screen::Main)),
            Err(e) => state.show_dialog(
                Dialog::error(format!("Failed to update product: {e}")).then(Screen::Main),
            ),
        }
    }
}
