use eframe::egui;

use crate::error::{StoreError, ValidationError};
use crate::store::ProductStore;
use crate::ui::state::{AddProductState, AppState, Dialog, Screen};
use crate::validation;

pub struct AddProductScreen;

impl AddProductScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, products: &Option<ProductStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Add Product Form");
                ui.add_space(20.0);

                ui.label("Name:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.add_product.name).desired_width(200.0),
                );
                ui.add_space(5.0);

                ui.label("Quantity:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.add_product.quantity)
                        .desired_width(200.0),
                );
                ui.add_space(5.0);

                ui.label("Price:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.add_product.price).desired_width(200.0),
                );
                ui.add_space(15.0);

                if ui.button("Add").clicked() {
                    Self::submit(state, products);
                }
            });
        });
    }

    fn parse_form(form: &AddProductState) -> Result<(String, i64, f64), ValidationError> {
        Ok((
            validation::require_nonempty("Name", &form.name)?,
            validation::parse_quantity("Quantity", &form.quantity)?,
            validation::parse_price("Price", &form.price)?,
        ))
    }

    /// Validates the form and inserts the product. A validation error
    /// keeps the form open; the store outcome returns to the main menu
    /// once acknowledged.
    fn submit(state: &mut AppState, products: &Option<ProductStore>) {
        let (name, quantity, price) = match Self::parse_form(&state.add_product) {
            Ok(parsed) => parsed,
            Err(e) => {
                state.show_dialog(Dialog::error(e.to_string()));
                return;
            }
        };

        let result = products
            .as_ref()
            .ok_or(StoreError::Unavailable)
            .and_then(|store| store.add(&name, quantity, price));

        match result {
            Ok(()) => state
                .show_dialog(Dialog::success("Product added successfully.").then(Screen::Main)),
            Err(e) => state.show_dialog(
                Dialog::error(format!("Failed to add product: {e}")).then(Screen::Main),
            ),
        }
    }
}
