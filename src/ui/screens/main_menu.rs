use eframe::egui;

use crate::error::StoreError;
use crate::report::{self, REPORT_FILE};
use crate::store::ProductStore;
use crate::ui::state::{AppState, Dialog, Screen};

pub struct MainMenuScreen;

impl MainMenuScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, products: &Option<ProductStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Inventory Management System");
                if let Some(user) = &state.current_user {
                    ui.label(format!("Signed in as {user}"));
                }
                ui.add_space(30.0);

                if ui.button("Add Product").clicked() {
                    state.navigate(Screen::AddProduct);
                }
                ui.add_space(10.0);

                if ui.button("Edit Product").clicked() {
                    state.navigate(Screen::EditProduct);
                }
                ui.add_space(10.0);

                if ui.button("Delete Product").clicked() {
                    state.navigate(Screen::DeleteProduct);
                }
                ui.add_space(10.0);

                if ui.button("View Inventory").clicked() {
                    state.navigate(Screen::ViewInventory);
                }
                ui.add_space(10.0);

                if ui.button("Generate Report").clicked() {
                    Self::generate_report(state, products);
                }
            });
        });
    }

    /// Runs the report from the menu itself; the outcome is reported via
    /// dialog without leaving the main screen.
    fn generate_report(state: &mut AppState, products: &Option<ProductStore>) {
        let result = products
            .as_ref()
            .ok_or(StoreError::Unavailable)
            .and_then(report::generate);

        match result {
            Ok(summary) => state.show_dialog(Dialog::success(format!(
                "Inventory report generated: {REPORT_FILE}\n{} of {} products are low on stock.",
                summary.low_stock, summary.total
            ))),
            Err(e) => state.show_dialog(Dialog::error(format!("Failed to generate report: {e}"))),
        }
    }
}
