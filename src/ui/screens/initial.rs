use eframe::egui;

use crate::ui::state::{AppState, Screen};

pub struct InitialScreen;

impl InitialScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(100.0);
                ui.heading("Inventory Management System");
                ui.add_space(30.0);

                if ui.button("Sign Up").clicked() {
                    state.navigate(Screen::SignUp);
                }

                ui.add_space(10.0);

                if ui.button("Sign In").clicked() {
                    state.navigate(Screen::SignIn);
                }
            });
        });
    }
}
