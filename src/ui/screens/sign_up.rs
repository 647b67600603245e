use eframe::egui;

use crate::auth::CredentialStore;
use crate::error::{AuthError, ValidationError};
use crate::ui::state::{AppState, Dialog, Screen};
use crate::validation;

pub struct SignUpScreen;

impl SignUpScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, credentials: &Option<CredentialStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Sign Up Form");
                ui.add_space(20.0);

                ui.label("Username:");
                ui.add(egui::TextEdit::singleline(&mut state.sign_up.username).desired_width(200.0));
                ui.add_space(5.0);

                ui.label("Password:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.sign_up.password)
                        .password(true)
                        .desired_width(200.0),
                );
                ui.add_space(15.0);

                if ui.button("Sign Up").clicked() {
                    Self::submit(state, credentials);
                }
            });
        });
    }

    /// Registers the entered user. Success returns to the initial screen
    /// after acknowledgment; failure stays on the form.
    fn submit(state: &mut AppState, credentials: &Option<CredentialStore>) {
        let username = match validation::require_nonempty("Username", &state.sign_up.username) {
            Ok(username) => username,
            Err(e) => {
                state.show_dialog(Dialog::error(e.to_string()));
                return;
            }
        };
        // Passwords are taken verbatim, only emptiness is rejected
        if state.sign_up.password.is_empty() {
            let e = ValidationError::Empty { field: "Password" };
            state.show_dialog(Dialog::error(e.to_string()));
            return;
        }

        let result = credentials
            .as_ref()
            .ok_or(AuthError::Unavailable)
            .and_then(|store| store.register(&username, &state.sign_up.password));

        match result {
            Ok(()) => state.show_dialog(
                Dialog::success("User registered successfully.").then(Screen::Initial),
            ),
            Err(e) => state.show_dialog(Dialog::error(e.to_string())),
        }
    }
}
