use eframe::egui;

use crate::auth::CredentialStore;
use crate::error::{AuthError, ValidationError};
use crate::ui::state::{AppState, Dialog, Screen};
use crate::validation;

pub struct SignInScreen;

impl SignInScreen {
    pub fn show(ctx: &egui::Context, state: &mut AppState, credentials: &Option<CredentialStore>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(50.0);
                ui.heading("Sign In Form");
                ui.add_space(20.0);

                ui.label("Username:");
                ui.add(egui::TextEdit::singleline(&mut state.sign_in.username).desired_width(200.0));
                ui.add_space(5.0);

                ui.label("Password:");
                ui.add(
                    egui::TextEdit::singleline(&mut state.sign_in.password)
                        .password(true)
                        .desired_width(200.0),
                );
                ui.add_space(15.0);

                if ui.button("Sign In").clicked() {
                    Self::submit(state, credentials);
                }
            });
        });
    }

    /// Verifies the entered credentials. Only a successful verification
    /// enters the main menu; a lookup miss and a wrong password produce
    /// the same dialog.
    fn submit(state: &mut AppState, credentials: &Option<CredentialStore>) {
        let username = match validation::require_nonempty("Username", &state.sign_in.username) {
            Ok(username) => username,
            Err(e) => {
                state.show_dialog(Dialog::error(e.to_string()));
                return;
            }
        };
        if state.sign_in.password.is_empty() {
            let e = ValidationError::Empty { field: "Password" };
            state.show_dialog(Dialog::error(e.to_string()));
            return;
        }

        let result = credentials
            .as_ref()
            .ok_or(AuthError::Unavailable)
            .and_then(|store| store.verify(&username, &state.sign_in.password));

        match result {
            Ok(true) => {
                log::info!("User '{username}' signed in");
                state.current_user = Some(username);
                state.navigate(Screen::Main);
            }
            Ok(false) => {
                state.show_dialog(Dialog::error(AuthError::InvalidCredentials.to_string()))
            }
            Err(e) => state.show_dialog(Dialog::error(e.to_string())),
        }
    }
}
