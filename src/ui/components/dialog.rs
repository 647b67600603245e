use eframe::egui;

use crate::ui::state::AppState;

/// Acknowledgment dialog drawn above the active screen. Every store,
/// auth and validation outcome is reported through this window; the
/// follow-up navigation carried by the dialog fires on OK.
pub struct AckDialog;

impl AckDialog {
    pub fn show(ctx: &egui::Context, state: &mut AppState) {
        let Some(dialog) = &state.dialog else { return };

        let mut acknowledged = false;
        egui::Window::new(dialog.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(240.0);
                ui.label(&dialog.message);
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if acknowledged {
            state.acknowledge_dialog();
        }
    }
}
