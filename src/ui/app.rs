use eframe::{self, egui};
use egui::ViewportBuilder;

use super::{
    components::AckDialog,
    screens::{
        AddProductScreen, DeleteProductScreen, EditProductScreen, InitialScreen, MainMenuScreen,
        SignInScreen, SignUpScreen, ViewInventoryScreen,
    },
    state::{AppState, Screen},
};
use crate::auth::CredentialStore;
use crate::store::ProductStore;

/// The single-window application: navigation state plus the two stores.
///
/// A store that fails to open at startup is left absent; the interface
/// keeps running and every operation against it reports its own error
/// dialog instead.
pub struct InventoryApp {
    state: AppState,
    credentials: Option<CredentialStore>,
    products: Option<ProductStore>,
}

impl Default for InventoryApp {
    fn default() -> Self {
        let credentials = match CredentialStore::open() {
            Ok(store) => Some(store),
            Err(e) => {
                log::error!("Failed to open credential store: {e}");
                None
            }
        };
        let products = match ProductStore::open() {
            Ok(store) => Some(store),
            Err(e) => {
                log::error!("Failed to open product store: {e}");
                None
            }
        };

        InventoryApp {
            state: AppState::default(),
            credentials,
            products,
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.state.current_screen {
            Screen::Initial => InitialScreen::show(ctx, &mut self.state),
            Screen::SignUp => SignUpScreen::show(ctx, &mut self.state, &self.credentials),
            Screen::SignIn => SignInScreen::show(ctx, &mut self.state, &self.credentials),
            Screen::Main => MainMenuScreen::show(ctx, &mut self.state, &self.products),
            Screen::AddProduct => AddProductScreen::show(ctx, &mut self.state, &self.products),
            Screen::EditProduct => EditProductScreen::show(ctx, &mut self.state, &self.products),
            Screen::DeleteProduct => {
                DeleteProductScreen::show(ctx, &mut self.state, &self.products)
            }
            Screen::ViewInventory => {
                ViewInventoryScreen::show(ctx, &mut self.state, &self.products)
            }
        }

        // The acknowledgment dialog overlays whichever screen is active
        AckDialog::show(ctx, &mut self.state);
    }
}

pub fn launch_gui() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default().with_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Inventory Management System",
        options,
        Box::new(|_cc| Ok(Box::new(InventoryApp::default()))),
    )
}
