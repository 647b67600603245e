//! Screen-navigation state machine.
//!
//! One screen is active at a time. Navigation resets the input buffers of
//! the screen being entered, so every screen starts from fresh empty
//! fields and re-reads the store for whatever it displays. The optional
//! dialog carries a follow-up screen that is applied only when the user
//! acknowledges it.

use crate::models::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Initial,
    SignUp,
    SignIn,
    Main,
    AddProduct,
    EditProduct,
    DeleteProduct,
    ViewInventory,
}

/// A blocking acknowledgment dialog. `next` is the screen to enter once
/// the user clicks OK.
#[derive(Debug, PartialEq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
    pub next: Option<Screen>,
}

impl Dialog {
    pub fn success(message: impl Into<String>) -> Self {
        Dialog {
            title: "Success".to_string(),
            message: message.into(),
            next: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Dialog {
            title: "Error".to_string(),
            message: message.into(),
            next: None,
        }
    }

    /// Sets the screen entered when the dialog is acknowledged.
    pub fn then(mut self, next: Screen) -> Self {
        self.next = Some(next);
        self
    }
}

#[derive(Default)]
pub struct SignUpState {
    pub username: String,
    pub password: String,
}

#[derive(Default)]
pub struct SignInState {
    pub username: String,
    pub password: String,
}

#[derive(Default)]
pub struct AddProductState {
    pub name: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Default)]
pub struct EditProductState {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Default)]
pub struct DeleteProductState {
    pub id: String,
}

#[derive(Default)]
pub struct ViewInventoryState {
    pub loaded: bool,
    pub products: Vec<Product>,
    pub error: Option<String>,
}

pub struct AppState {
    pub current_screen: Screen,
    /// Username of the signed-in user for the rest of the session
    pub current_user: Option<String>,
    pub dialog: Option<Dialog>,
    pub sign_up: SignUpState,
    pub sign_in: SignInState,
    pub add_product: AddProductState,
    pub edit_product: EditProductState,
    pub delete_product: DeleteProductState,
    pub view_inventory: ViewInventoryState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Initial,
            current_user: None,
            dialog: None,
            sign_up: SignUpState::default(),
            sign_in: SignInState::default(),
            add_product: AddProductState::default(),
            edit_product: EditProductState::default(),
            delete_product: DeleteProductState::default(),
            view_inventory: ViewInventoryState::default(),
        }
    }
}

impl AppState {
    /// Enters `next`, discarding whatever the entered screen held before.
    pub fn navigate(&mut self, next: Screen) {
        match next {
            Screen::SignUp => self.sign_up = SignUpState::default(),
            Screen::SignIn => self.sign_in = SignInState::default(),
            Screen::AddProduct => self.add_product = AddProductState::default(),
            Screen::EditProduct => self.edit_product = EditProductState::default(),
            Screen::DeleteProduct => self.delete_product = DeleteProductState::default(),
            Screen::ViewInventory => self.view_inventory = ViewInventoryState::default(),
            Screen::Initial | Screen::Main => {}
        }
        self.current_screen = next;
    }

    pub fn show_dialog(&mut self, dialog: Dialog) {
        self.dialog = Some(dialog);
    }

    /// Dismisses the dialog and applies its follow-up navigation, if any.
    pub fn acknowledge_dialog(&mut self) {
        if let Some(dialog) = self.dialog.take() {
            if let Some(next) = dialog.next {
                self.navigate(next);
            }
        }
    }
}
